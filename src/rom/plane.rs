use itertools::Itertools;

// One byte-wide slice of every cell, destined for a single physical chip.
// Plane 0 holds the least significant byte of each cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    index: u8,
    bytes: Vec<u8>,
}

impl Plane {
    pub fn from_cells(cells: &[u32], index: u8) -> Plane {
        let shift = 8 * u32::from(index);
        let bytes = cells.iter()
            .map(|&cell| (cell.checked_shr(shift).unwrap_or(0) & 0xFF) as u8)
            .collect();
        Plane { index, bytes }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    // Two lowercase hex digits per byte, single spaces between, no trailing newline.
    pub fn to_hex_text(&self) -> String {
        self.bytes.iter()
            .map(|byte| format!("{byte:02x}"))
            .join(" ")
    }
}

pub fn split_planes(cells: &[u32], plane_count: u8) -> Vec<Plane> {
    (0..plane_count)
        .map(|index| Plane::from_cells(cells, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_zero_is_least_significant() {
        let planes = split_planes(&[0x771F, 0x7E7E, 0x0030], 2);
        assert_eq!(planes.len(), 2);
        assert_eq!(planes[0].index(), 0);
        assert_eq!(planes[0].bytes(), &[0x1F, 0x7E, 0x30]);
        assert_eq!(planes[1].index(), 1);
        assert_eq!(planes[1].bytes(), &[0x77, 0x7E, 0x00]);
    }

    #[test]
    fn planes_reconstruct_cells() {
        let cells: Vec<u32> = (0..=0xFFFF).step_by(257).collect();
        let planes = split_planes(&cells, 2);
        for (address, &cell) in cells.iter().enumerate() {
            let low = u32::from(planes[0].bytes()[address]);
            let high = u32::from(planes[1].bytes()[address]);
            assert_eq!((high << 8) | low, cell);
        }
    }

    #[test]
    fn four_planes_of_a_32_bit_cell() {
        let planes = split_planes(&[0xAABBCCDD], 4);
        let bytes: Vec<u8> = planes.iter().map(|plane| plane.bytes()[0]).collect();
        assert_eq!(bytes, vec![0xDD, 0xCC, 0xBB, 0xAA]);
    }

    #[test]
    fn bits_above_the_word_width_are_dropped() {
        let planes = split_planes(&[0x12345], 2);
        assert_eq!(planes[0].bytes(), &[0x45]);
        assert_eq!(planes[1].bytes(), &[0x23]);
    }

    #[test]
    fn hex_text_format() {
        let plane = Plane::from_cells(&[0x00, 0x0A, 0xFF, 0x1F], 0);
        assert_eq!(plane.to_hex_text(), "00 0a ff 1f");
    }

    #[test]
    fn hex_text_of_single_byte_has_no_separator() {
        let plane = Plane::from_cells(&[0x7E], 0);
        assert_eq!(plane.to_hex_text(), "7e");
    }
}
