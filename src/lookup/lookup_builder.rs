use log::info;
use splitbits::combinebits;

use crate::lookup::seven_segment::segment_pattern;
use crate::rom::error::Result;
use crate::rom::rom::Rom;

/// The decoder word for an input byte: the high nibble's segments in the upper byte,
/// the low nibble's segments in the lower byte.
pub fn lookup_word(value: u8) -> u16 {
    let high = segment_pattern(value >> 4);
    let low = segment_pattern(value & 0xF);
    combinebits!(high, low, "hhhhhhhh llllllll")
}

/// Fill the first 256 cells of `rom` with the decoder word for each possible input byte.
pub fn write_lookup_table(rom: &mut Rom) -> Result<()> {
    rom.point_at(0)?;
    for value in 0..=u8::MAX {
        let word = lookup_word(value);
        info!(target: "lookupvalues", "{}", format_lookup_value(value, word));
        rom.write_one(u32::from(word))?;
    }

    Ok(())
}

// e.g. "171 (10101011 | ab):  = 77-1f"
fn format_lookup_value(value: u8, word: u16) -> String {
    let [high, low] = word.to_be_bytes();
    format!("{value:03} ({value:08b} | {value:02x}):  = {high:02x}-{low:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::seven_segment::SEGMENT_PATTERNS;

    #[test]
    fn words_combine_both_nibbles() {
        assert_eq!(lookup_word(0x00), 0x7E7E);
        assert_eq!(lookup_word(0xAB), 0x771F);
        assert_eq!(lookup_word(0x10), 0x307E);
        assert_eq!(lookup_word(0xFF), 0x4747);
    }

    #[test]
    fn every_word_matches_the_segment_table() {
        for value in 0..=u8::MAX {
            let expected = (u16::from(SEGMENT_PATTERNS[usize::from(value >> 4)]) << 8)
                | u16::from(SEGMENT_PATTERNS[usize::from(value & 0xF)]);
            assert_eq!(lookup_word(value), expected, "value {value}");
        }
    }

    #[test]
    fn table_fills_first_256_cells() {
        let mut rom = Rom::new("Output/table.bin", 9, 16).unwrap();
        rom.point_at(300).unwrap();
        write_lookup_table(&mut rom).unwrap();

        let space = rom.address_space();
        assert_eq!(space.cursor(), 256);
        assert_eq!(space.get(0), Some(0x7E7E));
        assert_eq!(space.get(171), Some(0x771F));
        assert_eq!(space.get(255), Some(0x4747));
        assert_eq!(space.get(256), Some(0));
    }

    #[test]
    fn table_does_not_fit_in_a_smaller_rom() {
        let mut rom = Rom::new("Output/table.bin", 7, 16).unwrap();
        assert!(write_lookup_table(&mut rom).is_err());
        assert_eq!(rom.address_space().cursor(), 128);
    }

    #[test]
    fn log_line_format() {
        assert_eq!(format_lookup_value(171, 0x771F), "171 (10101011 | ab):  = 77-1f");
        assert_eq!(format_lookup_value(5, 0x7E5B), "005 (00000101 | 05):  = 7e-5b");
    }
}
