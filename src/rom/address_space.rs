use crate::rom::error::{Result, RomError};

// The raw contents of a ROM: one cell per address, each cell wide enough to hold every chip's
// byte at that address. Writes go through a cursor that only moves forward unless repositioned.
#[derive(Clone, Debug)]
pub struct AddressSpace {
    cells: Vec<u32>,
    cursor: u32,
}

impl AddressSpace {
    pub const MAX_ADDRESS_BITS: u8 = 24;

    pub fn new(address_bits: u8) -> Result<AddressSpace> {
        if address_bits == 0 || address_bits > AddressSpace::MAX_ADDRESS_BITS {
            return Err(RomError::InvalidGeometry(format!(
                "Address bit count must be between 1 and {}, but was {address_bits}.",
                AddressSpace::MAX_ADDRESS_BITS,
            )));
        }

        Ok(AddressSpace {
            cells: vec![0; 1 << address_bits],
            cursor: 0,
        })
    }

    pub fn size(&self) -> u32 {
        self.cells.len() as u32
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn get(&self, address: u32) -> Option<u32> {
        self.cells.get(address as usize).copied()
    }

    /// Move the cursor to `location`, which must be a valid address. The one-past-the-end
    /// position is rejected even though sequential writes can leave the cursor there.
    pub fn point_at(&mut self, location: i64) -> Result<()> {
        let address = u32::try_from(location)
            .ok()
            .filter(|&address| address < self.size())
            .ok_or(RomError::AddressOutOfRange { location, size: self.size() })?;
        self.cursor = address;
        Ok(())
    }

    pub fn write_one(&mut self, value: u32) -> Result<()> {
        self.write_many(&[value])
    }

    /// Write `values` starting at the cursor. Either every value fits and is written, or nothing
    /// is written and the cursor stays put.
    pub fn write_many(&mut self, values: &[u32]) -> Result<()> {
        let start = self.cursor as usize;
        let end = start + values.len();
        if end > self.cells.len() {
            return Err(RomError::AddressOutOfRange {
                location: end as i64 - 1,
                size: self.size(),
            });
        }

        self.cells[start..end].copy_from_slice(values);
        self.cursor = end as u32;
        Ok(())
    }
}
