use std::path::{Path, PathBuf};

use log::debug;

use crate::rom::address_space::AddressSpace;
use crate::rom::chip_type::ChipType;
use crate::rom::error::{Result, RomError};
use crate::rom::image_writer::{BasePath, ImageTarget, ImageWriter};
use crate::rom::plane::{split_planes, Plane};

pub const DEFAULT_BYTE_WIDTH: u8 = 8;
const MAX_BYTE_WIDTH: u8 = 32;

/// A ROM image under construction, possibly spread across several chips that together hold
/// `byte_width` bits per address.
#[derive(Clone, Debug)]
pub struct Rom {
    path: PathBuf,
    base_path: BasePath,
    byte_width: u8,
    address_space: AddressSpace,
}

impl Rom {
    pub fn new(path: impl Into<PathBuf>, address_bits: u8, byte_width: u8) -> Result<Rom> {
        if byte_width == 0 || !byte_width.is_multiple_of(8) || byte_width > MAX_BYTE_WIDTH {
            return Err(RomError::InvalidGeometry(format!(
                "Byte width must be a positive multiple of 8 no greater than {MAX_BYTE_WIDTH}, but was {byte_width}.",
            )));
        }

        let path = path.into();
        let base_path = BasePath::parse(&path)?;
        let address_space = AddressSpace::new(address_bits)?;
        debug!("Allocated 0x{:X} cells of {byte_width} bits for '{}'.", address_space.size(), path.display());

        Ok(Rom { path, base_path, byte_width, address_space })
    }

    /// `chip_count` chips of type `chip` ganged together, one byte of each word per chip.
    pub fn for_chip(chip: ChipType, path: impl Into<PathBuf>, chip_count: u8) -> Result<Rom> {
        let byte_width = chip_count.checked_mul(8).ok_or_else(|| RomError::InvalidGeometry(
            format!("Too many {chip} chips: {chip_count}."),
        ))?;
        Rom::new(path, chip.address_bits(), byte_width)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn byte_width(&self) -> u8 {
        self.byte_width
    }

    pub fn plane_count(&self) -> u8 {
        self.byte_width / 8
    }

    pub fn address_space(&self) -> &AddressSpace {
        &self.address_space
    }

    pub fn point_at(&mut self, location: i64) -> Result<()> {
        self.address_space.point_at(location)
    }

    pub fn write_one(&mut self, value: u32) -> Result<()> {
        self.address_space.write_one(value)
    }

    pub fn write_many(&mut self, values: &[u32]) -> Result<()> {
        self.address_space.write_many(values)
    }

    pub fn planes(&self) -> Vec<Plane> {
        split_planes(self.address_space.cells(), self.plane_count())
    }

    /// Split the contents into per-chip planes and persist each one, plus a hex text copy of each
    /// if `text_mirror` is set. Returns every path written.
    pub fn create<T: ImageTarget>(&self, target: &mut T, text_mirror: bool) -> Result<Vec<PathBuf>> {
        let planes = self.planes();
        ImageWriter::new(&self.base_path, text_mirror).write(&planes, target)
    }
}
