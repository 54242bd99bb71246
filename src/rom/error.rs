use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomError {
    #[error("Address {location} is outside of the ROM address space [0, 0x{size:X}).")]
    AddressOutOfRange { location: i64, size: u32 },

    #[error("Unsupported ROM geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid ROM base path '{}': {reason}", .path.display())]
    InvalidBasePath { path: PathBuf, reason: &'static str },

    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RomError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> RomError {
        RomError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, RomError>;
