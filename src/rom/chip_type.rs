use std::fmt;
use std::str::FromStr;

// Parallel EEPROMs that the generated images are sized for.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChipType {
    At28c16,
    At28c64,
    At28c256,
}

impl ChipType {
    pub fn address_bits(self) -> u8 {
        match self {
            ChipType::At28c16 => 11,
            ChipType::At28c64 => 13,
            ChipType::At28c256 => 15,
        }
    }
}

impl FromStr for ChipType {
    type Err = String;

    fn from_str(value: &str) -> Result<ChipType, String> {
        match value.to_lowercase().as_str() {
            "at28c16" => Ok(ChipType::At28c16),
            "at28c64" => Ok(ChipType::At28c64),
            "at28c256" => Ok(ChipType::At28c256),
            _ => Err(format!("Invalid chip type: {}", value)),
        }
    }
}

impl fmt::Display for ChipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChipType::At28c16 => "AT28C16",
            ChipType::At28c64 => "AT28C64",
            ChipType::At28c256 => "AT28C256",
        };
        write!(f, "{name}")
    }
}
