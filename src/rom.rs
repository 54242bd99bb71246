pub mod address_space;
pub mod chip_type;
pub mod error;
pub mod image_writer;
pub mod plane;
#[allow(clippy::module_inception)]
pub mod rom;
