use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::rom::chip_type::ChipType;
use crate::rom::error::Result;
use crate::rom::rom::Rom;

pub struct Config {
    output_path: PathBuf,
    chip_type: ChipType,
    chip_count: u8,
    text_mirror: bool,
    dry_run: bool,
}

impl Config {
    pub fn new(opt: &Opt) -> Config {
        Config {
            output_path: opt.output_path.clone(),
            chip_type: opt.chip_type,
            chip_count: opt.chip_count,
            text_mirror: !opt.no_text,
            dry_run: opt.dry_run,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn chip_type(&self) -> ChipType {
        self.chip_type
    }

    pub fn chip_count(&self) -> u8 {
        self.chip_count
    }

    pub fn text_mirror(&self) -> bool {
        self.text_mirror
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn rom(&self) -> Result<Rom> {
        Rom::for_chip(self.chip_type, &self.output_path, self.chip_count)
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "SEGROM", about = "Generates ROM images that decode a byte onto two 7-segment hex digits.")]
pub struct Opt {
    #[structopt(short, long = "output", parse(from_os_str), default_value = "Output/HEX Output Control.bin")]
    pub output_path: PathBuf,

    #[structopt(long = "chip", default_value = "at28c256")]
    pub chip_type: ChipType,

    #[structopt(short, long = "chips", default_value = "2")]
    pub chip_count: u8,

    #[structopt(long)]
    pub no_text: bool,

    #[structopt(long)]
    pub dry_run: bool,

    #[structopt(long)]
    pub log_values: bool,
}
