use std::process;

use log::{error, info};
use structopt::StructOpt;

use segrom::config::{Config, Opt};
use segrom::logging::logger;
use segrom::logging::logger::Logger;
use segrom::lookup::lookup_builder::write_lookup_table;
use segrom::rom::error::Result;
use segrom::rom::image_writer::{FileTarget, MemoryTarget};

fn main() {
    let opt = Opt::from_args();
    logger::init(Logger {
        log_lookup_values: opt.log_values,
        log_planes: true,
    }).expect("logger to be installed only once");

    let config = Config::new(&opt);
    if let Err(err) = run(&config) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut rom = config.rom()?;
    info!(
        "Generating {} x {} image at '{}'.",
        config.chip_count(),
        config.chip_type(),
        rom.path().display(),
    );

    write_lookup_table(&mut rom)?;

    let written = if config.dry_run() {
        let mut target = MemoryTarget::new();
        let written = rom.create(&mut target, config.text_mirror())?;
        info!("Dry run: nothing was written to disk.");
        written
    } else {
        rom.create(&mut FileTarget, config.text_mirror())?
    };

    info!("Generated {} files.", written.len());
    Ok(())
}
