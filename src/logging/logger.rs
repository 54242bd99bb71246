use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(LevelFilter::Info))
}

pub struct Logger {
    pub log_lookup_values: bool,
    pub log_planes: bool,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match metadata.target() {
            "" => true,
            "lookupvalues" => self.log_lookup_values,
            "planes" => self.log_planes,
            target => {
                let chunks: Vec<&str> = target.split("::").collect();
                matches!(chunks[..], ["segrom", ..])
            }
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if record.level() < Level::Info {
                print!("{} - ", record.level());
            }

            if record.target() == "planes" {
                print!("PLANES ");
            }

            println!("{}", record.args());
        }
    }

    fn flush(&self) {}
}
