use log::LevelFilter;
use std::path::PathBuf;

/// Program name printed in the usage header when none is given
pub const DEFAULT_NAME: &str = "argumentparser";

/// Parser configuration object. Inject this into Parser::new.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// program name for the usage header
    pub name: String,
    /// emit a trace line for every action the parser registers
    pub debug: bool,
    /// level filter handed to the logger
    pub log_level: LevelFilter,
    /// also append log lines to this file
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Create a new config object
    pub fn new(name: &str) -> Config {
        Config {
            name: name.into(),
            debug: false,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }

    /// Turning debug on also lowers the log level so the trace is visible.
    pub fn with_debug(mut self, debug: bool) -> Config {
        self.debug = debug;
        self.log_level = if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        self
    }

    pub fn with_log_level(mut self, log_level: LevelFilter) -> Config {
        self.log_level = log_level;
        self
    }

    pub fn with_log_file<P: Into<PathBuf>>(mut self, log_file: P) -> Config {
        self.log_file = Some(log_file.into());
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new(DEFAULT_NAME)
    }
}
