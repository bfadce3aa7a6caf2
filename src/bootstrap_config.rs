use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(version, about = "Answers bus, stop and fastest-route requests over a static bus network")]
pub struct BootstrapConfig {
    /// Request document to read. Reads from stdin if not given.
    #[clap(short('i'), long("input"), env("BUSNET_INPUT"))]
    pub input: Option<PathBuf>,
    /// Where to write the answers. Writes to stdout if not given.
    #[clap(short('o'), long("output"), env("BUSNET_OUTPUT"))]
    pub output: Option<PathBuf>,
    #[clap(short('l'), long("log-level"), env("BUSNET_LOG_LEVEL"), default_value_t, value_enum)]
    pub log_level: LogLevel,
    /// Pretty-print the JSON answers
    #[clap(long("pretty"))]
    pub pretty: bool,
}

impl BootstrapConfig {
    pub fn read() -> Self {
        BootstrapConfig::parse()
    }
}


#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
