use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, ConfigError, Settings};

#[derive(Debug, Parser)]
#[command(name = "roomtemp", version, about = "Browse room temperatures from a CSV file")]
pub struct Opts {
    #[arg(help = "CSV file of temperature,room_name rows (overrides config)")]
    pub file: Option<PathBuf>,

    #[arg(long, help = "Path to a YAML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Log filter such as `info` or `roomtemp=debug` (overrides config)")]
    pub log: Option<String>,
}

impl Opts {
    /// Settings from `--config` (or defaults), with command-line values on top.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => Settings::default(),
        };
        if let Some(file) = &self.file {
            settings.csv_path = file.clone();
        }
        if let Some(filter) = &self.log {
            settings.log_filter = filter.clone();
        }
        Ok(settings)
    }
}
