//! Start-up settings: defaults, then environment (`.env` included), then flags.

use etude::logging::parse_level;
use log::LevelFilter;
use std::env;

pub const LOG_ENV: &str = "ETUDE_LOG";
pub const DEV_DATA_ENV: &str = "ETUDE_DEV_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub dev_data: bool,
    /// Log level values that did not parse, as `source=value`.
    pub ignored_log_levels: Vec<String>,
}

impl Config {
    /// Interactive mode keeps logging off unless asked for, so log lines
    /// don't draw over the terminal UI.
    pub fn defaults(interactive: bool) -> Self {
        Self {
            log_level: if interactive {
                LevelFilter::Off
            } else {
                LevelFilter::Warn
            },
            dev_data: false,
            ignored_log_levels: Vec::new(),
        }
    }

    pub fn resolve(interactive: bool, dev_data_flag: bool, log_flag: Option<&str>) -> Self {
        Self::defaults(interactive).with_overrides(
            env::var(LOG_ENV).ok().as_deref(),
            env::var(DEV_DATA_ENV).ok().as_deref(),
            dev_data_flag,
            log_flag,
        )
    }

    fn with_overrides(
        mut self,
        log_env: Option<&str>,
        dev_data_env: Option<&str>,
        dev_data_flag: bool,
        log_flag: Option<&str>,
    ) -> Self {
        // Unknown names leave the previous level in place.
        for (source, level) in [(LOG_ENV, log_env), ("--log", log_flag)] {
            let Some(level) = level else { continue };
            match parse_level(level) {
                Some(lvl) => self.log_level = lvl,
                None => self
                    .ignored_log_levels
                    .push(format!("{}={:?}", source, level)),
            }
        }

        if let Some(value) = dev_data_env {
            self.dev_data = matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if dev_data_flag {
            self.dev_data = true;
        }

        self
    }
}
