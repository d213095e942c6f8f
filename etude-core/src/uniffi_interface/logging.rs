use crate::logging::{init_logger, parse_level};
use crate::uniffi_interface::errors::EtudeError;
use log::LevelFilter;

#[uniffi::export]
pub fn set_debug_log_level() {
    init_logger(LevelFilter::Trace, env_logger::Target::Stdout);
}

#[uniffi::export]
pub fn set_log_level(level: &str) -> Result<(), EtudeError> {
    let lvl = parse_level(level).ok_or_else(|| EtudeError::InvalidLogLevel(level.to_string()))?;
    init_logger(lvl, env_logger::Target::Stdout);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_is_an_error() {
        assert!(matches!(
            set_log_level("loud"),
            Err(EtudeError::InvalidLogLevel(level)) if level == "loud"
        ));
    }
}
