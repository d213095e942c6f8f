use thiserror::Error as ThisError;
use uniffi::Error;

#[derive(Debug, ThisError, Error)]
#[uniffi(flat_error)]
#[non_exhaustive]
pub enum EtudeError {
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}
