use thiserror::Error;

/// Structural failures while reading an ffmetadata stream.
///
/// Field-level problems (a non-numeric `START`, an unparseable date) are
/// never reported here; the mapper recovers them with a default instead.
#[derive(Debug, Error)]
pub enum FFMetaError {
    #[error("ffmetadata is not valid: {0}")]
    InvalidFormat(String),
}

impl FFMetaError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        FFMetaError::InvalidFormat(reason.into())
    }
}

impl From<std::io::Error> for FFMetaError {
    fn from(err: std::io::Error) -> Self {
        FFMetaError::InvalidFormat(format!("unreadable stream: {}", err))
    }
}

pub type Result<T, E = FFMetaError> = std::result::Result<T, E>;
