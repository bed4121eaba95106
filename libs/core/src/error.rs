use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be issued as configured: missing transport,
    /// blank or malformed address, or an invalid header.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller's cancellation token fired before the exchange completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The remote endpoint answered with a non-success status.
    #[error("HTTP status error: {status}")]
    HttpStatus { status: u16 },

    /// The response body could not be mapped onto the requested type.
    ///
    /// Never carries the body itself.
    #[error("Deserialization error: could not decode response as {type_name}: {reason}")]
    Deserialization {
        type_name: &'static str,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Status code carried by an [`Error::HttpStatus`]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
