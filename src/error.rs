//! Error types
//!
//! Tile bookkeeping itself never fails. Errors come from validating the
//! session configuration handed to the streaming collaborator and from the
//! event task losing its peer.

use std::fmt;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Session configuration rejected
    Config(ConfigError),
    /// The event channel to the tile task was closed
    ChannelClosed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Invalid session config: {}", e),
            Error::ChannelClosed => write!(f, "Tile event channel closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::ChannelClosed => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for Error {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        Error::ChannelClosed
    }
}

/// Session configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No application id was provided
    MissingAppId,
    /// Channel name is empty
    EmptyChannel,
    /// Video dimensions must be non-zero
    InvalidDimensions { width: u32, height: u32 },
    /// Frame rate must be non-zero
    InvalidFrameRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingAppId => write!(f, "application id is not set"),
            ConfigError::EmptyChannel => write!(f, "channel name is empty"),
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "invalid video dimensions {}x{}", width, height)
            }
            ConfigError::InvalidFrameRate => write!(f, "frame rate must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}
