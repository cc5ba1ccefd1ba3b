use core::fmt::{self, Display};
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The key cannot be used by the storage backend.
    InvalidKey,
    /// The storage backend failed to read or write.
    Io(io::ErrorKind),
    /// The history could not be encoded as JSON.
    Serialize,
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Self::Serialize
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => f.write_str("Storage key must be non-empty and alphanumeric."),
            Self::Io(kind) => write!(f, "Storage backend failed: {kind}."),
            Self::Serialize => f.write_str("Score history could not be encoded."),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
