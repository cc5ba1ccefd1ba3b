use core::fmt::{self, Display};
use model::Status;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The session lifecycle does not allow this status change.
    Transition { from: Status, to: Status },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transition { from, to } => write!(f, "A quiz that is {from} cannot become {to}."),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
