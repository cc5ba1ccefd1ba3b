use alloc::{borrow::Cow, boxed::Box, string::String};
use core::{
    error::Error,
    fmt::{self, Display},
};

/// Reason why a fallible helper rejected its input.
#[derive(Debug)]
pub enum Failure {
    /// Human-readable explanation, usually one of a validator's fixed messages.
    Message(Cow<'static, str>),
    /// Structured error bubbled up from a lower layer.
    Error(Box<dyn Error + Send + Sync>),
}

/// Either the accepted value or the [`Failure`] explaining its rejection.
pub type Outcome<T> = core::result::Result<T, Failure>;

/// Wraps `value` as a successful [`Outcome`] without touching it.
pub const fn success<T>(value: T) -> Outcome<T> {
    Ok(value)
}

/// Wraps `error` as a failed [`Outcome`] without touching it.
pub fn failure<T>(error: impl Into<Failure>) -> Outcome<T> {
    Err(error.into())
}

impl Failure {
    pub fn message(&self) -> Option<&str> {
        if let Self::Message(text) = self {
            Some(&**text)
        } else {
            None
        }
    }
}

impl From<&'static str> for Failure {
    fn from(text: &'static str) -> Self {
        Self::Message(Cow::Borrowed(text))
    }
}

impl From<String> for Failure {
    fn from(text: String) -> Self {
        Self::Message(Cow::Owned(text))
    }
}

impl From<Box<dyn Error + Send + Sync>> for Failure {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        Self::Error(err)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        use alloc::string::ToString;
        match (self, other) {
            (Self::Message(lhs), Self::Message(rhs)) => lhs == rhs,
            (Self::Error(lhs), Self::Error(rhs)) => lhs.to_string() == rhs.to_string(),
            _ => false,
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::Error(err) => Display::fmt(err, f),
        }
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Message(_) => None,
            Self::Error(err) => Some(err.as_ref()),
        }
    }
}
