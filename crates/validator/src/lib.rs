//! Form field validators. Each constructor returns an [`Outcome`] so that callers can match on
//! acceptance and rejection exhaustively.

pub mod email;

pub use email::{create_email, Email, EmailError};
pub use model::{failure, success, Failure, Outcome};
