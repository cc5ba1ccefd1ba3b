#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod quiz;
pub mod result;
pub mod score;

pub use quiz::{Category, Level, QuestionType, QuizConfig, Status};
pub use result::{failure, success, Failure, Outcome};
pub use score::{NewScore, ScoreRecord};
