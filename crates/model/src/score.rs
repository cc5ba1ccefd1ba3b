use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Outcome of a finished quiz before it is timestamped into the history.
#[derive(Clone, Debug, PartialEq)]
pub struct NewScore {
    pub score: u32,
    pub total: u32,
    /// Rounded share of correct answers, from `0` to `100`.
    pub percentage: f64,
    pub category: String,
    pub difficulty: String,
    pub timed_mode: bool,
}

/// One persisted entry of the score history.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// When the quiz was completed, as an ISO-8601 timestamp.
    pub date: String,
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub category: String,
    pub difficulty: String,
    pub timed_mode: bool,
}

impl NewScore {
    pub fn stamp(self, date: String) -> ScoreRecord {
        let Self { score, total, percentage, category, difficulty, timed_mode } = self;
        ScoreRecord { date, score, total, percentage, category, difficulty, timed_mode }
    }
}
