use alloc::string::String;
use core::fmt::{self, Display};

/// Trivia category picked for the session. An `id` of zero means "any category".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionType {
    Multiple,
    Boolean,
}

/// Progress of a quiz session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Ended,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str().eq_ignore_ascii_case(name))
    }
}

impl QuestionType {
    pub const ALL: [Self; 2] = [Self::Multiple, Self::Boolean];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Multiple => "multiple",
            Self::Boolean => "boolean",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }
}

impl Status {
    /// Whether the session lifecycle allows moving from `self` to `next`.
    pub const fn can_become(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::InProgress) | (Self::InProgress, Self::Ended) | (Self::Ended, Self::NotStarted)
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Ended => "ended",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters and progress of the quiz currently being played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    /// How many questions to ask. Always within [`Self::MIN_QUESTIONS`] and [`Self::MAX_QUESTIONS`].
    pub number_of_questions: u8,
    pub category: Category,
    /// Difficulty filter. `None` lets the question source decide.
    pub level: Option<Level>,
    /// Question format filter. `None` lets the question source decide.
    pub question_type: Option<QuestionType>,
    pub status: Status,
    /// Number of correct answers so far.
    pub score: u32,
    /// Whether each question is timed.
    pub timed_mode: bool,
    /// How long the player has per question in timed mode (in seconds).
    pub time_per_question: u8,
}

impl QuizConfig {
    pub const DEFAULT_QUESTIONS: u8 = 10;
    pub const MIN_QUESTIONS: u8 = 10;
    pub const MAX_QUESTIONS: u8 = 50;
    pub const TIME_PER_QUESTION: u8 = 15;

    /// Interprets user input as a question count. Leading whitespace and an optional sign are
    /// accepted, then as many decimal digits as are present; trailing text is ignored. Input
    /// without a leading number (or a zero) falls back to [`Self::DEFAULT_QUESTIONS`]. The final
    /// count is clamped into the allowed range.
    pub fn parse_question_count(input: &str) -> u8 {
        let text = input.trim_start();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
        let digits = &digits[..end];
        if digits.is_empty() || digits.bytes().all(|b| b == b'0') {
            return Self::DEFAULT_QUESTIONS;
        }

        if negative {
            return Self::MIN_QUESTIONS;
        }

        // Anything too long for a `u64` is certainly above the maximum.
        let count = digits.parse::<u64>().unwrap_or(u64::MAX);
        let max = u64::from(Self::MAX_QUESTIONS);
        let min = u64::from(Self::MIN_QUESTIONS);
        // The clamp guarantees that the value fits.
        count.clamp(min, max) as u8
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            number_of_questions: Self::DEFAULT_QUESTIONS,
            category: Category::default(),
            level: None,
            question_type: None,
            status: Status::NotStarted,
            score: 0,
            timed_mode: false,
            time_per_question: Self::TIME_PER_QUESTION,
        }
    }
}
