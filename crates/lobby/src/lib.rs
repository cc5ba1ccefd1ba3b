pub mod error;

use error::{Error, Result};
use model::{Category, Level, NewScore, QuestionType, QuizConfig, Status};

/// Owns the configuration and progress of one player's quiz session.
///
/// Every operation replaces the whole [`QuizConfig`] with an updated copy, so observers never see
/// a half-applied change.
#[derive(Debug, Default)]
pub struct Lobby {
    config: QuizConfig,
}

impl From<QuizConfig> for Lobby {
    fn from(config: QuizConfig) -> Self {
        Self { config }
    }
}

impl Lobby {
    /// Category name recorded when the player never picked one.
    pub const ANY_CATEGORY: &'static str = "Random";
    /// Difficulty recorded when the player never picked one.
    pub const ANY_LEVEL: &'static str = "Any";

    pub fn new() -> Self {
        Self::default()
    }

    pub const fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn set_level(&mut self, level: Option<Level>) {
        self.config = QuizConfig { level, ..self.config.clone() };
    }

    pub fn set_category(&mut self, id: u32, name: impl Into<String>) {
        let category = Category { id, name: name.into() };
        self.config = QuizConfig { category, ..self.config.clone() };
    }

    pub fn set_question_type(&mut self, question_type: Option<QuestionType>) {
        self.config = QuizConfig { question_type, ..self.config.clone() };
    }

    /// Accepts raw form input. See [`QuizConfig::parse_question_count`] for the parsing rules.
    pub fn set_question_count(&mut self, input: &str) {
        let number_of_questions = QuizConfig::parse_question_count(input);
        self.config = QuizConfig { number_of_questions, ..self.config.clone() };
    }

    pub fn set_timed_mode(&mut self, timed_mode: bool) {
        self.config = QuizConfig { timed_mode, ..self.config.clone() };
    }

    /// Counts one more correct answer.
    pub fn increment_score(&mut self) {
        let score = self.config.score.saturating_add(1);
        self.config = QuizConfig { score, ..self.config.clone() };
    }

    /// Moves the session along its lifecycle: not started, in progress, ended, then not started
    /// again. Any other change is rejected and leaves the session untouched.
    pub fn set_status(&mut self, status: Status) -> Result<()> {
        self.check_transition(status)?;
        log::debug!("quiz session is now {status}");
        self.config = QuizConfig { status, ..self.config.clone() };
        Ok(())
    }

    /// Begins the quiz. An unset level or question type is filled in by the given pickers first.
    pub fn start(
        &mut self,
        pick_level: impl FnOnce() -> Level,
        pick_type: impl FnOnce() -> QuestionType,
    ) -> Result<()> {
        self.check_transition(Status::InProgress)?;
        let level = self.config.level.unwrap_or_else(pick_level);
        let question_type = self.config.question_type.unwrap_or_else(pick_type);
        log::debug!("starting {question_type} quiz at {level} difficulty");
        self.config = QuizConfig {
            level: Some(level),
            question_type: Some(question_type),
            status: Status::InProgress,
            ..self.config.clone()
        };
        Ok(())
    }

    pub fn finish(&mut self) -> Result<()> {
        self.set_status(Status::Ended)
    }

    /// Restores every field to its default, which also returns the session to not started.
    pub fn reset(&mut self) {
        log::debug!("resetting quiz session");
        self.config = QuizConfig::default();
    }

    /// Describes the session's result in the shape kept by the score history.
    pub fn summary(&self) -> NewScore {
        let QuizConfig { number_of_questions, ref category, level, score, timed_mode, .. } = self.config;
        let total = match u32::from(number_of_questions) {
            0 => u32::from(QuizConfig::DEFAULT_QUESTIONS),
            total => total,
        };
        let percentage = (f64::from(score) / f64::from(total) * 100.0).round();
        let category = if category.name.is_empty() { Self::ANY_CATEGORY } else { category.name.as_str() };
        let difficulty = level.map_or(Self::ANY_LEVEL, Level::as_str);
        NewScore {
            score,
            total,
            percentage,
            category: category.into(),
            difficulty: difficulty.into(),
            timed_mode,
        }
    }

    fn check_transition(&self, to: Status) -> Result<()> {
        let from = self.config.status;
        if from.can_become(to) {
            Ok(())
        } else {
            log::warn!("rejected quiz status change from {from} to {to}");
            Err(Error::Transition { from, to })
        }
    }
}
