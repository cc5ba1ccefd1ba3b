pub mod error;
pub mod store;

use chrono::{DateTime, SecondsFormat, Utc};

pub use model::{NewScore, ScoreRecord};
pub use store::{FileStore, MemoryStore, Store};

/// Key under which the history is persisted.
pub const STORAGE_KEY: &str = "quiz_score_history";
/// Number of records kept, most recent first.
pub const MAX_HISTORY: usize = 10;

/// Capped log of finished quizzes kept in some [`Store`].
pub struct ScoreHistory<S>(S);

impl<S> From<S> for ScoreHistory<S> {
    fn from(store: S) -> Self {
        Self(store)
    }
}

impl<S> ScoreHistory<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Store> ScoreHistory<S> {
    /// Lists the stored records, newest first. Missing or unreadable history is reported as empty.
    pub fn records(&self) -> Vec<ScoreRecord> {
        let text = match self.0.get(STORAGE_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("score history unavailable: {err}");
                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|err| {
            log::warn!("discarding corrupt score history: {err}");
            Vec::new()
        })
    }

    /// Records a finished quiz as of now.
    pub fn save(&mut self, score: NewScore) -> error::Result<ScoreRecord> {
        self.save_at(score, Utc::now())
    }

    /// Records a finished quiz as of `when`, evicting the oldest entries beyond [`MAX_HISTORY`].
    pub fn save_at(&mut self, score: NewScore, when: DateTime<Utc>) -> error::Result<ScoreRecord> {
        let record = score.stamp(when.to_rfc3339_opts(SecondsFormat::Millis, true));

        let mut history = self.records();
        history.insert(0, record.clone());
        history.truncate(MAX_HISTORY);

        let text = serde_json::to_string(&history)?;
        self.0.set(STORAGE_KEY, &text)?;
        log::debug!("saved score {}/{} ({} records kept)", record.score, record.total, history.len());
        Ok(record)
    }

    /// Returns the record with the highest percentage. Ties go to the more recent record.
    pub fn best(&self) -> Option<ScoreRecord> {
        self.records()
            .into_iter()
            .reduce(|best, current| if current.percentage > best.percentage { current } else { best })
    }

    pub fn clear(&mut self) -> error::Result<()> {
        self.0.remove(STORAGE_KEY)
    }
}
