mod command;

use command::{Command, Play};
use db::{FileStore, ScoreHistory, ScoreRecord, Store};
use lobby::Lobby;
use model::{Level, QuestionType, QuizConfig};
use rand_core::{OsRng, RngCore};
use std::{
    env::{self, VarError},
    process::ExitCode,
};

fn pick<T: Copy>(choices: &[T]) -> T {
    let index = OsRng.next_u32() as usize % choices.len();
    choices[index]
}

fn print_record(record: &ScoreRecord) {
    let timed = if record.timed_mode { " (timed)" } else { "" };
    println!(
        "{}  {}/{} ({}%)  {} - {}{timed}",
        record.date, record.score, record.total, record.percentage, record.category, record.difficulty
    );
}

/// Plays a session through its whole lifecycle and records the result. The lobby is left reset.
fn play<S: Store>(lobby: &mut Lobby, history: &mut ScoreHistory<S>, args: Play) -> anyhow::Result<ScoreRecord> {
    let Play { questions, correct, category, level, question_type, timed } = args;

    let total = u32::from(QuizConfig::parse_question_count(&questions));
    anyhow::ensure!(correct <= total, "cannot answer {correct} out of {total} questions correctly");

    lobby.set_question_count(&questions);
    if let Some((id, name)) = category {
        lobby.set_category(id, name);
    }
    lobby.set_level(level);
    lobby.set_question_type(question_type);
    lobby.set_timed_mode(timed);

    lobby.start(|| pick(&Level::ALL), || pick(&QuestionType::ALL))?;
    for _ in 0..correct {
        lobby.increment_score();
    }
    lobby.finish()?;

    let summary = lobby.summary();
    lobby.reset();
    Ok(history.save(summary)?)
}

/// Falls back to the working directory only when the variable is unset.
fn data_dir(var: Result<String, VarError>) -> Result<String, VarError> {
    match var {
        Err(VarError::NotPresent) => Ok(String::from(".")),
        other => other,
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    // Parse environment variables
    let data_dir = data_dir(env::var("TRIVIA_DATA_DIR"))?;
    let command = Command::parse(env::args().skip(1))?;

    let store = FileStore::new(data_dir);
    log::debug!("using score history in {}", store.root().display());
    let mut history = ScoreHistory::from(store);

    match command {
        Command::Email(address) => match validator::create_email(Some(&address)) {
            Ok(email) => println!("ok: {email}"),
            Err(failure) => {
                println!("{failure}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Play(args) => {
            let record = play(&mut Lobby::new(), &mut history, args)?;
            print_record(&record);
            if history.best().as_ref() == Some(&record) {
                println!("New best score!");
            }
        }
        Command::History => {
            let records = history.records();
            if records.is_empty() {
                println!("No scores recorded yet.");
            }
            records.iter().for_each(print_record);
        }
        Command::Best => match history.best() {
            Some(record) => print_record(&record),
            None => println!("No scores recorded yet."),
        },
        Command::Clear => {
            history.clear()?;
            println!("Score history cleared.");
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::{data_dir, play, Play};
    use db::{MemoryStore, ScoreHistory};
    use lobby::Lobby;
    use model::{Level, QuestionType, QuizConfig};
    use std::{env::VarError, ffi::OsString};

    #[test]
    fn play_records_finished_session() {
        let mut lobby = Lobby::new();
        let mut history = ScoreHistory::from(MemoryStore::default());
        let args = Play {
            questions: "12".into(),
            correct: 9,
            category: Some((23, "History".into())),
            level: Some(Level::Hard),
            question_type: Some(QuestionType::Multiple),
            timed: true,
        };

        let record = play(&mut lobby, &mut history, args).unwrap();
        assert_eq!(record.score, 9);
        assert_eq!(record.total, 12);
        assert_eq!(record.percentage, 75.0);
        assert_eq!(record.category, "History");
        assert_eq!(record.difficulty, "hard");
        assert!(record.timed_mode);

        assert_eq!(history.records(), [record]);
        assert_eq!(lobby.config(), &QuizConfig::default());
    }

    #[test]
    fn play_picks_unset_difficulty() {
        let mut lobby = Lobby::new();
        let mut history = ScoreHistory::from(MemoryStore::default());
        let args = Play { questions: "abc".into(), correct: 10, ..Play::default() };

        let record = play(&mut lobby, &mut history, args).unwrap();
        assert_eq!(record.total, 10);
        assert_eq!(record.percentage, 100.0);
        assert_eq!(record.category, "Random");
        assert!(Level::ALL.iter().any(|level| level.as_str() == record.difficulty));
    }

    #[test]
    fn play_rejects_impossible_score() {
        let mut lobby = Lobby::new();
        let mut history = ScoreHistory::from(MemoryStore::default());
        let args = Play { questions: "10".into(), correct: 11, ..Play::default() };

        assert!(play(&mut lobby, &mut history, args).is_err());
        assert!(history.records().is_empty());
        assert_eq!(lobby.config(), &QuizConfig::default());
    }

    #[test]
    fn data_dir_defaults_only_when_unset() {
        assert_eq!(data_dir(Err(VarError::NotPresent)).unwrap(), ".");
        assert_eq!(data_dir(Ok("/var/lib/trivia".into())).unwrap(), "/var/lib/trivia");

        let garbled = VarError::NotUnicode(OsString::from("bad"));
        assert!(matches!(data_dir(Err(garbled)), Err(VarError::NotUnicode(_))));
    }
}
