use anyhow::Context;

/// Arguments of the `play` command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Play {
    /// Raw question count, parsed leniently by the lobby.
    pub questions: String,
    pub correct: u32,
    pub category: Option<(u32, String)>,
    pub level: Option<model::Level>,
    pub question_type: Option<model::QuestionType>,
    pub timed: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Email(String),
    Play(Play),
    History,
    Best,
    Clear,
}

pub const USAGE: &str = "usage: trivia <command>

commands:
    email <address>     validate an email address
    play <questions> <correct> [category] [level] [type] [--timed]
                        record the outcome of a quiz session
        questions       number of questions (10-50)
        correct         number of correct answers
        category        <id>:<name> of the questions' category
        level           easy, medium or hard
        type            multiple or boolean
        --timed         play in timed mode
                        pass `-` to leave an optional choice unset
    history             list the most recent scores
    best                show the best score
    clear               forget all scores";

/// Placeholder for an optional `play` argument that should stay unset.
const UNSET: &str = "-";

impl Command {
    pub fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let name = args.next().context(USAGE)?;
        let command = match name.as_str() {
            "email" => Self::Email(args.next().unwrap_or_default()),
            "play" => return Play::parse(args).map(Self::Play),
            "history" => Self::History,
            "best" => Self::Best,
            "clear" => Self::Clear,
            other => anyhow::bail!("unknown command `{other}`\n\n{USAGE}"),
        };

        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument `{extra}`");
        }

        Ok(command)
    }
}

impl Play {
    fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut timed = false;
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--timed" => timed = true,
                flag if flag.starts_with("--") => anyhow::bail!("unknown option `{flag}`"),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let questions = positional.next().context("missing number of questions")?;
        let correct = positional.next().context("missing number of correct answers")?;
        let correct = correct.parse().context("number of correct answers must be a number")?;
        let mut optional = positional.by_ref().map(|arg| if arg == UNSET { None } else { Some(arg) });

        let category = match optional.next().flatten() {
            Some(value) => {
                let (id, name) = value.split_once(':').context("category must look like <id>:<name>")?;
                let id = id.parse().context("category id must be a number")?;
                Some((id, name.into()))
            }
            None => None,
        };

        let level = match optional.next().flatten() {
            Some(value) => Some(model::Level::from_name(&value).with_context(|| format!("unknown level `{value}`"))?),
            None => None,
        };

        let question_type = match optional.next().flatten() {
            Some(value) => {
                let kind = model::QuestionType::from_name(&value);
                Some(kind.with_context(|| format!("unknown question type `{value}`"))?)
            }
            None => None,
        };

        if let Some(extra) = positional.next() {
            anyhow::bail!("unexpected argument `{extra}`");
        }

        Ok(Self { questions, correct, category, level, question_type, timed })
    }
}
