use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use wordle_helper::*;

/// Suggests Wordle guesses from a list of words, given the letters you know about.
#[derive(Parser, Debug)]
#[command(name = "wordle-helper", author, version, about)]
struct Args {
    /// Path to a file that contains the possible words, separated by whitespace.
    #[arg(
        short = 'f',
        long,
        env = "WORDLE_HELPER_WORDS",
        default_value = "words.txt"
    )]
    words_file: PathBuf,

    /// Sort suggestions alphabetically.
    #[arg(long, conflicts_with = "best")]
    alpha: bool,

    /// Sort suggestions by letter-frequency score, best first.
    #[arg(long)]
    best: bool,

    /// The length of the words to suggest.
    #[arg(long, value_name = "LEN", default_value_t = DEFAULT_WORD_LENGTH, value_parser = parse_word_length)]
    len: usize,

    /// Letters that must be in the word. Repeat a letter to require it more than once.
    #[arg(long = "with", value_name = "LETTERS", value_parser = parse_letters)]
    with_letters: Option<String>,

    /// Letters that must not be in the word.
    #[arg(long = "without", value_name = "LETTERS", value_parser = parse_letters)]
    without_letters: Option<String>,

    /// The maximum number of words to print.
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    count: usize,

    /// Known letters in place, with `_` for unknown positions, e.g. `_r__e`.
    pattern: Option<String>,
}

impl Args {
    fn ranking_policy(&self) -> RankingPolicy {
        if self.best {
            RankingPolicy::BestScore
        } else if self.alpha {
            RankingPolicy::Alphabetical
        } else {
            RankingPolicy::CorpusOrder
        }
    }

    fn constraints(&self) -> Result<Constraints, WordleError> {
        let mut constraints = Constraints::new(self.len)?;
        if let Some(letters) = &self.with_letters {
            constraints = constraints.with_required_letters(letters)?;
        }
        if let Some(letters) = &self.without_letters {
            constraints = constraints.with_forbidden_letters(letters)?;
        }
        if let Some(pattern) = &self.pattern {
            constraints = constraints.with_pattern(pattern)?;
        }
        Ok(constraints)
    }
}

fn parse_word_length(value: &str) -> Result<usize, String> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(format!("{} is not a number", value));
    }
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(length) => Ok(length),
        Err(error) => Err(error.to_string()),
    }
}

fn parse_letters(value: &str) -> Result<String, String> {
    match value.chars().find(|letter| !letter.is_ascii_alphabetic()) {
        Some(letter) => Err(format!("{:?} is not a letter", letter)),
        None => Ok(value.to_string()),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let constraints = match args.constraints() {
        Ok(constraints) => constraints,
        Err(error) => Args::command()
            .error(ErrorKind::ValueValidation, error)
            .exit(),
    };
    let policy = args.ranking_policy();
    info!("Words file: {}", args.words_file.display());

    let corpus = match Corpus::from_path(&args.words_file) {
        Ok(corpus) => corpus,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let suggestions = select_top_n_words(&corpus, &constraints, policy, args.count);
    let mut stdout = io::stdout().lock();
    for suggestion in suggestions.iter() {
        writeln!(stdout, "{}", suggestion)?;
    }
    stdout.flush()?;

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
