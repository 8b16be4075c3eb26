use crate::game_state::{
    Attempt, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_SIZE, EngineConfig, FeedbackProvider, SolveOutcome,
};
use crate::info_log;
use crate::solver::{FeedbackDisplay, GuessResult, parse_feedback};
use crate::wordbank::WordbankSource;
use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use std::io::BufRead;

/// How the next guess is picked from the remaining candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// First remaining word in alphabetical order
    #[default]
    First,
    /// Word whose letters are most common at their positions
    Frequency,
}

/// Wordle solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Play against this word instead of reading feedback from stdin
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// Guess selection strategy
    #[arg(short = 's', long = "strategy", value_enum, default_value_t = Strategy::First)]
    pub strategy: Strategy,

    /// Letters per word
    #[arg(
        long = "word-size",
        default_value_t = DEFAULT_WORD_SIZE,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub word_size: usize,

    /// Guesses allowed per game
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Increase log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            word_size: self.word_size,
            max_attempts: self.max_attempts,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Feedback provider for a human playing the real game: prints each guess
/// and reads the colours back from `reader`.
///
/// `N` marks the word as refused by the game. Once the reader is exhausted
/// every further word is reported as refused so the engine winds down.
pub struct CliFeedbackProvider<R: BufRead> {
    reader: R,
    word_size: usize,
    exhausted: bool,
}

impl<R: BufRead> CliFeedbackProvider<R> {
    pub fn new(reader: R, word_size: usize) -> Self {
        Self {
            reader,
            word_size,
            exhausted: false,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => {
                info_log!("CliFeedbackProvider - input closed");
                self.exhausted = true;
                None
            }
            Err(e) => {
                log::warn!("failed to read feedback, treating further words as rejected: {e}");
                self.exhausted = true;
                None
            }
            Ok(_) => Some(input.trim().to_uppercase()),
        }
    }
}

impl<R: BufRead> FeedbackProvider for CliFeedbackProvider<R> {
    fn submit(&mut self, word: &str) -> GuessResult {
        if self.exhausted {
            return GuessResult::NotAWord;
        }
        println!("\nPlay: {}", word.to_uppercase());
        loop {
            println!(
                "Enter feedback (G=green, Y=yellow, X=gray, e.g. GYXXG), \
                 or N if the word was not accepted:"
            );
            let Some(input) = self.read_line() else {
                return GuessResult::NotAWord;
            };
            if input == "N" {
                return GuessResult::NotAWord;
            }
            if let Some(feedback) = parse_feedback(&input, self.word_size) {
                return GuessResult::Scored(feedback);
            }
            println!(
                "Invalid feedback. Please enter {} characters using G, Y, or X.",
                self.word_size
            );
        }
    }
}

/// Lowercased `target` if it is a playable word of `word_size` letters
/// from `words`.
pub fn check_target(target: &str, word_size: usize, words: &[String]) -> Result<String, String> {
    let target = target.trim().to_lowercase();
    if target.chars().count() != word_size {
        return Err(format!(
            "target '{target}' has {} letters, expected {word_size}",
            target.chars().count()
        ));
    }
    if !words.contains(&target) {
        return Err(format!("target '{target}' is not in the word bank"));
    }
    Ok(target)
}

pub fn display_wordbank_source(source: &WordbankSource, word_count: usize) {
    match source {
        WordbankSource::File(path) => {
            println!("Loaded {word_count} words from {}.", path.display());
        }
        WordbankSource::UserConfig(path) => {
            println!("Loaded {word_count} words from {} (user wordbank).", path.display());
        }
        WordbankSource::Embedded => println!("Loaded {word_count} words."),
    }
}

#[must_use]
pub fn format_history(history: &[Attempt]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            format!(
                "{}. {} {}",
                i + 1,
                attempt.guess.to_uppercase(),
                FeedbackDisplay(&attempt.feedback)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn display_outcome(outcome: &SolveOutcome) {
    let history = format_history(outcome.history());
    if !history.is_empty() {
        println!("{history}");
    }
    match outcome {
        SolveOutcome::Solved { word, attempts, .. } => {
            println!("Solved: {} in {attempts} attempt(s). Congrats!", word.to_uppercase());
        }
        SolveOutcome::AttemptsExhausted { remaining, .. } => {
            println!("Out of attempts. {} candidate(s) left:", remaining.len());
            for word in remaining.iter().take(5) {
                println!("{word}");
            }
        }
        SolveOutcome::AllRejected { .. } => {
            println!("Every remaining candidate was rejected by the game.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Feedback;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["wordlerer"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.target, None);
        assert_eq!(cli.strategy, Strategy::First);
        assert_eq!(cli.engine_config(), EngineConfig::default());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_cli_all_options() {
        let cli = Cli::try_parse_from([
            "wordlerer",
            "-i",
            "words.txt",
            "--target",
            "crane",
            "-s",
            "frequency",
            "--word-size",
            "4",
            "--max-attempts",
            "8",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path, Some("words.txt".to_string()));
        assert_eq!(cli.target, Some("crane".to_string()));
        assert_eq!(cli.strategy, Strategy::Frequency);
        assert_eq!(
            cli.engine_config(),
            EngineConfig {
                word_size: 4,
                max_attempts: 8
            }
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_cli_rejects_zero_word_size() {
        assert!(Cli::try_parse_from(["wordlerer", "--word-size", "0"]).is_err());
        let cli = Cli::try_parse_from(["wordlerer", "--word-size", "1"]).unwrap();
        assert_eq!(cli.word_size, 1);
    }

    #[test]
    fn test_check_target() {
        let bank = vec!["crane".to_string(), "slate".to_string()];
        assert_eq!(check_target(" CRANE ", 5, &bank), Ok("crane".to_string()));
        assert_eq!(
            check_target("cranes", 5, &bank),
            Err("target 'cranes' has 6 letters, expected 5".to_string())
        );
        assert_eq!(
            check_target("trace", 5, &bank),
            Err("target 'trace' is not in the word bank".to_string())
        );
    }

    #[test]
    fn test_provider_read_error_ends_input() {
        struct Broken;
        impl std::io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("device gone"))
            }
        }
        let mut provider = CliFeedbackProvider::new(std::io::BufReader::new(Broken), 5);
        assert_eq!(provider.submit("crane"), GuessResult::NotAWord);
        assert_eq!(provider.submit("slate"), GuessResult::NotAWord);
    }

    #[test]
    fn test_parse_cli_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["wordlerer", "-s", "entropy"]).is_err());
    }

    #[test]
    fn test_provider_reads_feedback() {
        let mut provider = CliFeedbackProvider::new(Cursor::new("gyxxg\n"), 5);
        assert_eq!(
            provider.submit("crane"),
            GuessResult::Scored(vec![
                Feedback::Correct,
                Feedback::Present,
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Correct,
            ])
        );
    }

    #[test]
    fn test_provider_retries_after_invalid_feedback() {
        let mut provider = CliFeedbackProvider::new(Cursor::new("GGG\nGGGGA\nGGGGG\n"), 5);
        assert!(provider.submit("crane").is_win());
    }

    #[test]
    fn test_provider_not_a_word() {
        let mut provider = CliFeedbackProvider::new(Cursor::new("n\nXXXXX\n"), 5);
        assert_eq!(provider.submit("xyzzy"), GuessResult::NotAWord);
        assert_eq!(provider.submit("crane"), GuessResult::Scored(vec![Feedback::Absent; 5]));
    }

    #[test]
    fn test_provider_end_of_input() {
        let mut provider = CliFeedbackProvider::new(Cursor::new(""), 5);
        assert_eq!(provider.submit("crane"), GuessResult::NotAWord);
        assert_eq!(provider.submit("slate"), GuessResult::NotAWord);
    }

    #[test]
    fn test_format_history() {
        let history = vec![
            Attempt {
                guess: "crane".to_string(),
                feedback: vec![
                    Feedback::Present,
                    Feedback::Correct,
                    Feedback::Correct,
                    Feedback::Absent,
                    Feedback::Correct,
                ],
            },
            Attempt {
                guess: "trace".to_string(),
                feedback: vec![Feedback::Correct; 5],
            },
        ];
        assert_eq!(format_history(&history), "1. CRANE YGGXG\n2. TRACE GGGGG");
        assert_eq!(format_history(&[]), "");
    }
}
