use std::io;
use std::path::Path;
use std::process::ExitCode;
use wordlerer::cli::{
    CliFeedbackProvider, Strategy, check_target, display_outcome, display_wordbank_source,
    parse_cli,
};
use wordlerer::logging::init_logging;
use wordlerer::wordbank::resolve_wordbank;
use wordlerer::{
    EngineConfig, FeedbackProvider, LetterFrequency, SolveError, SolveOutcome, SolvingEngine,
    TargetProvider,
};

fn play<'a, P: FeedbackProvider + 'a>(
    words: &[String],
    config: EngineConfig,
    provider: P,
    strategy: Strategy,
) -> Result<SolveOutcome, SolveError> {
    let engine = SolvingEngine::new(words, config, provider)?;
    match strategy {
        Strategy::First => engine.solve(),
        Strategy::Frequency => engine.with_chooser(LetterFrequency).solve(),
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);
    let config = cli.engine_config();

    let wordbank_path = cli.wordbank_path.as_deref().map(Path::new);
    let (words, source) = match resolve_wordbank(wordbank_path, config.word_size) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!(
                "Failed to load word bank from '{}': {e}",
                cli.wordbank_path.as_deref().unwrap_or_default()
            );
            return ExitCode::FAILURE;
        }
    };
    display_wordbank_source(&source, words.len());

    let result = match &cli.target {
        Some(target) => {
            let target = match check_target(target, config.word_size, &words) {
                Ok(target) => target,
                Err(message) => {
                    eprintln!("Invalid target: {message}");
                    return ExitCode::FAILURE;
                }
            };
            let provider =
                TargetProvider::new(target).with_accepted_words(words.iter().cloned());
            play(&words, config, provider, cli.strategy)
        }
        None => {
            let provider = CliFeedbackProvider::new(io::stdin().lock(), config.word_size);
            play(&words, config, provider, cli.strategy)
        }
    };

    match result {
        Ok(outcome) => {
            display_outcome(&outcome);
            if outcome.is_solved() {
                ExitCode::SUCCESS
            } else {
                println!("You lost :(");
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Solver stopped: {e}");
            ExitCode::from(2)
        }
    }
}
