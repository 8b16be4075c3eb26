// Library interface for wordlerer
// This allows integration tests to access internal modules

pub mod chooser;
pub mod cli;
pub mod game_state;
pub mod logging;
pub mod provider;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use chooser::{FirstCandidate, LetterFrequency};
pub use game_state::{
    Attempt, EngineConfig, FeedbackProvider, GuessChooser, SolveError, SolveOutcome, SolvingEngine,
};
pub use provider::TargetProvider;
pub use solver::{Feedback, GuessResult, filter_candidates, get_feedback, is_consistent};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
