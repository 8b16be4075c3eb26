// Stock guess choosers

use crate::game_state::GuessChooser;
use crate::solver::recommend_guess;

/// Always takes the first offered word, the same pick the engine makes
/// when no chooser is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCandidate;

impl GuessChooser for FirstCandidate {
    fn choose(&mut self, candidates: &[String]) -> String {
        candidates.first().cloned().unwrap_or_default()
    }
}

/// Picks the word whose letters are most common at their positions among
/// the offered words.
#[derive(Debug, Default, Clone, Copy)]
pub struct LetterFrequency;

impl GuessChooser for LetterFrequency {
    fn choose(&mut self, candidates: &[String]) -> String {
        recommend_guess(candidates).cloned().unwrap_or_default()
    }
}
