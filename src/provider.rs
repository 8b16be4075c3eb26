// In-memory feedback provider that scores guesses against a known word

use crate::debug_log;
use crate::game_state::FeedbackProvider;
use crate::solver::{GuessResult, get_feedback};
use std::collections::HashSet;

/// Plays against a hidden `target`, optionally refusing words outside an
/// accepted list the way the real game refuses unknown words.
#[derive(Debug, Clone)]
pub struct TargetProvider {
    target: String,
    accepted: Option<HashSet<String>>,
    submissions: usize,
}

impl TargetProvider {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            accepted: None,
            submissions: 0,
        }
    }

    #[must_use]
    pub fn with_accepted_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Number of words submitted so far, refused ones included.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    fn accepts(&self, word: &str) -> bool {
        word.chars().count() == self.target.chars().count()
            && self.accepted.as_ref().is_none_or(|accepted| accepted.contains(word))
    }
}

impl FeedbackProvider for TargetProvider {
    fn submit(&mut self, word: &str) -> GuessResult {
        self.submissions += 1;
        if !self.accepts(word) {
            debug_log!("TargetProvider::submit() - refusing '{}'", word);
            return GuessResult::NotAWord;
        }
        GuessResult::Scored(get_feedback(word, &self.target))
    }
}
