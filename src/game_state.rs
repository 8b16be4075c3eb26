// Solving engine: one game, one candidate list.
//
// Attempt loop: select -> submit -> (NotAWord: reject and select again) -> win check -> eliminate
// Terminal states: Solved, AttemptsExhausted, AllRejected, or a SolveError

use crate::solver::{Feedback, FeedbackDisplay, GuessResult, filter_candidates, is_all_correct};
use crate::{debug_log, info_log};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

pub const DEFAULT_WORD_SIZE: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Plays a word in the real game and reports how it was scored.
///
/// The call may block for as long as the game needs; the engine has no
/// timeout of its own.
pub trait FeedbackProvider {
    fn submit(&mut self, word: &str) -> GuessResult;
}

impl<F> FeedbackProvider for F
where
    F: FnMut(&str) -> GuessResult,
{
    fn submit(&mut self, word: &str) -> GuessResult {
        self(word)
    }
}

/// Picks the next guess. Must return one of the offered words.
pub trait GuessChooser {
    fn choose(&mut self, candidates: &[String]) -> String;
}

impl<F> GuessChooser for F
where
    F: FnMut(&[String]) -> String,
{
    fn choose(&mut self, candidates: &[String]) -> String {
        self(candidates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub word_size: usize,
    pub max_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: String,
    pub feedback: Vec<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved {
        word: String,
        attempts: usize,
        history: Vec<Attempt>,
    },
    /// Ran out of attempts with words still standing. A normal loss.
    AttemptsExhausted {
        attempts: usize,
        remaining: Vec<String>,
        history: Vec<Attempt>,
    },
    /// The provider refused every word still in play.
    AllRejected {
        attempts: usize,
        history: Vec<Attempt>,
    },
}

impl SolveOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        match self {
            Self::Solved { attempts, .. }
            | Self::AttemptsExhausted { attempts, .. }
            | Self::AllRejected { attempts, .. } => *attempts,
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        match self {
            Self::Solved { history, .. }
            | Self::AttemptsExhausted { history, .. }
            | Self::AllRejected { history, .. } => history,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Nothing of the configured length was left in the dictionary.
    NoCandidates { word_size: usize },
    /// The chooser answered with a word it was not offered.
    ChooserContractViolation { chosen: String },
    /// The provider scored a guess with the wrong number of letters.
    MalformedFeedback {
        guess: String,
        expected: usize,
        actual: usize,
    },
    /// Feedback ruled out every remaining candidate.
    Contradiction {
        guess: String,
        feedback: Vec<Feedback>,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates { word_size } => {
                write!(f, "dictionary has no words of length {word_size}")
            }
            Self::ChooserContractViolation { chosen } => {
                write!(
                    f,
                    "guess chooser returned '{chosen}', which is not a remaining candidate"
                )
            }
            Self::MalformedFeedback {
                guess,
                expected,
                actual,
            } => write!(
                f,
                "feedback for '{guess}' has {actual} letters, expected {expected}"
            ),
            Self::Contradiction { guess, feedback } => write!(
                f,
                "feedback {} for '{guess}' eliminated every candidate",
                FeedbackDisplay(feedback)
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// Solver state for a single game. Consumed by [`SolvingEngine::solve`].
pub struct SolvingEngine<'a> {
    config: EngineConfig,
    candidates: Vec<String>,
    rejected: HashSet<String>,
    history: Vec<Attempt>,
    attempts_made: usize,
    provider: Box<dyn FeedbackProvider + 'a>,
    chooser: Option<Box<dyn GuessChooser + 'a>>,
}

impl<'a> SolvingEngine<'a> {
    /// Build an engine from `words`, keeping only those of `config.word_size`
    /// characters. Duplicates are dropped and the rest sorted. A word size of
    /// zero admits no words.
    pub fn new<I, S, P>(words: I, config: EngineConfig, provider: P) -> Result<Self, SolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: FeedbackProvider + 'a,
    {
        if config.word_size == 0 {
            return Err(SolveError::NoCandidates { word_size: 0 });
        }
        let candidates: Vec<String> = words
            .into_iter()
            .filter(|w| w.as_ref().chars().count() == config.word_size)
            .map(|w| w.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if candidates.is_empty() {
            return Err(SolveError::NoCandidates {
                word_size: config.word_size,
            });
        }
        info_log!(
            "SolvingEngine::new() - {} candidates of length {}",
            candidates.len(),
            config.word_size
        );

        Ok(Self {
            config,
            candidates,
            rejected: HashSet::new(),
            history: Vec::new(),
            attempts_made: 0,
            provider: Box::new(provider),
            chooser: None,
        })
    }

    /// Defer guess selection to `chooser` instead of taking the first candidate.
    #[must_use]
    pub fn with_chooser<C: GuessChooser + 'a>(mut self, chooser: C) -> Self {
        self.chooser = Some(Box::new(chooser));
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn attempts_made(&self) -> usize {
        self.attempts_made
    }

    /// Candidates that have not been refused by the provider, in order.
    pub fn selectable(&self) -> Vec<String> {
        self.candidates
            .iter()
            .filter(|w| !self.rejected.contains(*w))
            .cloned()
            .collect()
    }

    /// Drop every candidate inconsistent with `feedback` for `guess` and
    /// return how many are left.
    pub fn apply_feedback(
        &mut self,
        guess: &str,
        feedback: &[Feedback],
    ) -> Result<usize, SolveError> {
        let before = self.candidates.len();
        self.candidates = filter_candidates(&self.candidates, guess, feedback);
        debug_log!(
            "apply_feedback() - {} {}: {} -> {} candidates",
            guess,
            FeedbackDisplay(feedback),
            before,
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            return Err(SolveError::Contradiction {
                guess: guess.to_string(),
                feedback: feedback.to_vec(),
            });
        }
        Ok(self.candidates.len())
    }

    fn select_guess(&mut self) -> Result<Option<String>, SolveError> {
        let selectable = self.selectable();
        let Some(first) = selectable.first() else {
            return Ok(None);
        };
        let Some(chooser) = self.chooser.as_mut() else {
            return Ok(Some(first.clone()));
        };

        let chosen = chooser.choose(&selectable);
        if selectable.contains(&chosen) {
            Ok(Some(chosen))
        } else {
            Err(SolveError::ChooserContractViolation { chosen })
        }
    }

    /// Play the game to a terminal state.
    pub fn solve(mut self) -> Result<SolveOutcome, SolveError> {
        while self.attempts_made < self.config.max_attempts {
            let Some(guess) = self.select_guess()? else {
                info_log!("solve() - provider rejected every remaining candidate");
                return Ok(SolveOutcome::AllRejected {
                    attempts: self.attempts_made,
                    history: self.history,
                });
            };
            info_log!(
                "solve() - attempt {}/{}: '{}' ({} candidates)",
                self.attempts_made + 1,
                self.config.max_attempts,
                guess,
                self.candidates.len()
            );

            let feedback = match self.provider.submit(&guess) {
                GuessResult::NotAWord => {
                    debug_log!("solve() - '{}' is not a word, choosing again", guess);
                    self.rejected.insert(guess);
                    continue;
                }
                GuessResult::Scored(feedback) => feedback,
            };
            if feedback.len() != self.config.word_size {
                return Err(SolveError::MalformedFeedback {
                    guess,
                    expected: self.config.word_size,
                    actual: feedback.len(),
                });
            }

            self.attempts_made += 1;
            self.history.push(Attempt {
                guess: guess.clone(),
                feedback: feedback.clone(),
            });

            if is_all_correct(&feedback) {
                info_log!("solve() - solved '{}' in {} attempts", guess, self.attempts_made);
                return Ok(SolveOutcome::Solved {
                    word: guess,
                    attempts: self.attempts_made,
                    history: self.history,
                });
            }

            self.apply_feedback(&guess, &feedback)?;
        }

        info_log!(
            "solve() - out of attempts with {} candidates left",
            self.candidates.len()
        );
        Ok(SolveOutcome::AttemptsExhausted {
            attempts: self.attempts_made,
            remaining: self.candidates,
            history: self.history,
        })
    }
}
