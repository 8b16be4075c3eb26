use std::collections::HashMap;
use std::fmt;

/// Evaluation of a single letter of a guess against the hidden word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the word (yellow)
    Present,
    /// Letter absent, or all of its occurrences already claimed (gray)
    Absent,
}

impl Feedback {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' | '2' => Some(Self::Correct),
            'Y' | '1' => Some(Self::Present),
            'X' | 'B' | '0' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// What the game answered for a submitted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// One entry per letter of the guess, in order.
    Scored(Vec<Feedback>),
    /// The game refused the word; nothing was learned about the target.
    NotAWord,
}

impl GuessResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        match self {
            Self::Scored(feedback) => is_all_correct(feedback),
            Self::NotAWord => false,
        }
    }
}

/// Parse a feedback string such as `GYXXG`. Returns `None` on any unknown
/// character or when the length differs from `word_size`.
#[must_use]
pub fn parse_feedback(input: &str, word_size: usize) -> Option<Vec<Feedback>> {
    let feedback: Vec<Feedback> = input
        .trim()
        .chars()
        .map(Feedback::from_char)
        .collect::<Option<_>>()?;
    (feedback.len() == word_size).then_some(feedback)
}

/// Display wrapper rendering feedback as its `G`/`Y`/`X` string.
pub struct FeedbackDisplay<'a>(pub &'a [Feedback]);

impl fmt::Display for FeedbackDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.0 {
            write!(f, "{}", fb.to_char())?;
        }
        Ok(())
    }
}

#[must_use]
pub fn is_all_correct(feedback: &[Feedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|f| *f == Feedback::Correct)
}

/// Score `guess` as if `solution` were the hidden word.
///
/// Greens are marked first and take their letter out of the pool. The
/// remaining letters of `guess` are then scanned left to right, and each one
/// is yellow only while an unclaimed copy is left in `solution`.
#[must_use]
pub fn get_feedback(guess: &str, solution: &str) -> Vec<Feedback> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let mut solution_chars: Vec<Option<char>> = solution.chars().map(Some).collect();
    let mut feedback = vec![Feedback::Absent; guess_chars.len()];

    // First pass: greens
    for (i, &g) in guess_chars.iter().enumerate() {
        if solution_chars.get(i).copied().flatten() == Some(g) {
            feedback[i] = Feedback::Correct;
            solution_chars[i] = None;
        }
    }
    // Second pass: yellows, bounded by what is left of the solution
    for (i, &g) in guess_chars.iter().enumerate() {
        if feedback[i] == Feedback::Correct {
            continue;
        }
        if let Some(pos) = solution_chars.iter().position(|&c| c == Some(g)) {
            feedback[i] = Feedback::Present;
            solution_chars[pos] = None;
        }
    }
    feedback
}

/// True when `candidate` could still be the hidden word after `guess`
/// was scored as `feedback`.
#[must_use]
pub fn is_consistent(candidate: &str, guess: &str, feedback: &[Feedback]) -> bool {
    get_feedback(guess, candidate) == feedback
}

#[must_use]
pub fn filter_candidates(candidates: &[String], guess: &str, feedback: &[Feedback]) -> Vec<String> {
    candidates
        .iter()
        .filter(|word| is_consistent(word, guess, feedback))
        .cloned()
        .collect()
}

/// Per-position letter counts over `words`.
#[must_use]
pub fn build_freq_chart(words: &[String]) -> Vec<HashMap<char, usize>> {
    let mut freq: Vec<HashMap<char, usize>> = Vec::new();
    for word in words {
        for (i, c) in word.chars().enumerate() {
            if freq.len() <= i {
                freq.resize_with(i + 1, HashMap::new);
            }
            *freq[i].entry(c).or_insert(0) += 1;
        }
    }
    freq
}

#[must_use]
pub fn score_word(word: &str, freq: &[HashMap<char, usize>]) -> usize {
    word.chars()
        .enumerate()
        .map(|(i, c)| freq.get(i).and_then(|column| column.get(&c)).copied().unwrap_or(0))
        .sum()
}

/// Highest positional-frequency score; ties keep the earliest word.
#[must_use]
pub fn recommend_guess(candidates: &[String]) -> Option<&String> {
    let freq = build_freq_chart(candidates);
    let mut best: Option<(&String, usize)> = None;
    for word in candidates {
        let score = score_word(word, &freq);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((word, score));
        }
    }
    best.map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Correct, Present};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_feedback_exact_match() {
        assert_eq!(get_feedback("crane", "crane"), vec![Correct; 5]);
    }

    #[test]
    fn test_get_feedback_no_overlap() {
        assert_eq!(get_feedback("quick", "dream"), vec![Absent; 5]);
    }

    #[test]
    fn test_get_feedback_crane_against_trace() {
        assert_eq!(
            get_feedback("crane", "trace"),
            vec![Present, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn test_duplicate_guess_letters_bounded_by_target() {
        // Both E's of CREEP are green, P is yellow.
        assert_eq!(
            get_feedback("speed", "creep"),
            vec![Absent, Present, Correct, Correct, Absent]
        );
        // GEESE has three E's but CREEP only two: one green, one yellow.
        assert_eq!(
            get_feedback("geese", "creep"),
            vec![Absent, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn test_duplicate_guess_letter_single_in_target() {
        // The single E of ABIDE is claimed by the green, so both leading E's are gray.
        assert_eq!(
            get_feedback("eerie", "abide"),
            vec![Absent, Absent, Absent, Present, Correct]
        );
        assert_eq!(
            get_feedback("speed", "abide"),
            vec![Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn test_speed_against_erase() {
        // ERASE holds two E's, so both unmatched E's of SPEED are yellow.
        assert_eq!(
            get_feedback("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn test_green_claims_letter_before_yellow() {
        // The middle E is green, so the leading E has nothing left.
        assert_eq!(
            get_feedback("eject", "crept"),
            vec![Absent, Absent, Correct, Present, Correct]
        );
    }

    #[test]
    fn test_is_consistent_with_self_feedback() {
        let fb = get_feedback("crane", "trace");
        assert!(is_consistent("trace", "crane", &fb));
        assert!(!is_consistent("slate", "crane", &fb));
        assert!(!is_consistent("crane", "crane", &fb));
    }

    #[test]
    fn test_filter_candidates_example() {
        let wordbank = words(&["crane", "slate", "trace", "place"]);
        let fb = get_feedback("crane", "trace");
        assert_eq!(filter_candidates(&wordbank, "crane", &fb), words(&["trace"]));
    }

    #[test]
    fn test_filter_keeps_target_for_every_guess() {
        let wordbank = words(&["speed", "creep", "sleep", "steep", "sweep", "erase", "geese"]);
        for target in &wordbank {
            for guess in &wordbank {
                let fb = get_feedback(guess, target);
                let filtered = filter_candidates(&wordbank, guess, &fb);
                assert!(filtered.contains(target), "{guess} dropped {target}");
                assert!(filtered.len() <= wordbank.len());
            }
        }
    }

    #[test]
    fn test_parse_feedback() {
        assert_eq!(
            parse_feedback("GYxbg", 5),
            Some(vec![Correct, Present, Absent, Absent, Correct])
        );
        assert_eq!(
            parse_feedback("21000", 5),
            Some(vec![Correct, Present, Absent, Absent, Absent])
        );
        assert_eq!(parse_feedback(" GGGGG\n", 5), Some(vec![Correct; 5]));
        assert_eq!(parse_feedback("GGGG", 5), None);
        assert_eq!(parse_feedback("GGGGA", 5), None);
        assert_eq!(parse_feedback("", 5), None);
    }

    #[test]
    fn test_feedback_display() {
        let fb = [Correct, Present, Absent];
        assert_eq!(FeedbackDisplay(&fb).to_string(), "GYX");
    }

    #[test]
    fn test_guess_result_is_win() {
        assert!(GuessResult::Scored(vec![Correct; 5]).is_win());
        assert!(!GuessResult::Scored(vec![Correct, Absent]).is_win());
        assert!(!GuessResult::Scored(Vec::new()).is_win());
        assert!(!GuessResult::NotAWord.is_win());
    }

    #[test]
    fn test_recommend_guess_prefers_common_letters() {
        let candidates = words(&["crane", "trace", "brace", "zzzzz"]);
        let best = recommend_guess(&candidates).unwrap();
        assert_ne!(best, "zzzzz");
        assert!(recommend_guess(&[]).is_none());
    }

    #[test]
    fn test_recommend_guess_tie_keeps_first() {
        let candidates = words(&["abcde", "fghij"]);
        assert_eq!(recommend_guess(&candidates).unwrap(), "abcde");
    }
}
