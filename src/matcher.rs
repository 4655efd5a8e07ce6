use log::{debug, trace};
use serde::Serialize;

use crate::letters::{normalized_len, LetterCounts, LetterMultiset};

/// What a search produced. Finding nothing is an ordinary answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "words", rename_all = "snake_case")]
pub enum Outcome<'w> {
    /// The longest candidates, in dictionary order. Never empty.
    Best(Vec<&'w str>),
    NoResultsFound,
}

impl<'w> Outcome<'w> {
    /// The winning words, or an empty slice when nothing was found.
    pub fn words(&self) -> &[&'w str] {
        match self {
            Outcome::Best(words) => words,
            Outcome::NoResultsFound => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Best(_))
    }
}

/// Finds the words that can be played from a mandatory pool and an optional pool of letters.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    mandatory: LetterMultiset,
    optional: LetterMultiset,
}

impl Matcher {
    pub fn new(mandatory: LetterMultiset, optional: LetterMultiset) -> Self {
        Matcher {
            mandatory,
            optional,
        }
    }

    /// Consume every mandatory letter from `word`, returning what is left over. `None` as soon
    /// as one of them is missing.
    fn match_mandatory(&self, word: &str) -> Option<LetterCounts> {
        let mut remaining = LetterCounts::from_word(word);
        for letter in self.mandatory.iter() {
            if !remaining.take(letter) {
                trace!("{word}: missing mandatory '{letter}'");
                return None;
            }
        }
        Some(remaining)
    }

    /// Consume whichever optional letters are still available, returning how many were used.
    fn score_optional(&self, remaining: &mut LetterCounts) -> usize {
        self.optional
            .iter()
            .filter(|&letter| remaining.take(letter))
            .count()
    }

    /// Number of letters of `word` covered by the pools, or `None` when a mandatory letter is
    /// missing. Letters of the word outside both pools don't count.
    pub fn score(&self, word: &str) -> Option<usize> {
        let mut remaining = self.match_mandatory(word)?;
        Some(self.mandatory.len() + self.score_optional(&mut remaining))
    }

    /// Whether `word` can be played: it holds every mandatory letter and each of its letters is
    /// covered by exactly one pool letter.
    pub fn accepts(&self, word: &str) -> bool {
        let Some(mut remaining) = self.match_mandatory(word) else {
            return false;
        };
        self.score_optional(&mut remaining);
        match remaining.remaining() {
            0 => true,
            leftover => {
                trace!("{word}: {leftover} letter(s) outside the pools");
                false
            }
        }
    }

    /// All playable words, in dictionary order.
    pub fn filter_candidates<'w>(&self, dictionary: &'w [String]) -> Vec<&'w str> {
        let candidates: Vec<&str> = dictionary
            .iter()
            .map(String::as_str)
            .filter(|word| self.accepts(word))
            .collect();
        debug!(
            "{} of {} words playable with mandatory '{}' and optional '{}'",
            candidates.len(),
            dictionary.len(),
            self.mandatory,
            self.optional
        );
        candidates
    }

    pub fn best_words<'w>(&self, dictionary: &'w [String]) -> Outcome<'w> {
        select_longest(&self.filter_candidates(dictionary))
    }
}

/// Keep the candidates of maximal length, preserving their order.
pub fn select_longest<'w>(candidates: &[&'w str]) -> Outcome<'w> {
    let Some(longest) = candidates.iter().map(|word| normalized_len(word)).max() else {
        debug!("no candidates");
        return Outcome::NoResultsFound;
    };
    let best: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|word| normalized_len(word) == longest)
        .collect();
    debug!("{} word(s) of length {longest}", best.len());
    Outcome::Best(best)
}
