use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Pools longer than this spill to the heap; a rack of tiles rarely does.
pub const INLINE_LETTERS: usize = 16;

/// Uppercase a single character. Some characters expand (e.g. 'ß' -> "SS"), so this yields an
/// iterator rather than a char.
fn normalize_char(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase()
}

/// Length of `word` once uppercased, which is what the pools are measured against.
#[must_use]
pub fn normalized_len(word: &str) -> usize {
    word.chars().flat_map(normalize_char).count()
}

/// A pool of letters the player holds. Letters are uppercased and whitespace is dropped;
/// repeats are significant, so "LL" asks for two L's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    letters: SmallVec<[char; INLINE_LETTERS]>,
}

impl LetterMultiset {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        LetterMultiset {
            letters: raw
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(normalize_char)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Every letter in the pool, repeats included, in input order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn push(&mut self, letter: char) {
        self.letters.extend(normalize_char(letter));
    }
}

impl FromStr for LetterMultiset {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LetterMultiset::new(s))
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// The letters of one word still waiting to be covered by a pool letter.
#[derive(Debug, Clone, Default)]
pub struct LetterCounts {
    counts: HashMap<char, u32>,
}

impl LetterCounts {
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = HashMap::new();
        for letter in word.chars().flat_map(normalize_char) {
            *counts.entry(letter).or_insert(0) += 1;
        }
        LetterCounts { counts }
    }

    /// Consume one occurrence of `letter`. Returns false, leaving the counts untouched, when
    /// none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of letters not yet consumed.
    pub fn remaining(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }
}
