use crate::letters::LetterMultiset;
use crate::matcher::{Matcher, Outcome};

/// Longest words of `dictionary` using every `essential` letter and as many `optional` ones as
/// possible. The letter strings are taken as typed; case and whitespace don't matter.
pub fn best_words<'w>(essential: &str, optional: &str, dictionary: &'w [String]) -> Outcome<'w> {
    let matcher = Matcher::new(LetterMultiset::new(essential), LetterMultiset::new(optional));
    matcher.best_words(dictionary)
}
