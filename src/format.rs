use crate::matcher::Outcome;

pub const BEST_WORDS_PREFIX: &str = "Here are the best words you can play: ";
pub const NO_WORDS_MESSAGE: &str = "I'm afraid no words have been found";

/// The line shown to the player for a search outcome.
pub fn format_outcome(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::Best(words) => format!("{BEST_WORDS_PREFIX}{}", words.join(", ")),
        Outcome::NoResultsFound => NO_WORDS_MESSAGE.to_string(),
    }
}
