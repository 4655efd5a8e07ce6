pub mod api;
pub mod dictionary;
pub mod format;
pub mod letters;
pub mod matcher;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use api::best_words;
pub use dictionary::{
    dictionary_from_entries, load_dictionary, parse_dictionary, DictionaryError,
    DEFAULT_DICTIONARY_PATH,
};
pub use format::format_outcome;
pub use letters::{LetterCounts, LetterMultiset};
pub use matcher::{select_longest, Matcher, Outcome};

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn best_words_normalizes_letter_input() {
        let dictionary = parse_dictionary("cat act\ncats");
        assert_eq!(
            best_words(" c a t ", "", &dictionary),
            Outcome::Best(vec!["CAT", "ACT"])
        );
    }

    #[test]
    fn formats_best_words() {
        let dictionary = words(&["CAT", "AT", "ATE"]);
        let outcome = best_words("at", "c", &dictionary);
        assert_eq!(
            format_outcome(&outcome),
            "Here are the best words you can play: CAT"
        );
    }

    #[test]
    fn formats_several_words_in_order() {
        let outcome = select_longest(&["TEA", "EAT"]);
        assert_eq!(
            format_outcome(&outcome),
            "Here are the best words you can play: TEA, EAT"
        );
    }

    #[test]
    fn formats_no_results() {
        let dictionary = words(&["BUZZ", "JAZZ", "ZIP"]);
        let outcome = best_words("zz", "", &dictionary);
        assert_eq!(format_outcome(&outcome), "I'm afraid no words have been found");
    }
}
