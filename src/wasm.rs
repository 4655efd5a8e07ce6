use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::api::best_words;
use crate::dictionary::dictionary_from_entries;
use crate::format::format_outcome;
use crate::matcher::Outcome;

#[derive(Serialize)]
struct WasmResult<'w> {
    outcome: Outcome<'w>,
    message: String,
}

fn words_from_js(value: JsValue) -> Result<Vec<String>, JsValue> {
    from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Words must be an array of strings: {e}")))
}

/// WebAssembly entry point: find the best words the given letters can play.
#[wasm_bindgen]
pub fn solve_letters(essential: &str, optional: &str, words: JsValue) -> Result<JsValue, JsValue> {
    let entries = words_from_js(words)?;
    let dictionary = dictionary_from_entries(entries.as_slice());
    if dictionary.is_empty() {
        return Err(JsValue::from_str("Please supply at least one word."));
    }

    let outcome = best_words(essential, optional, &dictionary);
    let message = format_outcome(&outcome);
    to_value(&WasmResult { outcome, message })
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
