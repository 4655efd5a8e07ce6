use std::fmt::{Debug, Formatter};
use std::io::{self, BufRead, Write};

use alphabear_words::{best_words, format_outcome, load_dictionary, DEFAULT_DICTIONARY_PATH};
use clap::Parser;

/// alphabear_words: find the longest words your letters can play
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the dictionary, whitespace-separated words
    #[arg(long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Letters every word must use [default: prompt]
    #[arg(long)]
    essential: Option<String>,

    /// Letters words may use [default: prompt]
    #[arg(long)]
    optional: Option<String>,
}

struct Error(String);

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0) // Print error unquoted
    }
}

fn prompt(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String, Error> {
    write!(output, "{question}")
        .and_then(|()| output.flush())
        .map_err(|e| Error(format!("Couldn't write prompt: {e}")))?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .map_err(|e| Error(format!("Couldn't read letters: {e}")))?;
    if read == 0 {
        return Err(Error("No letters entered".into()));
    }
    Ok(answer.trim().to_string())
}

fn prompt_stdin(question: &str) -> Result<String, Error> {
    prompt(question, &mut io::stdin().lock(), &mut io::stdout())
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let essential = match args.essential {
        Some(letters) => letters,
        None => prompt_stdin("Please enter your essential letters: ")?,
    };
    let optional = match args.optional {
        Some(letters) => letters,
        None => prompt_stdin("Please enter your optional letters: ")?,
    };

    let dictionary = load_dictionary(&args.dictionary).map_err(|e| Error(e.to_string()))?;

    let outcome = best_words(&essential, &optional, &dictionary);
    println!("{}", format_outcome(&outcome));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_returns_trimmed_answer() {
        let mut input = "  lla \nrest\n".as_bytes();
        let mut output = Vec::new();
        let answer = prompt("Letters: ", &mut input, &mut output).unwrap();
        assert_eq!(answer, "lla");
        assert_eq!(output, b"Letters: ");
    }

    #[test]
    fn empty_line_is_an_empty_pool() {
        let mut input = "\n".as_bytes();
        let answer = prompt("Letters: ", &mut input, &mut io::sink()).unwrap();
        assert_eq!(answer, "");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = "".as_bytes();
        let err = prompt("Letters: ", &mut input, &mut io::sink()).unwrap_err();
        assert_eq!(format!("{err:?}"), "No letters entered");
    }
}
