use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use derive_more::{Display, Error, From, IsVariant};

use super::{ChainedHashMap, ShiftAddBuilder};

/// The number of buckets words are spread across.
pub const DICTIONARY_BUCKETS: usize = 200;

/// A dictionary line wasn't of the form `word value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// The 1-based line number.
    pub line: usize,
    pub content: String,
}

impl Display for MalformedLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Line {} isn't a `word value` pair: {:?}", self.line, self.content)
    }
}

impl Error for MalformedLine {}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum DictionaryError {
    Io(io::Error),
    MalformedLine(MalformedLine),
}

/// A table of number words and their values, used to replace spelled out numbers in text.
///
/// Words are case insensitive and hashed with [`ShiftAddBuilder`] into [`DICTIONARY_BUCKETS`]
/// buckets.
#[derive(Debug)]
pub struct NumberDictionary {
    words: ChainedHashMap<String, i64, ShiftAddBuilder>,
}

impl NumberDictionary {
    pub fn new() -> NumberDictionary {
        NumberDictionary {
            words: ChainedHashMap::with_buckets(DICTIONARY_BUCKETS),
        }
    }

    /// Reads a dictionary with one `word value` pair per line. Blank lines are skipped.
    pub fn load(reader: impl BufRead) -> Result<NumberDictionary, DictionaryError> {
        let mut dictionary = NumberDictionary::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let malformed = || MalformedLine { line: index + 1, content: line.clone() };
            let mut parts = line.split_whitespace();
            let (Some(word), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(malformed().into());
            };
            let value = value.parse().map_err(|_| malformed())?;
            dictionary.insert(word, value);
        }

        Ok(dictionary)
    }

    /// Loads a dictionary from the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<NumberDictionary, DictionaryError> {
        NumberDictionary::load(BufReader::new(File::open(path)?))
    }

    /// Adds `word`, returning the value it previously had.
    pub fn insert(&mut self, word: &str, value: i64) -> Option<i64> {
        self.words.insert(word.to_lowercase(), value)
    }

    pub fn value_of(&self, word: &str) -> Option<i64> {
        self.words.get(word.to_lowercase().as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Replaces every run of consecutive number words with the sum of their values, so
    /// "twenty five" becomes "25". Every other word, and the spacing and line breaks between
    /// words, is kept as it is.
    pub fn replace_numbers(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| self.replace_in_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn replace_in_line(&self, line: &str) -> String {
        let mut output = Vec::new();
        let mut run: Option<i64> = None;

        for token in line.split(' ') {
            match self.value_of(token) {
                Some(value) if !token.is_empty() => {
                    run = Some(run.unwrap_or(0) + value);
                },
                _ => {
                    if let Some(sum) = run.take() {
                        output.push(sum.to_string());
                    }
                    output.push(token.to_owned());
                },
            }
        }
        if let Some(sum) = run {
            output.push(sum.to_string());
        }

        output.join(" ")
    }
}

impl Default for NumberDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const WORDS: &str = "one 1\ntwo 2\nthree 3\nfive 5\n\ntwenty 20\nhundred 100\n";

    #[test]
    fn test_load_and_lookup() {
        let dictionary = NumberDictionary::load(Cursor::new(WORDS)).expect("valid dictionary");
        assert_eq!(dictionary.len(), 6, "The blank line should be skipped.");
        assert_eq!(dictionary.value_of("twenty"), Some(20));
        assert_eq!(dictionary.value_of("Twenty"), Some(20), "Lookups ignore case.");
        assert_eq!(dictionary.value_of("seven"), None);
    }

    #[test]
    fn test_word_buckets() {
        let dictionary = NumberDictionary::load(Cursor::new(WORDS)).expect("valid dictionary");
        assert_eq!(dictionary.words.bucket_index("twenty"), 97);
        assert_eq!(dictionary.words.bucket_index("hundred"), 172);
    }

    #[test]
    fn test_malformed_lines() {
        let error = NumberDictionary::load(Cursor::new("one 1\ntwo\n")).expect_err("missing value");
        assert!(matches!(
            error,
            DictionaryError::MalformedLine(MalformedLine { line: 2, .. }),
        ));

        let error = NumberDictionary::load(Cursor::new("one uno\n")).expect_err("bad value");
        assert!(error.is_malformed_line());

        let error = NumberDictionary::open("/nonexistent/dictionary.txt").expect_err("no file");
        assert!(error.is_io());
    }

    #[test]
    fn test_replace_numbers() {
        let dictionary = NumberDictionary::load(Cursor::new(WORDS)).expect("valid dictionary");
        assert_eq!(
            dictionary.replace_numbers("I have twenty five apples and three pears"),
            "I have 25 apples and 3 pears",
        );
        assert_eq!(
            dictionary.replace_numbers("one\ntwo  hundred three"),
            "1\n2  103",
            "Runs are split by line breaks and by repeated spaces."
        );
        assert_eq!(dictionary.replace_numbers(""), "");
    }
}
