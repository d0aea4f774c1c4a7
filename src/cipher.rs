use crate::encoding::{self, Letters, ALPHABET_LEN};
use crate::error::Error;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Plaintext letter assumed to dominate every segment.
pub const EXPECTED_PLAINTEXT_LETTER: char = 'E';

pub const DEFAULT_TOP_N: usize = 3;

/// How a letter's first occurrence in a segment is counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountMode {
    /// First occurrence counts as 1.
    Corrected,
    /// First occurrence counts as 0, matching reports made by the older
    /// decoder tool.
    Legacy,
}

impl Default for CountMode {
    fn default() -> Self {
        CountMode::Corrected
    }
}

impl FromStr for CountMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corrected" => Ok(CountMode::Corrected),
            "legacy" => Ok(CountMode::Legacy),
            other => Err(Error::invalid_argument(format!("unknown count mode '{}'", other))),
        }
    }
}

/// How an observed letter is turned into a key letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetRule {
    /// `|index(E) - index(observed)|`, only a true shift when observed >= E.
    Absolute,
    /// `(index(observed) - index(E)) mod 26`.
    Modular,
}

impl Default for OffsetRule {
    fn default() -> Self {
        OffsetRule::Absolute
    }
}

impl FromStr for OffsetRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absolute" => Ok(OffsetRule::Absolute),
            "modular" => Ok(OffsetRule::Modular),
            other => Err(Error::invalid_argument(format!("unknown offset rule '{}'", other))),
        }
    }
}

pub(crate) fn validate(text: &str, what: &'static str) -> Result<Letters, Error> {
    let letters = Letters::from_string(text)?;
    if letters.is_empty() {
        return Err(Error::EmptyInput(what));
    }

    Ok(letters)
}

/// Every `key_length`-th letter of the ciphertext, starting at `position`.
pub fn segment(ciphertext: &str, key_length: usize, position: usize) -> Result<String, Error> {
    if key_length == 0 {
        return Err(Error::invalid_argument("key length must be at least 1"));
    }

    if position >= key_length {
        return Err(Error::invalid_argument(format!(
            "position {} is outside 0..{}",
            position, key_length
        )));
    }

    validate(ciphertext, "ciphertext")?;

    Ok(ciphertext.chars().skip(position).step_by(key_length).collect())
}

pub fn letter_frequencies(segment: &str, mode: CountMode) -> Result<BTreeMap<char, usize>, Error> {
    Letters::from_string(segment)?;

    let mut frequencies = BTreeMap::new();

    for letter in segment.chars() {
        match frequencies.get_mut(&letter) {
            Some(count) => *count += 1,
            None => {
                let first = match mode {
                    CountMode::Corrected => 1,
                    CountMode::Legacy => 0,
                };
                frequencies.insert(letter, first);
            }
        }
    }

    Ok(frequencies)
}

/// The `n` most frequent letters of a segment, most frequent first. Equal
/// counts are ordered alphabetically.
pub fn top_frequent_letters(segment: &str, n: usize) -> Result<Vec<(char, usize)>, Error> {
    top_frequent_letters_with(segment, n, CountMode::Corrected)
}

pub fn top_frequent_letters_with(
    segment: &str,
    n: usize,
    mode: CountMode,
) -> Result<Vec<(char, usize)>, Error> {
    if n == 0 {
        return Err(Error::invalid_argument("number of ranked letters must be at least 1"));
    }

    let ranked = letter_frequencies(segment, mode)?
        .into_iter()
        .sorted_by(|(_, a), (_, b)| b.cmp(a))
        .take(n)
        .collect();

    Ok(ranked)
}

pub fn infer_key_letter(observed: char) -> Result<char, Error> {
    infer_key_letter_with(observed, OffsetRule::Absolute)
}

pub fn infer_key_letter_with(observed: char, rule: OffsetRule) -> Result<char, Error> {
    let observed_index = encoding::index_of(observed).ok_or(Error::InvalidCharacter {
        character: observed,
        position: 0,
    })?;
    let expected_index = (EXPECTED_PLAINTEXT_LETTER as u8 - b'A') as usize;

    let offset = match rule {
        OffsetRule::Absolute => {
            if observed_index >= expected_index {
                observed_index - expected_index
            } else {
                expected_index - observed_index
            }
        }
        OffsetRule::Modular => (observed_index + ALPHABET_LEN - expected_index) % ALPHABET_LEN,
    };

    Ok(encoding::letter_at(offset))
}

pub fn decode(ciphertext: &str, key: &str) -> Result<String, Error> {
    let key = validate(key, "key")?;
    let ciphertext = validate(ciphertext, "ciphertext")?;

    Ok(ciphertext.shift_back(&key).string())
}

pub fn encrypt(plaintext: &str, key: &str) -> Result<String, Error> {
    let key = validate(key, "key")?;
    let plaintext = validate(plaintext, "plaintext")?;

    Ok(plaintext.shift_forward(&key).string())
}
