use crate::error::Error;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_LEN: usize = 26;

pub fn index_of(c: char) -> Option<usize> {
    ALPHABET.chars().position(|letter| letter == c)
}

pub fn letter_at(index: usize) -> char {
    ALPHABET.as_bytes()[index % ALPHABET_LEN] as char
}

/// A run of alphabet letters, stored as their indices into `ALPHABET`.
#[derive(Debug, Clone, PartialEq)]
pub struct Letters {
    indices: Vec<u8>,
}

impl Letters {
    pub fn from_indices(indices: Vec<u8>) -> Letters {
        Letters { indices: indices }
    }

    /// Fails on the first character outside `A..=Z`, reporting its position.
    pub fn from_string(s: &str) -> Result<Letters, Error> {
        let mut indices = Vec::with_capacity(s.len());

        for (position, character) in s.chars().enumerate() {
            match index_of(character) {
                Some(index) => indices.push(index as u8),
                None => return Err(Error::InvalidCharacter { character, position }),
            }
        }

        Ok(Letters::from_indices(indices))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn string(&self) -> String {
        self.indices.iter().map(|i| letter_at(*i as usize)).collect()
    }

    /// Shifts every letter backward by the matching key letter, cycling through
    /// the key once per letter.
    pub fn shift_back(&self, key: &Letters) -> Letters {
        let shifted = self.indices
            .iter()
            .zip(key.indices.iter().cycle())
            .map(|(c, k)| ((*c as usize + ALPHABET_LEN - *k as usize) % ALPHABET_LEN) as u8)
            .collect();

        Letters::from_indices(shifted)
    }

    pub fn shift_forward(&self, key: &Letters) -> Letters {
        let shifted = self.indices
            .iter()
            .zip(key.indices.iter().cycle())
            .map(|(c, k)| ((*c as usize + *k as usize) % ALPHABET_LEN) as u8)
            .collect();

        Letters::from_indices(shifted)
    }
}
