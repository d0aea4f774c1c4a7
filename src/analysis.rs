use crate::cipher::{self, CountMode, OffsetRule, DEFAULT_TOP_N};
use crate::error::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub key_length: usize,
    pub top_n: usize,
    pub count_mode: CountMode,
    pub offset_rule: OffsetRule,
}

impl Options {
    pub fn new(key_length: usize) -> Self {
        Self {
            key_length: key_length,
            top_n: DEFAULT_TOP_N,
            count_mode: CountMode::default(),
            offset_rule: OffsetRule::default(),
        }
    }
}

/// One ranked letter of a segment and the key letter it suggests.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub letter: char,
    pub count: usize,
    pub key_letter: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentAnalysis {
    pub position: usize,
    pub segment: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub top_n: usize,
    pub segments: Vec<SegmentAnalysis>,
    pub key: String,
    pub decoded: String,
}

fn analyze_segment(
    ciphertext: &str,
    position: usize,
    options: &Options,
) -> Result<SegmentAnalysis, Error> {
    let segment = cipher::segment(ciphertext, options.key_length, position)?;
    let ranked = cipher::top_frequent_letters_with(&segment, options.top_n, options.count_mode)?;

    let mut suggestions = Vec::with_capacity(ranked.len());
    for (letter, count) in ranked {
        let key_letter = cipher::infer_key_letter_with(letter, options.offset_rule)?;
        debug!(position, %letter, count, %key_letter, "ranked letter");
        suggestions.push(Suggestion { letter, count, key_letter });
    }

    Ok(SegmentAnalysis { position, segment, suggestions })
}

/// Infers one key letter per position from the most frequent letter of its
/// segment, then decodes the whole ciphertext with the assembled key.
pub fn analyze(ciphertext: &str, options: &Options) -> Result<Analysis, Error> {
    if options.key_length == 0 {
        return Err(Error::invalid_argument("key length must be at least 1"));
    }

    let len = cipher::validate(ciphertext, "ciphertext")?.len();
    if options.key_length > len {
        return Err(Error::invalid_argument(format!(
            "key length {} is outside 1..={}",
            options.key_length, len
        )));
    }

    let mut segments = Vec::with_capacity(options.key_length);
    let mut key = String::with_capacity(options.key_length);

    for position in 0..options.key_length {
        let analysis = analyze_segment(ciphertext, position, options)?;

        // segments are non-empty since key_length <= len
        if let Some(best) = analysis.suggestions.first() {
            key.push(best.key_letter);
        }

        segments.push(analysis);
    }

    info!(%key, "candidate key");
    let decoded = cipher::decode(ciphertext, &key)?;

    Ok(Analysis {
        top_n: options.top_n,
        segments: segments,
        key: key,
        decoded: decoded,
    })
}
