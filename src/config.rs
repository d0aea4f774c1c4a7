use crate::analysis::Options;
use crate::cipher::{CountMode, OffsetRule, DEFAULT_TOP_N};
use clap::{Args, Parser, Subcommand};
use regex::Regex;
use std::fs;
use std::path::PathBuf;

/// Ciphertext analyzed when no input is given.
pub const SAMPLE_CIPHERTEXT: &str = include_str!("../data/sample.txt");

pub const DEFAULT_KEY_LENGTH: usize = 4;

fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

fn parse_count_mode(s: &str) -> Result<CountMode, String> {
    s.parse::<CountMode>().map_err(|e| e.to_string())
}

fn parse_offset_rule(s: &str) -> Result<OffsetRule, String> {
    s.parse::<OffsetRule>().map_err(|e| e.to_string())
}

/// Frequency analysis of Vigenère ciphertext with a known key length
#[derive(Parser, Debug)]
#[command(
    name = "vigenere-freq",
    version,
    args_conflicts_with_subcommands = true,
    after_help = "\
Examples:
  vigenere-freq                                  Analyze the bundled sample ciphertext
  vigenere-freq analyze --file c.txt --key-length 6
  vigenere-freq decode --key NBAC --text WIEVHSMY

Analysis options given without a subcommand cannot be combined with one."
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "VIGENERE_LOG", default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Running without a subcommand analyzes.
    pub fn into_command(self) -> Command {
        match self.command {
            Some(command) => command,
            None => Command::Analyze(self.analyze),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank letters per key position and guess the key
    Analyze(AnalyzeArgs),
    /// Decrypt with a given key
    Decode(KeyedArgs),
    /// Encrypt with a given key
    Encrypt(KeyedArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input text (uppercase A-Z, whitespace is ignored)
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read input text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn load(&self) -> Result<String, failure::Error> {
        let raw = match (&self.text, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => SAMPLE_CIPHERTEXT.to_string(),
        };

        strip_whitespace(&raw)
    }
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of letters in the key
    #[arg(long, env = "VIGENERE_KEY_LENGTH", default_value_t = DEFAULT_KEY_LENGTH, value_parser = parse_positive)]
    pub key_length: usize,

    /// Number of ranked letters shown per segment
    #[arg(long, env = "VIGENERE_TOP", default_value_t = DEFAULT_TOP_N, value_parser = parse_positive)]
    pub top: usize,

    /// corrected or legacy (first occurrence counted as 0)
    #[arg(long, default_value = "corrected", value_parser = parse_count_mode)]
    pub count_mode: CountMode,

    /// absolute or modular
    #[arg(long, default_value = "absolute", value_parser = parse_offset_rule)]
    pub offset_rule: OffsetRule,
}

impl AnalyzeArgs {
    pub fn options(&self) -> Options {
        Options {
            key_length: self.key_length,
            top_n: self.top,
            count_mode: self.count_mode,
            offset_rule: self.offset_rule,
        }
    }
}

#[derive(Args, Debug)]
pub struct KeyedArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long)]
    pub key: String,
}

pub fn strip_whitespace(raw: &str) -> Result<String, failure::Error> {
    let re = Regex::new(r"\s+")?;
    Ok(re.replace_all(raw, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_analyze_sample() {
        let cli = Cli::try_parse_from(vec!["vigenere-freq"]).unwrap();
        assert_eq!(cli.log_level, "warn");

        match cli.into_command() {
            Command::Analyze(args) => {
                assert_eq!(args.options(), Options::new(4));
                assert_eq!(args.input.load().unwrap().len(), 778);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from(vec![
            "vigenere-freq", "analyze", "--text", "ABC DEF", "--key-length", "2",
            "--top", "5", "--count-mode", "legacy", "--offset-rule", "modular",
        ]).unwrap();

        match cli.into_command() {
            Command::Analyze(args) => {
                let options = args.options();
                assert_eq!(options.key_length, 2);
                assert_eq!(options.top_n, 5);
                assert_eq!(options.count_mode, CountMode::Legacy);
                assert_eq!(options.offset_rule, OffsetRule::Modular);
                assert_eq!(args.input.load().unwrap(), "ABCDEF");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_args() {
        assert!(Cli::try_parse_from(vec!["vigenere-freq", "--key-length", "0"]).is_err());
        assert!(Cli::try_parse_from(vec!["vigenere-freq", "--top", "x"]).is_err());
        assert!(Cli::try_parse_from(vec!["vigenere-freq", "--count-mode", "other"]).is_err());
        assert!(Cli::try_parse_from(vec!["vigenere-freq", "--text", "A", "--file", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(vec!["vigenere-freq", "decode"]).is_err());
    }

    #[test]
    fn test_top_level_args_rejected_with_subcommand() {
        let result = Cli::try_parse_from(vec!["vigenere-freq", "--text", "A", "decode", "--key", "B"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(vec!["vigenere-freq", "--key-length", "6", "analyze"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(vec!["vigenere-freq", "analyze", "--key-length", "6"]).unwrap();
        match cli.into_command() {
            Command::Analyze(args) => assert_eq!(args.options().key_length, 6),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_decode_args() {
        let cli = Cli::try_parse_from(vec![
            "vigenere-freq", "decode", "--log-level", "debug", "--key", "KEY", "--text", "RIJVSUYVJN",
        ]).unwrap();
        assert_eq!(cli.log_level, "debug");

        match cli.into_command() {
            Command::Decode(args) => {
                assert_eq!(args.key, "KEY");
                assert_eq!(args.input.load().unwrap(), "RIJVSUYVJN");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("AB C\nDE\r\n\tF ").unwrap(), "ABCDEF");
        assert_eq!(strip_whitespace("A-B").unwrap(), "A-B");
    }
}
