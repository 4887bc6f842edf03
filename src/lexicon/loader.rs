//! Word list loading utilities
//!
//! Builds lexicons from newline-delimited word lists, either read from a file
//! or taken from the embedded default list.

use super::{DEFAULT_WORDS, Lexicon, LexiconConfig};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse a newline-delimited word list
///
/// One word per line. Lines are trimmed; blank lines and lines starting with
/// `#` are ignored. Words that are not purely alphabetic or fall outside the
/// configured length bounds are skipped.
///
/// # Examples
/// ```
/// use wordchain::lexicon::{LexiconConfig, loader::parse_word_list};
///
/// let text = "# small list\nBad\nbade\n\nox\nbread\n";
/// let lexicon = parse_word_list(text, LexiconConfig::with_max_len(4));
/// assert_eq!(lexicon.sorted_words(), ["bad", "bade"]);
/// ```
#[must_use]
pub fn parse_word_list(text: &str, config: LexiconConfig) -> Lexicon {
    let words = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    Lexicon::with_config(words, config)
}

/// Load a lexicon from a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordchain::lexicon::{LexiconConfig, loader::load_from_file};
///
/// let lexicon = load_from_file("data/words.txt", LexiconConfig::default()).unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, config: LexiconConfig) -> io::Result<Lexicon> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lexicon = parse_word_list(&content, config);

    debug!(path = %path.display(), words = lexicon.len(), "loaded word list");
    Ok(lexicon)
}

/// Build a lexicon from an embedded string slice
///
/// # Examples
/// ```
/// use wordchain::lexicon::{DEFAULT_WORDS, LexiconConfig, loader::lexicon_from_slice};
///
/// let lexicon = lexicon_from_slice(DEFAULT_WORDS, LexiconConfig::default());
/// assert_eq!(lexicon.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str], config: LexiconConfig) -> Lexicon {
    Lexicon::with_config(slice.iter().copied(), config)
}

/// The embedded default lexicon
#[must_use]
pub fn default_lexicon(config: LexiconConfig) -> Lexicon {
    lexicon_from_slice(DEFAULT_WORDS, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "#header\n\nbad\n  bat  \n# bid\ncat\n";
        let lexicon = parse_word_list(text, LexiconConfig::default());
        assert_eq!(lexicon.sorted_words(), ["bad", "bat", "cat"]);
    }

    #[test]
    fn parse_lowercases_and_dedupes() {
        let lexicon = parse_word_list("BAD\nbad\nBaD\n", LexiconConfig::default());
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.is_word("bad"));
    }

    #[test]
    fn parse_applies_length_bounds() {
        let text = "at\ncat\nlimbo\nincomprehensibilities\n";
        let lexicon = parse_word_list(text, LexiconConfig::default());
        assert_eq!(lexicon.sorted_words(), ["cat", "limbo"]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse_word_list("", LexiconConfig::default()).is_empty());
    }

    #[test]
    fn load_missing_file_errors() {
        let result = load_from_file("does/not/exist.txt", LexiconConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn load_round_trips_through_file() {
        let path = std::env::temp_dir().join(format!("wordchain-loader-{}.txt", std::process::id()));
        fs::write(&path, "# test\nbad\nbade\nscad\n").unwrap();

        let lexicon = load_from_file(&path, LexiconConfig::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lexicon.sorted_words(), ["bad", "bade", "scad"]);
    }

    #[test]
    fn default_lexicon_respects_max_len() {
        let lexicon = default_lexicon(LexiconConfig::with_max_len(3));
        assert!(!lexicon.is_empty());
        assert!(lexicon.iter().all(|w| w.len() == 3));
    }
}
