//! Search variants
//!
//! Both variants forbid a word from repeating within one chain. They differ
//! in whether a word offered to one branch may still be offered to another.

use std::fmt;

/// How the search treats words already offered to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Only repeats within the same chain are forbidden (default)
    ///
    /// A word may be reached through several parent chains, so the search
    /// is thorough at the cost of a larger frontier.
    #[default]
    PerPath,
    /// Every word is offered at most once across the whole search
    ///
    /// Runs against a search-local working copy of the lexicon: the start
    /// word and each pushed candidate are removed from it. The caller's
    /// lexicon is never touched.
    Consuming,
}

impl SearchMode {
    /// Create a mode from its name
    ///
    /// Supported names: "per-path", "consuming" (or "global").
    /// Defaults to per-path if the name is unrecognized.
    ///
    /// # Examples
    /// ```
    /// use wordchain::solver::SearchMode;
    ///
    /// assert_eq!(SearchMode::from_name("consuming"), SearchMode::Consuming);
    /// assert_eq!(SearchMode::from_name("anything"), SearchMode::PerPath);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "consuming" | "global" => Self::Consuming,
            _ => Self::PerPath,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PerPath => "per-path",
            Self::Consuming => "consuming",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips() {
        for mode in [SearchMode::PerPath, SearchMode::Consuming] {
            assert_eq!(SearchMode::from_name(mode.name()), mode);
        }
    }

    #[test]
    fn global_is_an_alias() {
        assert_eq!(SearchMode::from_name("global"), SearchMode::Consuming);
    }

    #[test]
    fn default_is_per_path() {
        assert_eq!(SearchMode::default(), SearchMode::PerPath);
        assert_eq!(SearchMode::default().to_string(), "per-path");
    }
}
