//! Edit-distance heuristic between words
//!
//! Estimates how many single-letter edits (replace, insert, delete) separate
//! two words. Only length differences of 0 or 1 are scored precisely; anything
//! further apart gets [`UNREACHABLE_DISTANCE`].

use rustc_hash::FxHashMap;

/// Distance reported for words whose lengths differ by two or more
pub const UNREACHABLE_DISTANCE: usize = 100;

/// Estimate the number of single-letter edits between `a` and `b`
///
/// # Algorithm
/// - Equal lengths: Hamming distance (mismatched positions)
/// - Lengths differ by 2 or more: [`UNREACHABLE_DISTANCE`]
/// - Lengths differ by exactly 1: delete each letter of the longer word in
///   turn, score the result against the shorter word, take the minimum and
///   add 1 for the deletion
///
/// The longer word is always the one reduced, whichever argument it arrives
/// in, so the result is symmetric: `word_distance(a, b) == word_distance(b, a)`.
///
/// # Examples
/// ```
/// use wordchain::core::word_distance;
///
/// assert_eq!(word_distance("dog", "dot"), 1);
/// assert_eq!(word_distance("dog", "goat"), 3);
/// assert_eq!(word_distance("cat", "scad"), 2);
/// ```
#[must_use]
pub fn word_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());

    if a.len() == b.len() {
        return hamming(a, b);
    }

    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };

    if longer.len() - shorter.len() >= 2 {
        return UNREACHABLE_DISTANCE;
    }

    let mut reduced = Vec::with_capacity(shorter.len());
    let mut smallest = UNREACHABLE_DISTANCE;

    for skip in 0..longer.len() {
        reduced.clear();
        reduced.extend_from_slice(&longer[..skip]);
        reduced.extend_from_slice(&longer[skip + 1..]);
        smallest = smallest.min(hamming(&reduced, shorter));
    }

    smallest + 1
}

/// Count mismatched positions between equal-length byte strings
#[inline]
fn hamming(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Memoised [`word_distance`] to one fixed target
///
/// A search scores the same word many times as different branches reach
/// it; the memo lives for one search and is keyed by word alone.
#[derive(Debug, Default)]
pub struct DistanceMemo {
    target: String,
    cache: FxHashMap<String, usize>,
    hits: usize,
}

impl DistanceMemo {
    #[must_use]
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Distance from `word` to the target, computed once per word
    ///
    /// Only a cache miss allocates.
    pub fn distance(&mut self, word: &str) -> usize {
        if let Some(&cached) = self.cache.get(word) {
            self.hits += 1;
            return cached;
        }

        let distance = word_distance(word, &self.target);
        self.cache.insert(word.to_owned(), distance);
        distance
    }

    /// Number of distinct words scored
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of lookups answered from the cache
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_words_have_zero_distance() {
        for word in ["bat", "scad", "limbo", "a"] {
            assert_eq!(word_distance(word, word), 0);
        }
    }

    #[test]
    fn same_length_is_hamming() {
        assert_eq!(word_distance("dog", "dot"), 1);
        assert_eq!(word_distance("dog", "cat"), 3);
        assert_eq!(word_distance("bade", "bald"), 2);
    }

    #[test]
    fn first_word_shorter() {
        assert_eq!(word_distance("dog", "goat"), 3);
    }

    #[test]
    fn first_word_longer() {
        assert_eq!(word_distance("goat", "dog"), 3);
    }

    #[test]
    fn one_letter_insertion() {
        assert_eq!(word_distance("bad", "bade"), 1);
        assert_eq!(word_distance("cad", "scad"), 1);
        assert_eq!(word_distance("bad", "bald"), 1);
    }

    #[test]
    fn two_letters_apart_is_unreachable() {
        assert_eq!(word_distance("bat", "bread"), UNREACHABLE_DISTANCE);
        assert_eq!(word_distance("limbo", "tao"), UNREACHABLE_DISTANCE);
    }

    #[test]
    fn symmetric_for_all_length_cases() {
        let pairs = [
            ("bat", "cat"),
            ("dog", "goat"),
            ("scad", "bat"),
            ("bade", "bid"),
            ("limb", "limbo"),
            ("tao", "taco"),
            ("bat", "bread"),
        ];
        for (a, b) in pairs {
            assert_eq!(word_distance(a, b), word_distance(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn memo_matches_direct_computation() {
        let mut memo = DistanceMemo::new("scad");
        assert_eq!(memo.target(), "scad");
        assert_eq!(memo.distance("bat"), word_distance("bat", "scad"));
        assert_eq!(memo.distance("bad"), 2);
        assert_eq!(memo.len(), 2);
        assert_eq!(memo.hits(), 0);
    }

    #[test]
    fn memo_reuses_words() {
        let mut memo = DistanceMemo::new("scad");
        memo.distance("cad");
        memo.distance("cad");
        memo.distance("cad");
        assert_eq!(memo.len(), 1);
        assert_eq!(memo.hits(), 2);
    }
}
