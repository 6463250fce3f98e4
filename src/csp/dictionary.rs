//! The candidate word list.
//!
//! Words are deduplicated and kept in sorted order so that a [`WordId`] is a
//! stable index: the same list always produces the same ids, and therefore
//! the same search order.

use itertools::Itertools;

/// Index of a word in a [`Dictionary`].
pub type WordId = usize;

/// A sorted, deduplicated word list with per-word letter tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    words: Vec<String>,
    letters: Vec<Vec<char>>,
}

impl Dictionary {
    /// Builds a dictionary from any collection of words.
    ///
    /// Words are taken verbatim; duplicates collapse into one entry.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .sorted_unstable()
            .dedup()
            .collect_vec();
        let letters = words.iter().map(|w| w.chars().collect()).collect();

        Self { words, letters }
    }

    /// Parses a word list with one word per line.
    ///
    /// Surrounding whitespace is trimmed, blank lines are skipped and every
    /// word is upper-cased.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::new(
            input
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_uppercase),
        )
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[must_use]
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// The letters of the word with the given id.
    #[must_use]
    pub fn letters(&self, id: WordId) -> &[char] {
        &self.letters[id]
    }

    /// Letter `k` of word `id`, or `None` if the word is too short.
    #[must_use]
    pub fn letter(&self, id: WordId, k: usize) -> Option<char> {
        self.letters[id].get(k).copied()
    }

    /// Length of word `id` in letters.
    #[must_use]
    pub fn word_len(&self, id: WordId) -> usize {
        self.letters[id].len()
    }

    /// Looks up the id of `word`.
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
    }

    /// Whether `word` is in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    /// All words in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_deduplicated() {
        let d = Dictionary::new(["DOG", "CAT", "DOG", "ANT"]);

        assert_eq!(d.len(), 3);
        assert_eq!(d.iter().collect_vec(), vec!["ANT", "CAT", "DOG"]);
        assert_eq!(d.id_of("CAT"), Some(1));
        assert_eq!(d.id_of("COW"), None);
    }

    #[test]
    fn test_parse_normalizes() {
        let d = Dictionary::parse("  apple\nBanana\n\n  \ncherry  \napple\n");
        assert_eq!(d.iter().collect_vec(), vec!["APPLE", "BANANA", "CHERRY"]);
    }

    #[test]
    fn test_letters() {
        let d = Dictionary::new(["ÉTÉ", "AB"]);
        let id = d.id_of("ÉTÉ").unwrap();

        assert_eq!(d.word_len(id), 3);
        assert_eq!(d.letter(id, 0), Some('É'));
        assert_eq!(d.letter(id, 3), None);
        assert_eq!(d.letters(d.id_of("AB").unwrap()), &['A', 'B']);
    }

    #[test]
    fn test_empty() {
        let d = Dictionary::parse("");
        assert!(d.is_empty());
        assert!(!d.contains(""));
    }
}
