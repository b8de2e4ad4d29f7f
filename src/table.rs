use std::collections::BTreeMap;

/// One distinct word and how often it was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub count: usize,
}

/// Occurrence counts keyed by word text, iterated in ascending byte order.
///
/// Every entry has a count of at least one. The table is meant to be fed
/// by [`crate::count`] across any number of inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    words: BTreeMap<String, usize>,
}

impl FrequencyTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Count one more occurrence of `text`, inserting it on first sight.
    ///
    /// Empty text is ignored.
    pub fn record(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(count) = self.words.get_mut(text) {
            *count += 1;
        } else {
            self.words.insert(text.to_owned(), 1);
        }
    }

    /// Occurrences of `text`, if it was ever recorded.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<usize> {
        self.words.get(text).copied()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.words.values().sum()
    }

    /// Words in ascending order of their text.
    pub fn iter(&self) -> impl Iterator<Item = Word<'_>> {
        self.words.iter().map(|(text, &count)| Word { text, count })
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for text in iter {
            self.record(text);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
