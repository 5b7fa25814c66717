use hashbrown::HashMap;

/// Word-frequency table that remembers first-appearance order.
///
/// The map gives O(1) amortized lookups; `order` holds each distinct word
/// exactly once, in the order its first occurrence was seen. Words compare
/// by exact byte sequence; no case folding, no punctuation stripping.
#[derive(Debug, Default)]
pub struct WordTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        for word in words {
            self.record(word);
        }
    }

    /// Distinct words with their counts, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|word| (word.as_str(), self.counts[word]))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total accepted tokens, i.e. the sum of all frequencies.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
