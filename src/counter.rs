//! # Word Counter
//!
//! Counts normalized words from line-oriented input into an open addressing
//! [`Table`] and dumps the counts in bucket order.
//!
//! ```rust
//! use freq::WordCounter;
//!
//! let mut counter = WordCounter::new();
//! counter.count_reader(&b"the cat sat on the mat\n"[..]).unwrap();
//! assert_eq!(counter.count("the"), Some(2));
//! assert_eq!(counter.len(), 5);
//! ```

use std::io::{BufRead, Write};

use log::info;

use crate::cs::hashing::open_addressing::{Table, DEFAULT_MAX_LOAD_FACTOR};
use crate::cs::string::words;
use crate::error::{Error, Result};

/// Construction parameters for the counting table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreqConfig {
    /// Initial number of slots; zero selects the table default.
    pub initial_capacity: usize,
    /// Maximum load factor, in `(0, 1]`.
    pub load_factor: f64,
}

impl Default for FreqConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl FreqConfig {
    /// A config with the given initial capacity and load factor.
    pub fn new(initial_capacity: usize, load_factor: f64) -> Self {
        Self {
            initial_capacity,
            load_factor,
        }
    }

    /// Checks that the load factor is a finite number in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let alpha = self.load_factor;
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(Error::InvalidInput(format!(
                "load factor must be in (0, 1], got {}",
                alpha
            )));
        }
        Ok(())
    }
}

/// Word frequencies backed by an open addressing [`Table`].
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    table: Table,
    tokens: usize,
}

impl WordCounter {
    /// A counter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter with a validated configuration.
    pub fn with_config(config: FreqConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            table: Table::create(config.initial_capacity, config.load_factor),
            tokens: 0,
        })
    }

    /// Adds one occurrence of an already normalized word.
    pub fn add_word<K: AsRef<[u8]> + ?Sized>(&mut self, word: &K) {
        let current = self.table.lookup(word).unwrap_or(0);
        self.table.insert_or_update(word, current + 1);
        self.tokens += 1;
    }

    /// Counts every word of one line. Returns how many words were counted.
    pub fn add_line(&mut self, line: &[u8]) -> usize {
        let mut counted = 0;
        for word in words(line) {
            self.add_word(&word);
            counted += 1;
        }
        counted
    }

    /// Counts every line of `reader`. Returns how many words were counted.
    pub fn count_reader<R: BufRead>(&mut self, mut reader: R) -> Result<usize> {
        let mut line = Vec::new();
        let mut counted = 0;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            counted += self.add_line(&line);
        }
        info!(
            "counted {} words, {} distinct, table capacity {}",
            counted,
            self.table.len(),
            self.table.capacity()
        );
        Ok(counted)
    }

    /// The count of `word`, if it was ever seen.
    pub fn count<K: AsRef<[u8]> + ?Sized>(&self, word: &K) -> Option<u64> {
        self.table.lookup(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no word has been counted.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Total number of words counted so far.
    pub fn total(&self) -> usize {
        self.tokens
    }

    /// The table holding the counts.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Writes `<word> <count>` lines in bucket order, words as their raw bytes.
    pub fn write_counts<W: Write>(&self, out: &mut W) -> Result<()> {
        self.table.write_to(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;
    use std::collections::HashMap;

    fn counts_of(input: &str) -> WordCounter {
        let mut counter = WordCounter::new();
        counter.count_reader(input.as_bytes()).unwrap();
        counter
    }

    fn dump(counter: &WordCounter) -> String {
        let mut out = Vec::new();
        counter.write_counts(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_the_cat_sat_on_the_mat() {
        let counter = counts_of("the cat sat on the mat");
        assert_eq!(counter.total(), 6);
        assert_eq!(counter.len(), 5);
        assert_eq!(counter.count("the"), Some(2));
        for word in ["cat", "sat", "on", "mat"] {
            assert_eq!(counter.count(word), Some(1), "{}", word);
        }
    }

    #[test]
    fn test_normalization_merges_case_and_punctuation() {
        let counter = counts_of("Hello, world! hello WORLD.");
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.count("hello"), Some(2));
        assert_eq!(counter.count("world"), Some(2));
        assert_eq!(counter.count("Hello,"), None);
    }

    #[test]
    fn test_punctuation_only_input() {
        let counter = counts_of("... !!! ---\n\n");
        assert!(counter.is_empty());
        assert_eq!(counter.total(), 0);
        assert_eq!(dump(&counter), "");
    }

    #[test]
    fn test_multiple_lines_and_missing_final_newline() {
        let counter = counts_of("one two\r\ntwo three\nthree three");
        assert_eq!(counter.count("one"), Some(1));
        assert_eq!(counter.count("two"), Some(2));
        assert_eq!(counter.count("three"), Some(3));
    }

    #[test]
    fn test_binary_garbage_is_tolerated() {
        let mut counter = WordCounter::new();
        let counted = counter
            .count_reader(&b"\x00\xff abc\xfe\x80def \xc3\x28 ok\n"[..])
            .unwrap();
        assert_eq!(counted, 2);
        assert_eq!(counter.count(b"abc\xfe\x80def"), Some(1));
        assert_eq!(counter.count("ok"), Some(1));
    }

    #[test]
    fn test_words_differing_in_invalid_bytes_are_counted_apart() {
        let mut counter = WordCounter::new();
        counter.count_reader(&b"ab\xffcd ab\xfecd\n"[..]).unwrap();

        assert_eq!(counter.len(), 2);
        assert_eq!(counter.count(b"ab\xffcd"), Some(1));
        assert_eq!(counter.count(b"ab\xfecd"), Some(1));

        let mut out = Vec::new();
        counter.write_counts(&mut out).unwrap();
        let mut lines: Vec<&[u8]> = out.split(|&b| b == b'\n').filter(|l| !l.is_empty()).collect();
        lines.sort();
        assert_eq!(lines, vec![&b"ab\xfecd 1"[..], &b"ab\xffcd 1"[..]]);
    }

    #[test]
    fn test_dump_format() {
        let counter = counts_of("b a b");
        let text = dump(&counter);

        let mut seen = HashMap::new();
        for line in text.lines() {
            let (word, count) = line.split_once(' ').unwrap();
            seen.insert(word.to_string(), count.parse::<u64>().unwrap());
        }
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 2);
        assert_eq!(seen["a"], 1);
        assert_eq!(seen["b"], 2);

        let in_table_order: Vec<String> = counter.table().iter().map(|e| e.to_string()).collect();
        assert_eq!(text, format!("{}\n", in_table_order.join("\n")));
    }

    #[test]
    fn test_many_words_grow_the_table() {
        logging::initialize_for_tests();

        let mut counter = WordCounter::with_config(FreqConfig::new(1, 0.5)).unwrap();
        for i in 0..1000 {
            counter.add_line(format!("word{} Word{}!", i, i).as_bytes());
        }
        assert_eq!(counter.len(), 1000);
        assert_eq!(counter.total(), 2000);
        assert!(counter.table().capacity() >= 2000);
        assert_eq!(counter.count("word999"), Some(2));
    }

    #[test]
    fn test_config_validation() {
        assert!(FreqConfig::default().validate().is_ok());
        assert!(FreqConfig::new(8, 1.0).validate().is_ok());

        for alpha in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let err = WordCounter::with_config(FreqConfig::new(8, alpha)).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{}", alpha);
        }
    }

    #[test]
    fn test_with_config_uses_capacity() {
        let counter = WordCounter::with_config(FreqConfig::new(64, 0.75)).unwrap();
        assert_eq!(counter.table().capacity(), 64);
        assert_eq!(counter.table().max_load_factor(), 0.75);

        let counter = WordCounter::with_config(FreqConfig::default()).unwrap();
        assert_eq!(counter.table().capacity(), 16);
    }
}
