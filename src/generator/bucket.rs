//! Name buckets keyed by first letter.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// Shuffled names sharing a first letter, with separate cursors for first
/// and middle name picks.
#[derive(Debug, Clone)]
pub struct Bucket {
    items: Vec<String>,
    first: usize,
    middle: usize,
}

impl Bucket {
    /// `items` must not be empty.
    fn new(items: Vec<String>) -> Self {
        let middle = items.len() / 2;
        Self { items, first: 0, middle }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Next name from the first-name cursor, wrapping at the end.
    pub fn next_first(&mut self) -> &str {
        let idx = self.first;
        self.first = (self.first + 1) % self.items.len();
        &self.items[idx]
    }

    /// Next name from the middle-name cursor, wrapping at the end.
    pub fn next_middle(&mut self) -> &str {
        let idx = self.middle;
        self.middle = (self.middle + 1) % self.items.len();
        &self.items[idx]
    }
}

/// Buckets of names grouped by their uppercase first letter.
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    map: BTreeMap<char, Bucket>,
}

impl Buckets {
    /// Group `names` by first letter and shuffle every group.
    pub fn build<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Self {
        let mut groups: BTreeMap<char, Vec<String>> = BTreeMap::new();
        for name in names {
            if let Some(first) = name.chars().next() {
                groups.entry(first.to_ascii_uppercase()).or_default().push(name.clone());
            }
        }

        let map = groups
            .into_iter()
            .map(|(letter, mut items)| {
                items.shuffle(rng);
                (letter, Bucket::new(items))
            })
            .collect();
        Self { map }
    }

    /// Letters that have a bucket, in ascending order.
    pub fn letters(&self) -> Vec<char> {
        self.map.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, letter: char) -> Option<&Bucket> {
        self.map.get(&letter)
    }

    pub fn get_mut(&mut self, letter: char) -> Option<&mut Bucket> {
        self.map.get_mut(&letter)
    }

    /// Bucket for `letter`, or the next letter that has one (wrapping past Z).
    /// `None` only when there are no buckets at all.
    pub fn nearest_mut(&mut self, letter: char) -> Option<&mut Bucket> {
        let key = self
            .map
            .range(letter..)
            .next()
            .or_else(|| self.map.iter().next())
            .map(|(key, _)| *key)?;
        self.map.get_mut(&key)
    }
}
