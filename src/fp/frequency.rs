use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{Item, Support};

/// Per-item support counts restricted to items meeting a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<I: Item> {
    counts: HashMap<I, Support>,
}

impl<I: Item> Default for FrequencyTable<I> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<I: Item> FrequencyTable<I> {
    /// Count every item over unit-weight transactions and keep those with a
    /// count of at least `threshold`.
    pub fn from_transactions<T>(transactions: &[T], threshold: Support) -> Self
    where
        T: AsRef<[I]>,
    {
        Self::from_weighted(transactions.iter().map(|t| (t.as_ref(), 1.0)), threshold)
    }

    pub fn from_weighted<'a, W>(transactions: W, threshold: Support) -> Self
    where
        I: 'a,
        W: IntoIterator<Item = (&'a [I], Support)>,
    {
        let mut counts: HashMap<I, Support> = HashMap::new();

        for (items, weight) in transactions {
            for item in items {
                *counts.entry(item.clone()).or_insert(0.0) += weight;
            }
        }

        counts.retain(|_, count| *count >= threshold);
        Self { counts }
    }

    pub fn get(&self, item: &I) -> Option<Support> {
        self.counts.get(item).copied()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.counts.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&I, Support)> {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// Tree insertion order: descending count, ties by ascending item.
    pub fn insertion_order(&self, a: &I, b: &I) -> Ordering {
        let (ca, cb) = (self.counts[a], self.counts[b]);
        cb.total_cmp(&ca).then_with(|| a.cmp(b))
    }

    /// Frequent items in mining order: ascending count, ties by ascending item.
    pub fn mining_order(&self) -> Vec<(I, Support)> {
        let mut items: Vec<(I, Support)> = self
            .counts
            .iter()
            .map(|(item, &count)| (item.clone(), count))
            .collect();

        items.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        items
    }

    /// Frequent items sorted by item, for deterministic subset enumeration.
    pub fn sorted_items(&self) -> Vec<(I, Support)> {
        let mut items: Vec<(I, Support)> = self
            .counts
            .iter()
            .map(|(item, &count)| (item.clone(), count))
            .collect();

        items.sort_by(|a, b| a.0.cmp(&b.0));
        items
    }
}
