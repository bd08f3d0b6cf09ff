use super::types::{Item, Patterns, Support};

/// Flat storage for itemsets of one size with their supports.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<I: Item> {
    items: Vec<I>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<Support>,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel<I: Item> {
    pub(crate) storage: ItemsetStorage<I>,
    pub itemset_size: usize,
}

impl<I: Item> Default for ItemsetStorage<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> ItemsetStorage<I> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    /// Store a canonical itemset and return its index.
    pub fn add_itemset(&mut self, items: &[I], support: Support) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[I] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> Support {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl<I: Item> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: &[I], support: Support) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[I] {
        self.storage.get_itemset(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[I]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[I], Support)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.storage.support(idx)))
    }
}

/// Group a mining result by itemset size, sorted within each level.
///
/// Level `k - 1` holds the itemsets of size `k`; sizes with no itemsets get an
/// empty level so indices stay aligned.
pub fn into_levels<I: Item>(patterns: &Patterns<I>) -> Vec<FrequentLevel<I>> {
    let mut entries: Vec<(&Vec<I>, Support)> = patterns
        .iter()
        .map(|(itemset, &support)| (itemset, support))
        .collect();
    entries.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut levels: Vec<FrequentLevel<I>> = Vec::new();
    for (itemset, support) in entries {
        let size = itemset.len();
        if size == 0 {
            continue;
        }
        while levels.len() < size {
            levels.push(FrequentLevel::new(levels.len() + 1));
        }
        levels[size - 1].add_itemset(itemset, support);
    }
    levels
}
