use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as an item identifier.
///
/// The total order breaks frequency ties when sorting transactions and keeps
/// pattern keys canonical.
pub trait Item: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Item for T {}

pub type Support = f64;

/// Sorted, duplicate-free item set.
pub type Itemset<I> = Vec<I>;

/// Mining result: itemset -> absolute support count.
pub type Patterns<I> = HashMap<Itemset<I>, Support>;

/// A transaction with the weight it contributes to every count.
pub type WeightedTransaction<I> = (Vec<I>, Support);

/// Sort and dedup an itemset so that equal sets share one key.
pub fn canonicalize<I: Item>(mut items: Vec<I>) -> Itemset<I> {
    items.sort_unstable();
    items.dedup();
    items
}
