use super::frequency::FrequencyTable;
use super::tree::FPTree;
use super::types::{Item, Support, WeightedTransaction};
use tracing::debug;

/// Build the top-level tree for unit-weight transactions.
pub fn build_fp_tree<I, T>(transactions: &[T], min_count: Support) -> FPTree<I>
where
    I: Item,
    T: AsRef<[I]>,
{
    build_tree(
        transactions.iter().map(|t| (t.as_ref(), 1.0)),
        min_count,
        None,
        0.0,
    )
}

/// Build the conditional tree of `suffix` from its weighted prefix paths.
pub fn build_conditional_fp_tree<I: Item>(
    prefix_paths: &[WeightedTransaction<I>],
    min_count: Support,
    suffix: I,
    suffix_count: Support,
) -> FPTree<I> {
    build_tree(
        prefix_paths
            .iter()
            .map(|(path, weight)| (path.as_slice(), *weight)),
        min_count,
        Some(suffix),
        suffix_count,
    )
}

/// Count, filter, then insert every transaction in frequency order.
pub fn build_tree<'a, I, W>(
    transactions: W,
    min_count: Support,
    root_item: Option<I>,
    root_count: Support,
) -> FPTree<I>
where
    I: Item + 'a,
    W: Iterator<Item = (&'a [I], Support)> + Clone,
{
    let frequent = FrequencyTable::from_weighted(transactions.clone(), min_count);
    let mut fp_tree = FPTree::with_root(root_item, root_count, frequent);

    let mut inserted = 0usize;
    for (items, weight) in transactions {
        let ordered = order_transaction(items, &fp_tree.frequent);
        if !ordered.is_empty() {
            fp_tree.insert_transaction(&ordered, weight);
            inserted += 1;
        }
    }

    debug!(
        root = ?fp_tree.root_item(),
        frequent_items = fp_tree.frequent.len(),
        transactions = inserted,
        nodes = fp_tree.nodes.len(),
        "built fp-tree"
    );

    fp_tree
}

/// Drop infrequent items and sort the rest by descending count, ties by
/// ascending item.
pub fn order_transaction<I: Item>(items: &[I], frequent: &FrequencyTable<I>) -> Vec<I> {
    let mut ordered: Vec<I> = items
        .iter()
        .filter(|item| frequent.contains(item))
        .cloned()
        .collect();

    ordered.sort_by(|a, b| frequent.insertion_order(a, b));
    ordered
}
