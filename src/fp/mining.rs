use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::subset_patterns;
use super::config::MiningConfig;
use super::storage::{into_levels, FrequentLevel};
use super::tree::FPTree;
use super::types::{canonicalize, Item, Patterns, Support};
use crate::error::Result;
use crate::transactions::from_matrix;
use ndarray::ArrayView2;
use tracing::{debug, trace};

/// Mine every itemset whose support count is at least `min_count`.
///
/// `min_count` is absolute; a threshold of zero or less keeps every item that
/// occurs at all. The result maps sorted itemsets to their support counts.
pub fn mine<I, T>(transactions: &[T], min_count: Support) -> Patterns<I>
where
    I: Item,
    T: AsRef<[I]>,
{
    debug!(transactions = transactions.len(), min_count, "mining frequent itemsets");

    let fp_tree = build_fp_tree(transactions, min_count);
    let patterns = fp_tree.mine_patterns(min_count);

    debug!(patterns = patterns.len(), "mining finished");
    patterns
}

/// Resolve the configured minimum support against the transaction count, then
/// mine.
pub fn mine_with_config<I, T>(transactions: &[T], config: &MiningConfig) -> Result<Patterns<I>>
where
    I: Item,
    T: AsRef<[I]>,
{
    let min_count = config.min_support.min_count(transactions.len())?;
    Ok(mine(transactions, min_count))
}

/// Mine a dense 0/1 matrix (rows are transactions, columns are items) with a
/// relative minimum support, grouped by itemset size.
pub fn fp_growth_algorithm(
    transactions: ArrayView2<i32>,
    min_support: f64,
) -> Result<Vec<FrequentLevel<usize>>> {
    let transactions = from_matrix(transactions);
    let config = MiningConfig::default().with_min_support_ratio(min_support);
    let patterns = mine_with_config::<usize, _>(&transactions, &config)?;
    Ok(into_levels(&patterns))
}

impl<I: Item> FPTree<I> {
    /// Mine this tree. Patterns of a conditional tree include its suffix item.
    pub fn mine_patterns(&self, min_count: Support) -> Patterns<I> {
        self.mine_at_depth(min_count, 0)
    }

    fn mine_at_depth(&self, min_count: Support, depth: usize) -> Patterns<I> {
        if self.has_single_path() {
            self.generate_pattern_list()
        } else {
            let patterns = self.mine_sub_trees(min_count, depth);
            self.zip_patterns(patterns)
        }
    }

    /// Single-path case: every subset of the frequent items, supported by its
    /// least frequent member.
    fn generate_pattern_list(&self) -> Patterns<I> {
        let mut patterns = Patterns::new();
        let suffix = self.root_item();

        if let Some(item) = suffix {
            patterns.insert(vec![item.clone()], self.root().count);
        }

        let items = self.frequent.sorted_items();
        for (pattern, support) in subset_patterns(&items, suffix) {
            patterns.insert(pattern, support);
        }
        patterns
    }

    /// Branching case: mine the conditional tree of every frequent item,
    /// least frequent first, summing supports of coinciding patterns.
    fn mine_sub_trees(&self, min_count: Support, depth: usize) -> Patterns<I> {
        let mut patterns = Patterns::new();

        for (item, count) in self.frequent.mining_order() {
            let prefix_paths = self.conditional_transactions(&item);
            trace!(?item, count, paths = prefix_paths.len(), depth, "mining conditional tree");

            let subtree = build_conditional_fp_tree(&prefix_paths, min_count, item, count);
            for (pattern, support) in subtree.mine_at_depth(min_count, depth + 1) {
                *patterns.entry(pattern).or_insert(0.0) += support;
            }
        }
        patterns
    }

    /// Append the suffix of a conditional tree to every pattern and register
    /// the suffix on its own.
    fn zip_patterns(&self, patterns: Patterns<I>) -> Patterns<I> {
        let Some(suffix) = self.root_item() else {
            return patterns;
        };

        let mut zipped: Patterns<I> = patterns
            .into_iter()
            .map(|(mut pattern, support)| {
                pattern.push(suffix.clone());
                (canonicalize(pattern), support)
            })
            .collect();
        zipped.insert(vec![suffix.clone()], self.root().count);
        zipped
    }
}
