//! Transaction sources: comma-delimited files and dense 0/1 matrices.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::ArrayView2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fp::types::Item;

/// Read one transaction per line, items separated by commas.
pub fn read_transactions(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let transactions = parse_transactions(BufReader::new(file)).map_err(io_err)?;

    debug!(path = %path.display(), transactions = transactions.len(), "read transactions");
    Ok(transactions)
}

/// Parse comma-delimited transactions.
///
/// Items are trimmed and empty fields dropped; blank lines are not
/// transactions. An item repeated within a line is kept once.
pub fn parse_transactions<R: BufRead>(reader: R) -> std::io::Result<Vec<Vec<String>>> {
    let mut transactions = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let mut seen = HashSet::new();
        let transaction: Vec<String> = line
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty() && seen.insert(*item))
            .map(str::to_owned)
            .collect();

        if !transaction.is_empty() {
            transactions.push(transaction);
        }
    }

    Ok(transactions)
}

/// Column indices of the non-zero cells of each row.
pub fn from_matrix(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}

/// Reorder the items of every transaction by descending global frequency.
/// Items of equal frequency keep their original relative order.
pub fn reorder_by_frequency<I: Item>(transactions: &[Vec<I>]) -> Vec<Vec<I>> {
    let mut frequency: HashMap<&I, usize> = HashMap::new();
    for item in transactions.iter().flatten() {
        *frequency.entry(item).or_insert(0) += 1;
    }

    transactions
        .iter()
        .map(|transaction| {
            let mut reordered = transaction.clone();
            // Stable sort keeps the original order on ties.
            reordered.sort_by(|a, b| frequency[b].cmp(&frequency[a]));
            reordered
        })
        .collect()
}
