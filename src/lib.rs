//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into a prefix-sharing FP-tree ordered by
//! descending item frequency, then mined by recursively building conditional
//! trees for each item. See [`fp::mine`] for the entry point.

pub mod error;
pub mod fp;
pub mod transactions;

#[cfg(feature = "python")]
mod python;

pub use error::{Error, Result};
pub use fp::{mine, mine_with_config, MinSupport, MiningConfig, Patterns};
