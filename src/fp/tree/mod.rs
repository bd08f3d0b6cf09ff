// Tree module - FP-Tree arena, header chains and traversal

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, HeaderEntry};
pub use tree_ops::Occurrences;
