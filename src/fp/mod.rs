pub mod builder;
pub mod combinations;
pub mod config;
pub mod frequency;
pub mod mining;
pub mod storage;
pub mod tree;
pub mod types;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use combinations::Combinations;
pub use config::{MinSupport, MiningConfig};
pub use frequency::FrequencyTable;
pub use mining::{fp_growth_algorithm, mine, mine_with_config};
pub use storage::{into_levels, FrequentLevel, ItemsetStorage};
pub use tree::{FPNode, FPTree};
pub use types::{Item, Itemset, Patterns, Support};
