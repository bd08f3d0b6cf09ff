use std::collections::{BTreeMap, HashMap};

use crate::fp::frequency::FrequencyTable;
use crate::fp::types::{Item, Support};

#[derive(Debug, Clone)]
pub struct FPNode<I: Item> {
    /// `None` only for the root of a top-level tree.
    pub item: Option<I>,
    pub count: Support,
    pub parent: Option<usize>,
    /// Next node carrying the same item, in insertion order.
    pub link: Option<usize>,
    pub children: BTreeMap<I, usize>,
}

/// First and last node of one item's occurrence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub head: usize,
    pub tail: usize,
}

/// Arena-backed FP-tree.
///
/// Nodes address each other by index into `nodes`; the parent slot owns its
/// children while `parent` and `link` are plain back/side references. A tree
/// also owns the frequency table it was built with.
#[derive(Debug, Clone)]
pub struct FPTree<I: Item> {
    pub nodes: Vec<FPNode<I>>,
    pub header_table: HashMap<I, HeaderEntry>,
    pub root_index: usize,
    pub(crate) frequent: FrequencyTable<I>,
}

impl<I: Item> FPNode<I> {
    pub fn new_root(item: Option<I>, count: Support) -> Self {
        Self {
            item,
            count,
            parent: None,
            link: None,
            children: BTreeMap::new(),
        }
    }

    pub fn new_item(item: I, count: Support, parent: Option<usize>) -> Self {
        Self {
            item: Some(item),
            count,
            parent,
            link: None,
            children: BTreeMap::new(),
        }
    }
}

impl<I: Item> Default for FPTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FPTree<I> {
    /// Empty top-level tree with no frequency table.
    pub fn new() -> Self {
        Self::with_root(None, 0.0, FrequencyTable::default())
    }

    /// Empty tree whose root carries `item` (a conditional tree) or nothing.
    pub fn with_root(item: Option<I>, count: Support, frequent: FrequencyTable<I>) -> Self {
        Self {
            nodes: vec![FPNode::new_root(item, count)],
            header_table: HashMap::new(),
            root_index: 0,
            frequent,
        }
    }

    pub fn root(&self) -> &FPNode<I> {
        &self.nodes[self.root_index]
    }

    /// Suffix item of a conditional tree.
    pub fn root_item(&self) -> Option<&I> {
        self.root().item.as_ref()
    }

    pub fn frequent(&self) -> &FrequencyTable<I> {
        &self.frequent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root is present.
    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }
}
