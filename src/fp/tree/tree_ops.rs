use super::tree::{FPNode, FPTree, HeaderEntry};
use crate::fp::types::{Item, Support, WeightedTransaction};

/// Walks one item's occurrence chain, yielding node indices.
pub struct Occurrences<'a, I: Item> {
    tree: &'a FPTree<I>,
    next: Option<usize>,
}

impl<'a, I: Item> Iterator for Occurrences<'a, I> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.tree.nodes[current].link;
        Some(current)
    }
}

impl<I: Item> FPTree<I> {
    /// Insert an already filtered and ordered transaction below the root.
    ///
    /// Shared prefixes gain `weight`; the remainder becomes a new branch whose
    /// nodes are appended to their items' occurrence chains.
    pub fn insert_transaction(&mut self, transaction: &[I], weight: Support) {
        let mut current_index = self.root_index;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item.clone(), weight, Some(current_index)));
                self.nodes[current_index]
                    .children
                    .insert(item.clone(), new_index);
                self.link_occurrence(item, new_index);
                current_index = new_index;
            }
        }
    }

    fn link_occurrence(&mut self, item: &I, node_index: usize) {
        match self.header_table.get_mut(item) {
            Some(entry) => {
                self.nodes[entry.tail].link = Some(node_index);
                entry.tail = node_index;
            }
            None => {
                self.header_table.insert(
                    item.clone(),
                    HeaderEntry {
                        head: node_index,
                        tail: node_index,
                    },
                );
            }
        }
    }

    pub fn occurrences(&self, item: &I) -> Occurrences<'_, I> {
        Occurrences {
            tree: self,
            next: self.header_table.get(item).map(|entry| entry.head),
        }
    }

    /// Sum of counts over every occurrence of `item`.
    pub fn support(&self, item: &I) -> Support {
        self.occurrences(item)
            .map(|idx| self.nodes[idx].count)
            .sum()
    }

    /// Ancestor items of every occurrence of `item`, innermost first and
    /// excluding the root, each weighted by the occurrence's count.
    ///
    /// Occurrences hanging directly off the root produce no path.
    pub fn conditional_transactions(&self, item: &I) -> Vec<WeightedTransaction<I>> {
        self.occurrences(item)
            .filter_map(|idx| {
                let node = &self.nodes[idx];
                let mut path = Vec::new();
                let mut current = node.parent;

                while let Some(i) = current {
                    if i == self.root_index {
                        break;
                    }
                    if let Some(ancestor) = &self.nodes[i].item {
                        path.push(ancestor.clone());
                    }
                    current = self.nodes[i].parent;
                }

                (!path.is_empty()).then_some((path, node.count))
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let current_node = &self.nodes[current_index];

            match current_node.children.len() {
                0 => return true,
                1 => {
                    current_index = match current_node.children.values().next() {
                        Some(&child) => child,
                        None => return true,
                    };
                }
                _ => return false,
            }
        }
    }

    /// Items and counts along the path below the root, top-down. Stops at the
    /// first branching node.
    pub fn single_path(&self) -> Vec<(I, Support)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while self.nodes[current_index].children.len() == 1 {
            let Some(&child_index) = self.nodes[current_index].children.values().next() else {
                break;
            };
            let child_node = &self.nodes[child_index];
            if let Some(item) = &child_node.item {
                path.push((item.clone(), child_node.count));
            }
            current_index = child_index;
        }
        path
    }
}
