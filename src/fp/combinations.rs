use super::types::{canonicalize, Item, Itemset, Support};

/// Lexicographic k-combinations of the indices `0..n`.
///
/// Combinations are produced one at a time so large item universes are never
/// materialized; `reset` rewinds to the first combination.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            exhausted: k == 0 || k > n,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.n, self.k);
    }

    fn advance(&mut self) {
        let (n, k) = (self.n, self.k);

        // Rightmost position that can still move forward.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            self.exhausted = true;
            return;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

/// Every non-empty subset of `items`, each extended with `suffix` when given,
/// supported by the smallest count among the chosen items.
pub fn subset_patterns<'a, I: Item>(
    items: &'a [(I, Support)],
    suffix: Option<&'a I>,
) -> impl Iterator<Item = (Itemset<I>, Support)> + 'a {
    (1..=items.len())
        .flat_map(move |k| Combinations::new(items.len(), k))
        .map(move |combination| {
            let mut pattern = Vec::with_capacity(combination.len() + 1);
            let mut support = Support::INFINITY;

            for idx in combination {
                let (item, count) = &items[idx];
                pattern.push(item.clone());
                support = support.min(*count);
            }
            pattern.extend(suffix.cloned());

            (canonicalize(pattern), support)
        })
}
