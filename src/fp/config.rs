use crate::error::{Error, Result};
use crate::fp::types::Support;

/// Minimum support, either as a share of all transactions or as a count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    /// Fraction of the transaction count, in `[0, 1]`.
    Ratio(f64),
    /// Absolute support count.
    Count(Support),
}

impl MinSupport {
    /// Absolute count threshold for a dataset of `num_transactions`.
    pub fn min_count(&self, num_transactions: usize) -> Result<Support> {
        match *self {
            MinSupport::Ratio(ratio) => {
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(Error::InvalidSupport(ratio));
                }
                Ok(ratio * num_transactions as f64)
            }
            MinSupport::Count(count) => {
                if count.is_nan() || count < 0.0 {
                    return Err(Error::InvalidSupport(count));
                }
                Ok(count)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiningConfig {
    pub min_support: MinSupport,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Ratio(0.01),
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self { min_support }
    }

    pub fn with_min_support_ratio(mut self, ratio: f64) -> Self {
        self.min_support = MinSupport::Ratio(ratio);
        self
    }

    pub fn with_min_count(mut self, count: Support) -> Self {
        self.min_support = MinSupport::Count(count);
        self
    }
}
