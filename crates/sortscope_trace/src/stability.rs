//! Stability checks through [`generate_with`](crate::generate_with).
//!
//! Sorting [`Tagged`] keys compares only the key, so the tags in the final
//! snapshot reveal whether equal keys kept their input order.

use std::cmp::Ordering;

/// Key with an identity tag that comparisons ignore
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    /// Sort key
    pub key: u32,
    /// Position in the original input
    pub tag: usize,
}

impl Tagged {
    /// Tag every key with its input index
    #[must_use]
    pub fn tag_keys(keys: &[u32]) -> Vec<Self> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Self { key, tag })
            .collect()
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// True when no two adjacent equal keys appear out of input order
#[must_use]
pub fn tie_order_kept(sorted: &[Tagged]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].key != w[1].key || w[0].tag < w[1].tag)
}
