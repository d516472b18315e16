//! Key compaction for [`OrderedCollection`](super::OrderedCollection).
//!
//! Front operations leave the key set with a hole at `0` or an extra key at
//! `-1`. Reindexing sorts the surviving keys and renumbers them `0..n`,
//! which restores the contiguous layout the rest of the collection relies
//! on.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Ordering applied to storage keys while reindexing.
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReindexOrder {
    /// Keys compare as integers: `-1 < 0 < 1 < 2 < 10`.
    #[default]
    Numeric,
    /// Keys compare by their decimal string: `"-1" < "0" < "1" < "10" < "2"`.
    ///
    /// Element order is only preserved while every key has a single digit.
    Lexicographic,
}

impl ReindexOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            ReindexOrder::Numeric => "numeric",
            ReindexOrder::Lexicographic => "lexicographic",
        }
    }
}

impl fmt::Display for ReindexOrder {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the keys of `storage` sorted by `order`.
pub(crate) fn sorted_keys<T>(
    storage: &FxHashMap<i64, T>,
    order: ReindexOrder,
) -> Vec<i64> {
    let mut keys: Vec<i64> = storage.keys().copied().collect();
    match order {
        ReindexOrder::Numeric => keys.sort_unstable(),
        // Render every key once instead of on each comparison.
        ReindexOrder::Lexicographic => keys.sort_by_cached_key(|k| k.to_string()),
    }
    keys
}

/// Renumbers `storage` to `0..n` following `order` and returns `n`.
pub(crate) fn reindex<T>(
    storage: &mut FxHashMap<i64, T>,
    order: ReindexOrder,
) -> usize {
    let keys = sorted_keys(storage, order);
    let mut compacted = FxHashMap::with_capacity_and_hasher(keys.len(), Default::default());

    for (new_key, old_key) in keys.into_iter().enumerate() {
        if let Some(item) = storage.remove(&old_key) {
            compacted.insert(new_key as i64, item);
        }
    }

    *storage = compacted;
    tracing::trace!(keys = storage.len(), order = %order, "reindexed storage");
    storage.len()
}
