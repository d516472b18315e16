//! Shared fixtures for the keylist benchmarks.

use keylist::{OrderedCollection, ReindexOrder};

/// Collection holding `0..n` in order.
pub fn fill_collection(
    n: usize,
    order: ReindexOrder,
) -> OrderedCollection<i64> {
    let mut list = OrderedCollection::with_order(order);
    for i in 0..n as i64 {
        list.append(i);
    }
    list
}
