use std::collections::VecDeque;

use keylist::{OrderedCollection, ReindexOrder};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(i32),
    InsertFirst(i32),
    RemoveFirst,
    RemoveLast,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Append),
        any::<i32>().prop_map(Op::InsertFirst),
        Just(Op::RemoveFirst),
        Just(Op::RemoveLast),
    ]
}

proptest! {
    #[test]
    fn prop_numeric_behaves_like_vecdeque(
        ops in prop::collection::vec(op_strategy(), 0..300)
    ) {
        let mut list = OrderedCollection::with_order(ReindexOrder::Numeric);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Append(v) => {
                    model.push_back(v);
                    prop_assert_eq!(list.append(v), model.len());
                }
                Op::InsertFirst(v) => {
                    model.push_front(v);
                    prop_assert_eq!(list.insert_first(v), model.len());
                }
                Op::RemoveFirst => {
                    prop_assert_eq!(list.remove_first(), model.pop_front());
                }
                Op::RemoveLast => {
                    prop_assert_eq!(list.remove_last(), model.pop_back());
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.validate_invariants().is_ok());
        }

        let items: Vec<i32> = list.iter().copied().collect();
        let expected: Vec<i32> = model.into_iter().collect();
        prop_assert_eq!(items, expected);
    }
}

proptest! {
    #[test]
    fn prop_lexicographic_keeps_layout_and_multiset(
        ops in prop::collection::vec(op_strategy(), 0..300)
    ) {
        let mut list = OrderedCollection::with_order(ReindexOrder::Lexicographic);
        let mut appended: Vec<i32> = Vec::new();
        let mut removed: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Append(v) => {
                    appended.push(v);
                    list.append(v);
                }
                Op::InsertFirst(v) => {
                    appended.push(v);
                    list.insert_first(v);
                }
                Op::RemoveFirst => removed.extend(list.remove_first()),
                Op::RemoveLast => removed.extend(list.remove_last()),
            }

            prop_assert!(list.validate_invariants().is_ok());
            let expected_keys: Vec<i64> = (0..list.len() as i64).collect();
            prop_assert_eq!(list.keys(), expected_keys);
        }

        // Order may be permuted, but nothing is lost or invented.
        let mut remaining: Vec<i32> = list.into_vec();
        remaining.extend(removed);
        remaining.sort_unstable();
        appended.sort_unstable();
        prop_assert_eq!(remaining, appended);
    }
}

proptest! {
    #[test]
    fn prop_map_filter_reduce_match_iterators(
        values in prop::collection::vec(-1000i64..1000, 0..100)
    ) {
        let list: OrderedCollection<i64> = values.iter().copied().collect();

        match list.map(|x, i| x * 3 + i as i64) {
            None => prop_assert!(values.is_empty()),
            Some(mapped) => {
                let expected: Vec<i64> = values
                    .iter()
                    .enumerate()
                    .map(|(i, x)| x * 3 + i as i64)
                    .collect();
                prop_assert_eq!(mapped.into_vec(), expected);
            }
        }

        match list.filter(|x| *x > 0) {
            None => prop_assert!(values.is_empty()),
            Some(filtered) => {
                let expected: Vec<i64> = values.iter().copied().filter(|x| *x > 0).collect();
                prop_assert_eq!(filtered.into_vec(), expected);
            }
        }

        let sum = list.reduce(|acc, x, _| acc + x, 0);
        if values.is_empty() {
            prop_assert_eq!(sum, None);
        } else {
            prop_assert_eq!(sum, Some(values.iter().sum::<i64>()));
        }

        prop_assert_eq!(list.into_vec(), values);
    }
}
