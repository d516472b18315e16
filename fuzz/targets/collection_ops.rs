#![no_main]

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use keylist::{OrderedCollection, ReindexOrder};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(u16),
    AppendArgs(Vec<u16>),
    InsertFirst(u16),
    InsertFirstArgs(Vec<u16>),
    RemoveFirst,
    RemoveFirstTruthy,
    RemoveLast,
}

#[derive(Debug, Arbitrary)]
struct Input {
    order: ReindexOrder,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut list = OrderedCollection::with_order(input.order);
    // Only tracks contents exactly under numeric ordering.
    let mut model: VecDeque<u16> = VecDeque::new();
    let numeric = input.order == ReindexOrder::Numeric;

    for op in input.ops {
        match op {
            Op::Append(v) => {
                list.append(v);
                model.push_back(v);
            }
            Op::AppendArgs(args) => {
                if args.len() == 1 {
                    model.push_back(args[0]);
                }
                assert_eq!(list.append_args(args), model.len());
            }
            Op::InsertFirst(v) => {
                list.insert_first(v);
                model.push_front(v);
            }
            Op::InsertFirstArgs(args) => {
                if args.len() == 1 {
                    model.push_front(args[0]);
                }
                assert_eq!(list.insert_first_args(args), model.len());
            }
            Op::RemoveFirst => {
                let got = list.remove_first();
                let expected = model.pop_front();
                if numeric {
                    assert_eq!(got, expected);
                }
            }
            Op::RemoveFirstTruthy => {
                let front_truthy = list.first().is_some_and(|v| *v != 0);
                let got = list.remove_first_truthy();
                assert_eq!(got.is_some(), front_truthy);
                if got.is_some() {
                    let expected = model.pop_front();
                    if numeric {
                        assert_eq!(got, expected);
                    }
                }
            }
            Op::RemoveLast => {
                let got = list.remove_last();
                let expected = model.pop_back();
                if numeric {
                    assert_eq!(got, expected);
                }
            }
        }

        assert_eq!(list.len(), model.len());
        assert!(list.validate_invariants().is_ok());
    }

    if numeric {
        assert!(list.iter().eq(model.iter()));
    }
});
