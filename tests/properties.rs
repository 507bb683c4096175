//! Model-based property tests: both policies against a `VecDeque`.

mod common;

use std::collections::VecDeque;

use common::{assert_invariants, logical};
use proptest::prelude::*;
use ringdeque::{FixedRing, GrowableRing};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    PushFront(i32),
    Pop,
    PopFront,
    Clear,
    Extend(Vec<i32>),
    ExtendFront(Vec<i32>),
    Resize(usize),
    MakeContiguous,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        3 => any::<i32>().prop_map(Op::PushFront),
        3 => Just(Op::Pop),
        3 => Just(Op::PopFront),
        1 => Just(Op::Clear),
        1 => prop::collection::vec(any::<i32>(), 0..6).prop_map(Op::Extend),
        1 => prop::collection::vec(any::<i32>(), 0..6).prop_map(Op::ExtendFront),
        1 => (0usize..40).prop_map(Op::Resize),
        1 => Just(Op::MakeContiguous),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_growable_matches_deque(
        capacity in 0usize..6,
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut ring = GrowableRing::with_capacity(capacity);
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    ring.push(v).unwrap();
                    model.push_back(v);
                }
                Op::PushFront(v) => {
                    ring.push_front(v).unwrap();
                    model.push_front(v);
                }
                Op::Pop => {
                    prop_assert_eq!(ring.pop(), model.pop_back());
                }
                Op::PopFront => {
                    prop_assert_eq!(ring.pop_front(), model.pop_front());
                }
                Op::Clear => {
                    ring.clear();
                    model.clear();
                }
                Op::Extend(values) => {
                    ring.extend_from_slice(&values).unwrap();
                    model.extend(values.iter().copied());
                }
                Op::ExtendFront(values) => {
                    ring.extend_front_from_slice(&values).unwrap();
                    for v in values {
                        model.push_front(v);
                    }
                }
                Op::Resize(n) => {
                    let before = ring.capacity();
                    ring.resize(n).unwrap();
                    prop_assert_eq!(ring.capacity(), before.max(n));
                }
                Op::MakeContiguous => {
                    let run = ring.make_contiguous().to_vec();
                    prop_assert_eq!(ring.head(), 0);
                    prop_assert_eq!(run, model.iter().copied().collect::<Vec<_>>());
                }
            }
            assert_invariants(&ring);
            prop_assert_eq!(logical(&ring), model.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_fixed_matches_bounded_deque(
        capacity in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut ring = FixedRing::with_capacity(capacity);
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    let expected = if model.len() == capacity { model.pop_front() } else { None };
                    model.push_back(v);
                    prop_assert_eq!(ring.push(v), expected);
                }
                Op::PushFront(v) => {
                    let expected = if model.len() == capacity { model.pop_back() } else { None };
                    model.push_front(v);
                    prop_assert_eq!(ring.push_front(v), expected);
                }
                Op::Pop => {
                    prop_assert_eq!(ring.pop(), model.pop_back());
                }
                Op::PopFront => {
                    prop_assert_eq!(ring.pop_front(), model.pop_front());
                }
                Op::Clear => {
                    ring.clear();
                    model.clear();
                }
                Op::MakeContiguous => {
                    ring.make_contiguous();
                    prop_assert_eq!(ring.head(), 0);
                }
                // no growth operations on a fixed ring
                Op::Extend(_) | Op::ExtendFront(_) | Op::Resize(_) => {}
            }
            assert_invariants(&ring);
            prop_assert_eq!(ring.capacity(), capacity);
            prop_assert_eq!(logical(&ring), model.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_growth_never_reorders(values in prop::collection::vec(any::<i32>(), 1..200), pops in 0usize..50) {
        let mut ring = GrowableRing::new();
        let mut model = VecDeque::new();
        for (i, &v) in values.iter().enumerate() {
            ring.push(v).unwrap();
            model.push_back(v);
            if i < pops {
                prop_assert_eq!(ring.pop_front(), model.pop_front());
            }
        }
        prop_assert_eq!(ring.iter().copied().collect::<Vec<_>>(), model.into_iter().collect::<Vec<_>>());
    }
}
