//! Property-based tests for tree labeling and the state computation laws.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated trees and states.

use proptest::prelude::*;
use treelabel::core::{advance, bind, unit, Label, StateComputation, Tree};
use treelabel::labeling::{
    composed, direct, label, label_with, LabelOptions, Strategy as LabelStrategy,
};
use treelabel::notation;

fn arbitrary_tree() -> impl Strategy<Value = Tree<u8>> {
    let leaf = any::<u8>().prop_map(Tree::leaf);
    leaf.prop_recursive(8, 64, 2, |inner| {
        (
            any::<u8>(),
            prop::option::of(inner.clone()),
            prop::option::of(inner),
        )
            .prop_map(|(payload, left, right)| Tree::node(payload, left, right))
    })
}

prop_compose! {
    fn arbitrary_name_tree()(tree in arbitrary_tree()) -> Tree<String> {
        tree.map(|n| format!("n{n}"))
    }
}

/// Collect (payload, has_left, has_right) per node in pre-order.
fn shape<T: Clone>(tree: &Tree<T>) -> Vec<(T, bool, bool)> {
    let mut out = vec![(
        tree.payload().clone(),
        tree.left().is_some(),
        tree.right().is_some(),
    )];
    if let Some(left) = tree.left() {
        out.extend(shape(left));
    }
    if let Some(right) = tree.right() {
        out.extend(shape(right));
    }
    out
}

fn step(amount: i32) -> impl Fn(i32) -> StateComputation<i32, i32> {
    move |x| StateComputation::new(move |s: i32| (s.wrapping_mul(3).wrapping_add(amount), x ^ s))
}

fn tag(x: i32) -> StateComputation<i32, String> {
    StateComputation::new(move |s: i32| (s.wrapping_sub(x), format!("{x}:{s}")))
}

proptest! {
    #[test]
    fn labels_follow_preorder(tree in arbitrary_tree()) {
        let labeled = label(tree);
        let labels: Vec<Label> = labeled.preorder().map(|(label, _)| *label).collect();
        let expected: Vec<Label> = (0..labels.len()).collect();

        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn labeling_preserves_structure(tree in arbitrary_tree()) {
        let labeled = label(tree.clone());
        let stripped = labeled.map(|(_, payload)| *payload);

        prop_assert_eq!(shape(&stripped), shape(&tree));
        prop_assert_eq!(stripped, tree);
    }

    #[test]
    fn strategies_are_equivalent(tree in arbitrary_tree(), start in 0usize..1_000_000) {
        let (direct_tree, direct_next) = direct::label_from(tree.clone(), start);
        let (composed_next, composed_tree) = composed::labeled(tree).run(start);

        prop_assert_eq!(direct_tree, composed_tree);
        prop_assert_eq!(direct_next, composed_next);
    }

    #[test]
    fn label_count_matches_node_count(tree in arbitrary_tree()) {
        let size = tree.size();
        let labeled = label(tree);
        let mut labels: Vec<Label> = labeled.preorder().map(|(label, _)| *label).collect();
        labels.sort_unstable();
        labels.dedup();

        prop_assert_eq!(labels.len(), size);
        prop_assert_eq!(labels.iter().max().copied(), Some(size - 1));
    }

    #[test]
    fn one_advance_per_node(tree in arbitrary_tree(), start in 0usize..1_000_000) {
        let size = tree.size();
        let next = composed::labeled(tree).exec(start);

        prop_assert_eq!(next, start + size);
    }

    #[test]
    fn start_offsets_labels(tree in arbitrary_tree(), start in 0usize..1_000_000) {
        for strategy in [LabelStrategy::Direct, LabelStrategy::Composed] {
            let options = LabelOptions::new().starting_at(start).using(strategy);
            let labeled = label_with(tree.clone(), &options).unwrap();
            let labels: Vec<Label> = labeled.preorder().map(|(label, _)| *label).collect();
            let expected: Vec<Label> = (start..start + labels.len()).collect();

            prop_assert_eq!(labels, expected);
        }
    }

    #[test]
    fn labeling_is_deterministic(tree in arbitrary_tree()) {
        prop_assert_eq!(label(tree.clone()), label(tree));
    }

    #[test]
    fn left_identity_law(x in any::<i32>(), amount in any::<i32>(), s in any::<i32>()) {
        let lhs = bind(unit(x), step(amount));
        let rhs = step(amount)(x);

        prop_assert_eq!(lhs.run(s), rhs.run(s));
    }

    #[test]
    fn right_identity_law(amount in any::<i32>(), x in any::<i32>(), s in any::<i32>()) {
        let m = step(amount)(x);
        let lhs = bind(m.clone(), unit);

        prop_assert_eq!(lhs.run(s), m.run(s));
    }

    #[test]
    fn associativity_law(amount in any::<i32>(), x in any::<i32>(), s in any::<i32>()) {
        let m = step(amount)(x);
        let lhs = bind(bind(m.clone(), step(amount)), tag);
        let rhs = bind(m, move |y| bind(step(amount)(y), tag));

        prop_assert_eq!(lhs.run(s), rhs.run(s));
    }

    #[test]
    fn advance_counts_up(start in 0usize..1_000_000, times in 1usize..20) {
        let mut m = advance().map(|n| vec![n]);
        for _ in 1..times {
            m = m.zip_with(advance(), |mut seen, n| {
                seen.push(n);
                seen
            });
        }

        let (next, seen) = m.run(start);
        prop_assert_eq!(next, start + times);
        prop_assert_eq!(seen, (start..start + times).collect::<Vec<_>>());
    }

    #[test]
    fn notation_roundtrip(tree in arbitrary_name_tree()) {
        let text = notation::format(&tree);
        let parsed = notation::parse(&text).unwrap();

        prop_assert_eq!(parsed, tree);
    }
}

#[test]
fn sample_tree_from_notation() {
    let tree = notation::parse("a(b, c(d(e, f), g))").unwrap();
    let labeled = label(tree);
    let pairs: Vec<_> = labeled
        .preorder()
        .map(|(label, name)| (*label, name.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![(0, "a"), (1, "b"), (2, "c"), (3, "d"), (4, "e"), (5, "f"), (6, "g")]
    );
}

#[test]
fn single_leaf_from_notation() {
    let labeled = label(notation::parse("x").unwrap());

    assert_eq!(labeled, Tree::leaf((0, "x".to_string())));
}

#[test]
fn left_only_chain_from_notation() {
    let labeled = label(notation::parse("a(b(c))").unwrap());
    let names = labeled.map(|(label, name)| format!("{name}{label}"));

    assert_eq!(notation::format(&names), "a0(b1(c2))");
}
