use super::*;
use crate::builders::{
    capture, either, exactly, followed_by, if_group, lit, named, optional, seq, zero_or_more,
};
use crate::definitions::{ANY_CHAR, DIGIT, LINE_END, LINE_START, WORD_BOUNDARY};
use crate::{Direction, GroupKind};
use pretty_assertions::assert_eq;

fn samples() -> Vec<Node> {
    vec![
        lit(""),
        lit("a"),
        lit("abc"),
        DIGIT,
        ANY_CHAR,
        exactly("ab", 2).unwrap(),
        capture("x").unwrap(),
        seq(["a", "b"]).unwrap(),
        seq(Vec::<Node>::new()).unwrap(),
        either(["a", "b"]).unwrap(),
        Node::Alternation(Alternation::new(vec![lit("a"), lit("b")]).bare()),
        Node::Lookaround(Lookaround::new(lit("q"), Direction::Ahead, false)),
    ]
}

#[test]
fn atomize_always_yields_one_atom() {
    for node in samples() {
        assert_eq!(node.atomize().atoms(), 1, "{node:?}");
    }
}

#[test]
fn atomize_keeps_single_atoms() {
    assert_eq!(lit("a").atomize(), lit("a"));
    assert_eq!(DIGIT.atomize(), DIGIT);
}

#[test]
fn atomize_wraps_multi_atom_literals() {
    let atomized = lit("abc").atomize();
    let group = atomized.as_group().unwrap();
    assert_eq!(group.kind(), &GroupKind::NonCapturing);
    assert_eq!(atomized.render(), "(?:abc)");
}

#[test]
fn atomize_wraps_empty_literal() {
    assert_eq!(lit("").atomize().render(), "(?:)");
}

#[test]
fn constants_render() {
    assert_eq!(ANY_CHAR.render(), ".");
    assert_eq!(LINE_START.render(), "^");
    assert_eq!(WORD_BOUNDARY.render(), r"\b");
    assert_eq!(DIGIT.to_string(), r"\d");
}

#[test]
fn bare_alternation_renders_without_delimiters() {
    let alt = Alternation::new(vec![lit("a"), lit("bc")]);
    assert_eq!(Node::from(alt.bare()).render(), "a|bc");
    assert_eq!(Node::from(alt).render(), "(?:a|bc)");
}

#[test]
fn deeply_nested_tree_renders() {
    let mut node = lit("x");
    for _ in 0..50_000 {
        node = Node::Group(Group::non_capturing(vec![node]));
    }
    let rendered = node.render();
    assert_eq!(rendered.len(), 50_000 * 4 + 1);
    // Drop iteratively to keep the destructor from recursing 50k deep.
    let mut current = node;
    while let Node::Group(group) = current {
        current = group.into_children().pop().unwrap_or_else(|| lit(""));
    }
}

#[test]
fn captures_are_found_at_any_depth() {
    assert!(capture("a").unwrap().has_capture());
    assert!(named("q", "a").unwrap().has_capture());
    assert!(seq([seq([capture("a").unwrap()]).unwrap()]).unwrap().has_capture());
    assert!(optional(capture("a").unwrap()).unwrap().has_capture());
    assert!(either([lit("b"), capture("a").unwrap()]).unwrap().has_capture());
    assert!(followed_by(capture("a").unwrap()).unwrap().has_capture());
    assert!(if_group(1u32, capture("a").unwrap(), "b").unwrap().has_capture());
    assert!(!seq(["a", "b"]).unwrap().has_capture());
    assert!(!zero_or_more("ab").unwrap().has_capture());
}

#[test]
fn zero_width_nodes() {
    assert!(lit("").is_zero_width());
    assert!(seq(Vec::<Node>::new()).unwrap().is_zero_width());
    assert!(LINE_START.is_zero_width());
    assert!(LINE_END.is_zero_width());
    assert!(WORD_BOUNDARY.is_zero_width());
    assert!(followed_by("abc").unwrap().is_zero_width());
    assert!(seq([LINE_START, WORD_BOUNDARY]).unwrap().is_zero_width());
    assert!(capture("").unwrap().is_zero_width());

    assert!(!lit("a").is_zero_width());
    assert!(!ANY_CHAR.is_zero_width());
    assert!(!DIGIT.is_zero_width());
    assert!(!seq([LINE_START, lit("a")]).unwrap().is_zero_width());
}
