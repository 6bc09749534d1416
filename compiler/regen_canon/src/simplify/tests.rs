use pretty_assertions::assert_eq;
use regen_diagnostic::DiagnosticCode;
use regen_ir::builders::{
    backref, capture, either, followed_by, group, if_group, lazy, lit, one_or_more, optional, seq,
    zero_or_more,
};
use regen_ir::definitions::{LINE_START, WORD_BOUNDARY};
use regen_ir::definitions::DIGIT;
use regen_ir::{Alternation, Bound, Group, Node, PatternError, Repeat, INF};

use super::repeat::folded_bounds;
use super::{derepeated, Simplifier};
use crate::CanonConfig;

fn top(node: &Node) -> String {
    Simplifier::default().toplevel(node).unwrap().render()
}

fn once(node: &Node) -> Node {
    Simplifier::default().simplify(node).unwrap()
}

fn codes(simplifier: &Simplifier) -> Vec<DiagnosticCode> {
    simplifier.diagnostics().iter().map(|d| d.code).collect()
}

fn nested(inner: Repeat) -> Node {
    Node::Repeat(inner)
}

// Literals

#[test]
fn literal_derepeats_to_shortest_unit() {
    assert_eq!(top(&lit("abcabcabc")), "(?:abc){3}");
    assert_eq!(top(&lit("aaaa")), "a{4}");
    assert_eq!(top(&lit("a.a.")), r"(?:a\.){2}");
}

#[test]
fn short_or_aperiodic_literals_stay() {
    assert_eq!(once(&lit("")), lit(""));
    assert_eq!(once(&lit("a")), lit("a"));
    assert_eq!(once(&lit("abca")), lit("abca"));
}

#[test]
fn literal_inside_capture_derepeats_inside_delimiters() {
    assert_eq!(top(&capture("abab").unwrap()), "((?:ab){2})");
}

// Repetition

#[test]
fn fixed_outer_repeat_folds() {
    let inner = Repeat::between(lit("a"), 2, 3).unwrap();
    let outer = Repeat::exact(nested(inner), 2).unwrap();
    assert_eq!(once(&outer.into()).render(), "a{4,6}");
}

#[test]
fn exact_range_folds() {
    let inner = Repeat::between(lit("a"), 2, 3).unwrap();
    let outer = Repeat::at_least(nested(inner), 1).unwrap();
    assert_eq!(once(&outer.into()).render(), "a{2,}");

    let star = Repeat::at_least(lit("a"), 0).unwrap();
    let plus = Repeat::at_least(nested(star), 1).unwrap();
    assert_eq!(once(&plus.into()).render(), "a*");

    let plus = Repeat::at_least(lit("a"), 1).unwrap();
    let optional = Repeat::between(nested(plus), 0, 1).unwrap();
    assert_eq!(once(&optional.into()).render(), "a*");
}

#[test]
fn gapped_range_is_not_folded() {
    // (?:a{2}){0,2} matches 0, 2 or 4 a's; a{0,4} would also match 1 and 3.
    let inner = Repeat::exact(lit("a"), 2).unwrap();
    let outer: Node = Repeat::between(nested(inner), 0, 2).unwrap().into();
    let simplified = once(&outer);
    assert_eq!(simplified.render(), "(?:a{2}){0,2}");
    assert_eq!(once(&simplified), simplified);
}

#[test]
fn fold_bounds_check_gaps() {
    let range = |min, max| Repeat::new(lit("a"), Bound::Finite(min), max, true).unwrap();
    let f = Bound::Finite;
    assert_eq!(folded_bounds(&range(2, f(2)), &range(2, f(3))), Some((4, f(6))));
    assert_eq!(folded_bounds(&range(0, f(2)), &range(2, f(2))), None);
    assert_eq!(folded_bounds(&range(1, f(3)), &range(2, f(2))), None);
    assert_eq!(folded_bounds(&range(1, f(3)), &range(1, f(2))), Some((1, f(6))));
    assert_eq!(folded_bounds(&range(0, INF), &range(2, INF)), None);
    assert_eq!(folded_bounds(&range(1, INF), &range(2, INF)), Some((2, INF)));
    assert_eq!(folded_bounds(&range(0, INF), &range(1, INF)), Some((0, INF)));
}

#[test]
fn fold_overflow_keeps_nesting() {
    let inner = Repeat::exact(lit("a"), u32::MAX).unwrap();
    let outer: Node = Repeat::exact(nested(inner), 2).unwrap().into();
    assert_eq!(once(&outer).render(), format!("(?:a{{{}}}){{2}}", u32::MAX));
}

#[test]
fn mixed_greediness_is_an_error() {
    let inner = Repeat::at_least(lit("a"), 1).unwrap().lazy();
    let outer: Node = Repeat::at_least(nested(inner), 0).unwrap().into();
    assert_eq!(
        Simplifier::default().simplify(&outer),
        Err(PatternError::IrreconcilableGreediness {
            outer_greedy: true,
            inner_greedy: false,
        })
    );
}

#[test]
fn unquantified_repeat_is_dropped() {
    let single: Node = Repeat::exact(lit("ab"), 1).unwrap().into();
    assert_eq!(once(&single), lit("ab"));

    let captured: Node = Repeat::exact(capture("a").unwrap(), 1).unwrap().into();
    assert_eq!(once(&captured).render(), "(a)");
}

#[test]
fn fixed_inner_takes_outer_greediness() {
    let node = lazy(zero_or_more("aa").unwrap()).unwrap();
    assert_eq!(top(&node), "(?:a{2})*?");

    let inner = Repeat::exact(lit("a"), 2).unwrap();
    let outer: Node = Repeat::between(nested(inner), 1, 3).unwrap().lazy().into();
    assert_eq!(top(&outer), "(?:a{2}){1,3}?");
}

#[test]
fn zero_width_children_are_not_quantified() {
    let mut simplifier = Simplifier::default();
    let empty = zero_or_more(lit("")).unwrap();
    assert_eq!(simplifier.canonicalize(&empty).unwrap(), lit(""));
    assert!(simplifier.diagnostics().is_empty());

    let look = one_or_more(followed_by("a").unwrap()).unwrap();
    assert_eq!(top(&look), "(?=a)");
    let optional_look = optional(followed_by("a").unwrap()).unwrap();
    assert_eq!(top(&optional_look), "");
    let anchors = one_or_more(seq([LINE_START, WORD_BOUNDARY]).unwrap()).unwrap();
    assert_eq!(top(&anchors), r"^\b");
}

#[test]
fn zero_width_capture_stays_quantified() {
    let node = zero_or_more(capture("").unwrap()).unwrap();
    assert_eq!(top(&node), "()*");
}

// Groups

#[test]
fn non_capturing_single_atom_is_elided() {
    let node: Node = Group::non_capturing(vec![lit("a")]).into();
    assert_eq!(once(&node).render(), "a");
}

#[test]
fn non_capturing_multi_atom_is_kept() {
    let node: Node = Group::non_capturing(vec![lit("ab")]).into();
    assert_eq!(once(&node), node);
}

#[test]
fn sequences_are_flattened() {
    let node: Node = Group::capturing(vec![seq(["a", "b"]).unwrap(), lit("c")]).into();
    let simplified = once(&node);
    assert_eq!(simplified.as_group().unwrap().children().len(), 3);
    assert_eq!(simplified.render(), "(abc)");
}

#[test]
fn repeated_child_sequence_becomes_repeat() {
    let node: Node = Group::capturing(vec![lit("a"), DIGIT, lit("a"), DIGIT]).into();
    assert_eq!(top(&node), r"((?:a\d){2})");
}

#[test]
fn derepeated_only_folds_children() {
    let group = Group::non_capturing(vec![lit("a"), lit("b"), lit("a"), lit("b")]);
    let node = derepeated(&group).unwrap();
    assert!(node.as_repeat().is_some());
    assert_eq!(node.render(), "(?:ab){2}");

    let plain = Group::non_capturing(vec![lit("a"), lit("b")]);
    assert_eq!(derepeated(&plain).unwrap(), Node::Group(plain));
}

#[test]
fn non_recursive_simplify_leaves_children() {
    let group = Group::capturing(vec![lit("aa"), seq(["b", "c"]).unwrap()]);
    let mut simplifier = Simplifier::default();
    let shallow = simplifier.simplify_group_with(&group, false, false).unwrap();
    assert_eq!(shallow, Node::Group(group.clone()));

    let merged = simplifier.simplify_group_with(&group, false, true).unwrap();
    assert_eq!(merged.as_group().unwrap().children().len(), 3);
}

#[test]
fn captured_units_are_not_derepeated() {
    let pair = Group::non_capturing(vec![capture("a").unwrap(), capture("a").unwrap()]);
    assert_eq!(derepeated(&pair).unwrap(), Node::Group(pair));

    let node = seq([
        seq([capture("a").unwrap(), capture("a").unwrap()]).unwrap(),
        backref(2u32),
    ])
    .unwrap();
    assert_eq!(top(&node), r"(a)(a)\2");
}

// Pattern roots

#[test]
fn capturing_root_keeps_delimiters() {
    let node = capture(vec![lit("ab"), zero_or_more("c").unwrap()]).unwrap();
    let mut simplifier = Simplifier::default();
    let root = simplifier.toplevel(&node).unwrap();
    assert_eq!(root.render(), "(abc*)");
    assert!(simplifier.diagnostics().is_empty());
}

#[test]
fn named_root_warns() {
    let node: Node = Group::named("word", vec![lit("ab")]).unwrap().into();
    let mut simplifier = Simplifier::default();
    assert_eq!(simplifier.toplevel(&node).unwrap().render(), "(?P<word>ab)");
    assert_eq!(codes(&simplifier), vec![DiagnosticCode::W0001]);
    assert!(simplifier.diagnostics().has_warnings());
}

#[test]
fn non_capturing_root_is_unwrapped_with_note() {
    let node: Node = Group::non_capturing(vec![lit("ab"), lit("c")]).into();
    let mut simplifier = Simplifier::default();
    assert_eq!(simplifier.toplevel(&node).unwrap().render(), "abc");
    assert_eq!(codes(&simplifier), vec![DiagnosticCode::N0001]);
    assert!(!simplifier.diagnostics().has_warnings());
}

#[test]
fn root_notes_can_be_silenced() {
    let node: Node = Group::non_capturing(vec![lit("ab")]).into();
    let mut simplifier = Simplifier::new(CanonConfig::default().with_root_notes(false));
    simplifier.toplevel(&node).unwrap();
    assert!(simplifier.diagnostics().is_empty());
}

#[test]
fn nested_non_capturing_roots_unwrap_fully() {
    let inner: Node = Group::non_capturing(vec![lit("ab")]).into();
    let node: Node = Group::non_capturing(vec![inner]).into();
    assert_eq!(top(&node), "ab");
}

#[test]
fn alternation_root_renders_bare() {
    assert_eq!(top(&either(["ab", "cd"]).unwrap()), "ab|cd");
    let in_context = seq(vec![lit("x"), either(["a", "b"]).unwrap()]).unwrap();
    assert_eq!(top(&in_context), "x(?:a|b)");
}

#[test]
fn toplevel_is_idempotent_on_examples() {
    let examples = [
        lit("abcabcabc"),
        either(["ab", "cd"]).unwrap(),
        Group::non_capturing(vec![Group::non_capturing(vec![lit("ab")]).into()]).into(),
        capture("abab").unwrap(),
    ];
    for node in examples {
        let once = Simplifier::default().toplevel(&node).unwrap();
        let twice = Simplifier::default().toplevel(&once).unwrap();
        assert_eq!(twice.render(), once.render());
    }
}

// Alternation, lookaround, conditional

#[test]
fn nested_alternations_flatten() {
    let inner = Alternation::new(vec![lit("b"), lit("c")]);
    let outer: Node = Alternation::new(vec![lit("a"), inner.into()]).into();
    assert_eq!(once(&outer).render(), "(?:a|b|c)");
}

#[test]
fn single_branch_alternation_is_its_branch() {
    let node: Node = Alternation::new(vec![lit("a")]).into();
    assert_eq!(once(&node), lit("a"));
}

#[test]
fn bare_alternation_is_delimited_again() {
    let node: Node = Alternation::new(vec![lit("a"), lit("b")]).bare().into();
    assert_eq!(once(&node).render(), "(?:a|b)");
}

#[test]
fn assertions_and_conditionals_simplify_their_children() {
    let look = followed_by(group("a").unwrap()).unwrap();
    assert_eq!(once(&look).render(), "(?=a)");

    let cond = if_group(1u32, group("a").unwrap(), "bb").unwrap();
    assert_eq!(once(&cond).render(), "(?(1)a|b{2})");
}

// De-atomization

#[test]
fn deatomize_capture_warns_on_request() {
    let node = capture("ab").unwrap();

    let mut quiet = Simplifier::default();
    assert_eq!(quiet.deatomize(&node, false).render(), "ab");
    assert!(quiet.diagnostics().is_empty());

    let mut loud = Simplifier::default();
    assert_eq!(loud.deatomize(&node, true).render(), "ab");
    assert_eq!(codes(&loud), vec![DiagnosticCode::W0002]);
}

#[test]
fn deatomize_leaves_atoms_alone() {
    let mut simplifier = Simplifier::default();
    assert_eq!(simplifier.deatomize(&lit("a"), true), lit("a"));
    let alt = either(["a", "b"]).unwrap();
    assert_eq!(simplifier.deatomize(&alt, true).render(), "a|b");
}

// Pass limit

#[test]
fn pass_limit_reports_w0003() {
    let mut simplifier = Simplifier::new(CanonConfig::default().with_max_passes(1));
    let node = simplifier.canonicalize(&lit("aaaa")).unwrap();
    assert_eq!(node.render(), "a{4}");
    assert_eq!(codes(&simplifier), vec![DiagnosticCode::W0003]);
}

#[test]
fn diagnostics_are_deduplicated_and_flushed() {
    let node = capture("ab").unwrap();
    let mut simplifier = Simplifier::default();
    simplifier.deatomize(&node, true);
    simplifier.deatomize(&node, true);
    assert_eq!(simplifier.take_diagnostics().len(), 1);
    assert!(simplifier.diagnostics().is_empty());
}
