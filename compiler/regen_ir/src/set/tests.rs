use super::*;
use pretty_assertions::assert_eq;

fn rendered(set: &Set) -> String {
    let mut out = String::new();
    set.render_into(&mut out);
    out
}

#[test]
fn renders_items_in_order() {
    let set = Set::new(
        vec![
            SetItem::char_range('a', 'z').unwrap(),
            SetItem::chars("_"),
            SetItem::Class(ClassEscape::Digit),
        ],
        false,
    )
    .unwrap();
    assert_eq!(rendered(&set), r"[a-z_\d]");
}

#[test]
fn negation_marker() {
    let set = Set::new(vec![SetItem::chars("abc")], true).unwrap();
    assert_eq!(rendered(&set), "[^abc]");
    assert!(set.is_negated());
}

#[test]
fn bracket_metacharacters_are_escaped() {
    let set = Set::new(vec![SetItem::chars(r"-]\^")], false).unwrap();
    assert_eq!(rendered(&set), r"[\-\]\\\^]");

    let set = Set::new(vec![SetItem::chars("[&~")], false).unwrap();
    assert_eq!(rendered(&set), r"[\[\&\~]");
}

#[test]
fn ordinary_metacharacters_pass_through() {
    let set = Set::new(vec![SetItem::chars(".*+?")], false).unwrap();
    assert_eq!(rendered(&set), "[.*+?]");
}

#[test]
fn range_bounds_are_escaped() {
    let set = Set::new(vec![SetItem::char_range('!', '-').unwrap()], false).unwrap();
    assert_eq!(rendered(&set), r"[!-\-]");
}

#[test]
fn range_requires_single_characters() {
    assert!(matches!(
        SetItem::range("ab", "z"),
        Err(PatternError::InvalidRangeElement { .. })
    ));
    assert!(matches!(
        SetItem::range("a", ""),
        Err(PatternError::InvalidRangeElement { .. })
    ));
    assert_eq!(
        SetItem::range("a", "f").unwrap(),
        SetItem::Range {
            start: 'a',
            end: 'f'
        }
    );
}

#[test]
fn reversed_range_is_rejected() {
    assert!(matches!(
        SetItem::char_range('z', 'a'),
        Err(PatternError::InvalidRangeElement { .. })
    ));
}

#[test]
fn empty_set_is_rejected() {
    assert_eq!(Set::new(Vec::new(), false), Err(PatternError::EmptySet));
    assert_eq!(
        Set::new(vec![SetItem::chars("")], true),
        Err(PatternError::EmptySet)
    );
}

#[test]
fn pair_coercion_builds_ranges() {
    assert_eq!(
        ('0', '9').into_set_item().unwrap(),
        SetItem::Range {
            start: '0',
            end: '9'
        }
    );
    assert!(("0", "99").into_set_item().is_err());
    assert_eq!("xy".into_set_item().unwrap(), SetItem::chars("xy"));
}
