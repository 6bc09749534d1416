//! Interleaving a separator between pattern elements.

use regen_ir::{Group, IntoNode, Node, PatternError};

use crate::Simplifier;

/// `elements` with `separator` between each pair, simplified.
///
/// A fixed-count repetition contributes its child that many times; an
/// undelimited sequence contributes each of its children. Anything else is
/// a single element.
///
/// ```
/// use regen_canon::join;
/// use regen_ir::builders::exactly;
///
/// let joined = join(",", exactly("ab", 3)).unwrap();
/// assert_eq!(joined.render(), "ab,ab,ab");
/// ```
pub fn join(separator: impl IntoNode, elements: impl IntoNode) -> Result<Node, PatternError> {
    let separator = separator.into_node()?;
    let mut elements = elements.into_node()?;

    let mut multiplier = 1;
    if let Node::Repeat(repeat) = &elements {
        if let Some(count) = repeat.count() {
            multiplier = count;
            elements = repeat.child().clone();
        }
    }
    let unit = match elements {
        Node::Group(group) if !group.is_atomic() => group.into_children(),
        single => vec![single],
    };

    let mut parts = Vec::new();
    for _ in 0..multiplier {
        for element in &unit {
            if !parts.is_empty() {
                parts.push(separator.clone());
            }
            parts.push(element.clone());
        }
    }
    Simplifier::default().canonicalize(&Node::Group(Group::sequence(parts)))
}
