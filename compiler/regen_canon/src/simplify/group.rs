//! Group rewrites: child-sequence derepeat, flattening and elision.

use regen_ir::{Group, Node, PatternError, Repeat};
use tracing::debug;

use super::Simplifier;
use crate::derepeat::shortest_period;

impl Simplifier {
    /// Simplify a group.
    ///
    /// In order: a child sequence that is an exact repetition of a shorter
    /// one becomes a single repetition child; children are simplified when
    /// `recursive`; undelimited child groups are spliced in when
    /// `merge_children`; finally a non-capturing group that no longer needs
    /// its delimiters is replaced by its only child.
    pub fn simplify_group_with(
        &mut self,
        group: &Group,
        recursive: bool,
        merge_children: bool,
    ) -> Result<Node, PatternError> {
        let mut children = match derepeat_children(group.children())? {
            Some(repeat) => vec![repeat],
            None => group.children().to_vec(),
        };
        if recursive {
            children = children
                .iter()
                .map(|child| self.simplify(child))
                .collect::<Result<Vec<_>, _>>()?;
        }
        if merge_children {
            children = flatten(children);
        }
        Ok(elide(group.with_children(children)))
    }
}

/// Only the child-sequence derepeat step of group simplification.
///
/// `(?:abab)` built as `[ab, ab]` becomes `(?:ab){2}`; a capturing group
/// keeps its delimiters around the repetition so the capture still spans
/// every iteration. A unit holding a capture is left alone, since folding it
/// would renumber every later group.
pub fn derepeated(group: &Group) -> Result<Node, PatternError> {
    Ok(match derepeat_children(group.children())? {
        Some(repeat) => elide(group.with_children(vec![repeat])),
        None => Node::Group(group.clone()),
    })
}

fn derepeat_children(children: &[Node]) -> Result<Option<Node>, PatternError> {
    let (unit, count) = shortest_period(children);
    if count == 1 || children[..unit].iter().any(Node::has_capture) {
        return Ok(None);
    }
    let Ok(count) = u32::try_from(count) else {
        return Ok(None);
    };
    debug!(unit, count, "child sequence derepeated");
    let body = match &children[..unit] {
        [only] => only.clone(),
        many => Node::Group(Group::sequence(many.to_vec())),
    };
    Ok(Some(Node::Repeat(Repeat::exact(body, count)?)))
}

/// Splice undelimited child groups into the parent.
fn flatten(children: Vec<Node>) -> Vec<Node> {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Node::Group(group) if !group.is_atomic() => flat.extend(group.into_children()),
            other => flat.push(other),
        }
    }
    flat
}

/// A non-capturing group around one child is that child, provided the
/// group is undelimited or the child is already a single atom.
fn elide(group: Group) -> Node {
    if group.is_capturing() {
        return Node::Group(group);
    }
    let single = match group.children() {
        [only] if !group.is_atomic() || only.atoms() <= 1 => Some(only.clone()),
        _ => None,
    };
    match single {
        Some(only) => only,
        None => Node::Group(group),
    }
}
