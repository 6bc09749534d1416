//! Construction helpers.
//!
//! Every helper accepts anything implementing [`IntoNode`], so text, vectors
//! of parts, and other helpers' results compose directly:
//!
//! ```text
//! capture(vec![lit("ab"), zero_or_more("c")?])  // (abc*)
//! ```
//!
//! Helpers build trees only; call `toplevel()` (from `regen_canon`) before
//! rendering.

use crate::coerce::{sequence, IntoNode};
use crate::lookaround::Direction;
use crate::reference::GroupRef;
use crate::repeat::Bound;
use crate::set::IntoSetItem;
use crate::{
    Alternation, Backref, Conditional, Group, Lookaround, Node, PatternError, Repeat, Set,
};

/// Literal text.
pub fn lit(text: impl Into<String>) -> Node {
    Node::literal(text)
}

/// Undelimited run of parts.
pub fn seq<I>(parts: I) -> Result<Node, PatternError>
where
    I: IntoIterator,
    I::Item: IntoNode,
{
    sequence(parts)
}

/// Children for a new group: a sequence contributes its parts, anything
/// else is the single child.
fn group_children(body: impl IntoNode) -> Result<Vec<Node>, PatternError> {
    Ok(match body.into_node()? {
        Node::Group(group) if !group.is_atomic() => group.into_children(),
        node => vec![node],
    })
}

/// `(?:...)`
pub fn group(body: impl IntoNode) -> Result<Node, PatternError> {
    Ok(Group::non_capturing(group_children(body)?).into())
}

/// `(...)`
pub fn capture(body: impl IntoNode) -> Result<Node, PatternError> {
    Ok(Group::capturing(group_children(body)?).into())
}

/// `(?P<name>...)`
pub fn named(name: &str, body: impl IntoNode) -> Result<Node, PatternError> {
    Ok(Group::named(name, group_children(body)?)?.into())
}

/// Repetition between `min` and `max` times, `max` possibly [`crate::INF`].
pub fn repeat(
    body: impl IntoNode,
    min: Bound,
    max: Bound,
    greedy: bool,
) -> Result<Node, PatternError> {
    Ok(Repeat::new(body.into_node()?, min, max, greedy)?.into())
}

/// Greedy repetition between `min` and `max` times.
pub fn between(body: impl IntoNode, min: u32, max: u32) -> Result<Node, PatternError> {
    Ok(Repeat::between(body.into_node()?, min, max)?.into())
}

/// Greedy repetition at least `min` times.
pub fn at_least(body: impl IntoNode, min: u32) -> Result<Node, PatternError> {
    Ok(Repeat::at_least(body.into_node()?, min)?.into())
}

pub fn exactly(body: impl IntoNode, count: u32) -> Result<Node, PatternError> {
    Ok(Repeat::exact(body.into_node()?, count)?.into())
}

/// `?`
pub fn optional(body: impl IntoNode) -> Result<Node, PatternError> {
    between(body, 0, 1)
}

/// `*`
pub fn zero_or_more(body: impl IntoNode) -> Result<Node, PatternError> {
    at_least(body, 0)
}

/// `+`
pub fn one_or_more(body: impl IntoNode) -> Result<Node, PatternError> {
    at_least(body, 1)
}

/// Make a repetition non-greedy. Any other node is returned unchanged.
pub fn lazy(body: impl IntoNode) -> Result<Node, PatternError> {
    Ok(match body.into_node()? {
        Node::Repeat(repeat) => repeat.lazy().into(),
        node => node,
    })
}

/// `[...]`
pub fn any_of<I>(items: I) -> Result<Node, PatternError>
where
    I: IntoIterator,
    I::Item: IntoSetItem,
{
    set(items, false)
}

/// `[^...]`
pub fn none_of<I>(items: I) -> Result<Node, PatternError>
where
    I: IntoIterator,
    I::Item: IntoSetItem,
{
    set(items, true)
}

fn set<I>(items: I, negated: bool) -> Result<Node, PatternError>
where
    I: IntoIterator,
    I::Item: IntoSetItem,
{
    let items = items
        .into_iter()
        .map(IntoSetItem::into_set_item)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Set::new(items, negated)?.into())
}

/// `a|b|...`
pub fn either<I>(branches: I) -> Result<Node, PatternError>
where
    I: IntoIterator,
    I::Item: IntoNode,
{
    let branches = branches
        .into_iter()
        .map(IntoNode::into_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Alternation::new(branches).into())
}

/// `(?=...)`
pub fn followed_by(body: impl IntoNode) -> Result<Node, PatternError> {
    look(body, Direction::Ahead, false)
}

/// `(?!...)`
pub fn not_followed_by(body: impl IntoNode) -> Result<Node, PatternError> {
    look(body, Direction::Ahead, true)
}

/// `(?<=...)`
pub fn preceded_by(body: impl IntoNode) -> Result<Node, PatternError> {
    look(body, Direction::Behind, false)
}

/// `(?<!...)`
pub fn not_preceded_by(body: impl IntoNode) -> Result<Node, PatternError> {
    look(body, Direction::Behind, true)
}

fn look(body: impl IntoNode, direction: Direction, negated: bool) -> Result<Node, PatternError> {
    Ok(Lookaround::new(body.into_node()?, direction, negated).into())
}

/// `\N` or `(?P=name)`
pub fn backref(target: impl Into<GroupRef>) -> Node {
    Backref::new(target).into()
}

/// `(?(1)yes|no)` or `(?(<name>)yes|no)`
pub fn if_group(
    target: impl Into<GroupRef>,
    yes: impl IntoNode,
    no: impl IntoNode,
) -> Result<Node, PatternError> {
    Ok(Conditional::new(target, yes.into_node()?, no.into_node()?).into())
}
