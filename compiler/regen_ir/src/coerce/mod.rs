//! Coercion of foreign values into pattern nodes.
//!
//! Two layers:
//!
//! - [`IntoNode`]: static conversions resolved at the call site. Text becomes
//!   a [`Literal`], a `Vec` or array becomes an undelimited sequence
//!   [`Group`], node types convert to themselves.
//! - [`Value`] + [`Coercions`]: dynamically shaped values (for example
//!   pattern descriptions loaded from data) dispatched through a registry of
//!   adapters keyed by [`Shape`]. A shape with no registered adapter is an
//!   [`PatternError::UncoercibleValue`], never a silent no-op.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::set::{IntoSetItem, SetItem};
use crate::{Group, Literal, Node, PatternError};

/// Conversion into a [`Node`].
pub trait IntoNode {
    fn into_node(self) -> Result<Node, PatternError>;
}

impl IntoNode for Node {
    fn into_node(self) -> Result<Node, PatternError> {
        Ok(self)
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Result<Node, PatternError> {
        Ok(Node::literal(self))
    }
}

impl IntoNode for String {
    fn into_node(self) -> Result<Node, PatternError> {
        Ok(Node::literal(self))
    }
}

impl IntoNode for char {
    fn into_node(self) -> Result<Node, PatternError> {
        Ok(Node::literal(self))
    }
}

impl<T: IntoNode> IntoNode for Result<T, PatternError> {
    fn into_node(self) -> Result<Node, PatternError> {
        self?.into_node()
    }
}

impl<T: IntoNode> IntoNode for Vec<T> {
    fn into_node(self) -> Result<Node, PatternError> {
        sequence(self)
    }
}

impl<T: IntoNode, const N: usize> IntoNode for [T; N] {
    fn into_node(self) -> Result<Node, PatternError> {
        sequence(self)
    }
}

macro_rules! into_node_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoNode for $ty {
                fn into_node(self) -> Result<Node, PatternError> {
                    Ok(Node::from(self))
                }
            }
        )*
    };
}

into_node_via_from!(
    Literal,
    crate::Verbatim,
    crate::ClassEscape,
    crate::Set,
    crate::Repeat,
    Group,
    crate::Alternation,
    crate::Lookaround,
    crate::Backref,
    crate::Conditional,
);

/// Coerce every item and wrap them in an undelimited sequence group.
pub fn sequence<I>(items: I) -> Result<Node, PatternError>
where
    I: IntoIterator,
    I::Item: IntoNode,
{
    let children = items
        .into_iter()
        .map(IntoNode::into_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::Group(Group::sequence(children)))
}

/// A dynamically shaped value that may be coerced into a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Node(Node),
    Text(String),
    Char(char),
    Integer(i64),
    Pair(Box<Value>, Box<Value>),
    Sequence(Vec<Value>),
}

impl Value {
    pub fn pair(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Value::Pair(Box::new(first.into()), Box::new(second.into()))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Value::Node(_) => Shape::Node,
            Value::Text(_) => Shape::Text,
            Value::Char(_) => Shape::Char,
            Value::Integer(_) => Shape::Integer,
            Value::Pair(..) => Shape::Pair,
            Value::Sequence(_) => Shape::Sequence,
        }
    }

    /// Coerce with the standard registry.
    pub fn coerce(self) -> Result<Node, PatternError> {
        Coercions::standard().coerce(self)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl IntoNode for Value {
    fn into_node(self) -> Result<Node, PatternError> {
        self.coerce()
    }
}

impl IntoSetItem for Value {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        match self {
            Value::Text(text) => Ok(SetItem::Chars(text)),
            Value::Char(c) => Ok(SetItem::Chars(c.to_string())),
            Value::Pair(start, end) => SetItem::range(&bound_text(*start)?, &bound_text(*end)?),
            other => Err(PatternError::UncoercibleValue {
                shape: other.shape(),
            }),
        }
    }
}

fn bound_text(value: Value) -> Result<String, PatternError> {
    match value {
        Value::Text(text) => Ok(text),
        Value::Char(c) => Ok(c.to_string()),
        other => Err(PatternError::InvalidRangeElement {
            reason: format!("range bound is a {} value, not a character", other.shape()),
        }),
    }
}

/// Coarse classification of a [`Value`], used as the registry key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Node,
    Text,
    Char,
    Integer,
    Pair,
    Sequence,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Node => "node",
            Shape::Text => "text",
            Shape::Char => "char",
            Shape::Integer => "integer",
            Shape::Pair => "pair",
            Shape::Sequence => "sequence",
        })
    }
}

/// Adapter turning a value of one shape into a node. The registry is passed
/// along so adapters can coerce nested values.
pub type Adapter = fn(Value, &Coercions) -> Result<Node, PatternError>;

/// Registry of adapters, one per [`Shape`].
#[derive(Clone, Debug, Default)]
pub struct Coercions {
    adapters: FxHashMap<Shape, Adapter>,
}

impl Coercions {
    /// Registry with no adapters at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared registry with the built-in adapters: nodes pass through,
    /// text and characters become literals, sequences become undelimited
    /// groups of their coerced elements.
    pub fn standard() -> &'static Coercions {
        static STANDARD: OnceLock<Coercions> = OnceLock::new();
        STANDARD.get_or_init(Self::with_builtins)
    }

    /// A fresh, extendable copy of the built-in registry.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(Shape::Node, coerce_node);
        registry.register(Shape::Text, coerce_text);
        registry.register(Shape::Char, coerce_text);
        registry.register(Shape::Sequence, coerce_sequence);
        registry
    }

    /// Register `adapter` for `shape`, returning the adapter it replaces.
    pub fn register(&mut self, shape: Shape, adapter: Adapter) -> Option<Adapter> {
        self.adapters.insert(shape, adapter)
    }

    pub fn deregister(&mut self, shape: Shape) -> Option<Adapter> {
        self.adapters.remove(&shape)
    }

    pub fn lookup(&self, shape: Shape) -> Option<Adapter> {
        self.adapters.get(&shape).copied()
    }

    pub fn coerce(&self, value: Value) -> Result<Node, PatternError> {
        let shape = value.shape();
        match self.lookup(shape) {
            Some(adapter) => adapter(value, self),
            None => Err(PatternError::UncoercibleValue { shape }),
        }
    }
}

fn coerce_node(value: Value, _: &Coercions) -> Result<Node, PatternError> {
    match value {
        Value::Node(node) => Ok(node),
        other => Err(PatternError::UncoercibleValue {
            shape: other.shape(),
        }),
    }
}

fn coerce_text(value: Value, _: &Coercions) -> Result<Node, PatternError> {
    match value {
        Value::Text(text) => Ok(Node::literal(text)),
        Value::Char(c) => Ok(Node::literal(c)),
        other => Err(PatternError::UncoercibleValue {
            shape: other.shape(),
        }),
    }
}

fn coerce_sequence(value: Value, registry: &Coercions) -> Result<Node, PatternError> {
    match value {
        Value::Sequence(items) => {
            let children = items
                .into_iter()
                .map(|item| registry.coerce(item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Group(Group::sequence(children)))
        }
        other => Err(PatternError::UncoercibleValue {
            shape: other.shape(),
        }),
    }
}
