//! The pattern node sum type and the contract every variant implements.
//!
//! | operation      | default                     | overridden by                    |
//! |----------------|-----------------------------|----------------------------------|
//! | `atoms`        | 1                           | literal, group, repeat, alternation |
//! | `is_modifier`  | false                       | verbatim, sequence group, `{1,1}` repeat |
//! | `atomize`      | wrap when `atoms != 1`      | group, alternation               |
//! | `render`       | -                           | every variant                    |
//! | `has_capture`  | false                       | group, containers                |
//! | `is_zero_width`| false                       | empty literal, assertions, containers |
//!
//! Simplification and de-atomization live in `regen_canon`, which needs a
//! diagnostics sink that this crate does not have.

use std::fmt;

use regen_stack::with_stack;

use crate::{
    Alternation, Backref, ClassEscape, Conditional, Group, Literal, Lookaround, Repeat, Set,
    Verbatim,
};

const ANCHORS: [&str; 7] = ["^", "$", r"\b", r"\B", r"\A", r"\z", r"\Z"];

/// A node of a pattern tree.
///
/// Each node owns its children; there is no sharing and no cycles. Nodes are
/// immutable values: every rewrite builds a new tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Literal(Literal),
    Verbatim(Verbatim),
    Class(ClassEscape),
    Set(Set),
    Repeat(Repeat),
    Group(Group),
    Alternation(Alternation),
    Lookaround(Lookaround),
    Backref(Backref),
    Conditional(Conditional),
}

impl Node {
    pub fn literal(text: impl Into<String>) -> Self {
        Node::Literal(Literal::new(text))
    }

    /// Number of indivisible matching units this node renders as, without
    /// extra grouping.
    ///
    /// A quantifier can only bind to a node with exactly one atom.
    pub fn atoms(&self) -> usize {
        match self {
            Node::Literal(lit) => lit.atoms(),
            Node::Repeat(repeat) => repeat.atoms(),
            Node::Group(group) => group.atoms(),
            Node::Alternation(alt) => alt.atoms(),
            Node::Verbatim(_)
            | Node::Class(_)
            | Node::Set(_)
            | Node::Lookaround(_)
            | Node::Backref(_)
            | Node::Conditional(_) => 1,
        }
    }

    /// Whether the node renders as a suffix operator on the preceding atom.
    pub fn is_modifier(&self) -> bool {
        match self {
            Node::Verbatim(verbatim) => verbatim.is_modifier(),
            Node::Group(group) => group.is_modifier(),
            Node::Repeat(repeat) => repeat.is_modifier(),
            _ => false,
        }
    }

    /// Equivalent node with exactly one atom.
    #[must_use]
    pub fn atomize(&self) -> Node {
        match self {
            Node::Group(group) => Node::Group(group.atomize()),
            Node::Alternation(alt) => Node::Alternation(alt.delimited()),
            _ if self.atoms() != 1 => Node::Group(Group::wrapper(self.clone())),
            _ => self.clone(),
        }
    }

    /// Engine syntax for this node.
    ///
    /// Only meaningful on a node that is safe to render directly, which
    /// `toplevel()` guarantees for a pattern root.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub fn render_into(&self, out: &mut String) {
        with_stack(|| match self {
            Node::Literal(lit) => lit.render_into(out),
            Node::Verbatim(verbatim) => out.push_str(verbatim.text()),
            Node::Class(class) => out.push_str(class.as_str()),
            Node::Set(set) => set.render_into(out),
            Node::Repeat(repeat) => repeat.render_into(out),
            Node::Group(group) => group.render_into(out),
            Node::Alternation(alt) => alt.render_into(out),
            Node::Lookaround(look) => look.render_into(out),
            Node::Backref(backref) => backref.render_into(out),
            Node::Conditional(cond) => cond.render_into(out),
        });
    }

    /// Whether a capturing or named group occurs anywhere in this subtree.
    pub fn has_capture(&self) -> bool {
        with_stack(|| match self {
            Node::Group(group) => {
                group.is_capturing() || group.children().iter().any(Node::has_capture)
            }
            Node::Repeat(repeat) => repeat.child().has_capture(),
            Node::Alternation(alt) => alt.branches().iter().any(Node::has_capture),
            Node::Lookaround(look) => look.child().has_capture(),
            Node::Conditional(cond) => cond.yes().has_capture() || cond.no().has_capture(),
            _ => false,
        })
    }

    /// Whether the node can only ever match the empty string.
    ///
    /// Lookarounds and anchors consume nothing; an empty literal or an empty
    /// sequence matches nothing at all.
    pub fn is_zero_width(&self) -> bool {
        with_stack(|| match self {
            Node::Literal(lit) => lit.is_empty(),
            Node::Verbatim(verbatim) => ANCHORS.contains(&verbatim.text()),
            Node::Lookaround(_) => true,
            Node::Group(group) => group.children().iter().all(Node::is_zero_width),
            Node::Alternation(alt) => alt.branches().iter().all(Node::is_zero_width),
            Node::Repeat(repeat) => repeat.child().is_zero_width(),
            _ => false,
        })
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_repeat(&self) -> Option<&Repeat> {
        match self {
            Node::Repeat(repeat) => Some(repeat),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! node_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

node_from!(
    Literal(Literal),
    Verbatim(Verbatim),
    Class(ClassEscape),
    Set(Set),
    Repeat(Repeat),
    Group(Group),
    Alternation(Alternation),
    Lookaround(Lookaround),
    Backref(Backref),
    Conditional(Conditional),
);

#[cfg(test)]
mod tests;
