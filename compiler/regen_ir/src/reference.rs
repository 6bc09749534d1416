//! Nodes that refer back to an earlier group: backreferences and
//! conditionals.

use std::fmt;

use crate::Node;

/// Reference to an earlier group, by number or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupRef {
    Index(u32),
    Name(String),
}

impl GroupRef {
    /// A token of ASCII digits with a positive value is a group number;
    /// anything else is a name.
    pub fn parse(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index @ 1..) = token.parse::<u32>() {
                return GroupRef::Index(index);
            }
        }
        GroupRef::Name(token.to_string())
    }
}

impl From<u32> for GroupRef {
    fn from(index: u32) -> Self {
        if index == 0 {
            GroupRef::Name("0".to_string())
        } else {
            GroupRef::Index(index)
        }
    }
}

impl From<&str> for GroupRef {
    fn from(token: &str) -> Self {
        GroupRef::parse(token)
    }
}

impl From<String> for GroupRef {
    fn from(token: String) -> Self {
        GroupRef::parse(&token)
    }
}

impl fmt::Display for GroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupRef::Index(index) => write!(f, "{index}"),
            GroupRef::Name(name) => f.write_str(name),
        }
    }
}

/// Matches the text an earlier group captured: `\N` or `(?P=name)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Backref {
    target: GroupRef,
}

impl Backref {
    pub fn new(target: impl Into<GroupRef>) -> Self {
        Backref {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &GroupRef {
        &self.target
    }

    pub fn render_into(&self, out: &mut String) {
        match &self.target {
            GroupRef::Index(index) => {
                out.push('\\');
                out.push_str(&index.to_string());
            }
            GroupRef::Name(name) => {
                out.push_str("(?P=");
                out.push_str(name);
                out.push(')');
            }
        }
    }
}

/// `(?(1)yes|no)` or `(?(<name>)yes|no)`: match `yes` if the referenced
/// group participated in the match so far, `no` otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conditional {
    target: GroupRef,
    yes: Box<Node>,
    no: Box<Node>,
}

impl Conditional {
    pub fn new(target: impl Into<GroupRef>, yes: Node, no: Node) -> Self {
        Conditional {
            target: target.into(),
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    pub fn target(&self) -> &GroupRef {
        &self.target
    }

    pub fn yes(&self) -> &Node {
        &self.yes
    }

    pub fn no(&self) -> &Node {
        &self.no
    }

    #[must_use]
    pub fn with_branches(&self, yes: Node, no: Node) -> Self {
        Self::new(self.target.clone(), yes, no)
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str("(?(");
        match &self.target {
            GroupRef::Index(index) => out.push_str(&index.to_string()),
            GroupRef::Name(name) => {
                out.push('<');
                out.push_str(name);
                out.push('>');
            }
        }
        out.push(')');
        self.yes.render_into(out);
        out.push('|');
        self.no.render_into(out);
        out.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn positive_integers_are_indices() {
        assert_eq!(GroupRef::parse("3"), GroupRef::Index(3));
        assert_eq!(GroupRef::parse("12"), GroupRef::Index(12));
    }

    #[test]
    fn everything_else_is_a_name() {
        assert_eq!(GroupRef::parse("word"), GroupRef::Name("word".into()));
        assert_eq!(GroupRef::parse("0"), GroupRef::Name("0".into()));
        assert_eq!(GroupRef::parse("-1"), GroupRef::Name("-1".into()));
        assert_eq!(GroupRef::from(0u32), GroupRef::Name("0".into()));
    }

    #[test]
    fn backref_rendering() {
        let mut out = String::new();
        Backref::new(2u32).render_into(&mut out);
        Backref::new("tag").render_into(&mut out);
        assert_eq!(out, r"\2(?P=tag)");
    }

    #[test]
    fn conditional_names_are_bracketed() {
        let mut out = String::new();
        Conditional::new(1u32, Node::literal("a"), Node::literal("b")).render_into(&mut out);
        Conditional::new("q", Node::literal("b"), Node::literal("c")).render_into(&mut out);
        assert_eq!(out, "(?(1)a|b)(?(<q>)b|c)");
    }
}
