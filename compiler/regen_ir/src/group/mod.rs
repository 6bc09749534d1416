//! Groups: delimited `(...)`, `(?:...)`, `(?P<name>...)` and the
//! undelimited sequence wrapper.
//!
//! The sequence kind is an implementation detail. It has no syntax of its
//! own, is never capturing, and exists only to hold an ordered run of
//! children; plain composition (`vec!["a", "b"]`) produces one. Its atom
//! count and modifier-ness pass straight through to its children.

use crate::reference::GroupRef;
use crate::{Node, PatternError};

/// What kind of delimiter (if any) a group renders with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `(...)`
    Capturing,
    /// `(?P<name>...)`
    Named(String),
    /// `(?:...)`
    NonCapturing,
    /// No delimiter.
    Sequence,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group {
    children: Vec<Node>,
    kind: GroupKind,
}

impl Group {
    /// Build a user-visible (delimited) group.
    ///
    /// A name implies capturing; asking for a named, non-capturing group is
    /// an error.
    pub fn new(
        children: Vec<Node>,
        capturing: bool,
        name: Option<&str>,
    ) -> Result<Self, PatternError> {
        let kind = match (name, capturing) {
            (Some(name), false) => {
                return Err(PatternError::IncompatibleNaming {
                    name: name.to_string(),
                });
            }
            (Some(name), true) => {
                validate_name(name)?;
                GroupKind::Named(name.to_string())
            }
            (None, true) => GroupKind::Capturing,
            (None, false) => GroupKind::NonCapturing,
        };
        Ok(Group { children, kind })
    }

    pub fn capturing(children: Vec<Node>) -> Self {
        Group {
            children,
            kind: GroupKind::Capturing,
        }
    }

    pub fn non_capturing(children: Vec<Node>) -> Self {
        Group {
            children,
            kind: GroupKind::NonCapturing,
        }
    }

    pub fn named(name: &str, children: Vec<Node>) -> Result<Self, PatternError> {
        Self::new(children, true, Some(name))
    }

    /// Undelimited run of children.
    pub fn sequence(children: Vec<Node>) -> Self {
        Group {
            children,
            kind: GroupKind::Sequence,
        }
    }

    /// Non-capturing wrapper making `child` a single atom.
    pub fn wrapper(child: Node) -> Self {
        Self::non_capturing(vec![child])
    }

    pub fn kind(&self) -> &GroupKind {
        &self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn is_atomic(&self) -> bool {
        self.kind != GroupKind::Sequence
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.kind, GroupKind::Capturing | GroupKind::Named(_))
    }

    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            GroupKind::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Same kind, different children.
    #[must_use]
    pub fn with_children(&self, children: Vec<Node>) -> Self {
        Group {
            children,
            kind: self.kind.clone(),
        }
    }

    pub fn atoms(&self) -> usize {
        if self.is_atomic() {
            1
        } else {
            self.children.iter().map(Node::atoms).sum()
        }
    }

    pub fn is_modifier(&self) -> bool {
        !self.is_atomic() && self.children.first().is_some_and(Node::is_modifier)
    }

    /// Delimited version of this group; a sequence becomes `(?:...)`.
    #[must_use]
    pub fn atomize(&self) -> Self {
        if self.is_atomic() {
            self.clone()
        } else {
            Self::non_capturing(self.children.clone())
        }
    }

    pub fn render_into(&self, out: &mut String) {
        match &self.kind {
            GroupKind::Capturing => out.push('('),
            GroupKind::Named(name) => {
                out.push_str("(?P<");
                out.push_str(name);
                out.push('>');
            }
            GroupKind::NonCapturing => out.push_str("(?:"),
            GroupKind::Sequence => {}
        }
        render_sequence(&self.children, out);
        if self.is_atomic() {
            out.push(')');
        }
    }
}

/// Render children back to back.
///
/// A numeric backreference directly followed by a digit would absorb it into
/// the group number (`\1` + `0` reads as `\10`), so such a backreference is
/// wrapped in `(?:...)`.
pub(crate) fn render_sequence(children: &[Node], out: &mut String) {
    let mut pending: Option<String> = None;
    for child in children {
        let mut piece = String::new();
        child.render_into(&mut piece);
        if piece.is_empty() {
            continue;
        }
        if let Some(backref) = pending.take() {
            if piece.starts_with(|c: char| c.is_ascii_digit()) {
                out.push_str("(?:");
                out.push_str(&backref);
                out.push(')');
            } else {
                out.push_str(&backref);
            }
        }
        if matches!(child, Node::Backref(b) if matches!(b.target(), GroupRef::Index(_))) {
            pending = Some(piece);
        } else {
            out.push_str(&piece);
        }
    }
    if let Some(backref) = pending {
        out.push_str(&backref);
    }
}

/// Group names must look like identifiers: `[A-Za-z_][A-Za-z0-9_]*`.
fn validate_name(name: &str) -> Result<(), PatternError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(PatternError::InvalidGroupName {
            name: name.to_string(),
        })
    }
}
