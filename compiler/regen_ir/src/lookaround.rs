//! Zero-width lookahead and lookbehind assertions.

use crate::Node;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ahead,
    Behind,
}

/// `(?=...)`, `(?!...)`, `(?<=...)` or `(?<!...)`.
///
/// The assertion's own delimiters make the child atomic, so the child is
/// rendered as is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lookaround {
    child: Box<Node>,
    direction: Direction,
    negated: bool,
}

impl Lookaround {
    pub fn new(child: Node, direction: Direction, negated: bool) -> Self {
        Lookaround {
            child: Box::new(child),
            direction,
            negated,
        }
    }

    pub fn child(&self) -> &Node {
        &self.child
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[must_use]
    pub fn with_child(&self, child: Node) -> Self {
        Self::new(child, self.direction, self.negated)
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str(match (self.direction, self.negated) {
            (Direction::Ahead, false) => "(?=",
            (Direction::Ahead, true) => "(?!",
            (Direction::Behind, false) => "(?<=",
            (Direction::Behind, true) => "(?<!",
        });
        self.child.render_into(out);
        out.push(')');
    }
}
