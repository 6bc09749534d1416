//! Repetition: a child with `{min,max}` bounds and greediness.

use std::fmt;

use crate::{Group, Node, PatternError};

/// Upper (or, when validating, lower) repetition bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    Finite(u32),
    Infinite,
}

/// Shorthand for an unbounded maximum.
pub const INF: Bound = Bound::Infinite;

impl Bound {
    pub fn is_infinite(self) -> bool {
        matches!(self, Bound::Infinite)
    }

    pub fn finite(self) -> Option<u32> {
        match self {
            Bound::Finite(n) => Some(n),
            Bound::Infinite => None,
        }
    }

    /// Product of two bounds; infinite if either side is.
    ///
    /// Returns `None` on `u32` overflow.
    pub fn checked_mul(self, other: Bound) -> Option<Bound> {
        match (self, other) {
            (Bound::Finite(a), Bound::Finite(b)) => a.checked_mul(b).map(Bound::Finite),
            _ => Some(Bound::Infinite),
        }
    }
}

impl From<u32> for Bound {
    fn from(n: u32) -> Self {
        Bound::Finite(n)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite(n) => write!(f, "{n}"),
            Bound::Infinite => f.write_str("inf"),
        }
    }
}

/// Canonical quantifier suffix for a pair of bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
    /// `{n}`
    Exactly(u32),
    /// `{min,max}` or `{min,}`
    Between { min: u32, max: Option<u32> },
}

impl Quantifier {
    /// Map bounds to their quantifier.
    ///
    /// `Ok(None)` means `{1,1}`: the child stands on its own.
    pub fn calc(min: Bound, max: Bound) -> Result<Option<Quantifier>, PatternError> {
        let (lo, hi) = checked_bounds(min, max)?;
        Ok(Self::from_checked(lo, hi))
    }

    fn from_checked(lo: u32, hi: Option<u32>) -> Option<Quantifier> {
        match (lo, hi) {
            (1, Some(1)) => None,
            (0, None) => Some(Quantifier::ZeroOrMore),
            (1, None) => Some(Quantifier::OneOrMore),
            (0, Some(1)) => Some(Quantifier::ZeroOrOne),
            (lo, Some(hi)) if lo == hi => Some(Quantifier::Exactly(lo)),
            (lo, hi) => Some(Quantifier::Between { min: lo, max: hi }),
        }
    }

    pub fn render_into(self, out: &mut String) {
        use fmt::Write;
        // Writing to a String cannot fail.
        let _ = match self {
            Quantifier::ZeroOrMore => write!(out, "*"),
            Quantifier::OneOrMore => write!(out, "+"),
            Quantifier::ZeroOrOne => write!(out, "?"),
            Quantifier::Exactly(n) => write!(out, "{{{n}}}"),
            // The engine has no `{,n}` form, so a zero minimum stays explicit.
            Quantifier::Between { min, max: Some(max) } => write!(out, "{{{min},{max}}}"),
            Quantifier::Between { min, max: None } => write!(out, "{{{min},}}"),
        };
    }
}

fn checked_bounds(min: Bound, max: Bound) -> Result<(u32, Option<u32>), PatternError> {
    let invalid = |reason| PatternError::InvalidBound { min, max, reason };
    let Bound::Finite(lo) = min else {
        return Err(invalid("minimum cannot be infinite"));
    };
    match max {
        Bound::Finite(0) => Err(invalid("maximum cannot be zero")),
        Bound::Finite(hi) if hi < lo => Err(invalid("minimum is greater than maximum")),
        Bound::Finite(hi) => Ok((lo, Some(hi))),
        Bound::Infinite => Ok((lo, None)),
    }
}

/// A repeated child.
///
/// Invariants, checked at construction: `min` is finite, `max` is not zero,
/// and `min <= max`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Repeat {
    child: Box<Node>,
    min: u32,
    max: Bound,
    greedy: bool,
}

impl Repeat {
    pub fn new(child: Node, min: Bound, max: Bound, greedy: bool) -> Result<Self, PatternError> {
        let (min, _) = checked_bounds(min, max)?;
        Ok(Repeat {
            child: Box::new(child),
            min,
            max,
            greedy,
        })
    }

    /// Greedy repetition between `min` and `max` times.
    pub fn between(child: Node, min: u32, max: u32) -> Result<Self, PatternError> {
        Self::new(child, Bound::Finite(min), Bound::Finite(max), true)
    }

    /// Greedy repetition at least `min` times.
    pub fn at_least(child: Node, min: u32) -> Result<Self, PatternError> {
        Self::new(child, Bound::Finite(min), Bound::Infinite, true)
    }

    /// Greedy repetition exactly `count` times.
    pub fn exact(child: Node, count: u32) -> Result<Self, PatternError> {
        Self::between(child, count, count)
    }

    /// Non-greedy copy.
    #[must_use]
    pub fn lazy(mut self) -> Self {
        self.greedy = false;
        self
    }

    pub fn child(&self) -> &Node {
        &self.child
    }

    pub fn into_child(self) -> Node {
        *self.child
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> Bound {
        self.max
    }

    pub fn is_greedy(&self) -> bool {
        self.greedy
    }

    pub fn is_fixed(&self) -> bool {
        self.max == Bound::Finite(self.min)
    }

    /// The exact count of a fixed repetition.
    pub fn count(&self) -> Option<u32> {
        self.is_fixed().then_some(self.min)
    }

    /// Quantifier this repetition renders with; `None` for `{1,1}`.
    pub fn quantifier(&self) -> Option<Quantifier> {
        Quantifier::from_checked(self.min, self.max.finite())
    }

    /// A `{1,1}` repetition is transparent and counts as its child;
    /// anything quantified is one unit.
    pub fn atoms(&self) -> usize {
        if self.quantifier().is_some() {
            1
        } else {
            self.child.atoms()
        }
    }

    pub fn is_modifier(&self) -> bool {
        self.quantifier().is_none() && self.child.is_modifier()
    }

    pub fn render_into(&self, out: &mut String) {
        let Some(quantifier) = self.quantifier() else {
            self.child.render_into(out);
            return;
        };
        if needs_wrapper(&self.child) {
            out.push_str("(?:");
            self.child.render_into(out);
            out.push(')');
        } else {
            self.child.render_into(out);
        }
        quantifier.render_into(out);
        if !self.greedy {
            out.push('?');
        }
    }
}

/// Whether `child` must be wrapped in `(?:...)` before a quantifier binds
/// to it.
///
/// Beyond the atom count this catches shapes that count as one atom but
/// cannot take a quantifier directly: an already quantified child (`a{2}*`
/// is not valid syntax) and undelimited wrappers around one.
pub fn needs_wrapper(child: &Node) -> bool {
    match child {
        Node::Repeat(inner) => match inner.quantifier() {
            Some(_) => true,
            None => needs_wrapper(inner.child()),
        },
        Node::Group(group) if !group.is_atomic() => match group.children() {
            [only] => needs_wrapper(only),
            _ => true,
        },
        Node::Alternation(alt) => !alt.is_delimited(),
        _ => child.atoms() != 1,
    }
}

/// `child` in a form a quantifier can bind to.
pub fn quantifiable(child: &Node) -> Node {
    if !needs_wrapper(child) {
        return child.clone();
    }
    match child {
        Node::Group(group) if !group.is_atomic() => Node::Group(group.atomize()),
        Node::Alternation(alt) => Node::Alternation(alt.delimited()),
        _ => Node::Group(Group::wrapper(child.clone())),
    }
}
