//! Hard errors raised while constructing or folding pattern nodes.
//!
//! Every variant is a programmer-input error: it is raised at the point of
//! the violating construction or fold step and no partial tree is returned.

use crate::coerce::Shape;
use crate::repeat::Bound;

/// Error raised by node construction or simplification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Repetition bounds with an infinite minimum, a zero maximum, or
    /// `min > max`.
    #[error("invalid repetition bounds {{{min},{max}}}: {reason}")]
    InvalidBound {
        min: Bound,
        max: Bound,
        reason: &'static str,
    },

    /// A group was given a name but asked to be non-capturing.
    #[error("group `{name}` cannot be both named and non-capturing")]
    IncompatibleNaming { name: String },

    /// Nested repetitions disagree on greediness and cannot be folded.
    #[error(
        "cannot fold a {} repetition over a {} repetition",
        greediness(*.outer_greedy),
        greediness(*.inner_greedy)
    )]
    IrreconcilableGreediness {
        outer_greedy: bool,
        inner_greedy: bool,
    },

    /// A range set element whose bounds are not single, ordered characters.
    #[error("invalid range element: {reason}")]
    InvalidRangeElement { reason: String },

    /// No coercion is registered for the supplied value's shape.
    #[error("no coercion into a pattern node for a {shape} value")]
    UncoercibleValue { shape: Shape },

    /// Group names must be ASCII identifiers.
    #[error("invalid group name `{name}`")]
    InvalidGroupName { name: String },

    /// A bracket set needs at least one element.
    #[error("character set has no elements")]
    EmptySet,
}

fn greediness(greedy: bool) -> &'static str {
    if greedy {
        "greedy"
    } else {
        "lazy"
    }
}
