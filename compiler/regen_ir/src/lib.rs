//! Pattern node algebra.
//!
//! A pattern is a tree of [`Node`]s: literals, character classes and sets,
//! repetitions, groups, alternations, lookaround assertions,
//! backreferences and conditionals. This crate owns the data model and the
//! parts of the node contract that need no context:
//!
//! - **atom counting** ([`Node::atoms`]): how many quantifiable units a node
//!   renders as, which decides whether it needs a wrapper before a
//!   quantifier binds to it;
//! - **atomization** ([`Node::atomize`]): wrapping a node so it is exactly
//!   one atom;
//! - **rendering** ([`Node::render`]): engine syntax for a node that is
//!   already safe to render.
//!
//! Simplification, de-atomization and the compile pipeline build on top of
//! this in `regen_canon`.
//!
//! # Construction
//!
//! Nodes are built directly (`Repeat::new`, `Group::named`, ...), through
//! the helpers in [`builders`], or by coercion ([`IntoNode`], [`Value`]).
//! Invalid shapes are rejected at construction with a [`PatternError`].

mod alternation;
pub mod builders;
pub mod coerce;
pub mod definitions;
mod errors;
mod group;
mod literal;
mod lookaround;
mod node;
mod reference;
pub mod repeat;
mod set;
mod verbatim;

pub use alternation::Alternation;
pub use coerce::{Coercions, IntoNode, Shape, Value};
pub use errors::PatternError;
pub use group::{Group, GroupKind};
pub use literal::Literal;
pub use lookaround::{Direction, Lookaround};
pub use node::Node;
pub use reference::{Backref, Conditional, GroupRef};
pub use repeat::{Bound, Quantifier, Repeat, INF};
pub use set::{ClassEscape, IntoSetItem, Set, SetItem};
pub use verbatim::Verbatim;
