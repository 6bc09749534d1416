//! Predefined atoms.

use crate::{ClassEscape, Node, Verbatim};

/// `.`
pub const ANY_CHAR: Node = Node::Verbatim(Verbatim::from_static("."));
/// `^`
pub const LINE_START: Node = Node::Verbatim(Verbatim::from_static("^"));
/// `$`
pub const LINE_END: Node = Node::Verbatim(Verbatim::from_static("$"));
/// `\b`
pub const WORD_BOUNDARY: Node = Node::Verbatim(Verbatim::from_static(r"\b"));
/// `\B`
pub const NON_WORD_BOUNDARY: Node = Node::Verbatim(Verbatim::from_static(r"\B"));

pub const DIGIT: Node = Node::Class(ClassEscape::Digit);
pub const NON_DIGIT: Node = Node::Class(ClassEscape::NotDigit);
pub const WHITESPACE: Node = Node::Class(ClassEscape::Whitespace);
pub const NON_WHITESPACE: Node = Node::Class(ClassEscape::NotWhitespace);
pub const ALPHANUMERIC: Node = Node::Class(ClassEscape::Word);
pub const NON_ALPHANUMERIC: Node = Node::Class(ClassEscape::NotWord);
