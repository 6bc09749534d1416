//! Character classes and bracket sets.
//!
//! Two shapes share this module: the predefined escape classes (`\d`, `\s`,
//! `\w` and their negations), which stand alone as nodes, and bracket sets
//! (`[a-z_\d]`), which hold a list of [`SetItem`]s. Both always contribute
//! exactly one atom.

use std::fmt;

use crate::PatternError;

/// Predefined escape classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassEscape {
    Digit,
    NotDigit,
    Whitespace,
    NotWhitespace,
    Word,
    NotWord,
}

impl ClassEscape {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassEscape::Digit => r"\d",
            ClassEscape::NotDigit => r"\D",
            ClassEscape::Whitespace => r"\s",
            ClassEscape::NotWhitespace => r"\S",
            ClassEscape::Word => r"\w",
            ClassEscape::NotWord => r"\W",
        }
    }
}

impl fmt::Display for ClassEscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a bracket set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SetItem {
    /// Each character of the string is a member.
    Chars(String),
    /// An inclusive character range.
    Range { start: char, end: char },
    /// A predefined class used inside brackets.
    Class(ClassEscape),
}

impl SetItem {
    pub fn chars(chars: impl Into<String>) -> Self {
        SetItem::Chars(chars.into())
    }

    /// Build a range from two bounds given as text.
    ///
    /// Each bound must be exactly one character, and `start` must not come
    /// after `end`.
    pub fn range(start: &str, end: &str) -> Result<Self, PatternError> {
        let start = single_char(start)?;
        let end = single_char(end)?;
        Self::char_range(start, end)
    }

    pub fn char_range(start: char, end: char) -> Result<Self, PatternError> {
        if start > end {
            return Err(PatternError::InvalidRangeElement {
                reason: format!("range start {start:?} is after range end {end:?}"),
            });
        }
        Ok(SetItem::Range { start, end })
    }

    /// Whether the item contributes no members (an empty `Chars`).
    pub fn is_empty(&self) -> bool {
        matches!(self, SetItem::Chars(chars) if chars.is_empty())
    }

    pub fn render_into(&self, out: &mut String) {
        match self {
            SetItem::Chars(chars) => {
                for c in chars.chars() {
                    push_escaped(c, out);
                }
            }
            SetItem::Range { start, end } => {
                push_escaped(*start, out);
                out.push('-');
                push_escaped(*end, out);
            }
            SetItem::Class(class) => out.push_str(class.as_str()),
        }
    }
}

fn single_char(bound: &str) -> Result<char, PatternError> {
    let mut chars = bound.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(PatternError::InvalidRangeElement {
            reason: format!("range bound {bound:?} is not a single character"),
        }),
    }
}

/// Escape characters that mean something inside brackets.
///
/// Besides the classic `-`, `]`, `\` and `^`, the engine treats `[` as a
/// nested class and `&&`/`~~` as set operators.
fn push_escaped(c: char, out: &mut String) {
    if matches!(c, '-' | ']' | '\\' | '^' | '[' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}

/// A bracket set: `[...]` or `[^...]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Set {
    items: Vec<SetItem>,
    negated: bool,
}

impl Set {
    pub fn new(items: Vec<SetItem>, negated: bool) -> Result<Self, PatternError> {
        if items.iter().all(SetItem::is_empty) {
            return Err(PatternError::EmptySet);
        }
        Ok(Set { items, negated })
    }

    pub fn items(&self) -> &[SetItem] {
        &self.items
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn render_into(&self, out: &mut String) {
        out.push('[');
        if self.negated {
            out.push('^');
        }
        for item in &self.items {
            item.render_into(out);
        }
        out.push(']');
    }
}

/// Conversion into a [`SetItem`].
///
/// Single characters and strings become [`SetItem::Chars`]; pairs become
/// ranges and must hold exactly one character per bound.
pub trait IntoSetItem {
    fn into_set_item(self) -> Result<SetItem, PatternError>;
}

impl IntoSetItem for SetItem {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        Ok(self)
    }
}

impl IntoSetItem for char {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        Ok(SetItem::Chars(self.to_string()))
    }
}

impl IntoSetItem for &str {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        Ok(SetItem::Chars(self.to_string()))
    }
}

impl IntoSetItem for String {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        Ok(SetItem::Chars(self))
    }
}

impl IntoSetItem for ClassEscape {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        Ok(SetItem::Class(self))
    }
}

impl IntoSetItem for (char, char) {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        SetItem::char_range(self.0, self.1)
    }
}

impl IntoSetItem for (&str, &str) {
    fn into_set_item(self) -> Result<SetItem, PatternError> {
        SetItem::range(self.0, self.1)
    }
}

#[cfg(test)]
mod tests;
