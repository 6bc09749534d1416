//! Pre-rendered engine syntax.

use std::borrow::Cow;

/// Engine syntax emitted exactly as written (anchors, `.`, `\b`).
///
/// The text is not escaped and is treated as one atom. When `modifier` is
/// set the text is a suffix operator that binds to whatever precedes it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Verbatim {
    text: Cow<'static, str>,
    modifier: bool,
}

impl Verbatim {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Verbatim {
            text: text.into(),
            modifier: false,
        }
    }

    pub fn modifier(text: impl Into<Cow<'static, str>>) -> Self {
        Verbatim {
            text: text.into(),
            modifier: true,
        }
    }

    pub(crate) const fn from_static(text: &'static str) -> Self {
        Verbatim {
            text: Cow::Borrowed(text),
            modifier: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_modifier(&self) -> bool {
        self.modifier
    }
}
