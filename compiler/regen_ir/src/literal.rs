//! Fixed text.

/// Literal text, matched character for character.
///
/// Every character is its own quantifiable unit, so a literal contributes as
/// many atoms as it has characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn atoms(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append the escaped text.
    ///
    /// Escaping is delegated to the engine's own routine so that every
    /// metacharacter it knows about is covered.
    pub fn render_into(&self, out: &mut String) {
        out.push_str(&fancy_regex::escape(&self.text));
    }
}
