//! Anything a rule lookup can be run against.

/// A unit of input exposing its literal text.
///
/// Lookups never construct or mutate tokens; they only read the text.
pub trait Token {
    /// The literal text of this token.
    fn text(&self) -> &str;
}

impl Token for str {
    #[inline]
    fn text(&self) -> &str {
        self
    }
}

impl Token for String {
    #[inline]
    fn text(&self) -> &str {
        self
    }
}

impl<T: Token + ?Sized> Token for &T {
    #[inline]
    fn text(&self) -> &str {
        (**self).text()
    }
}

/// Owned token wrapping a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextToken(String);

impl TextToken {
    /// Wrap `text` as a token.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Token for TextToken {
    #[inline]
    fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextToken {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
