//! Immutable speech rules and their parts.

use crate::constraint::DynamicCstr;
use crate::token::Token;

/// One fragment of speech output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputComponent {
    /// Text to emit.
    pub content: String,
}

impl OutputComponent {
    /// A component emitting `content`.
    #[inline]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Condition a token must satisfy before a rule applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// The token text must equal this string exactly.
    TextEquals(String),
}

impl Precondition {
    /// Whether `token` satisfies this precondition.
    #[inline]
    pub fn matches<T: Token + ?Sized>(&self, token: &T) -> bool {
        match self {
            Self::TextEquals(literal) => token.text() == literal,
        }
    }
}

/// A rule mapping matching tokens to speech, under one constraint tuple.
///
/// Rules are built once at import and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRule {
    name: String,
    constraint: DynamicCstr,
    precondition: Precondition,
    action: Vec<OutputComponent>,
}

impl SpeechRule {
    /// Build a rule; `name` is diagnostic only and plays no part in matching.
    pub fn new(
        name: impl Into<String>,
        constraint: DynamicCstr,
        precondition: Precondition,
        action: Vec<OutputComponent>,
    ) -> Self {
        Self {
            name: name.into(),
            constraint,
            precondition,
            action,
        }
    }

    /// Diagnostic name given at definition time.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text this rule matches.
    #[inline]
    pub fn literal(&self) -> &str {
        match &self.precondition {
            Precondition::TextEquals(literal) => literal,
        }
    }

    /// The `(domain, style)` tuple this rule is filed under.
    #[inline]
    pub fn constraint(&self) -> &DynamicCstr {
        &self.constraint
    }

    /// Condition a token must meet for this rule to apply.
    #[inline]
    pub fn precondition(&self) -> &Precondition {
        &self.precondition
    }

    /// Output components, in speaking order.
    #[inline]
    pub fn action(&self) -> &[OutputComponent] {
        &self.action
    }

    /// Action components joined by single spaces.
    pub fn speech(&self) -> String {
        self.action
            .iter()
            .map(|component| component.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
