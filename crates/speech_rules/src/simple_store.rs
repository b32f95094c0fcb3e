//! Rules for a single primary key.

use crate::constraint::{DynamicConstraintValues, DynamicCstr};
use crate::descriptor::Mappings;
use crate::rule::{OutputComponent, Precondition, SpeechRule};
use crate::token::Token;
use log::trace;

/// The set of rules sharing one primary key, at most one per constraint tuple.
///
/// Matching is exact on both axes: a lookup whose `(domain, style)` has no
/// rule of its own finds nothing, even when another style of the same domain
/// exists.
#[derive(Debug, Clone, Default)]
pub struct SimpleStore {
    rules: Vec<SpeechRule>,
}

impl SimpleStore {
    /// A store with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule speaking `action` under the serialized `constraint_key`.
    ///
    /// A rule already present for the same constraint tuple is replaced.
    pub fn define_rule(
        &mut self,
        name: &str,
        constraint_key: &str,
        action: &str,
        precondition: Precondition,
    ) {
        let constraint = DynamicCstr::parse(constraint_key);
        let rule = SpeechRule::new(
            name,
            constraint,
            precondition,
            vec![OutputComponent::new(action)],
        );
        if let Some(existing) = self
            .rules
            .iter_mut()
            .find(|existing| existing.constraint() == rule.constraint())
        {
            trace!("replacing rule {name} for {constraint_key}");
            *existing = rule;
        } else {
            self.rules.push(rule);
        }
    }

    /// Define one rule per `(domain, style)` pair in `mappings`, each matching
    /// tokens whose text equals `literal`.
    pub fn define_rules_from_mappings(&mut self, name: &str, literal: &str, mappings: &Mappings) {
        for (domain, styles) in mappings {
            for (style, text) in styles {
                let constraint_key = format!("{domain}.{style}");
                self.define_rule(
                    name,
                    &constraint_key,
                    text,
                    Precondition::TextEquals(literal.to_owned()),
                );
            }
        }
    }

    /// The rule applying to `token` under exactly `constraint`, if any.
    pub fn lookup_rule<T: Token + ?Sized>(
        &self,
        token: &T,
        constraint: &DynamicCstr,
    ) -> Option<&SpeechRule> {
        self.rules
            .iter()
            .filter(|rule| rule.precondition().matches(token))
            .find(|rule| rule.constraint() == constraint)
    }

    /// Distinct constraint values over all rules in this store.
    pub fn dynamic_constraint_values(&self) -> DynamicConstraintValues {
        let mut values = DynamicConstraintValues::new();
        for rule in &self.rules {
            values.record(rule.constraint());
        }
        values
    }

    /// Rules in definition order; a replaced rule keeps its slot.
    #[inline]
    pub fn rules(&self) -> &[SpeechRule] {
        &self.rules
    }

    /// Number of rules, one per distinct constraint tuple.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the store holds no rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintAxis;
    use crate::descriptor::FunctionDescriptor;
    use std::collections::BTreeSet;

    fn plus_store() -> SimpleStore {
        let mut store = SimpleStore::new();
        let descriptor = FunctionDescriptor::new(["+"])
            .mapping("default", "short", "plus")
            .mapping("default", "verbose", "plus sign")
            .mapping("clearspeak", "short", "add");
        store.define_rules_from_mappings("2B", "+", &descriptor.mappings);
        store
    }

    #[test]
    fn one_rule_per_pair() {
        let store = plus_store();
        assert_eq!(store.len(), 3);
        let rule = store
            .lookup_rule("+", &DynamicCstr::new("default", "verbose"))
            .map(SpeechRule::speech);
        assert_eq!(rule.as_deref(), Some("plus sign"));
    }

    #[test]
    fn lookup_needs_exact_match_on_both_axes() {
        let store = plus_store();
        assert!(
            store
                .lookup_rule("+", &DynamicCstr::new("clearspeak", "verbose"))
                .is_none()
        );
        assert!(
            store
                .lookup_rule("+", &DynamicCstr::new("other", "short"))
                .is_none()
        );
    }

    #[test]
    fn lookup_checks_token_text() {
        let store = plus_store();
        assert!(
            store
                .lookup_rule("-", &DynamicCstr::new("default", "short"))
                .is_none()
        );
    }

    #[test]
    fn redefining_a_tuple_replaces_the_rule() {
        let mut store = plus_store();
        store.define_rule(
            "2B",
            "default.short",
            "positive",
            Precondition::TextEquals("+".to_owned()),
        );
        assert_eq!(store.len(), 3);
        let speech = store
            .lookup_rule("+", &DynamicCstr::new("default", "short"))
            .map(SpeechRule::speech);
        assert_eq!(speech.as_deref(), Some("positive"));
    }

    #[test]
    fn constraint_values_are_distinct() {
        let values = plus_store().dynamic_constraint_values();
        assert_eq!(values.axis(ConstraintAxis::Domain).map(BTreeSet::len), Some(2));
        assert_eq!(values.axis(ConstraintAxis::Style).map(BTreeSet::len), Some(2));
        assert!(values.contains(ConstraintAxis::Domain, "clearspeak"));
    }

    #[test]
    fn empty_mappings_define_nothing() {
        let mut store = SimpleStore::new();
        store.define_rules_from_mappings("empty", "x", &Mappings::new());
        assert!(store.is_empty());
        assert!(store.dynamic_constraint_values().is_empty());
    }
}
