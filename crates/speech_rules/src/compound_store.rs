//! Dispatch of lookups to per-key [`SimpleStore`]s.

use crate::constraint::{DynamicConstraintValues, DynamicCstr};
use crate::descriptor::{FunctionDescriptor, Mappings, SymbolDescriptor};
use crate::rule::SpeechRule;
use crate::simple_store::SimpleStore;
use crate::token::Token;
use log::{trace, warn};
use std::collections::HashMap;

/// Decode a hexadecimal code point (e.g. `"2B"`, `"1D400"`) to its text.
///
/// Supplementary code points (0x10000 and up) come out as one `char`; in
/// UTF-16 that is the pair `0xD800 + ((v - 0x10000) >> 10)`,
/// `0xDC00 + ((v - 0x10000) & 0x3FF)`. Returns `None` unless `hex` is made of
/// hex digits only (no sign, prefix or whitespace) and names a Unicode scalar
/// value.
pub fn decode_code_point(hex: &str) -> Option<String> {
    if hex.is_empty() || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(value).map(String::from)
}

/// All speech rules, indexed by the literal text they match.
///
/// One instance is built during startup, filled through
/// [`add_symbol_rules`](Self::add_symbol_rules) and
/// [`add_function_rules`](Self::add_function_rules), and then handed to
/// whatever needs lookups. All lookups are total.
#[derive(Debug, Clone, Default)]
pub struct CompoundStore {
    stores: HashMap<String, SimpleStore>,
}

impl CompoundStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh store for `literal` from `mappings`, replacing any store
    /// already registered for that literal. `name` is only diagnostic.
    pub fn define_rules(&mut self, name: &str, literal: &str, mappings: &Mappings) {
        let mut store = SimpleStore::new();
        store.define_rules_from_mappings(name, literal, mappings);
        trace!("defined {} rules for {name}", store.len());
        if self.stores.insert(literal.to_owned(), store).is_some() {
            trace!("store for {literal:?} replaced by {name}");
        }
    }

    /// Import the rules of one symbol, keyed by its decoded character.
    pub fn add_symbol_rules(&mut self, descriptor: &SymbolDescriptor) {
        let Some(literal) = decode_code_point(&descriptor.key) else {
            warn!("skipping symbol with invalid code point {:?}", descriptor.key);
            return;
        };
        self.define_rules(&descriptor.key, &literal, &descriptor.mappings);
    }

    /// Import the rules of a function descriptor, one store per name.
    pub fn add_function_rules(&mut self, descriptor: &FunctionDescriptor) {
        for name in &descriptor.names {
            self.define_rules(name, name, &descriptor.mappings);
        }
    }

    /// The rule for `token` under `constraint`, found via the token's own text.
    pub fn lookup_rule<T: Token + ?Sized>(
        &self,
        token: &T,
        constraint: &DynamicCstr,
    ) -> Option<&SpeechRule> {
        self.stores
            .get(token.text())
            .and_then(|store| store.lookup_rule(token, constraint))
    }

    /// Speech for `text` under `constraint`; empty when no rule applies.
    pub fn lookup_string(&self, text: &str, constraint: &DynamicCstr) -> String {
        self.lookup_rule(text, constraint)
            .map(SpeechRule::speech)
            .unwrap_or_default()
    }

    /// Union of the constraint values of every store.
    pub fn dynamic_constraint_values(&self) -> DynamicConstraintValues {
        let mut values = DynamicConstraintValues::new();
        for store in self.stores.values() {
            values.merge(store.dynamic_constraint_values());
        }
        values
    }

    /// The store registered for `literal`.
    #[inline]
    pub fn store(&self, literal: &str) -> Option<&SimpleStore> {
        self.stores.get(literal)
    }

    /// Whether a store is registered for `literal`.
    #[inline]
    pub fn contains_key(&self, literal: &str) -> bool {
        self.stores.contains_key(literal)
    }

    /// Number of distinct literal keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Whether no rules have been imported.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_basic_plane() {
        assert_eq!(decode_code_point("2B").as_deref(), Some("+"));
        assert_eq!(decode_code_point("03b1").as_deref(), Some("\u{3b1}"));
    }

    #[test]
    fn decodes_supplementary_plane_as_surrogate_pair() {
        let decoded = decode_code_point("1D400").unwrap_or_default();
        assert_eq!(decoded.chars().count(), 1);
        assert_eq!(decoded.encode_utf16().collect::<Vec<u16>>(), [0xD835, 0xDC00]);
    }

    #[test]
    fn rejects_garbage_keys() {
        assert_eq!(decode_code_point("zz"), None);
        assert_eq!(decode_code_point(""), None);
        assert_eq!(decode_code_point(" 2B "), None);
        assert_eq!(decode_code_point("+2B"), None);
        assert_eq!(decode_code_point("0x2B"), None);
        assert_eq!(decode_code_point("110000"), None);
        // Lone surrogates are not scalar values.
        assert_eq!(decode_code_point("D800"), None);
    }

    #[test]
    fn invalid_symbol_key_is_skipped() {
        let mut store = CompoundStore::new();
        store.add_symbol_rules(&SymbolDescriptor::new("xyz").mapping("default", "short", "x"));
        assert!(store.is_empty());
    }

    #[test]
    fn stores_are_indexed_by_literal_not_name() {
        let mut store = CompoundStore::new();
        store.add_symbol_rules(&SymbolDescriptor::new("2B").mapping("default", "short", "plus"));
        assert!(store.contains_key("+"));
        assert!(!store.contains_key("2B"));
        let rule = store.lookup_rule("+", &DynamicCstr::new("default", "short"));
        assert_eq!(rule.map(SpeechRule::name), Some("2B"));
    }
}
