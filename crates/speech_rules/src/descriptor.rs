//! Declarative rule descriptors, as found in symbol and function rule files.
//!
//! ```json
//! { "category": "Sm", "key": "2B", "mappings": { "default": { "short": "plus" } } }
//! { "category": "Functions", "names": ["sin"], "mappings": { "trig": { "verbose": "sine of" } } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output text keyed by style.
pub type StyleMappings = BTreeMap<String, String>;

/// Output text keyed by domain, then style.
pub type Mappings = BTreeMap<String, StyleMappings>;

/// Rules for one symbol, identified by its hexadecimal code point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolDescriptor {
    /// Informational grouping such as a Unicode general category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Code point in hex, without prefix (e.g. `"2B"`, `"1D400"`).
    pub key: String,
    /// Output text by domain, then style.
    #[serde(default)]
    pub mappings: Mappings,
}

impl SymbolDescriptor {
    /// Descriptor for the code point `key`, with no mappings yet.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Add one `domain -> style -> text` mapping.
    #[must_use]
    pub fn mapping(
        mut self,
        domain: impl Into<String>,
        style: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        insert_mapping(&mut self.mappings, domain, style, text);
        self
    }
}

/// Rules shared by one or more function names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Informational grouping, usually `Functions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Function names, each matched literally.
    pub names: Vec<String>,
    /// Output text by domain, then style.
    #[serde(default)]
    pub mappings: Mappings,
}

impl FunctionDescriptor {
    /// Descriptor for `names`, with no mappings yet.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add one `domain -> style -> text` mapping.
    #[must_use]
    pub fn mapping(
        mut self,
        domain: impl Into<String>,
        style: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        insert_mapping(&mut self.mappings, domain, style, text);
        self
    }
}

fn insert_mapping(
    mappings: &mut Mappings,
    domain: impl Into<String>,
    style: impl Into<String>,
    text: impl Into<String>,
) {
    mappings
        .entry(domain.into())
        .or_default()
        .insert(style.into(), text.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_descriptor_from_json() {
        let json = r#"{"category":"Sm","key":"2B","mappings":{"default":{"short":"plus","default":"plus sign"}}}"#;
        let descriptor: SymbolDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.category.as_deref(), Some("Sm"));
        assert_eq!(descriptor.key, "2B");
        assert_eq!(
            descriptor.mappings["default"].get("short").map(String::as_str),
            Some("plus")
        );
    }

    #[test]
    fn missing_mappings_deserialize_empty() {
        let descriptor: FunctionDescriptor =
            serde_json::from_str(r#"{"names":["log"]}"#).unwrap();
        assert_eq!(descriptor.names, ["log"]);
        assert!(descriptor.mappings.is_empty());
        assert!(descriptor.category.is_none());
    }

    #[test]
    fn builder_matches_json_shape() {
        let built = FunctionDescriptor::new(["sin", "cos"]).mapping("trig", "verbose", "sine of");
        let parsed: FunctionDescriptor = serde_json::from_str(
            r#"{"names":["sin","cos"],"mappings":{"trig":{"verbose":"sine of"}}}"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }
}
