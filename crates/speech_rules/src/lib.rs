//! Speech rules for symbols and function names.
//!
//! Rules map a literal piece of text (`+`, `sin`, `𝐀`) to speech output and
//! are selected by a [`DynamicCstr`], a `(domain, style)` pair. A
//! [`CompoundStore`] owns one [`SimpleStore`] per literal and answers lookups;
//! the [`loader`] module fills it from JSON rule files.
//!
//! Lookups are total: a miss is `None` or the empty string, never an error.

#![forbid(unsafe_code)]

pub mod compound_store;
pub mod constraint;
pub mod descriptor;
pub mod loader;
pub mod rule;
pub mod shared;
pub mod simple_store;
pub mod token;

pub use compound_store::{CompoundStore, decode_code_point};
pub use constraint::{ConstraintAxis, DynamicConstraintValues, DynamicCstr};
pub use descriptor::{FunctionDescriptor, Mappings, StyleMappings, SymbolDescriptor};
pub use loader::{
    LoadSummary, RuleFileKind, load_functions_json, load_rule_file, load_rules_dir,
    load_symbols_json,
};
pub use rule::{OutputComponent, Precondition, SpeechRule};
pub use shared::SharedCompoundStore;
pub use simple_store::SimpleStore;
pub use token::{TextToken, Token};
