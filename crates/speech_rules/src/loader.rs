//! Loading rule files into a [`CompoundStore`].
//!
//! A rule file is a JSON array of symbol descriptors or of function
//! descriptors. A rule directory holds them as `symbols/*.json` and
//! `functions/*.json`; files are read in name order so later files override
//! earlier ones deterministically.

use crate::compound_store::CompoundStore;
use crate::descriptor::{FunctionDescriptor, SymbolDescriptor};
use anyhow::{Context as _, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug_span;

/// Subdirectory holding symbol rule files.
pub const SYMBOLS_DIR: &str = "symbols";
/// Subdirectory holding function rule files.
pub const FUNCTIONS_DIR: &str = "functions";

/// Which descriptor shape a rule file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileKind {
    /// Arrays of [`SymbolDescriptor`]s.
    Symbols,
    /// Arrays of [`FunctionDescriptor`]s.
    Functions,
}

impl RuleFileKind {
    /// Subdirectory of a rule directory holding files of this kind.
    #[inline]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Symbols => SYMBOLS_DIR,
            Self::Functions => FUNCTIONS_DIR,
        }
    }
}

/// Counts of what a load imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Rule files read.
    pub files: usize,
    /// Descriptors imported across those files.
    pub descriptors: usize,
}

/// Import a JSON array of symbol descriptors. Returns the descriptor count.
///
/// # Errors
/// Returns an error if `json` is not an array of symbol descriptors.
pub fn load_symbols_json(store: &mut CompoundStore, json: &str) -> Result<usize> {
    let _span = debug_span!("load_symbols_json").entered();
    let descriptors: Vec<SymbolDescriptor> =
        serde_json::from_str(json).context("parsing symbol rules")?;
    for descriptor in &descriptors {
        store.add_symbol_rules(descriptor);
    }
    Ok(descriptors.len())
}

/// Import a JSON array of function descriptors. Returns the descriptor count.
///
/// # Errors
/// Returns an error if `json` is not an array of function descriptors.
pub fn load_functions_json(store: &mut CompoundStore, json: &str) -> Result<usize> {
    let _span = debug_span!("load_functions_json").entered();
    let descriptors: Vec<FunctionDescriptor> =
        serde_json::from_str(json).context("parsing function rules")?;
    for descriptor in &descriptors {
        store.add_function_rules(descriptor);
    }
    Ok(descriptors.len())
}

/// Import one rule file of the given kind.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_rule_file(store: &mut CompoundStore, kind: RuleFileKind, path: &Path) -> Result<usize> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading rule file {}", path.display()))?;
    let loaded = match kind {
        RuleFileKind::Symbols => load_symbols_json(store, &json),
        RuleFileKind::Functions => load_functions_json(store, &json),
    }
    .with_context(|| format!("in rule file {}", path.display()))?;
    debug!("loaded {loaded} descriptors from {}", path.display());
    Ok(loaded)
}

/// Import every rule file under `dir`, symbols first, then functions.
///
/// A missing `symbols` or `functions` subdirectory is skipped.
///
/// # Errors
/// Returns an error on the first file that cannot be listed, read or parsed;
/// rules imported before the failure stay in `store`.
pub fn load_rules_dir(store: &mut CompoundStore, dir: &Path) -> Result<LoadSummary> {
    let _span = debug_span!("load_rules_dir", dir = %dir.display()).entered();
    let mut summary = LoadSummary::default();
    for kind in [RuleFileKind::Symbols, RuleFileKind::Functions] {
        let sub_dir = dir.join(kind.dir_name());
        if !sub_dir.is_dir() {
            debug!("no {} directory under {}", kind.dir_name(), dir.display());
            continue;
        }
        for path in json_files(&sub_dir)? {
            summary.descriptors += load_rule_file(store, kind, &path)?;
            summary.files += 1;
        }
    }
    debug!(
        "loaded {} descriptors from {} files, {} keys in store",
        summary.descriptors,
        summary.files,
        store.len()
    );
    Ok(summary)
}

/// `.json` files directly inside `dir`, sorted by path.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry
            .with_context(|| format!("listing {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
