//! A reader session: the rule store and the navigation history it drives.

use crate::config::ReaderConfig;
use anyhow::{Context as _, Result};
use log::{debug, info};
use nav_history::{HistoryTracker, Recovery, SelectionHost};
use speech_rules::{
    CompoundStore, DynamicConstraintValues, DynamicCstr, FunctionDescriptor, SharedCompoundStore,
    SymbolDescriptor, load_functions_json, load_rules_dir, load_symbols_json,
};
use std::path::Path;
use tracing::info_span;

/// Import phase of a [`Reader`].
///
/// Every rule is added here; [`build`](Self::build) ends the phase, so no
/// lookup can run before the imports it depends on have completed.
#[derive(Debug, Default)]
pub struct ReaderBuilder {
    config: ReaderConfig,
    store: CompoundStore,
}

impl ReaderBuilder {
    /// Start an import phase with no rules.
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            store: CompoundStore::new(),
        }
    }

    /// Import the rules of one symbol.
    #[must_use]
    pub fn symbol(mut self, descriptor: &SymbolDescriptor) -> Self {
        self.store.add_symbol_rules(descriptor);
        self
    }

    /// Import the rules of one function descriptor.
    #[must_use]
    pub fn function(mut self, descriptor: &FunctionDescriptor) -> Self {
        self.store.add_function_rules(descriptor);
        self
    }

    /// Import a JSON array of symbol descriptors.
    ///
    /// # Errors
    /// Returns an error if `json` does not parse.
    pub fn symbols_json(mut self, json: &str) -> Result<Self> {
        load_symbols_json(&mut self.store, json)?;
        Ok(self)
    }

    /// Import a JSON array of function descriptors.
    ///
    /// # Errors
    /// Returns an error if `json` does not parse.
    pub fn functions_json(mut self, json: &str) -> Result<Self> {
        load_functions_json(&mut self.store, json)?;
        Ok(self)
    }

    /// Import every rule file under `dir`.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or parsed.
    pub fn rules_dir(mut self, dir: &Path) -> Result<Self> {
        load_rules_dir(&mut self.store, dir)?;
        Ok(self)
    }

    /// Finish importing and start a session whose history is seeded with `seed`.
    ///
    /// The configured rule directory, if any, is loaded last.
    ///
    /// # Errors
    /// Returns an error if the configured rule directory cannot be loaded.
    pub fn build<E, H>(mut self, seed: E, host: H) -> Result<Reader<E, H>>
    where
        E: Copy + Eq,
        H: SelectionHost<E>,
    {
        let _span = info_span!("reader_build").entered();
        if let Some(dir) = self.config.rules_dir.clone() {
            load_rules_dir(&mut self.store, &dir)
                .with_context(|| format!("loading configured rules from {}", dir.display()))?;
        }
        info!(
            "reader ready: {} rule keys, history limit {}",
            self.store.len(),
            self.config.history_limit
        );
        let history = HistoryTracker::with_limit(seed, host, self.config.history_limit);
        Ok(Reader {
            constraint: self.config.constraint(),
            config: self.config,
            store: SharedCompoundStore::new(self.store),
            history,
        })
    }
}

/// Speech lookups plus focus history for one navigation session.
///
/// The store is shared and may be handed to other subsystems through
/// [`store`](Self::store); the history belongs to this session alone.
#[derive(Debug)]
pub struct Reader<E, H> {
    config: ReaderConfig,
    constraint: DynamicCstr,
    store: SharedCompoundStore,
    history: HistoryTracker<E, H>,
}

impl<E, H> Reader<E, H>
where
    E: Copy + Eq,
    H: SelectionHost<E>,
{
    /// Speech for `text` under the configured constraint; empty if unknown.
    pub fn speak(&self, text: &str) -> String {
        self.store.lookup_string(text, &self.constraint)
    }

    /// Speech for `text` under `constraint`; empty if unknown.
    pub fn speak_with(&self, text: &str, constraint: &DynamicCstr) -> String {
        self.store.lookup_string(text, constraint)
    }

    /// Domains and styles known to the store.
    pub fn constraint_values(&self) -> DynamicConstraintValues {
        self.store.dynamic_constraint_values()
    }

    /// Record that focus moved to `target`.
    pub fn focus_changed(&mut self, target: Option<E>) {
        self.history.update(target);
    }

    /// Report that `target` may have gone away; `true` means recovery is needed.
    pub fn target_invalidated(&mut self, target: &E) -> bool {
        let invalidated = self.history.become_invalid(target);
        debug!("target invalidated: {invalidated}");
        invalidated
    }

    /// Where to move focus after an invalidation.
    pub fn recover(&mut self, accept: Option<&dyn Fn(&E) -> bool>) -> Recovery<E> {
        self.history.revert(accept)
    }
}

impl<E, H> Reader<E, H> {
    /// Configuration the session was built with.
    #[inline]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// The constraint [`speak`](Self::speak) uses.
    #[inline]
    pub fn constraint(&self) -> &DynamicCstr {
        &self.constraint
    }

    /// Replace the default constraint, e.g. when the user changes verbosity.
    pub fn set_constraint(&mut self, constraint: DynamicCstr) {
        self.constraint = constraint;
    }

    /// Handle to the rule store.
    #[inline]
    pub fn store(&self) -> &SharedCompoundStore {
        &self.store
    }

    /// The session's navigation history.
    #[inline]
    pub fn history(&self) -> &HistoryTracker<E, H> {
        &self.history
    }
}
