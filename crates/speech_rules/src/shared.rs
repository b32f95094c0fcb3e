//! A [`CompoundStore`] handle that can be shared across threads.

use crate::compound_store::CompoundStore;
use crate::constraint::{DynamicConstraintValues, DynamicCstr};
use crate::rule::SpeechRule;
use crate::token::Token;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared ownership of one [`CompoundStore`].
///
/// Imports run inside a single exclusive section per call; lookups take the
/// shared section, so an import batch never interleaves with a lookup. A lock
/// poisoned by a panicking importer is recovered rather than propagated, which
/// keeps lookups total.
#[derive(Debug, Clone, Default)]
pub struct SharedCompoundStore {
    inner: Arc<RwLock<CompoundStore>>,
}

impl SharedCompoundStore {
    /// Take shared ownership of `store`.
    pub fn new(store: CompoundStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run a batch of writes under the exclusive section.
    pub fn import<R>(&self, write: impl FnOnce(&mut CompoundStore) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        write(&mut *guard)
    }

    /// Run a read under the shared section.
    pub fn read<R>(&self, read: impl FnOnce(&CompoundStore) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        read(&*guard)
    }

    /// Owned copy of the matching rule, see [`CompoundStore::lookup_rule`].
    pub fn lookup_rule<T: Token + ?Sized>(
        &self,
        token: &T,
        constraint: &DynamicCstr,
    ) -> Option<SpeechRule> {
        self.read(|store| store.lookup_rule(token, constraint).cloned())
    }

    /// See [`CompoundStore::lookup_string`].
    pub fn lookup_string(&self, text: &str, constraint: &DynamicCstr) -> String {
        self.read(|store| store.lookup_string(text, constraint))
    }

    /// See [`CompoundStore::dynamic_constraint_values`].
    pub fn dynamic_constraint_values(&self) -> DynamicConstraintValues {
        self.read(CompoundStore::dynamic_constraint_values)
    }
}

impl From<CompoundStore> for SharedCompoundStore {
    fn from(store: CompoundStore) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FunctionDescriptor;
    use std::thread;

    #[test]
    fn readers_see_completed_imports() {
        let shared = SharedCompoundStore::default();
        shared.import(|store| {
            store.add_function_rules(
                &FunctionDescriptor::new(["ln"]).mapping("default", "short", "natural log"),
            );
        });

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                thread::spawn(move || {
                    reader.lookup_string("ln", &DynamicCstr::new("default", "short"))
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "natural log");
        }
    }

    #[test]
    fn poisoned_lock_still_serves_lookups() {
        let shared = SharedCompoundStore::default();
        let poisoner = shared.clone();
        let result = thread::spawn(move || {
            poisoner.import::<()>(|_| panic!("importer failed"));
        })
        .join();
        assert!(result.is_err());
        assert_eq!(
            shared.lookup_string("ln", &DynamicCstr::new("default", "short")),
            ""
        );
    }
}
