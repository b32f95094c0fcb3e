//! The collaborator a [`HistoryTracker`](crate::HistoryTracker) asks about targets.

use core::cell::Cell;

/// A stable handle to a selection target, compared by identity.
///
/// Two keys are the same entry only if they are the same key; keys that
/// happen to describe the same logical target are still distinct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TargetKey(pub u64);

impl TargetKey {
    /// The root target (e.g. the document body).
    pub const ROOT: Self = Self(0);
}

/// Answers liveness and focus questions for the entries a tracker holds.
///
/// `is_valid` should be total and free of side effects. A panic inside it is
/// not caught by the tracker.
pub trait SelectionHost<E> {
    /// Whether `entry` is still attached and usable as a selection target.
    fn is_valid(&self, entry: &E) -> bool;
    /// The target that currently has focus, if any.
    fn active(&self) -> Option<E>;
}

/// A [`SelectionHost`] built from a validity closure and an optional active target.
pub struct FnHost<E, V> {
    is_valid: V,
    active: Cell<Option<E>>,
}

impl<E: Copy, V: Fn(&E) -> bool> FnHost<E, V> {
    /// Host judging validity with `is_valid` and reporting no active target.
    pub fn new(is_valid: V) -> Self {
        Self {
            is_valid,
            active: Cell::new(None),
        }
    }

    /// Change the target reported by [`SelectionHost::active`].
    pub fn set_active(&self, active: Option<E>) {
        self.active.set(active);
    }
}

impl<E: Copy, V: Fn(&E) -> bool> SelectionHost<E> for FnHost<E, V> {
    #[inline]
    fn is_valid(&self, entry: &E) -> bool {
        (self.is_valid)(entry)
    }

    #[inline]
    fn active(&self) -> Option<E> {
        self.active.get()
    }
}

impl<E, H: SelectionHost<E> + ?Sized> SelectionHost<E> for &H {
    #[inline]
    fn is_valid(&self, entry: &E) -> bool {
        (**self).is_valid(entry)
    }

    #[inline]
    fn active(&self) -> Option<E> {
        (**self).active()
    }
}
