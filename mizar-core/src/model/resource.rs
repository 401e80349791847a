use mizar_common::prelude::*;

/// Shared value cell that requires synchronization to update.
///
/// The interior lock only makes the individual `get`/`set` accessors safe to
/// call from multiple threads; it provides none of the mutual exclusion this
/// crate demonstrates. Callers must hold the associated
/// [`TimedLock`](crate::TimedLock) across any read-modify sequence. That is
/// a documented contract, not something the type enforces.
pub struct ProtectedResource {
    value: RwLock<InlineStr>,
}

impl ProtectedResource {
    /// Sentinel carried before any job has written the cell.
    pub const UNSET: &'static str = "-1";

    pub fn new() -> Self {
        Self {
            value: RwLock::new(InlineStr::from(Self::UNSET)),
        }
    }

    pub fn get(&self) -> InlineStr {
        self.value.read().clone()
    }

    pub fn set(&self, value: impl Into<InlineStr>) {
        *self.value.write() = value.into();
    }

    pub fn is_unset(&self) -> bool {
        self.value.read().as_str() == Self::UNSET
    }
}

impl Default for ProtectedResource {
    fn default() -> Self {
        Self::new()
    }
}
