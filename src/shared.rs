//! Process-wide shared instance registry.
//!
//! Backs [`crate::ErgoSet::shared_empty`]. One instance exists per concrete
//! type, created on first access and intentionally leaked so the returned
//! `'static` reference stays valid regardless of process teardown ordering.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

type Registry = Mutex<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Returns the shared instance for `V`, creating and leaking it on first
/// access. Idempotent: every call for the same `V` returns the same
/// storage.
pub(crate) fn leaked_instance<V>(make: fn() -> V) -> &'static V
where
    V: Any + Send + Sync,
{
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    // The map holds nothing but leaked references, so a poisoned lock is
    // still usable.
    let mut entries = registry.lock().unwrap_or_else(PoisonError::into_inner);
    let entry: &'static (dyn Any + Send + Sync) = *entries
        .entry(TypeId::of::<V>())
        .or_insert_with(|| Box::leak(Box::new(make())));
    drop(entries);
    entry
        .downcast_ref::<V>()
        .expect("registry entries are keyed by their concrete type")
}
