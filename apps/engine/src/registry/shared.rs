use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::Registry;

/// Copy-on-write handle for hot-reloading the registry.
///
/// Readers take an `Arc` snapshot and never hold the lock while scoring;
/// a reload swaps the whole registry in one write.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Arc<Registry>>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// Current registry. Stays valid even if a reload happens afterwards.
    pub fn snapshot(&self) -> Arc<Registry> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the registry; returns the previous one.
    pub fn replace(&self, registry: Registry) -> Arc<Registry> {
        let total = registry.question_total();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, Arc::new(registry));
        info!("Question registry replaced ({total} questions)");
        previous
    }
}
