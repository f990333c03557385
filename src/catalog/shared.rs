use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::watch;
use tracing::info;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::store::CatalogStore;
use crate::models::{EventId, EventPatch, EventRecord, NewEvent};

/// Cloneable handle to the session's catalog.
///
/// Every mutation that changes the catalog bumps a revision counter
/// before returning, so anything displaying the catalog can re-derive
/// its view. Lock guards are never held across an `.await`.
#[derive(Clone)]
pub struct SharedCatalog {
    store: Arc<RwLock<CatalogStore>>,
    revision: Arc<watch::Sender<u64>>,
}

impl SharedCatalog {
    pub fn new(store: CatalogStore) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            store: Arc::new(RwLock::new(store)),
            revision: Arc::new(revision),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Runs `f` against a consistent snapshot of the store.
    pub fn read<R>(&self, f: impl FnOnce(&CatalogStore) -> R) -> CatalogResult<R> {
        let guard = self.read_guard()?;
        Ok(f(&guard))
    }

    pub fn remove(&self, id: EventId) -> CatalogResult<bool> {
        let removed = self.write_guard()?.remove(id);
        if removed {
            self.bump("remove");
        }
        Ok(removed)
    }

    pub fn create(&self, new: NewEvent) -> CatalogResult<EventRecord> {
        let record = self.write_guard()?.create(new)?;
        self.bump("create");
        Ok(record)
    }

    pub fn update(&self, id: EventId, patch: EventPatch) -> CatalogResult<EventRecord> {
        let record = self.write_guard()?.update(id, patch)?;
        self.bump("update");
        Ok(record)
    }

    pub fn reset(&self) -> CatalogResult<()> {
        self.write_guard()?.reset();
        self.bump("reset");
        Ok(())
    }

    fn bump(&self, cause: &'static str) {
        self.revision.send_modify(|rev| *rev += 1);
        info!(cause, revision = self.revision(), "Catalog changed");
    }

    fn read_guard(&self) -> CatalogResult<RwLockReadGuard<'_, CatalogStore>> {
        self.store.read().map_err(|_| CatalogError::Poisoned)
    }

    fn write_guard(&self) -> CatalogResult<RwLockWriteGuard<'_, CatalogStore>> {
        self.store.write().map_err(|_| CatalogError::Poisoned)
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        Self::new(CatalogStore::seeded())
    }
}
