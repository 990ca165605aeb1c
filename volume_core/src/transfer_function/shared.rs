use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard};

use super::{TfTable, TransferFunction};

/// Transfer function edited from one place while tables are generated elsewhere.
///
/// Edits take the write lock. Generation holds an upgradable read for the
/// whole pass, so control points cannot change while the table is built.
#[derive(Debug, Clone, Default)]
pub struct SharedTransferFunction(Arc<RwLock<TransferFunction>>);

impl SharedTransferFunction {
    pub fn new(tf: TransferFunction) -> SharedTransferFunction {
        SharedTransferFunction(Arc::new(RwLock::new(tf)))
    }

    /// Run `f` with exclusive access.
    pub fn edit<R>(&self, f: impl FnOnce(&mut TransferFunction) -> R) -> R {
        let mut guard = self.0.write();
        f(&mut guard)
    }

    pub fn read(&self) -> RwLockReadGuard<'_, TransferFunction> {
        self.0.read()
    }

    /// Build a table, store it and return a copy.
    pub fn generate(&self, width: usize) -> TfTable {
        let guard = self.0.upgradable_read();
        let table = guard.build_table(width);
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        guard.store_table(table).clone()
    }

    /// Current table, if any edit did not invalidate it.
    pub fn table(&self) -> Option<TfTable> {
        self.0.read().table().cloned()
    }
}
