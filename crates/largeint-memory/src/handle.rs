//! Shared handle to a node pool.
//!
//! The pool is deliberately not a process-wide singleton: callers create
//! one and pass clones of the handle to every value allocated from it.
//! The mutex makes shared-pool access well defined if a handle does cross
//! threads, but the intended use is single-threaded and uncontended.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::pool::NodePool;

/// Cloneable reference to a [`NodePool`]. Clones share the same slab.
#[derive(Clone)]
pub struct PoolHandle {
    inner: Arc<Mutex<NodePool>>,
}

impl PoolHandle {
    /// Create a handle owning a fresh, empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(NodePool::new())),
        }
    }

    /// Create a handle owning a pool with slab capacity for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NodePool::with_capacity(nodes))),
        }
    }

    /// Lock the pool for a sequence of node operations.
    ///
    /// The lock is not reentrant; callers must not re-lock while holding
    /// a guard.
    pub fn lock(&self) -> MutexGuard<'_, NodePool> {
        self.inner.lock()
    }

    /// Whether two handles refer to the same pool.
    ///
    /// Node ids are only meaningful relative to their own pool, so values
    /// may only be combined when this holds.
    #[must_use]
    pub fn same_pool(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for PoolHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PoolHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pool = self.inner.lock();
        f.debug_struct("PoolHandle")
            .field("slab_len", &pool.slab_len())
            .field("free_len", &pool.free_len())
            .finish()
    }
}
