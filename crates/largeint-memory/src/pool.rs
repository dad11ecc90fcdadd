//! Free-list node pool (the available-space list).
//!
//! Released nodes form a stack threaded through their `next` field.
//! `acquire` pops from that stack before growing the slab, so steady-state
//! arithmetic recycles nodes instead of allocating. The pool is never
//! trimmed: it is a reuse cache, not a capacity-limited resource.

use crate::node::{DigitNode, NodeId};
use crate::stats::{AtomicPoolStats, PoolStats};

/// Slab of digit nodes plus the free list that recycles them.
pub struct NodePool {
    nodes: Vec<DigitNode>,
    free_head: Option<NodeId>,
    free_len: usize,
    stats: AtomicPoolStats,
}

impl NodePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_head: None,
            free_len: 0,
            stats: AtomicPoolStats::new(),
        }
    }

    /// Create a pool with slab capacity for `nodes` digit nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            free_head: None,
            free_len: 0,
            stats: AtomicPoolStats::new(),
        }
    }

    /// Get a node initialized with the given fields.
    ///
    /// Pops the free-list top and overwrites all four fields when a
    /// recycled node is available (a hit), otherwise grows the slab (a
    /// miss). Every field is overwritten on reuse, so no stale digit,
    /// weight, or link from the node's previous life can leak out.
    pub fn acquire(
        &mut self,
        digit: u8,
        weight: u32,
        next: Option<NodeId>,
        prev: Option<NodeId>,
    ) -> NodeId {
        debug_assert!(digit <= 9, "digit out of decimal range: {digit}");
        if let Some(id) = self.free_head {
            let node = &mut self.nodes[id.index()];
            self.free_head = node.next;
            self.free_len -= 1;
            node.digit = digit;
            node.weight = weight;
            node.next = next;
            node.prev = prev;
            self.stats.record_hit();
            return id;
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(DigitNode {
            digit,
            weight,
            next,
            prev,
        });
        self.stats.record_miss();
        id
    }

    /// Return a node to the free list.
    ///
    /// Only `next` is overwritten (it threads the free stack); the other
    /// fields stay stale until the next `acquire` reinitializes them.
    /// Releasing the same id twice corrupts the free list, so callers
    /// must release each node exactly once.
    pub fn release(&mut self, id: NodeId) {
        let old_head = self.free_head;
        self.nodes[id.index()].next = old_head;
        self.free_head = Some(id);
        self.free_len += 1;
        self.stats.record_release();
    }

    /// Read a node. The id must refer to a live (non-pooled) node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &DigitNode {
        &self.nodes[id.index()]
    }

    /// Mutate a node. The id must refer to a live (non-pooled) node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut DigitNode {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes currently on the free list.
    #[must_use]
    pub fn free_len(&self) -> usize {
        self.free_len
    }

    /// Total slab size: live nodes plus free nodes.
    #[must_use]
    pub fn slab_len(&self) -> usize {
        self.nodes.len()
    }

    /// Get a snapshot of pool statistics.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot()
    }

    /// Reset pool statistics counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

impl Default for NodePool {
    fn default() -> Self {
        Self::new()
    }
}
