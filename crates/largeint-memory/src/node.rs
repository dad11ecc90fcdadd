//! Digit node and slab index types.

/// Index of a node inside a [`NodePool`](crate::NodePool) slab.
///
/// Plain `Copy` index, cheap to pass around; only meaningful relative to
/// the pool that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Wrap a slab offset.
    ///
    /// # Panics
    /// Panics if the offset exceeds `u32::MAX` (a slab of four billion
    /// digit nodes is past any realistic operand size).
    #[must_use]
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("node slab exceeded u32 index range"))
    }

    /// The slab offset this id refers to.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One decimal digit with its positional weight and neighbor links.
///
/// A chain of these forms a digit list: `weight` is the power of ten the
/// digit is scaled by, strictly decreasing by one from head to tail.
/// While a node sits on the free list, only `next` is meaningful (it
/// threads the free stack); `digit`, `weight`, and `prev` hold stale
/// values from the node's previous life and must not be read.
#[derive(Debug, Clone)]
pub struct DigitNode {
    /// Decimal digit in `0..=9`.
    pub digit: u8,
    /// Power of ten this digit is scaled by.
    pub weight: u32,
    /// Next (less significant) node, or free-list successor when pooled.
    pub next: Option<NodeId>,
    /// Previous (more significant) node.
    pub prev: Option<NodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_round_trips_index() {
        let id = NodeId::new(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn node_ids_compare_by_offset() {
        assert_eq!(NodeId::new(7), NodeId::new(7));
        assert_ne!(NodeId::new(7), NodeId::new(8));
    }
}
