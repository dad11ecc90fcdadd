//! # largeint-memory
//!
//! Memory management for the largeint workspace: the digit-node slab,
//! the free-list pool that recycles nodes across digit-list lifetimes,
//! and hit/miss statistics.
//!
//! Nodes are addressed by [`NodeId`] indices into a growable slab rather
//! than by pointers, so link rewiring during list destruction can never
//! dangle. The slab itself only grows; "freeing" a node threads it onto
//! the pool's free list for the next acquire.
#![warn(missing_docs)]

pub mod handle;
pub mod node;
pub mod pool;
pub mod stats;

pub use handle::PoolHandle;
pub use node::{DigitNode, NodeId};
pub use pool::NodePool;
pub use stats::{AtomicPoolStats, PoolStats};
