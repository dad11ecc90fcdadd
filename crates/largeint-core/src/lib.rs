//! # largeint-core
//!
//! Arbitrary-precision non-negative integer arithmetic over a
//! digit-per-node doubly linked list, with every node allocated from and
//! recycled through a shared [`PoolHandle`] free-list pool.
//!
//! [`LargeInt`] is the public value type: construction from `u64` or a
//! decimal string, addition, grade-school multiplication, total-order
//! comparison, and token-based stream I/O. [`DigitList`] and the `arith`
//! and `cmp` modules underneath it hold the list plumbing and the
//! carry-propagation algorithms.
//!
//! All values created from one pool handle share that pool; combining
//! values from different pools panics.
//!
//! # Example
//! ```
//! use largeint_core::{LargeInt, PoolHandle};
//!
//! # fn main() -> Result<(), largeint_core::ParseLargeIntError> {
//! let pool = PoolHandle::new();
//! let a = LargeInt::parse(&pool, "999")?;
//! let b = LargeInt::from_u64(&pool, 1);
//! assert_eq!((&a + &b).to_string(), "1000");
//! assert_eq!((&a * &a).to_string(), "998001");
//! assert!(a > b);
//! # Ok(())
//! # }
//! ```

pub mod arith;
pub mod cmp;
pub mod error;
pub mod integer;
pub mod list;

// Re-exports
pub use error::{ParseLargeIntError, ReadError};
pub use integer::LargeInt;
pub use largeint_memory::PoolHandle;
pub use list::DigitList;
