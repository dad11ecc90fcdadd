//! Doubly linked digit lists over the shared node pool.
//!
//! A [`DigitList`] owns a chain of pool nodes representing one
//! non-negative integer in base 10, most-significant digit at the head.
//! Within a chain, weights decrease by exactly one from head to tail and
//! reach 0 at the tail; zero is the single node `(0, 0)`. Constructors
//! never produce leading-zero nodes, which is what lets the comparison
//! shortcut in [`crate::cmp`] trust head weights.
//!
//! Lists do not release their nodes implicitly: whoever owns the list
//! calls [`DigitList::free`] (or [`DigitList::copy_from`], which frees
//! first) with the pool it was built from. The [`crate::integer`] layer
//! wraps this in RAII.

use largeint_memory::{NodeId, NodePool};

use crate::error::ParseLargeIntError;

/// One integer as a chain of digit nodes, most-significant first.
///
/// `head` and `tail` are always both set (a populated list) or both
/// unset (an unlinked list that owns nothing). The unlinked state only
/// appears transiently while a new chain is being built or after `free`.
#[derive(Debug, PartialEq, Eq)]
pub struct DigitList {
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl DigitList {
    /// A list that owns no nodes yet.
    #[must_use]
    pub const fn unlinked() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// Build a list holding `value`.
    ///
    /// Extracts decimal digits least-significant first by repeated
    /// division, then links them tail-to-head so the head carries the
    /// highest weight.
    #[must_use]
    pub fn from_u64(pool: &mut NodePool, value: u64) -> Self {
        let mut list = Self::unlinked();
        if value == 0 {
            list.push_head(pool, 0, 0);
            return list;
        }
        let mut rest = value;
        let mut weight = 0u32;
        while rest != 0 {
            #[allow(clippy::cast_possible_truncation)]
            let digit = (rest % 10) as u8;
            list.push_head(pool, digit, weight);
            rest /= 10;
            weight += 1;
        }
        list
    }

    /// Build a list from a decimal digit string.
    ///
    /// Walks the string from its last byte backward, assigning weight 0
    /// to the tail and incrementing toward the head. Validation happens
    /// before any node is acquired, so a rejected string never touches
    /// the pool. Leading zeros are skipped; an all-zero string yields
    /// the zero list.
    pub fn from_decimal_str(pool: &mut NodePool, s: &str) -> Result<Self, ParseLargeIntError> {
        if s.is_empty() {
            return Err(ParseLargeIntError::Empty);
        }
        for (index, ch) in s.char_indices() {
            if !ch.is_ascii_digit() {
                return Err(ParseLargeIntError::InvalidDigit { ch, index });
            }
        }

        let significant = s.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self::from_u64(pool, 0));
        }
        let mut list = Self::unlinked();
        let mut weight = 0u32;
        for byte in significant.bytes().rev() {
            list.push_head(pool, byte - b'0', weight);
            weight += 1;
        }
        Ok(list)
    }

    /// Build an independent copy of `source`, sharing no nodes with it.
    #[must_use]
    pub fn deep_copy(pool: &mut NodePool, source: &Self) -> Self {
        let mut list = Self::unlinked();
        list.copy_from(pool, source);
        list
    }

    /// Free this list's chain, then deep-copy `source` into it.
    ///
    /// This is the assignment primitive: the target's old nodes go back
    /// to the pool before the copy starts, and the new chain is built
    /// node by node walking the source head-to-tail.
    pub fn copy_from(&mut self, pool: &mut NodePool, source: &Self) {
        self.free(pool);
        let (Some(src_head), Some(src_tail)) = (source.head, source.tail) else {
            return;
        };

        let (digit, weight) = {
            let node = pool.node(src_head);
            (node.digit, node.weight)
        };
        let head = pool.acquire(digit, weight, None, None);
        self.head = Some(head);

        if src_head == src_tail {
            self.tail = Some(head);
            return;
        }

        let mut built = head;
        let mut cursor = pool.node(src_head).next;
        while let Some(src) = cursor {
            let (digit, weight, next) = {
                let node = pool.node(src);
                (node.digit, node.weight, node.next)
            };
            let id = pool.acquire(digit, weight, None, Some(built));
            pool.node_mut(built).next = Some(id);
            built = id;
            cursor = next;
        }
        self.tail = Some(built);
    }

    /// Return every node in the chain to the pool, exactly once each.
    ///
    /// No-op on an unlinked list. The successor link is captured before
    /// each release, since release overwrites `next` to thread the free
    /// list. Afterwards the list is unlinked and may be rebuilt.
    pub fn free(&mut self, pool: &mut NodePool) {
        let mut cursor = self.head.take();
        self.tail = None;
        while let Some(id) = cursor {
            cursor = pool.node(id).next;
            pool.release(id);
        }
    }

    /// Render the digits head-to-tail as bare decimal text.
    #[must_use]
    pub fn render(&self, pool: &NodePool) -> String {
        let mut out = String::with_capacity(self.digit_count(pool));
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = pool.node(id);
            out.push(char::from(b'0' + node.digit));
            cursor = node.next;
        }
        out
    }

    /// Most-significant node, if the list is populated.
    #[must_use]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Least-significant node, if the list is populated.
    #[must_use]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Number of digits. Zero for an unlinked list.
    ///
    /// Relies on the weight invariant: the head's weight is one less
    /// than the digit count.
    #[must_use]
    pub fn digit_count(&self, pool: &NodePool) -> usize {
        self.head
            .map_or(0, |head| pool.node(head).weight as usize + 1)
    }

    /// Whether this list holds the single-node zero value.
    #[must_use]
    pub fn is_zero(&self, pool: &NodePool) -> bool {
        self.head.is_some_and(|head| {
            let node = pool.node(head);
            node.weight == 0 && node.digit == 0
        })
    }

    /// Prepend a digit as the new head with the given weight.
    ///
    /// Arithmetic builds result chains least-significant first, so the
    /// caller supplies strictly increasing weights starting at the
    /// eventual tail's 0.
    pub(crate) fn push_head(&mut self, pool: &mut NodePool, digit: u8, weight: u32) {
        let id = pool.acquire(digit, weight, self.head, None);
        match self.head {
            Some(old_head) => pool.node_mut(old_head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}
