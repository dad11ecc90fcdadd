//! The `LargeInt` value type: digit-list arithmetic with RAII pooling.
//!
//! A `LargeInt` pairs a [`DigitList`] with the [`PoolHandle`] its nodes
//! came from. Dropping a value returns every node to that pool; cloning
//! deep-copies the chain from the same pool. Arithmetic and comparison
//! operators require both operands to come from the same pool and panic
//! otherwise, since node ids from one pool mean nothing in another.

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::ops::{Add, AddAssign, Mul, MulAssign};

use largeint_memory::PoolHandle;

use crate::arith;
use crate::cmp;
use crate::error::{ParseLargeIntError, ReadError};
use crate::list::DigitList;

/// Arbitrary-precision non-negative integer over pooled digit nodes.
pub struct LargeInt {
    pool: PoolHandle,
    list: DigitList,
}

impl LargeInt {
    /// The value zero, allocated from `pool`.
    #[must_use]
    pub fn zero(pool: &PoolHandle) -> Self {
        Self::from_u64(pool, 0)
    }

    /// Build a value from a native unsigned integer.
    #[must_use]
    pub fn from_u64(pool: &PoolHandle, value: u64) -> Self {
        let list = DigitList::from_u64(&mut pool.lock(), value);
        Self {
            pool: pool.clone(),
            list,
        }
    }

    /// Parse a decimal digit string.
    ///
    /// Strict: empty input and non-digit characters are errors, and
    /// leading zeros are normalized away.
    pub fn parse(pool: &PoolHandle, s: &str) -> Result<Self, ParseLargeIntError> {
        let list = DigitList::from_decimal_str(&mut pool.lock(), s)?;
        Ok(Self {
            pool: pool.clone(),
            list,
        })
    }

    /// Read one whitespace-delimited token from `reader` and parse it.
    ///
    /// Leading whitespace is skipped; the token ends at the next
    /// whitespace byte or end of input. A stream with no token left
    /// yields [`ReadError::Eof`].
    pub fn read_from<R: BufRead>(pool: &PoolHandle, reader: &mut R) -> Result<Self, ReadError> {
        let token = read_token(reader)?.ok_or(ReadError::Eof)?;
        Ok(Self::parse(pool, &token)?)
    }

    /// Write the bare decimal digits to `writer`, no sign or padding.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let rendered = self.to_decimal_string();
        writer.write_all(rendered.as_bytes())
    }

    /// Render to a decimal string, most-significant digit first.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        self.list.render(&self.pool.lock())
    }

    /// Whether this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.list.is_zero(&self.pool.lock())
    }

    /// Number of decimal digits (1 for zero).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.list.digit_count(&self.pool.lock())
    }

    /// The pool this value allocates from.
    #[must_use]
    pub fn pool(&self) -> &PoolHandle {
        &self.pool
    }

    fn assert_same_pool(&self, other: &Self) {
        assert!(
            self.pool.same_pool(&other.pool),
            "large integers from different node pools cannot be combined"
        );
    }
}

impl Drop for LargeInt {
    fn drop(&mut self) {
        self.list.free(&mut self.pool.lock());
    }
}

impl Clone for LargeInt {
    fn clone(&self) -> Self {
        let list = {
            let mut pool = self.pool.lock();
            DigitList::deep_copy(&mut pool, &self.list)
        };
        Self {
            pool: self.pool.clone(),
            list,
        }
    }

    /// Assignment without retiring the target: the target's chain goes
    /// back to its pool, then the source chain is copied in place.
    fn clone_from(&mut self, source: &Self) {
        if self.pool.same_pool(&source.pool) {
            let mut pool = self.pool.lock();
            self.list.copy_from(&mut pool, &source.list);
        } else {
            *self = source.clone();
        }
    }
}

impl Add<&LargeInt> for &LargeInt {
    type Output = LargeInt;

    fn add(self, rhs: &LargeInt) -> LargeInt {
        self.assert_same_pool(rhs);
        let list = {
            let mut pool = self.pool.lock();
            arith::add(&mut pool, &self.list, &rhs.list)
        };
        LargeInt {
            pool: self.pool.clone(),
            list,
        }
    }
}

impl Add for LargeInt {
    type Output = LargeInt;

    fn add(self, rhs: LargeInt) -> LargeInt {
        &self + &rhs
    }
}

impl Add<&LargeInt> for LargeInt {
    type Output = LargeInt;

    fn add(self, rhs: &LargeInt) -> LargeInt {
        &self + rhs
    }
}

impl AddAssign<&LargeInt> for LargeInt {
    fn add_assign(&mut self, rhs: &LargeInt) {
        let sum = &*self + rhs;
        *self = sum;
    }
}

impl AddAssign for LargeInt {
    fn add_assign(&mut self, rhs: LargeInt) {
        *self += &rhs;
    }
}

impl Mul<&LargeInt> for &LargeInt {
    type Output = LargeInt;

    fn mul(self, rhs: &LargeInt) -> LargeInt {
        self.assert_same_pool(rhs);
        let list = {
            let mut pool = self.pool.lock();
            arith::multiply(&mut pool, &self.list, &rhs.list)
        };
        LargeInt {
            pool: self.pool.clone(),
            list,
        }
    }
}

impl Mul for LargeInt {
    type Output = LargeInt;

    fn mul(self, rhs: LargeInt) -> LargeInt {
        &self * &rhs
    }
}

impl Mul<&LargeInt> for LargeInt {
    type Output = LargeInt;

    fn mul(self, rhs: &LargeInt) -> LargeInt {
        &self * rhs
    }
}

impl MulAssign<&LargeInt> for LargeInt {
    fn mul_assign(&mut self, rhs: &LargeInt) {
        let product = &*self * rhs;
        *self = product;
    }
}

impl MulAssign for LargeInt {
    fn mul_assign(&mut self, rhs: LargeInt) {
        *self *= &rhs;
    }
}

impl PartialEq for LargeInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LargeInt {}

impl PartialOrd for LargeInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LargeInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.assert_same_pool(other);
        let pool = self.pool.lock();
        cmp::compare(&pool, &self.list, &other.list)
    }
}

impl fmt::Display for LargeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl fmt::Debug for LargeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LargeInt({})", self.to_decimal_string())
    }
}

/// Pull one whitespace-delimited token off a buffered reader.
///
/// Consumes leading whitespace and the token itself, plus the single
/// delimiter byte that ends it. Returns `None` at end of input.
fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token: Vec<u8> = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut consumed = 0;
        let mut delimited = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                consumed += 1;
                if !token.is_empty() {
                    delimited = true;
                    break;
                }
            } else {
                token.push(byte);
                consumed += 1;
            }
        }
        reader.consume(consumed);
        if delimited {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
