//! Carry-propagating addition and long multiplication on digit lists.
//!
//! Both operations are non-destructive: operands are only read, and the
//! result is a brand-new chain acquired from the pool. Intermediate
//! partial products in `multiply` go back to the pool as soon as they
//! are folded into the accumulator, so peak node usage stays near the
//! size of the operands plus the running total.

use std::cmp::Ordering;

use largeint_memory::NodePool;

use crate::cmp::compare;
use crate::list::DigitList;

/// Add two digit lists, returning the sum as a new chain.
///
/// The numerically greater operand fixes the result length. Digits are
/// consumed tail-to-head in lockstep while the lesser operand lasts,
/// then the greater operand's remaining digits are carried through, and
/// a final carry (999 + 1 style) appends one more node at the top.
#[must_use]
pub fn add(pool: &mut NodePool, a: &DigitList, b: &DigitList) -> DigitList {
    let (greater, lesser) = if compare(pool, b, a) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    };

    let mut result = DigitList::unlinked();
    let mut carry = 0u8;
    let mut weight = 0u32;
    let mut gt_cursor = greater.tail();
    let mut lt_cursor = lesser.tail();

    while let Some(lt) = lt_cursor {
        let gt = gt_cursor.expect("greater operand is at least as long as lesser");
        let sum = pool.node(gt).digit + pool.node(lt).digit + carry;
        carry = sum / 10;
        result.push_head(pool, sum % 10, weight);
        weight += 1;
        gt_cursor = pool.node(gt).prev;
        lt_cursor = pool.node(lt).prev;
    }

    while let Some(gt) = gt_cursor {
        let sum = pool.node(gt).digit + carry;
        carry = sum / 10;
        result.push_head(pool, sum % 10, weight);
        weight += 1;
        gt_cursor = pool.node(gt).prev;
    }

    if carry != 0 {
        result.push_head(pool, carry, weight);
    }
    result
}

/// Multiply two digit lists by grade-school long multiplication.
///
/// For each digit of the multiplier `b`, least significant first, a
/// partial product of the multiplicand `a` is built pre-shifted by the
/// digit's weight (placeholder zero nodes fill the low positions), then
/// folded into the accumulator with [`add`] and released. Zero operands
/// short-circuit to the zero list, and zero multiplier digits are
/// skipped outright, so no partial ever carries a leading-zero head and
/// the accumulator stays normalized throughout.
#[must_use]
pub fn multiply(pool: &mut NodePool, a: &DigitList, b: &DigitList) -> DigitList {
    if a.is_zero(pool) || b.is_zero(pool) {
        return DigitList::from_u64(pool, 0);
    }

    let mut acc = DigitList::from_u64(pool, 0);
    let mut plier_cursor = b.tail();
    while let Some(plier) = plier_cursor {
        let plier_digit = pool.node(plier).digit;
        let shift = pool.node(plier).weight;
        plier_cursor = pool.node(plier).prev;
        if plier_digit == 0 {
            continue;
        }

        let mut partial = DigitList::unlinked();
        for weight in 0..shift {
            partial.push_head(pool, 0, weight);
        }

        let mut carry = 0u8;
        let mut weight = shift;
        let mut cand_cursor = a.tail();
        while let Some(cand) = cand_cursor {
            let product = plier_digit * pool.node(cand).digit + carry;
            carry = product / 10;
            partial.push_head(pool, product % 10, weight);
            weight += 1;
            cand_cursor = pool.node(cand).prev;
        }
        if carry != 0 {
            partial.push_head(pool, carry, weight);
        }

        let folded = add(pool, &acc, &partial);
        acc.free(pool);
        partial.free(pool);
        acc = folded;
    }
    acc
}
