//! Magnitude comparison of digit lists.

use std::cmp::Ordering;

use largeint_memory::NodePool;

use crate::list::DigitList;

/// Compare two populated, normalized digit lists by numeric value.
///
/// Head weights decide first: with no leading-zero nodes, more digits
/// means strictly greater. Equal head weights imply equal-length chains
/// (the weight invariant), so a lockstep head-to-tail walk finds the
/// first differing digit, and exhausting both chains means equality.
#[must_use]
pub fn compare(pool: &NodePool, a: &DigitList, b: &DigitList) -> Ordering {
    let a_head = a.head().expect("compare requires a populated list");
    let b_head = b.head().expect("compare requires a populated list");

    let a_weight = pool.node(a_head).weight;
    let b_weight = pool.node(b_head).weight;
    if a_weight != b_weight {
        return a_weight.cmp(&b_weight);
    }

    let mut a_cursor = Some(a_head);
    let mut b_cursor = Some(b_head);
    while let (Some(a_id), Some(b_id)) = (a_cursor, b_cursor) {
        let a_node = pool.node(a_id);
        let b_node = pool.node(b_id);
        match a_node.digit.cmp(&b_node.digit) {
            Ordering::Equal => {}
            decided => return decided,
        }
        a_cursor = a_node.next;
        b_cursor = b_node.next;
    }
    Ordering::Equal
}
