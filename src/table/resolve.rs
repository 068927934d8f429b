//! Point-in-interval binary search.

use crate::AsnRange;

/// Find the range containing `point` in a slice sorted by start address.
///
/// The window `[lo, hi]` always holds the answer if one exists. Moving
/// left sets `hi = mid` and moving right sets `lo = mid`, so the window
/// stops shrinking once `lo == mid`; at that point only `ranges[hi]` is
/// left unexamined.
pub(super) fn resolve(ranges: &[AsnRange], point: u32) -> Option<&AsnRange> {
    if ranges.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = ranges.len() - 1;

    loop {
        let mid = (lo + hi) / 2;
        let range = &ranges[mid];

        if range.contains(point) {
            return Some(range);
        }

        if point < ranges[lo].start || point > ranges[hi].end {
            return None;
        }

        if lo == mid {
            let last = &ranges[hi];
            return if last.contains(point) { Some(last) } else { None };
        }

        if point < range.start {
            hi = mid;
        } else if point > range.end {
            lo = mid;
        } else {
            unreachable!(
                "range search fault: point {} neither in nor outside {:?}",
                point, range
            );
        }
    }
}
