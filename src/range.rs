//! A single IP range to ASN record.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// An inclusive `[start, end]` IPv4 range announced by one autonomous system.
///
/// Ordering is lexicographic over `(start, end, label)`, which is the
/// order a [`RangeTable`](crate::RangeTable) keeps its records in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AsnRange {
    /// First address of the range (inclusive)
    pub start: u32,
    /// Last address of the range (inclusive)
    pub end: u32,
    /// ASN designation, e.g. `AS15169 Google LLC`
    pub label: String,
}

impl AsnRange {
    /// Create a new range record.
    pub fn new(start: u32, end: u32, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Check if a point lies within this range. Both bounds are inclusive.
    pub fn contains(&self, point: u32) -> bool {
        self.start <= point && point <= self.end
    }

    /// Number of addresses covered by this range.
    pub fn size(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    /// Check if this range shares at least one address with another.
    pub fn overlaps(&self, other: &AsnRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Parse the AS number out of the label.
    ///
    /// Labels look like `AS15169 Google LLC`; returns `None` when the label
    /// does not start with `AS` followed by digits.
    pub fn asn(&self) -> Option<u32> {
        let rest = self.label.strip_prefix("AS")?;
        let digits = rest.split(' ').next().unwrap_or_default();
        digits.parse().ok()
    }

    /// Organization name following the AS number, if any.
    pub fn name(&self) -> Option<&str> {
        self.asn()?;
        let (_, name) = self.label.split_once(' ')?;
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// First address of the range.
    pub fn first_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.start)
    }

    /// Last address of the range.
    pub fn last_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.end)
    }
}

impl fmt::Display for AsnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {}",
            self.first_addr(),
            self.last_addr(),
            self.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = AsnRange::new(100, 200, "AS1");
        assert!(range.contains(100));
        assert!(range.contains(150));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn test_size() {
        assert_eq!(AsnRange::new(5, 5, "AS1").size(), 1);
        assert_eq!(AsnRange::new(0, u32::MAX, "AS1").size(), 1 << 32);
    }

    #[test]
    fn test_overlaps() {
        let a = AsnRange::new(1, 100, "AS1");
        assert!(a.overlaps(&AsnRange::new(100, 200, "AS2")));
        assert!(a.overlaps(&AsnRange::new(10, 20, "AS2")));
        assert!(!a.overlaps(&AsnRange::new(101, 200, "AS2")));
    }

    #[test]
    fn test_asn_and_name() {
        let range = AsnRange::new(0, 1, "AS15169 Google LLC");
        assert_eq!(range.asn(), Some(15169));
        assert_eq!(range.name(), Some("Google LLC"));

        let bare = AsnRange::new(0, 1, "AS64512");
        assert_eq!(bare.asn(), Some(64512));
        assert_eq!(bare.name(), None);

        let odd = AsnRange::new(0, 1, "Private network");
        assert_eq!(odd.asn(), None);
        assert_eq!(odd.name(), None);
    }

    #[test]
    fn test_tuple_ordering() {
        let mut ranges = vec![
            AsnRange::new(10, 20, "AS2"),
            AsnRange::new(10, 20, "AS1"),
            AsnRange::new(10, 15, "AS3"),
            AsnRange::new(1, 5, "AS9"),
        ];
        ranges.sort();
        let labels: Vec<&str> = ranges.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["AS9", "AS3", "AS1", "AS2"]);
    }

    #[test]
    fn test_display() {
        let range = AsnRange::new(0x08080800, 0x080808FF, "AS15169 Google LLC");
        assert_eq!(range.to_string(), "8.8.8.0-8.8.8.255 AS15169 Google LLC");
    }
}
