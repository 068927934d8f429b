//! Sorted, immutable IP range table.
//!
//! A [`RangeTable`] is built once from `low,high,label` records and then
//! queried any number of times. Records are kept sorted by
//! `(start, end, label)` and are assumed not to overlap; lookups use a
//! bounded binary search over that order.
//!
//! ```text
//! index   start        end          label
//! 0       16777216     16777471     AS15169 Google LLC
//! 1       16777472     16778239     AS4134 CHINANET-BACKBONE
//! ...
//! ```

mod builder;
mod resolve;


use std::io::Read;
use std::path::Path;

use crate::source::{self, Encoding};
use crate::{AsnRange, IpQuery, Result};

/// Immutable table of non-overlapping IP ranges, sorted by start address.
///
/// The table is `Send + Sync`; share it by reference or `Arc` once built.
///
/// # Examples
/// ```
/// use ip2asn::RangeTable;
///
/// let table = RangeTable::build(["1,100,AS1", "101,200,AS2", "300,400,\"AS3\""]).unwrap();
///
/// assert_eq!(table.lookup(50u32).unwrap(), Some("AS1"));
/// assert_eq!(table.lookup(400u32).unwrap(), Some("AS3"));
/// assert_eq!(table.lookup(250u32).unwrap(), None);
/// assert!(table.lookup("1.2.3").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    ranges: Vec<AsnRange>,
}

impl RangeTable {
    /// Build a table from raw `low,high,label` lines.
    ///
    /// Lines that do not have three comma-separated fields are skipped.
    /// A non-numeric `low`/`high` field or a range whose end is below its
    /// start aborts the build.
    pub fn build<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        builder::build(lines)
    }

    /// Build a table from a reader holding a dataset in `encoding`.
    pub fn from_reader<R: Read>(reader: R, encoding: Encoding) -> Result<Self> {
        let lines = source::read_lines(reader, encoding)?;
        Self::build(&lines)
    }

    /// Build a table from a dataset file (plain or gzip compressed).
    pub fn from_path(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self> {
        let path = path.as_ref();
        let lines = source::read_path_lines(path, encoding)?;
        let table = Self::build(&lines)?;
        log::info!("Loaded {} ASN ranges from {:?}", table.len(), path);
        Ok(table)
    }

    /// Find the range containing `point`.
    pub fn resolve(&self, point: u32) -> Option<&AsnRange> {
        resolve::resolve(&self.ranges, point)
    }

    /// Look up the ASN label for an IP address.
    ///
    /// Returns `Ok(None)` when no range contains the address, and an error
    /// only when the address itself is malformed.
    pub fn lookup(&self, ip: impl Into<IpQuery>) -> Result<Option<&str>> {
        Ok(self.lookup_range(ip)?.map(|range| range.label.as_str()))
    }

    /// Look up the full range record for an IP address.
    pub fn lookup_range(&self, ip: impl Into<IpQuery>) -> Result<Option<&AsnRange>> {
        let point = ip.into().to_u32()?;
        Ok(self.resolve(point))
    }

    /// Get the number of ranges in the table.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the table holds no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Get the ranges in sorted order.
    pub fn ranges(&self) -> &[AsnRange] {
        &self.ranges
    }

    /// Iterate over the ranges in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, AsnRange> {
        self.ranges.iter()
    }
}

impl<'a> IntoIterator for &'a RangeTable {
    type Item = &'a AsnRange;
    type IntoIter = std::slice::Iter<'a, AsnRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
