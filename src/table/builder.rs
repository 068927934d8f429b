//! Range table construction from raw text records.

use super::RangeTable;
use crate::{AsnRange, Error, Result};

/// Build a sorted table from `low,high,label` lines.
pub(super) fn build<I, S>(lines: I) -> Result<RangeTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ranges = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        match parse_record(line.as_ref(), line_no)? {
            Some(range) => ranges.push(range),
            None => {
                log::trace!("Skipping malformed line {}: {:?}", line_no, line.as_ref());
                skipped += 1;
            }
        }
    }

    ranges.sort();

    let overlaps = count_overlaps(&ranges);
    if overlaps > 0 {
        log::warn!(
            "{} overlapping range pairs in dataset; lookups in those ranges are ambiguous",
            overlaps
        );
    }

    log::debug!(
        "Built range table: {} ranges, {} malformed lines skipped",
        ranges.len(),
        skipped
    );

    Ok(RangeTable { ranges })
}

/// Parse one record line.
///
/// Returns `Ok(None)` for lines without three fields. Only the first two
/// commas separate fields, so labels may contain commas.
fn parse_record(line: &str, line_no: usize) -> Result<Option<AsnRange>> {
    let mut fields = line.trim().splitn(3, ',');
    let (low, high, label) = match (fields.next(), fields.next(), fields.next()) {
        (Some(low), Some(high), Some(label)) => (low, high, label),
        _ => return Ok(None),
    };

    let start = parse_bound(low, "low", line_no)?;
    let end = parse_bound(high, "high", line_no)?;
    if end < start {
        return Err(Error::InvertedRange {
            line: line_no,
            start,
            end,
        });
    }

    Ok(Some(AsnRange::new(start, end, label.trim_matches('"'))))
}

fn parse_bound(field: &str, name: &'static str, line_no: usize) -> Result<u32> {
    field.trim().parse().map_err(|_| Error::DataFormat {
        line: line_no,
        field: name,
        value: field.to_string(),
    })
}

/// Count neighbouring ranges that share addresses in a sorted slice.
fn count_overlaps(ranges: &[AsnRange]) -> usize {
    ranges.windows(2).filter(|w| w[0].overlaps(&w[1])).count()
}
