//! ip2asn - Offline IPv4 to ASN lookup.
//!
//! This crate answers one question: which autonomous system announces a
//! given IPv4 address, according to a static dataset of
//! `low,high,label` range records (such as MaxMind's `GeoIPASNum2.csv`).
//!
//! # Features
//!
//! - **Range table**: records sorted by `(start, end, label)`, immutable once built
//! - **Binary search lookups**: O(log n) per query, inclusive range bounds
//! - **Flexible input**: dotted-decimal text, four octets, or a `u32`
//! - **Dataset loading**: Latin-1 or UTF-8 text, plain or gzip compressed
//! - **Thread-safe**: a built table can be shared freely between threads
//!
//! # Quick Start
//!
//! ```
//! use ip2asn::RangeTable;
//!
//! let table = RangeTable::build([
//!     "1,100,\"AS1 Example\"",
//!     "101,200,\"AS2 Example\"",
//! ])?;
//!
//! assert_eq!(table.lookup(150u32)?, Some("AS2 Example"));
//! assert_eq!(table.lookup("0.0.0.0")?, None);
//! # Ok::<(), ip2asn::Error>(())
//! ```
//!
//! Loading from a dataset file:
//!
//! ```ignore
//! use ip2asn::{DatasetConfig, Encoding, RangeTable};
//!
//! let table = RangeTable::from_path("GeoIPASNum2.csv", Encoding::Latin1)?;
//! let asn = table.lookup("8.8.8.8")?;
//!
//! // Or resolve the path from IP2ASN_DATA / IP2ASN_ENCODING
//! let table = DatasetConfig::from_env()?.open_table()?;
//! ```
//!
//! # Lookup Results
//!
//! - `Ok(Some(label))`: the address falls in a range
//! - `Ok(None)`: no range contains the address
//! - `Err(Error::InvalidIpAddress)`: the input is not a valid IPv4 address

mod error;
mod query;
mod range;

pub mod config;
pub mod source;
pub mod table;

// Re-export core types
pub use error::{Error, Result};
pub use query::IpQuery;
pub use range::AsnRange;
pub use table::RangeTable;

// Re-export dataset loading
pub use config::DatasetConfig;
pub use source::Encoding;
