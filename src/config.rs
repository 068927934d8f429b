//! Dataset configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::source::Encoding;
use crate::RangeTable;

/// Default dataset file name (MaxMind ASN CSV export).
pub const DEFAULT_DATA_FILE: &str = "GeoIPASNum2.csv";

/// Environment variable overriding the dataset path.
pub const DATA_ENV: &str = "IP2ASN_DATA";

/// Environment variable overriding the dataset encoding.
pub const ENCODING_ENV: &str = "IP2ASN_ENCODING";

/// Where to load the range dataset from and how to decode it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the `low,high,label` dataset (plain or gzip)
    pub path: PathBuf,
    /// Text encoding of the dataset
    pub encoding: Encoding,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
            encoding: Encoding::Latin1,
        }
    }
}

impl DatasetConfig {
    /// Create a new DatasetConfig.
    pub fn new(path: impl Into<PathBuf>, encoding: Encoding) -> Self {
        Self {
            path: path.into(),
            encoding,
        }
    }

    /// Build a configuration from `IP2ASN_DATA` and `IP2ASN_ENCODING`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(DATA_ENV).ok(),
            std::env::var(ENCODING_ENV).ok(),
        )
    }

    fn from_vars(path: Option<String>, encoding: Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = path.filter(|p| !p.is_empty()) {
            config.path = PathBuf::from(path);
        }
        if let Some(encoding) = encoding.filter(|e| !e.is_empty()) {
            config.encoding = encoding.parse()?;
        }
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {:?}: {}", path, e)))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the range table this configuration points at.
    pub fn open_table(&self) -> Result<RangeTable> {
        RangeTable::from_path(&self.path, self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DatasetConfig::default();
        assert_eq!(config.path, PathBuf::from("GeoIPASNum2.csv"));
        assert_eq!(config.encoding, Encoding::Latin1);
    }

    #[test]
    fn test_from_vars() {
        let config = DatasetConfig::from_vars(Some("/data/asn.csv.gz".into()), Some("utf-8".into()))
            .unwrap();
        assert_eq!(config.path, PathBuf::from("/data/asn.csv.gz"));
        assert_eq!(config.encoding, Encoding::Utf8);

        let config = DatasetConfig::from_vars(None, Some(String::new())).unwrap();
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn test_from_vars_bad_encoding() {
        let result = DatasetConfig::from_vars(None, Some("klingon".into()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ip2asn.json");
        fs::write(&path, r#"{"path": "/srv/asn.csv", "encoding": "utf8"}"#).unwrap();

        let config = DatasetConfig::load(&path).unwrap();
        assert_eq!(config, DatasetConfig::new("/srv/asn.csv", Encoding::Utf8));
    }

    #[test]
    fn test_load_json_partial_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ip2asn.json");
        fs::write(&path, r#"{"path": "asn.csv"}"#).unwrap();

        let config = DatasetConfig::load(&path).unwrap();
        assert_eq!(config.encoding, Encoding::Latin1);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            DatasetConfig::load("/nonexistent/ip2asn.json"),
            Err(Error::Config(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(DatasetConfig::load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_open_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asn.csv");
        fs::write(&path, "1,100,\"AS1\"\n101,200,\"AS2\"\n").unwrap();

        let table = DatasetConfig::new(&path, Encoding::Latin1).open_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(150u32).unwrap(), Some("AS2"));
    }
}
