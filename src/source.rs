//! Dataset sources: decoding raw record lines from files and readers.
//!
//! The MaxMind `GeoIPASNum2.csv` export is Latin-1 encoded, so that is the
//! default. Gzip-compressed files are detected by their magic bytes and
//! decompressed transparently.

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use crate::{Error, Result};

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Text encoding of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// ISO-8859-1: every byte is the code point of the same value
    #[default]
    Latin1,
    /// UTF-8; invalid sequences are replaced with U+FFFD
    Utf8,
}

impl Encoding {
    /// Decode one line of raw bytes.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Latin1 => "latin1",
            Encoding::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(Encoding::Latin1),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            other => Err(Error::Config(format!("unknown encoding: {}", other))),
        }
    }
}

/// Read all lines from a reader, decoding each with `encoding`.
///
/// Lines are split on `\n`; a trailing `\r` is dropped.
pub fn read_lines<R: Read>(reader: R, encoding: Encoding) -> Result<Vec<String>> {
    let mut buf_reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if buf_reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        lines.push(encoding.decode(&buf));
    }

    Ok(lines)
}

/// Check if data starts with the gzip magic bytes.
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= GZIP_MAGIC.len() && data[..GZIP_MAGIC.len()] == GZIP_MAGIC
}

/// Read and decode all lines of a dataset file, decompressing gzip input.
pub fn read_path_lines(path: &Path, encoding: Encoding) -> Result<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);

    let compressed = is_gzip(reader.fill_buf()?);
    if compressed {
        log::debug!("Reading gzip compressed dataset: {:?}", path);
        read_lines(GzDecoder::new(reader), encoding)
    } else {
        read_lines(reader, encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_latin1_decode() {
        let bytes = b"AS1 Caf\xe9";
        assert_eq!(Encoding::Latin1.decode(bytes), "AS1 Café");
    }

    #[test]
    fn test_utf8_decode_is_lossy() {
        assert_eq!(Encoding::Utf8.decode("AS1 Café".as_bytes()), "AS1 Café");
        assert_eq!(Encoding::Utf8.decode(b"AS1 \xff"), "AS1 \u{fffd}");
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("latin-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("ISO-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert!("ebcdic".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_read_lines_strips_line_endings() {
        let data = b"1,2,AS1\r\n3,4,AS2\n5,6,AS3";
        let lines = read_lines(&data[..], Encoding::Latin1).unwrap();
        assert_eq!(lines, vec!["1,2,AS1", "3,4,AS2", "5,6,AS3"]);
    }

    #[test]
    fn test_read_lines_empty() {
        let lines = read_lines(&b""[..], Encoding::Utf8).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_is_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"1,2,AS1\n").unwrap();
        let gzip_data = encoder.finish().unwrap();

        assert!(is_gzip(&gzip_data));
        assert!(!is_gzip(b"1,2,AS1\n"));
        assert!(!is_gzip(&[0x1f]));
    }

    #[test]
    fn test_read_path_lines_plain_and_gzip() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("asn.csv");
        std::fs::write(&plain, b"1,2,\"AS1\"\n3,4,\"AS2\"\n").unwrap();
        let lines = read_path_lines(&plain, Encoding::Latin1).unwrap();
        assert_eq!(lines.len(), 2);

        let gz = dir.path().join("asn.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"1,2,\"AS1\"\n3,4,\"AS2\"\n").unwrap();
        std::fs::write(&gz, encoder.finish().unwrap()).unwrap();
        let gz_lines = read_path_lines(&gz, Encoding::Latin1).unwrap();
        assert_eq!(gz_lines, lines);
    }

    #[test]
    fn test_read_path_lines_missing_file() {
        let result = read_path_lines(Path::new("/nonexistent/asn.csv"), Encoding::Latin1);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
