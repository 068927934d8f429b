//! Query point normalization.

use std::fmt;
use std::net::Ipv4Addr;

use crate::{Error, Result};

/// An IPv4 address in one of the accepted input shapes.
///
/// Every variant normalizes to the same `u32` through [`IpQuery::to_u32`]:
/// `o0 * 256^3 + o1 * 256^2 + o2 * 256 + o3`.
///
/// # Examples
/// ```
/// use ip2asn::IpQuery;
///
/// let text = IpQuery::from("192.168.1.1");
/// let octets = IpQuery::from([192u8, 168, 1, 1]);
/// let integer = IpQuery::from(3232235777u32);
///
/// assert_eq!(text.to_u32().unwrap(), 3232235777);
/// assert_eq!(octets.to_u32().unwrap(), 3232235777);
/// assert_eq!(integer.to_u32().unwrap(), 3232235777);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpQuery {
    /// Dotted-decimal text, e.g. `192.168.1.1`
    Text(String),
    /// Ordered octets; must hold exactly four values in `0..=255`
    Octets(Vec<u32>),
    /// Already computed address value
    Integer(u32),
}

impl IpQuery {
    /// Normalize to a single 32-bit address value.
    pub fn to_u32(&self) -> Result<u32> {
        match self {
            IpQuery::Text(text) => {
                let parts: Vec<&str> = text.trim().split('.').collect();
                if parts.len() != 4 {
                    return Err(Error::InvalidIpAddress(text.clone()));
                }
                let mut octets = [0u32; 4];
                for (octet, part) in octets.iter_mut().zip(&parts) {
                    *octet = part
                        .trim()
                        .parse()
                        .map_err(|_| Error::InvalidIpAddress(text.clone()))?;
                }
                combine(&octets).ok_or_else(|| Error::InvalidIpAddress(text.clone()))
            }
            IpQuery::Octets(octets) => {
                combine(octets).ok_or_else(|| Error::InvalidIpAddress(format!("{:?}", octets)))
            }
            IpQuery::Integer(value) => Ok(*value),
        }
    }

    /// Normalize to an [`Ipv4Addr`].
    pub fn to_ipv4(&self) -> Result<Ipv4Addr> {
        self.to_u32().map(Ipv4Addr::from)
    }
}

/// Fold four octets into an address value.
///
/// Returns `None` unless there are exactly four octets, each at most 255.
fn combine(octets: &[u32]) -> Option<u32> {
    if octets.len() != 4 {
        return None;
    }
    octets.iter().try_fold(0u32, |acc, &octet| {
        if octet > 0xFF {
            None
        } else {
            Some((acc << 8) | octet)
        }
    })
}

impl fmt::Display for IpQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpQuery::Text(text) => write!(f, "{}", text),
            IpQuery::Octets(octets) => write!(f, "{:?}", octets),
            IpQuery::Integer(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for IpQuery {
    fn from(s: &str) -> Self {
        IpQuery::Text(s.to_string())
    }
}

impl From<String> for IpQuery {
    fn from(s: String) -> Self {
        IpQuery::Text(s)
    }
}

impl From<&String> for IpQuery {
    fn from(s: &String) -> Self {
        IpQuery::Text(s.clone())
    }
}

impl From<[u8; 4]> for IpQuery {
    fn from(octets: [u8; 4]) -> Self {
        IpQuery::Octets(octets.iter().map(|&o| u32::from(o)).collect())
    }
}

impl From<Vec<u32>> for IpQuery {
    fn from(octets: Vec<u32>) -> Self {
        IpQuery::Octets(octets)
    }
}

impl From<&[u32]> for IpQuery {
    fn from(octets: &[u32]) -> Self {
        IpQuery::Octets(octets.to_vec())
    }
}

impl From<u32> for IpQuery {
    fn from(value: u32) -> Self {
        IpQuery::Integer(value)
    }
}

impl From<Ipv4Addr> for IpQuery {
    fn from(addr: Ipv4Addr) -> Self {
        IpQuery::Integer(u32::from(addr))
    }
}
