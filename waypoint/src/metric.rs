//! Distance metrics used by a [`Table`](crate::router::Table) to compare a packet destination
//! against its entries.
//!
//! A metric returns a non-negative distance, smaller is closer. Any negative distance means the
//! two addresses cannot reach each other under the addressing scheme (see
//! [`UNREACHABLE`](crate::router::UNREACHABLE)), such entries are never selected. Metrics must be
//! pure: the same pair of addresses always yields the same distance.

use std::fmt::{Display, Formatter};
use std::net::Ipv4Addr;
use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::feedback::AddressError;
use crate::router::UNREACHABLE;
use crate::util::saturate;

/// A distance strategy over addresses of type `A`
pub trait Metric<A: ?Sized>: Send + Sync {
    /// distance from a table entry address `entry` to a packet destination `dest`
    fn distance(&self, entry: &A, dest: &A) -> i64;
}

impl<A: ?Sized, F> Metric<A> for F
where
    F: Fn(&A, &A) -> i64 + Send + Sync,
{
    fn distance(&self, entry: &A, dest: &A) -> i64 {
        self(entry, dest)
    }
}

/// Addresses which know how far they are from each other
pub trait Distance {
    fn distance(&self, other: &Self) -> i64;
}

/// Strict equality, 0 for identical addresses, unreachable otherwise. This is the metric of a
/// table that was not given one.
///
/// ```
/// use waypoint::metric::exact;
/// assert_eq!(exact("abc", "abc"), 0);
/// assert!(exact("abc", "abd") < 0);
/// ```
pub fn exact<A: PartialEq + ?Sized>(entry: &A, dest: &A) -> i64 {
    if entry == dest {
        0
    } else {
        UNREACHABLE
    }
}

/// Delegates to the addresses' own [`Distance`]
pub fn intrinsic<A: Distance + ?Sized>(entry: &A, dest: &A) -> i64 {
    entry.distance(dest)
}

/// Number of characters from the first mismatch to the end of the address. Addresses of
/// different lengths are unreachable.
///
/// ```
/// use waypoint::metric::suffix_mismatch;
/// assert_eq!(suffix_mismatch("abc", "abc"), 0);
/// assert_eq!(suffix_mismatch("abc", "abd"), 1);
/// assert_eq!(suffix_mismatch("abc", "add"), 2);
/// assert_eq!(suffix_mismatch("abc", "ddd"), 3);
/// assert!(suffix_mismatch("abc", "ab") < 0);
/// ```
pub fn suffix_mismatch<S: AsRef<str> + ?Sized>(entry: &S, dest: &S) -> i64 {
    let (entry, dest) = (entry.as_ref().as_bytes(), dest.as_ref().as_bytes());
    if entry.len() != dest.len() {
        return UNREACHABLE;
    }
    let first_mismatch = entry.iter().zip(dest).position(|(a, b)| a != b);
    first_mismatch.map_or(0, |i| saturate((entry.len() - i) as u64))
}

/// Kademlia style XOR distance between two identifiers
///
/// ```
/// use waypoint::metric::xor;
/// assert_eq!(xor(&0b1010, &0b1000), 2);
/// assert_eq!(xor(&0, &u64::MAX), i64::MAX);
/// ```
pub fn xor(entry: &u64, dest: &u64) -> i64 {
    saturate(entry ^ dest)
}

/// An IPv4 network in CIDR notation, host bits are always zeroed.
///
/// As an entry address, a prefix reaches every destination inside its network at a distance of
/// `32 - len`, so the longest matching prefix is the closest one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub struct Ipv4Prefix {
    network: Ipv4Addr,
    len: u8,
}

impl Ipv4Prefix {
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Self, AddressError> {
        if len > 32 {
            return Err(AddressError::PrefixLength(len));
        }
        Ok(Self {
            network: Ipv4Addr::from(u32::from(addr) & Self::mask_of(len)),
            len,
        })
    }

    /// a /32 prefix naming exactly one host
    pub fn host(addr: Ipv4Addr) -> Self {
        Self { network: addr, len: 32 }
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn mask(&self) -> u32 {
        Self::mask_of(self.len)
    }

    fn mask_of(len: u8) -> u32 {
        u32::MAX.checked_shl(32 - len as u32).unwrap_or(0)
    }

    /// whether `other` lies entirely inside this network
    pub fn contains(&self, other: &Ipv4Prefix) -> bool {
        other.len >= self.len && u32::from(other.network) & self.mask() == u32::from(self.network)
    }
}

impl Distance for Ipv4Prefix {
    fn distance(&self, other: &Self) -> i64 {
        if self.contains(other) {
            (32 - self.len) as i64
        } else {
            UNREACHABLE
        }
    }
}

impl From<Ipv4Addr> for Ipv4Prefix {
    fn from(addr: Ipv4Addr) -> Self {
        Self::host(addr)
    }
}

impl FromStr for Ipv4Prefix {
    type Err = AddressError;

    /// parses `10.0.0.0/8`, a bare address is read as a /32
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = || AddressError::Notation(s.to_string());
        match s.split_once('/') {
            Some((addr, len)) => {
                let addr = addr.parse().map_err(|_| notation())?;
                let len = len.parse().map_err(|_| notation())?;
                Self::new(addr, len)
            }
            None => Ok(Self::host(s.parse().map_err(|_| notation())?)),
        }
    }
}

impl Display for Ipv4Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.len)
    }
}

impl TryFrom<String> for Ipv4Prefix {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ipv4Prefix> for String {
    fn from(prefix: Ipv4Prefix) -> Self {
        prefix.to_string()
    }
}
