//! First and last usable host addresses.

use crate::error::{Result, SubnetError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// How the usable range steps away from the network and broadcast addresses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UsableRangePolicy {
    /// Full 32-bit increment and decrement.
    #[default]
    Carry,
    /// Only the fourth octet moves; no carry or borrow into the third.
    LastOctet,
}

impl FromStr for UsableRangePolicy {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carry" => Ok(UsableRangePolicy::Carry),
            "last-octet" | "last_octet" => Ok(UsableRangePolicy::LastOctet),
            other => Err(SubnetError::Config(format!(
                "unknown usable range policy '{other}' (expected carry or last-octet)"
            ))),
        }
    }
}

/// A usable host address.
///
/// Stepping only the fourth octet can leave the 0..=255 range, e.g. the
/// first host after `10.0.0.255/32` is `10.0.0.256`. Such a value cannot be
/// an [`Ipv4Addr`] and is kept as [`HostAddress::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAddress {
    Addr(Ipv4Addr),
    OutOfRange { head: [u8; 3], last: i16 },
}

impl HostAddress {
    /// The address, when it is a real one.
    pub fn addr(&self) -> Option<Ipv4Addr> {
        match self {
            HostAddress::Addr(addr) => Some(*addr),
            HostAddress::OutOfRange { .. } => None,
        }
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HostAddress::Addr(addr) => write!(f, "{addr}"),
            HostAddress::OutOfRange { head, last } => {
                write!(f, "{}.{}.{}.{}", head[0], head[1], head[2], last)
            }
        }
    }
}

impl Serialize for HostAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

fn step_last_octet(addr: Ipv4Addr, delta: i16) -> HostAddress {
    let [a, b, c, d] = addr.octets();
    let last = d as i16 + delta;
    match u8::try_from(last) {
        Ok(d) => HostAddress::Addr(Ipv4Addr::new(a, b, c, d)),
        Err(_) => HostAddress::OutOfRange {
            head: [a, b, c],
            last,
        },
    }
}

/// The address after `addr`.
pub fn next_host(addr: Ipv4Addr, policy: UsableRangePolicy) -> HostAddress {
    match policy {
        UsableRangePolicy::Carry => u32::from(addr)
            .checked_add(1)
            .map(|bits| HostAddress::Addr(Ipv4Addr::from(bits)))
            .unwrap_or_else(|| step_last_octet(addr, 1)),
        UsableRangePolicy::LastOctet => step_last_octet(addr, 1),
    }
}

/// The address before `addr`.
pub fn prev_host(addr: Ipv4Addr, policy: UsableRangePolicy) -> HostAddress {
    match policy {
        UsableRangePolicy::Carry => u32::from(addr)
            .checked_sub(1)
            .map(|bits| HostAddress::Addr(Ipv4Addr::from(bits)))
            .unwrap_or_else(|| step_last_octet(addr, -1)),
        UsableRangePolicy::LastOctet => step_last_octet(addr, -1),
    }
}
