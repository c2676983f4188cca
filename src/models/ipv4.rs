//! IPv4 address and CIDR arithmetic.
//!
//! Plain functions over [`Ipv4Addr`] and prefix lengths. Everything
//! [`super::Subnet`] derives is built from these.

use crate::error::{Result, SubnetError};
use itertools::Itertools;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Addresses reserved in every subnet (network and broadcast).
pub const RESERVED_HOSTS: i64 = 2;

/// How to report the usable host count of subnets too small to hold any host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HostCountPolicy {
    /// `2^(32 - len) - 2` as is, so a /32 reports -1.
    #[default]
    Literal,
    /// Never report fewer than zero hosts.
    Clamp,
}

impl FromStr for HostCountPolicy {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(HostCountPolicy::Literal),
            "clamp" => Ok(HostCountPolicy::Clamp),
            other => Err(SubnetError::Config(format!(
                "unknown host count policy '{other}' (expected literal or clamp)"
            ))),
        }
    }
}

fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixLength(len.to_string()))
    } else {
        Ok(())
    }
}

// The `*_bits` helpers take a prefix already checked against MAX_LENGTH.

pub(crate) fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len) as u32;
    // a shift by 32 (len == 0) leaves no mask bits
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

pub(crate) fn network_bits(addr: Ipv4Addr, len: u8) -> u32 {
    u32::from(addr) & mask_bits(len)
}

pub(crate) fn broadcast_bits(addr: Ipv4Addr, len: u8) -> u32 {
    network_bits(addr, len) | !mask_bits(len)
}

pub(crate) fn host_count(len: u8, policy: HostCountPolicy) -> i64 {
    let host_bits = mask_bits(len).count_zeros();
    let hosts = (1i64 << host_bits) - RESERVED_HOSTS;
    log::trace!("host_count(/{len}) host_bits={host_bits} hosts={hosts}");

    match policy {
        HostCountPolicy::Literal => hosts,
        HostCountPolicy::Clamp => hosts.max(0),
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    Ok(mask_bits(len))
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    check_len(len)?;
    Ok(Ipv4Addr::from(network_bits(addr, len)))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    check_len(len)?;
    Ok(Ipv4Addr::from(broadcast_bits(addr, len)))
}

/// Number of usable host addresses for a prefix length.
///
/// Counts the host bits, then removes the network and broadcast addresses.
///
/// ```
/// use subnet_calculator::models::{num_hosts, HostCountPolicy};
/// assert_eq!(num_hosts(24, HostCountPolicy::Literal).unwrap(), 254);
/// assert_eq!(num_hosts(32, HostCountPolicy::Literal).unwrap(), -1);
/// assert_eq!(num_hosts(32, HostCountPolicy::Clamp).unwrap(), 0);
/// ```
pub fn num_hosts(len: u8, policy: HostCountPolicy) -> Result<i64> {
    check_len(len)?;
    Ok(host_count(len, policy))
}

/// Render an address as four dot-separated groups of eight bits, MSB first.
///
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calculator::models::to_binary;
/// assert_eq!(
///     to_binary(Ipv4Addr::new(192, 168, 1, 10)),
///     "11000000.10101000.00000001.00001010"
/// );
/// ```
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// Parse the output of [`to_binary`] back into an address.
pub fn from_binary(bits: &str) -> Result<Ipv4Addr> {
    let groups: Vec<&str> = bits.trim().split('.').collect();
    if groups.len() != 4 {
        return Err(SubnetError::InvalidAddress(format!(
            "expected 4 bit groups, got {} in '{bits}'",
            groups.len()
        )));
    }

    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(groups) {
        *octet = decode_bit_group(group)
            .ok_or_else(|| SubnetError::InvalidAddress(format!("bad bit group '{group}'")))?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn decode_bit_group(group: &str) -> Option<u8> {
    if group.len() != 8 {
        return None;
    }
    group.bytes().try_fold(0u8, |acc, bit| match bit {
        b'0' => Some(acc << 1),
        b'1' => Some((acc << 1) | 1),
        _ => None,
    })
}
