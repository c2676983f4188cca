//! The subnet being calculated: an address plus a prefix length.

use super::class::ClassInfo;
use super::host::{next_host, prev_host, HostAddress, UsableRangePolicy};
use super::ipv4::{
    broadcast_bits, host_count, mask_bits, network_bits, to_binary, HostCountPolicy, MAX_LENGTH,
};
use crate::error::{Result, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    static ref DOTTED_DECIMAL: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex?");
}

/// Parse a dotted-decimal IPv4 address, checking every octet is in 0..=255.
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    let text = text.trim();
    let caps = DOTTED_DECIMAL.captures(text).ok_or_else(|| {
        SubnetError::InvalidAddress(format!("'{text}' is not four dot-separated numbers"))
    })?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let group = &caps[i + 1];
        *octet = group.parse().map_err(|_| {
            SubnetError::InvalidAddress(format!("octet {group} out of range in '{text}'"))
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parse a CIDR prefix length in 0..=32; a leading `/` is accepted, a sign is not.
pub fn parse_prefix(text: &str) -> Result<u8> {
    let text = text.trim();
    let digits = text.strip_prefix('/').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::InvalidPrefixLength(text.to_string()));
    }
    match digits.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(SubnetError::InvalidPrefixLength(text.to_string())),
    }
}

/// An IPv4 address with its CIDR prefix length.
///
/// Validated on construction and never changed afterwards; every other value
/// is computed from the two fields on each call.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    addr: Ipv4Addr,
    prefix_len: u8,
}

impl Subnet {
    /// Build from the two prompt answers, e.g. `("192.168.1.10", "24")`.
    pub fn new(addr: &str, prefix: &str) -> Result<Subnet> {
        let addr = parse_address(addr)?;
        let prefix_len = parse_prefix(prefix)?;
        Self::from_addr(addr, prefix_len)
    }

    pub fn from_octets(octets: [u8; 4], prefix_len: u8) -> Result<Subnet> {
        Self::from_addr(Ipv4Addr::from(octets), prefix_len)
    }

    pub fn from_addr(addr: Ipv4Addr, prefix_len: u8) -> Result<Subnet> {
        if prefix_len > MAX_LENGTH {
            log::warn!("Rejected prefix length /{prefix_len} for {addr}");
            return Err(SubnetError::InvalidPrefixLength(prefix_len.to_string()));
        }
        log::debug!("Subnet::from_addr({addr}/{prefix_len})");
        Ok(Subnet { addr, prefix_len })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix_len))
    }

    /// Lowest address in the subnet.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(network_bits(self.addr, self.prefix_len))
    }

    /// Highest address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(broadcast_bits(self.addr, self.prefix_len))
    }

    pub fn usable_hosts(&self, policy: HostCountPolicy) -> i64 {
        host_count(self.prefix_len, policy)
    }

    pub fn first_usable(&self, policy: UsableRangePolicy) -> HostAddress {
        next_host(self.network(), policy)
    }

    pub fn last_usable(&self, policy: UsableRangePolicy) -> HostAddress {
        prev_host(self.broadcast(), policy)
    }

    /// Address class and whether the prefix matches the class boundary.
    pub fn classify(&self) -> ClassInfo {
        ClassInfo::new(self.addr.octets()[0], self.prefix_len)
    }

    pub fn address_binary(&self) -> String {
        to_binary(self.addr)
    }

    pub fn mask_binary(&self) -> String {
        to_binary(self.mask())
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    /// Parse CIDR notation, e.g. "10.0.0.0/24".
    fn from_str(addr_cidr: &str) -> Result<Subnet> {
        let (addr, prefix) = addr_cidr.trim().split_once('/').ok_or_else(|| {
            SubnetError::InvalidAddress(format!("expected <address>/<prefix>, got '{addr_cidr}'"))
        })?;
        Subnet::new(addr, prefix)
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressClass;

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address(" 192.168.1.10\n").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(parse_address("0.0.0.0").unwrap(), Ipv4Addr::UNSPECIFIED);
        for bad in [
            "300.1.1.1",
            "1.1.1",
            "1.1.1.1.1",
            "a.b.c.d",
            "1..1.1",
            "",
            "-1.0.0.0",
            "+1.0.0.0",
        ] {
            assert!(
                matches!(parse_address(bad), Err(SubnetError::InvalidAddress(_))),
                "expected InvalidAddress for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("24").unwrap(), 24);
        assert_eq!(parse_prefix(" /8 ").unwrap(), 8);
        assert_eq!(parse_prefix("0").unwrap(), 0);
        assert_eq!(parse_prefix("32").unwrap(), 32);
        for bad in ["33", "-1", "+24", "/+24", "abc", "", "/", "256", "２４"] {
            assert!(
                matches!(parse_prefix(bad), Err(SubnetError::InvalidPrefixLength(_))),
                "expected InvalidPrefixLength for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_address_non_ascii_digits() {
        // Arabic-Indic one is a Unicode digit but not an octet
        match parse_address("\u{0661}.1.1.1") {
            Err(SubnetError::InvalidAddress(msg)) => {
                assert!(msg.contains("not four dot-separated numbers"), "{msg}")
            }
            other => panic!("expected InvalidAddress, got {other:?}"),
        }
    }

    #[test]
    fn test_derived_values_every_prefix() {
        let addr = Ipv4Addr::new(172, 16, 5, 200);
        for len in 0..=MAX_LENGTH {
            let subnet = Subnet::from_addr(addr, len).unwrap();
            let mask = u32::from(subnet.mask());
            assert_eq!(mask.leading_ones(), len as u32);
            assert_eq!(u32::from(subnet.network()), u32::from(addr) & mask);
            assert_eq!(u32::from(subnet.broadcast()), u32::from(addr) | !mask);
        }
    }

    #[test]
    fn test_from_octets_rejects_long_prefix() {
        assert!(Subnet::from_octets([10, 0, 0, 1], 32).is_ok());
        assert!(matches!(
            Subnet::from_octets([10, 0, 0, 1], 33),
            Err(SubnetError::InvalidPrefixLength(_))
        ));
    }

    #[test]
    fn test_class_c_24() {
        let subnet = Subnet::new("192.168.1.10", "24").unwrap();
        assert_eq!(subnet.mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(subnet.network(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(subnet.broadcast(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(subnet.usable_hosts(HostCountPolicy::Literal), 254);
        assert_eq!(
            subnet.first_usable(UsableRangePolicy::Carry).to_string(),
            "192.168.1.1"
        );
        assert_eq!(
            subnet.last_usable(UsableRangePolicy::Carry).to_string(),
            "192.168.1.254"
        );
        let info = subnet.classify();
        assert_eq!(info.class, AddressClass::C);
        assert!(info.classful);
    }

    #[test]
    fn test_prefix_32() {
        let subnet = Subnet::new("10.0.0.255", "32").unwrap();
        assert_eq!(subnet.network(), subnet.addr());
        assert_eq!(subnet.broadcast(), subnet.addr());
        assert_eq!(subnet.usable_hosts(HostCountPolicy::Literal), -1);
        assert_eq!(subnet.usable_hosts(HostCountPolicy::Clamp), 0);
        assert_eq!(
            subnet.first_usable(UsableRangePolicy::Carry).to_string(),
            "10.0.1.0"
        );
        assert_eq!(
            subnet.first_usable(UsableRangePolicy::LastOctet).to_string(),
            "10.0.0.256"
        );
        assert_eq!(
            subnet.last_usable(UsableRangePolicy::LastOctet).to_string(),
            "10.0.0.254"
        );
    }

    #[test]
    fn test_prefix_31() {
        let subnet = Subnet::new("10.0.0.7", "31").unwrap();
        assert_eq!(subnet.network(), Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(subnet.broadcast(), Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(subnet.usable_hosts(HostCountPolicy::Literal), 0);
    }

    #[test]
    fn test_from_str_cidr() {
        let subnet: Subnet = "172.16.5.200/20".parse().unwrap();
        assert_eq!(subnet.addr(), Ipv4Addr::new(172, 16, 5, 200));
        assert_eq!(subnet.prefix_len(), 20);
        assert_eq!(subnet.to_string(), "172.16.5.200/20");
        assert!("172.16.5.200".parse::<Subnet>().is_err());
        assert!("172.16.5.200/40".parse::<Subnet>().is_err());
    }

    #[test]
    fn test_binary_views() {
        let subnet = Subnet::new("192.168.1.10", "20").unwrap();
        assert_eq!(subnet.address_binary(), "11000000.10101000.00000001.00001010");
        assert_eq!(subnet.mask_binary(), "11111111.11111111.11110000.00000000");
    }

    #[test]
    fn test_serialize() {
        let subnet = Subnet::new("10.1.1.0", "28").unwrap();
        assert_eq!(serde_json::to_string(&subnet).unwrap(), "\"10.1.1.0/28\"");
    }
}
