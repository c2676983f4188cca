//! Domain models for the subnet calculator.
//!
//! - [`ipv4`] arithmetic helpers: masks, network/broadcast, host counts, binary form
//! - [`Subnet`] - an address with its prefix length
//! - [`AddressClass`] and [`ClassInfo`] - legacy classful labels
//! - [`HostAddress`] - first/last usable host
//! - [`SubnetReport`] - the values printed for a subnet

mod class;
mod host;
mod ipv4;
mod report;
mod subnet;

// Re-export public types
pub use class::{AddressClass, ClassInfo};
pub use host::{next_host, prev_host, HostAddress, UsableRangePolicy};
pub use ipv4::{
    broadcast_addr, from_binary, get_cidr_mask, network_addr, num_hosts, to_binary,
    HostCountPolicy, MAX_LENGTH, RESERVED_HOSTS,
};
pub use report::SubnetReport;
pub use subnet::{parse_address, parse_prefix, Subnet};
