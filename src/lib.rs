//! IPv4 subnet calculator.
//!
//! Derives mask, network, broadcast, usable host range, host count and the
//! legacy address class from an address and a CIDR prefix length.
//!
//! ```
//! use subnet_calculator::models::{HostCountPolicy, Subnet};
//!
//! let subnet = Subnet::new("192.168.1.10", "24").unwrap();
//! assert_eq!(subnet.network().to_string(), "192.168.1.0");
//! assert_eq!(subnet.usable_hosts(HostCountPolicy::Literal), 254);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;

pub use error::{Result, SubnetError};
pub use models::Subnet;
