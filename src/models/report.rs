//! The values printed for one subnet.

use super::class::{AddressClass, ClassInfo};
use super::host::HostAddress;
use super::subnet::Subnet;
use crate::config::Settings;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything the calculator reports about a subnet, in print order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubnetReport {
    pub class: AddressClass,
    pub classful: bool,
    pub address: Ipv4Addr,
    pub cidr: Subnet,
    pub mask: Ipv4Addr,
    pub usable_hosts: i64,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_usable: HostAddress,
    pub last_usable: HostAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_binary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_binary: Option<String>,
}

impl SubnetReport {
    /// `CLASSFULL` or `CLASSLESS`.
    pub fn kind(&self) -> &'static str {
        ClassInfo {
            class: self.class,
            classful: self.classful,
        }
        .label()
    }

    pub fn build(subnet: &Subnet, settings: &Settings) -> SubnetReport {
        let info = subnet.classify();
        log::debug!(
            "Building report for {subnet} class={} {}",
            info.class,
            info.label()
        );

        let (address_binary, mask_binary) = if settings.show_binary {
            (Some(subnet.address_binary()), Some(subnet.mask_binary()))
        } else {
            (None, None)
        };

        SubnetReport {
            class: info.class,
            classful: info.classful,
            address: subnet.addr(),
            cidr: *subnet,
            mask: subnet.mask(),
            usable_hosts: subnet.usable_hosts(settings.host_count),
            network: subnet.network(),
            broadcast: subnet.broadcast(),
            first_usable: subnet.first_usable(settings.usable_range),
            last_usable: subnet.last_usable(settings.usable_range),
            address_binary,
            mask_binary,
        }
    }
}
