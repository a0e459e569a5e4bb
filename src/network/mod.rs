//! Network configuration normalization
//!
//! Converts provider-specific network metadata into a unified
//! link/address/service model. Two source formats are supported: versioned
//! JSON documents (OpenStack `network_data.json` tables or the flat MAAS
//! curtin list) and the legacy debian-interfaces content blob used by older
//! providers. The [`orchestrator`] selects the format present on a source
//! and drives the parser chain; the individual parsers are pure functions
//! and can be composed directly.

pub mod addresses;
pub mod debiface;
pub mod legacy;
pub mod links;
pub mod orchestrator;
pub mod raw;
pub mod schema;
pub mod services;
pub mod util;

use serde::{Deserialize, Serialize};

pub use addresses::parse_addresses;
pub use debiface::InterfaceRecord;
pub use legacy::parse_legacy;
pub use links::parse_links;
pub use orchestrator::{NetworkDataParser, ParseOptions};
pub use schema::{NetworkData, SchemaVariant};
pub use services::parse_services;

/// Link-layer interface classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Physical,
    Bond,
    Vlan,
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkType::Physical => write!(f, "physical"),
            LinkType::Bond => write!(f, "bond"),
            LinkType::Vlan => write!(f, "vlan"),
        }
    }
}

/// Address family of an L3 assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "ipv4"),
            AddressFamily::Ipv6 => write!(f, "ipv6"),
        }
    }
}

/// Bond metadata attached to a bond link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BondInfo {
    /// Member link ids; empty when the source listed none.
    pub members: Vec<String>,
    pub mode: Option<String>,
}

/// VLAN metadata attached to a vlan link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VlanInfo {
    pub vlan_id: Option<u16>,
}

/// Normalized link-layer descriptor, one per network interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkDescriptor {
    /// Provider identifier; the key address records cross-reference.
    pub id: Option<String>,
    pub link_type: Option<LinkType>,
    /// Raw provider type string, preserved for diagnostics.
    pub meta_type: Option<String>,
    /// Canonical uppercase colon-hex form.
    pub mac_address: Option<String>,
    pub mtu: Option<u32>,
    pub bond_info: Option<BondInfo>,
    pub vlan_info: Option<VlanInfo>,
}

/// A route entry passed through verbatim from the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub network: Option<String>,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
}

/// Normalized address descriptor: one subnet-attached address on a link.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressDescriptor {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Foreign key into [`LinkDescriptor::id`].
    pub link_name: Option<String>,
    /// Own MAC, or the one inherited from the cross-referenced link.
    pub mac_address: Option<String>,
    pub address_family: Option<AddressFamily>,
    /// Raw provider type string when one was given, otherwise the derived
    /// family name.
    pub meta_type: Option<String>,
    pub ip_address: Option<String>,
    pub prefix_length: Option<String>,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
    pub dns_nameservers: Vec<String>,
    pub routes: Option<Vec<RouteRecord>>,
}

/// Normalized service-layer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    /// Global DNS nameservers, in source order.
    pub dns_nameservers: Vec<String>,
}

/// Unified network configuration produced by one metadata read.
///
/// `None` for a layer means the source carried no data for it, which is
/// distinct from a present-but-empty sequence. The value is built once per
/// read and consumed as-is; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkConfiguration {
    pub links: Option<Vec<LinkDescriptor>>,
    pub addresses: Option<Vec<AddressDescriptor>>,
    pub services: Option<ServiceConfig>,
}

impl NetworkConfiguration {
    /// Assemble a configuration from individually parsed layers.
    ///
    /// Returns `None` when every layer is absent, so callers never receive
    /// a configuration with nothing to apply.
    pub fn from_layers(
        links: Option<Vec<LinkDescriptor>>,
        addresses: Option<Vec<AddressDescriptor>>,
        services: Option<ServiceConfig>,
    ) -> Option<Self> {
        if links.is_none() && addresses.is_none() && services.is_none() {
            return None;
        }
        Some(Self {
            links,
            addresses,
            services,
        })
    }
}
