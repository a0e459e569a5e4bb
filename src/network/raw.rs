//! Raw provider record types
//!
//! The record shapes found in versioned network documents, before
//! normalization. Field spellings differ between the OpenStack and MAAS
//! schema variants (`ethernet_mac_address` vs `mac_address`, `bond_links`
//! vs `bond_interfaces`); serde aliases unify them so the parsers see a
//! single shape. Every field is optional: missing data is normal, while a
//! field of the wrong shape is a fatal decoding error for the whole read.

use std::collections::HashMap;

use serde::Deserialize;

use super::RouteRecord;

/// A value that providers serialize either as a scalar or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// One entry of a provider link table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLinkRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    pub mtu: Option<u32>,
    #[serde(alias = "ethernet_mac_address")]
    pub mac_address: Option<String>,
    #[serde(alias = "bond_interfaces")]
    pub bond_links: Option<Vec<String>>,
    pub bond_mode: Option<String>,
    /// Curtin-style parameter map (`bond-mode` and friends).
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
    pub vlan_id: Option<u16>,
    pub vlan_link: Option<String>,
}

/// One entry of a provider network/subnet table.
///
/// In the MAAS shape these are synthesized from (link, subnet) pairs by the
/// schema decoder; in the OpenStack shape they arrive as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAddressRecord {
    pub id: Option<String>,
    pub network_id: Option<String>,
    #[serde(rename = "type")]
    pub address_type: Option<String>,
    /// Id of the link this address is bound to.
    pub link: Option<String>,
    /// MAC carried on the record itself (flat schemas); inherited from the
    /// cross-referenced link otherwise.
    pub mac_address: Option<String>,
    #[serde(alias = "address")]
    pub ip_address: Option<String>,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
    #[serde(default)]
    pub dns_nameservers: Vec<String>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// One subnet block nested under a MAAS-style link entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSubnetRecord {
    #[serde(rename = "type")]
    pub subnet_type: Option<String>,
    pub address: Option<String>,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
    #[serde(default)]
    pub dns_nameservers: Vec<String>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// One entry of a provider service table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawServiceRecord {
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    pub address: Option<OneOrMany<String>>,
    #[serde(default)]
    pub search: Vec<String>,
}

/// One entry of the flat MAAS-style `config` list, which interleaves link,
/// subnet-bearing, and nameserver records in a single table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawConfigEntry {
    #[serde(flatten)]
    pub link: RawLinkRecord,
    #[serde(default)]
    pub subnets: Vec<RawSubnetRecord>,
    /// Nameserver address(es) on service pseudo-records.
    pub address: Option<OneOrMany<String>>,
    #[serde(default)]
    pub search: Vec<String>,
}
