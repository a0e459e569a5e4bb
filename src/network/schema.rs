//! Versioned network data schemas
//!
//! Detects which provider schema a versioned network document uses and
//! decodes it into the raw record lists shared by both variants, so a
//! single parser chain serves every provider.

use serde::Deserialize;
use tracing::debug;

use crate::GuestInitError;

use super::NetworkConfiguration;
use super::raw::{RawAddressRecord, RawConfigEntry, RawLinkRecord, RawServiceRecord};
use super::{parse_addresses, parse_links, parse_services};

/// The two supported shapes of versioned network data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// Separate `links`, `networks`, and `services` tables.
    OpenStack,
    /// A single flat `config` list mixing link, subnet-bearing, and
    /// nameserver records.
    Maas,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OpenStackDocument {
    links: Option<Vec<RawLinkRecord>>,
    networks: Option<Vec<RawAddressRecord>>,
    services: Option<Vec<RawServiceRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MaasDocument {
    config: Option<Vec<RawConfigEntry>>,
}

/// A versioned network document reduced to raw record lists.
#[derive(Debug, Clone)]
pub struct NetworkData {
    pub variant: SchemaVariant,
    pub links: Option<Vec<RawLinkRecord>>,
    pub addresses: Option<Vec<RawAddressRecord>>,
    pub services: Option<Vec<RawServiceRecord>>,
}

impl NetworkData {
    /// Decode a raw versioned document.
    ///
    /// Returns `Ok(None)` when the document matches neither schema variant,
    /// meaning no data for any layer. A structurally malformed document is
    /// a fatal decoding error; nothing is salvaged from it.
    pub fn decode(
        raw: &str,
        variant: Option<SchemaVariant>,
    ) -> Result<Option<Self>, GuestInitError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let variant = match variant.or_else(|| detect_variant(&value)) {
            Some(variant) => variant,
            None => return Ok(None),
        };
        debug!("Decoding network data as {:?} shape", variant);

        match variant {
            SchemaVariant::OpenStack => {
                let document: OpenStackDocument = serde_json::from_value(value)?;
                Ok(Some(NetworkData {
                    variant,
                    links: document.links,
                    addresses: document.networks,
                    services: document.services,
                }))
            }
            SchemaVariant::Maas => {
                let document: MaasDocument = serde_json::from_value(value)?;
                match document.config {
                    Some(entries) => Ok(Some(split_config_entries(entries))),
                    None => Ok(None),
                }
            }
        }
    }

    /// Run the parser chain over the decoded record lists, links before
    /// addresses, and assemble the unified result.
    pub fn normalize(&self) -> Option<NetworkConfiguration> {
        let links = self.links.as_deref().and_then(parse_links);
        let addresses = self
            .addresses
            .as_deref()
            .and_then(|records| parse_addresses(records, links.as_deref()));
        let services = self
            .services
            .as_deref()
            .and_then(|records| parse_services(records, self.variant));
        NetworkConfiguration::from_layers(links, addresses, services)
    }
}

/// Pick the schema variant from the document's top-level keys. The
/// OpenStack tables win when a document somehow carries both shapes.
fn detect_variant(value: &serde_json::Value) -> Option<SchemaVariant> {
    let object = value.as_object()?;
    if object.contains_key("links")
        || object.contains_key("networks")
        || object.contains_key("services")
    {
        return Some(SchemaVariant::OpenStack);
    }
    if object.contains_key("config") {
        return Some(SchemaVariant::Maas);
    }
    None
}

/// Split the flat MAAS config list into the three raw record tables.
///
/// Every entry doubles as a link record (service pseudo-records are
/// filtered later by the link parser). Entries with subnets additionally
/// yield one address record per subnet, carrying the owning entry's name,
/// id, and MAC so the shared cross-reference and inheritance rules apply
/// unchanged across variants.
fn split_config_entries(entries: Vec<RawConfigEntry>) -> NetworkData {
    let mut links = Vec::with_capacity(entries.len());
    let mut addresses = Vec::new();
    let mut services = Vec::new();

    for entry in entries {
        if entry.link.link_type.as_deref() == Some("nameserver") {
            services.push(RawServiceRecord {
                service_type: entry.link.link_type.clone(),
                address: entry.address.clone(),
                search: entry.search.clone(),
            });
        }

        let network_name = entry.link.name.clone().or_else(|| entry.link.id.clone());
        let link_id = entry.link.id.clone().or_else(|| entry.link.name.clone());
        for subnet in &entry.subnets {
            addresses.push(RawAddressRecord {
                id: network_name.clone(),
                network_id: network_name.clone(),
                address_type: subnet.subnet_type.clone(),
                link: link_id.clone(),
                mac_address: entry.link.mac_address.clone(),
                ip_address: subnet.address.clone(),
                netmask: subnet.netmask.clone(),
                gateway: subnet.gateway.clone(),
                dns_nameservers: subnet.dns_nameservers.clone(),
                routes: subnet.routes.clone(),
            });
        }

        links.push(entry.link);
    }

    NetworkData {
        variant: SchemaVariant::Maas,
        links: Some(links),
        addresses: Some(addresses),
        services: Some(services),
    }
}
