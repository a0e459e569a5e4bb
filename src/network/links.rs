//! Link parser
//!
//! Normalizes raw link records into [`LinkDescriptor`]s.

use tracing::debug;

use super::raw::RawLinkRecord;
use super::util::normalize_mac;
use super::{BondInfo, LinkDescriptor, LinkType, VlanInfo};

/// Raw type strings marking service pseudo-records that providers
/// interleave into link tables; the service parser consumes those instead.
const SERVICE_PSEUDO_TYPES: &[&str] = &["nameserver", "dns"];

/// Parse a raw link record sequence into link descriptors, preserving
/// input order.
///
/// Returns `None` when the sequence is empty (layer absent). Service
/// pseudo-records are filtered out, never parsed as links; every other
/// record yields a descriptor, even one missing all identifying fields.
pub fn parse_links(records: &[RawLinkRecord]) -> Option<Vec<LinkDescriptor>> {
    if records.is_empty() {
        return None;
    }

    let mut links = Vec::with_capacity(records.len());
    for record in records {
        let pseudo = record
            .link_type
            .as_deref()
            .is_some_and(|raw| SERVICE_PSEUDO_TYPES.contains(&raw));
        if pseudo {
            continue;
        }
        links.push(parse_link(record));
    }
    Some(links)
}

/// Normalize a single raw link record.
fn parse_link(record: &RawLinkRecord) -> LinkDescriptor {
    let mut link = LinkDescriptor {
        id: record.id.clone().or_else(|| record.name.clone()),
        mtu: record.mtu,
        mac_address: record.mac_address.as_deref().map(normalize_mac),
        ..Default::default()
    };

    let Some(raw_type) = record.link_type.as_deref() else {
        // No type information: the descriptor still appears, unclassified.
        return link;
    };

    link.meta_type = Some(raw_type.to_string());
    link.link_type = Some(classify_link_type(raw_type));

    match link.link_type {
        Some(LinkType::Bond) => {
            link.bond_info = Some(BondInfo {
                members: record.bond_links.clone().unwrap_or_default(),
                mode: bond_mode(record),
            });
        }
        Some(LinkType::Vlan) => {
            link.vlan_info = Some(VlanInfo {
                vlan_id: record.vlan_id,
            });
        }
        _ => {}
    }

    link
}

/// Canonicalize a provider link type string.
///
/// `ovs` and `vif` are virtual NIC flavors that configure like physical
/// interfaces. Any other string that is not a bond or vlan also classifies
/// as physical; the raw string survives in `meta_type` for audit.
fn classify_link_type(raw: &str) -> LinkType {
    match raw {
        "bond" => LinkType::Bond,
        "vlan" => LinkType::Vlan,
        "phy" | "physical" | "ovs" | "vif" => LinkType::Physical,
        other => {
            debug!("Unrecognized link type '{}', treating as physical", other);
            LinkType::Physical
        }
    }
}

/// Bond mode, whether top-level or nested in the curtin `params` map.
fn bond_mode(record: &RawLinkRecord) -> Option<String> {
    record.bond_mode.clone().or_else(|| {
        record
            .params
            .get("bond-mode")
            .and_then(|mode| mode.as_str())
            .map(str::to_string)
    })
}
