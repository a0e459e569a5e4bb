//! Address parser
//!
//! Normalizes raw network/subnet records into [`AddressDescriptor`]s,
//! cross-referencing the already-parsed link descriptors to inherit MAC
//! addresses.

use std::collections::HashMap;

use super::raw::RawAddressRecord;
use super::util::{address_family, is_default_route, normalize_mac, prefix_to_netmask, split_cidr};
use super::{AddressDescriptor, AddressFamily, LinkDescriptor};

/// Parse a raw address record sequence into address descriptors, preserving
/// input order.
///
/// Returns `None` when the sequence is empty (layer absent). `links` is the
/// link parser's output for the same read; records that name a link inherit
/// its MAC address when they carry none of their own.
pub fn parse_addresses(
    records: &[RawAddressRecord],
    links: Option<&[LinkDescriptor]>,
) -> Option<Vec<AddressDescriptor>> {
    if records.is_empty() {
        return None;
    }

    // Link id -> descriptor, built once; first insertion wins on duplicate
    // ids so lookups stay deterministic.
    let mut links_by_id: HashMap<&str, &LinkDescriptor> = HashMap::new();
    for link in links.unwrap_or_default() {
        if let Some(id) = link.id.as_deref() {
            links_by_id.entry(id).or_insert(link);
        }
    }

    Some(
        records
            .iter()
            .map(|record| parse_address(record, &links_by_id))
            .collect(),
    )
}

/// Normalize a single raw address record.
fn parse_address(
    record: &RawAddressRecord,
    links_by_id: &HashMap<&str, &LinkDescriptor>,
) -> AddressDescriptor {
    let mut address = AddressDescriptor {
        id: record.network_id.clone(),
        name: record.id.clone(),
        link_name: record.link.clone(),
        dns_nameservers: record.dns_nameservers.clone(),
        ..Default::default()
    };

    // Own MAC wins; a missed cross-reference is not an error.
    address.mac_address = record.mac_address.as_deref().map(normalize_mac).or_else(|| {
        record
            .link
            .as_deref()
            .and_then(|id| links_by_id.get(id))
            .and_then(|link| link.mac_address.clone())
    });

    if let Some(literal) = record.ip_address.as_deref() {
        let (ip, prefix) = split_cidr(literal);
        address.ip_address = Some(ip.to_string());
        address.prefix_length = prefix.map(str::to_string);
    }
    address.netmask = record.netmask.clone();

    if let Some(family) = record.address_type.as_deref().and_then(family_from_type) {
        address.address_family = Some(family);
        address.meta_type = record.address_type.clone();
    } else if let Some(family) = address.ip_address.as_deref().and_then(address_family) {
        address.address_family = Some(family);
        address.meta_type = Some(family.to_string());
    }

    // A dotted netmask is synthesized only when the source gave CIDR form,
    // and only for IPv4.
    if address.netmask.is_none() && address.address_family == Some(AddressFamily::Ipv4) {
        if let Some(prefix) = address
            .prefix_length
            .as_deref()
            .and_then(|prefix| prefix.parse::<u8>().ok())
        {
            address.netmask = prefix_to_netmask(prefix);
        }
    }

    // An explicit subnet-level gateway is authoritative; otherwise the
    // first default route in source order supplies one.
    address.gateway = record
        .gateway
        .clone()
        .or_else(|| default_route_gateway(record));
    if !record.routes.is_empty() {
        address.routes = Some(record.routes.clone());
    }

    address
}

/// Map an explicit provider address type to a family. Anything outside the
/// known set is ignored and the family is derived from the IP literal.
fn family_from_type(raw: &str) -> Option<AddressFamily> {
    match raw {
        "ipv4" | "ipv4_dhcp" => Some(AddressFamily::Ipv4),
        "ipv6" | "ipv6_dhcp" => Some(AddressFamily::Ipv6),
        _ => None,
    }
}

/// Gateway of the first route denoting the default route, in source order.
fn default_route_gateway(record: &RawAddressRecord) -> Option<String> {
    record
        .routes
        .iter()
        .find(|route| is_default_route(route.network.as_deref(), route.netmask.as_deref()))
        .and_then(|route| route.gateway.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::LinkType;

    fn records(json: &str) -> Vec<RawAddressRecord> {
        serde_json::from_str(json).unwrap()
    }

    fn link(id: &str, mac: Option<&str>) -> LinkDescriptor {
        LinkDescriptor {
            id: Some(id.to_string()),
            link_type: Some(LinkType::Physical),
            mac_address: mac.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_cidr_split() {
        let records = records(r#"[{"ip_address": "10.0.0.15/24"}]"#);
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].ip_address.as_deref(), Some("10.0.0.15"));
        assert_eq!(addresses[0].prefix_length.as_deref(), Some("24"));
    }

    #[test]
    fn test_plain_address_has_no_prefix() {
        let records = records(r#"[{"ip_address": "10.0.0.15", "netmask": "255.255.255.0"}]"#);
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].ip_address.as_deref(), Some("10.0.0.15"));
        assert_eq!(addresses[0].prefix_length, None);
        assert_eq!(addresses[0].netmask.as_deref(), Some("255.255.255.0"));
    }

    #[test]
    fn test_netmask_derived_from_prefix_for_ipv4_only() {
        let records = records(
            r#"[
                {"ip_address": "10.0.0.15/24"},
                {"ip_address": "2001:db8::3/64"}
            ]"#,
        );
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].netmask.as_deref(), Some("255.255.255.0"));
        assert_eq!(addresses[1].netmask, None);
        assert_eq!(addresses[1].prefix_length.as_deref(), Some("64"));
    }

    #[test]
    fn test_explicit_netmask_preserved_verbatim() {
        let records = records(r#"[{"ip_address": "10.0.0.15/24", "netmask": "255.255.0.0"}]"#);
        let addresses = parse_addresses(&records, None).unwrap();

        // Never converted, even when it disagrees with the prefix.
        assert_eq!(addresses[0].netmask.as_deref(), Some("255.255.0.0"));
    }

    #[test]
    fn test_family_from_explicit_type() {
        let records = records(r#"[{"type": "ipv4_dhcp"}]"#);
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].address_family, Some(AddressFamily::Ipv4));
        assert_eq!(addresses[0].meta_type.as_deref(), Some("ipv4_dhcp"));
    }

    #[test]
    fn test_family_derived_from_literal() {
        let records = records(r#"[{"type": "static", "ip_address": "2001:db8::3/64"}]"#);
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].address_family, Some(AddressFamily::Ipv6));
        assert_eq!(addresses[0].meta_type.as_deref(), Some("ipv6"));
    }

    #[test]
    fn test_gateway_from_default_route() {
        let records = records(
            r#"[{
                "ip_address": "10.0.0.4/24",
                "routes": [
                    {"network": "172.16.0.0", "netmask": "255.240.0.0", "gateway": "10.0.0.2"},
                    {"network": "0.0.0.0", "netmask": "0.0.0.0", "gateway": "10.0.0.1"},
                    {"network": "0.0.0.0", "netmask": "0.0.0.0", "gateway": "10.0.0.9"}
                ]
            }]"#,
        );
        let addresses = parse_addresses(&records, None).unwrap();

        // First matching default route wins; routes pass through verbatim.
        assert_eq!(addresses[0].gateway.as_deref(), Some("10.0.0.1"));
        assert_eq!(addresses[0].routes.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_explicit_gateway_wins_over_route() {
        let records = records(
            r#"[{
                "ip_address": "10.0.0.4/24",
                "gateway": "10.0.0.254",
                "routes": [{"network": "0.0.0.0", "netmask": "0.0.0.0", "gateway": "10.0.0.1"}]
            }]"#,
        );
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].gateway.as_deref(), Some("10.0.0.254"));
    }

    #[test]
    fn test_ipv6_default_route() {
        let records = records(
            r#"[{
                "ip_address": "2001:db8::3/64",
                "routes": [{"network": "::", "netmask": "::", "gateway": "2001:db8::1"}]
            }]"#,
        );
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].gateway.as_deref(), Some("2001:db8::1"));
    }

    #[test]
    fn test_mac_inherited_from_link() {
        let records = records(r#"[{"link": "tap0", "ip_address": "10.0.0.4/24"}]"#);
        let links = vec![link("tap0", Some("FA:16:3E:00:11:22"))];
        let addresses = parse_addresses(&records, Some(&links)).unwrap();

        assert_eq!(addresses[0].link_name.as_deref(), Some("tap0"));
        assert_eq!(
            addresses[0].mac_address.as_deref(),
            Some("FA:16:3E:00:11:22")
        );
    }

    #[test]
    fn test_own_mac_wins_over_link() {
        let records = records(
            r#"[{"link": "tap0", "mac_address": "fa:16:3e:2d:ec:cd", "ip_address": "10.0.0.4"}]"#,
        );
        let links = vec![link("tap0", Some("FA:16:3E:00:11:22"))];
        let addresses = parse_addresses(&records, Some(&links)).unwrap();

        assert_eq!(
            addresses[0].mac_address.as_deref(),
            Some("FA:16:3E:2D:EC:CD")
        );
    }

    #[test]
    fn test_cross_reference_miss_is_not_an_error() {
        let records = records(r#"[{"link": "missing", "ip_address": "10.0.0.4/24"}]"#);
        let addresses = parse_addresses(&records, Some(&[])).unwrap();

        assert_eq!(addresses[0].link_name.as_deref(), Some("missing"));
        assert_eq!(addresses[0].mac_address, None);
    }

    #[test]
    fn test_duplicate_link_ids_first_wins() {
        let records = records(r#"[{"link": "tap0"}]"#);
        let links = vec![
            link("tap0", Some("FA:16:3E:00:00:01")),
            link("tap0", Some("FA:16:3E:00:00:02")),
        ];
        let addresses = parse_addresses(&records, Some(&links)).unwrap();

        assert_eq!(
            addresses[0].mac_address.as_deref(),
            Some("FA:16:3E:00:00:01")
        );
    }

    #[test]
    fn test_id_and_name_mapping() {
        let records =
            records(r#"[{"id": "network0", "network_id": "62611d6f", "ip_address": "10.0.0.4"}]"#);
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].id.as_deref(), Some("62611d6f"));
        assert_eq!(addresses[0].name.as_deref(), Some("network0"));
    }

    #[test]
    fn test_dns_nameservers_kept_per_record() {
        let records = records(
            r#"[
                {"ip_address": "10.0.0.4", "dns_nameservers": ["8.8.8.8", "8.8.4.4"]},
                {"ip_address": "10.0.0.5"}
            ]"#,
        );
        let addresses = parse_addresses(&records, None).unwrap();

        assert_eq!(addresses[0].dns_nameservers, vec!["8.8.8.8", "8.8.4.4"]);
        assert!(addresses[1].dns_nameservers.is_empty());
    }

    #[test]
    fn test_empty_input_is_absent_layer() {
        assert_eq!(parse_addresses(&[], None), None);
    }
}
