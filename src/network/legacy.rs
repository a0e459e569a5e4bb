//! Legacy interface parser
//!
//! Normalizes tokenized debian-interfaces records (the pre-versioned
//! `network_config` format of older OpenStack-compatible providers) into
//! the unified model.

use super::debiface::InterfaceRecord;
use super::util::normalize_mac;
use super::{AddressDescriptor, LinkDescriptor, LinkType, NetworkConfiguration};

/// Parse legacy interface records into a network configuration.
///
/// Every interface yields one physical link descriptor plus an ipv4 and an
/// ipv6 address descriptor, both unconditionally: downstream consumers rely
/// on the positional correspondence between links and address pairs, so a
/// descriptor whose fields are all unset is still emitted, never pruned.
/// Returns `None` for an empty record sequence.
pub fn parse_legacy(interfaces: &[InterfaceRecord]) -> Option<NetworkConfiguration> {
    if interfaces.is_empty() {
        return None;
    }

    let mut links = Vec::with_capacity(interfaces.len());
    let mut addresses = Vec::with_capacity(interfaces.len() * 2);

    for iface in interfaces {
        links.push(LinkDescriptor {
            id: iface.name.clone(),
            link_type: Some(LinkType::Physical),
            mac_address: iface.mac.as_deref().map(normalize_mac),
            ..Default::default()
        });

        addresses.push(AddressDescriptor {
            ip_address: iface.address.clone(),
            netmask: iface.netmask.clone(),
            gateway: iface.gateway.clone(),
            dns_nameservers: iface.dns_nameservers.clone(),
            ..Default::default()
        });

        // The legacy tokenizer emits a prefix length in its netmask6 slot.
        addresses.push(AddressDescriptor {
            ip_address: iface.address6.clone(),
            prefix_length: iface.netmask6.clone(),
            gateway: iface.gateway6.clone(),
            ..Default::default()
        });
    }

    Some(NetworkConfiguration {
        links: Some(links),
        addresses: Some(addresses),
        services: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_stack_interface() {
        let interfaces = vec![InterfaceRecord {
            name: Some("eth0".to_string()),
            mac: Some("fa:16:3e:2d:ec:cd".to_string()),
            address: Some("10.0.0.15".to_string()),
            netmask: Some("255.255.255.0".to_string()),
            gateway: Some("10.0.0.1".to_string()),
            dns_nameservers: vec!["208.67.220.220".to_string()],
            address6: Some("2001:db8::3".to_string()),
            netmask6: Some("64".to_string()),
            gateway6: Some("2001:db8::1".to_string()),
            ..Default::default()
        }];

        let config = parse_legacy(&interfaces).unwrap();
        let links = config.links.unwrap();
        let addresses = config.addresses.unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id.as_deref(), Some("eth0"));
        assert_eq!(links[0].link_type, Some(LinkType::Physical));
        assert_eq!(links[0].mac_address.as_deref(), Some("FA:16:3E:2D:EC:CD"));

        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].ip_address.as_deref(), Some("10.0.0.15"));
        assert_eq!(addresses[0].netmask.as_deref(), Some("255.255.255.0"));
        assert_eq!(addresses[0].gateway.as_deref(), Some("10.0.0.1"));
        assert_eq!(addresses[0].dns_nameservers, vec!["208.67.220.220"]);
        assert_eq!(addresses[1].ip_address.as_deref(), Some("2001:db8::3"));
        assert_eq!(addresses[1].prefix_length.as_deref(), Some("64"));
        assert_eq!(addresses[1].gateway.as_deref(), Some("2001:db8::1"));

        assert_eq!(config.services, None);
    }

    #[test]
    fn test_ipv6_only_interface_keeps_empty_ipv4_slot() {
        let interfaces = vec![InterfaceRecord {
            name: Some("eth0".to_string()),
            address6: Some("2001:db8::3".to_string()),
            netmask6: Some("64".to_string()),
            gateway6: Some("2001:db8::1".to_string()),
            ..Default::default()
        }];

        let config = parse_legacy(&interfaces).unwrap();
        let addresses = config.addresses.unwrap();

        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0], AddressDescriptor::default());
        assert_eq!(addresses[1].ip_address.as_deref(), Some("2001:db8::3"));
    }

    #[test]
    fn test_positional_correspondence_across_interfaces() {
        let interfaces = vec![
            InterfaceRecord {
                name: Some("eth0".to_string()),
                address: Some("10.0.0.15".to_string()),
                ..Default::default()
            },
            InterfaceRecord {
                name: Some("eth1".to_string()),
                address: Some("10.0.1.15".to_string()),
                ..Default::default()
            },
        ];

        let config = parse_legacy(&interfaces).unwrap();
        let addresses = config.addresses.unwrap();

        // Two descriptors per interface, v4 slot first.
        assert_eq!(addresses.len(), 4);
        assert_eq!(addresses[0].ip_address.as_deref(), Some("10.0.0.15"));
        assert_eq!(addresses[2].ip_address.as_deref(), Some("10.0.1.15"));
    }

    #[test]
    fn test_empty_input_is_no_configuration() {
        assert_eq!(parse_legacy(&[]), None);
    }
}
