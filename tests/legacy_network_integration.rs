//! Integration tests for the legacy debian-interfaces network path

use pretty_assertions::assert_eq;

use guest_init_rs::datasources::mock::MockSource;
use guest_init_rs::network::debiface;
use guest_init_rs::{
    AddressDescriptor, LinkDescriptor, LinkType, NetworkDataParser,
};

const METADATA: &str = r#"{
    "uuid": "0e2b3c01-96a9-4c74-9cf4-3b6e1b8e2d94",
    "hostname": "server-01",
    "network_config": {"content_path": "/content/0000"}
}"#;

const INTERFACES_BLOB: &str = r#"
# Injected by the provider on instance boot
auto eth0
iface eth0 inet static
    hwaddress ether fa:16:3e:2d:ec:cd
    address 10.0.0.15
    netmask 255.255.255.0
    broadcast 10.0.0.255
    gateway 10.0.0.1
    dns-nameservers 208.67.220.220 8.8.8.8

iface eth0 inet6 static
    address 2001:db8::3
    netmask 64
    gateway 2001:db8::1
"#;

const V6_ONLY_BLOB: &str = r#"
auto eth0
iface eth0 inet6 static
    address 2001:db8::3
    netmask 64
    gateway 2001:db8::1
"#;

#[tokio::test]
async fn test_legacy_path_end_to_end() {
    let source = MockSource::new()
        .with_metadata(METADATA)
        .with_content("0000", INTERFACES_BLOB);
    let parser = NetworkDataParser::default();

    let config = parser.network_details(&source).await.unwrap().unwrap();

    assert_eq!(
        config.links,
        Some(vec![LinkDescriptor {
            id: Some("eth0".to_string()),
            link_type: Some(LinkType::Physical),
            mac_address: Some("FA:16:3E:2D:EC:CD".to_string()),
            ..Default::default()
        }])
    );

    assert_eq!(
        config.addresses,
        Some(vec![
            AddressDescriptor {
                ip_address: Some("10.0.0.15".to_string()),
                netmask: Some("255.255.255.0".to_string()),
                gateway: Some("10.0.0.1".to_string()),
                dns_nameservers: vec!["208.67.220.220".to_string(), "8.8.8.8".to_string()],
                ..Default::default()
            },
            AddressDescriptor {
                ip_address: Some("2001:db8::3".to_string()),
                prefix_length: Some("64".to_string()),
                gateway: Some("2001:db8::1".to_string()),
                ..Default::default()
            },
        ])
    );

    assert_eq!(config.services, None);
}

#[tokio::test]
async fn test_v6_only_interface_keeps_positional_v4_slot() {
    let source = MockSource::new()
        .with_metadata(METADATA)
        .with_content("0000", V6_ONLY_BLOB);
    let parser = NetworkDataParser::default();

    let config = parser.network_details(&source).await.unwrap().unwrap();
    let addresses = config.addresses.unwrap();

    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0], AddressDescriptor::default());
    assert_eq!(addresses[1].ip_address.as_deref(), Some("2001:db8::3"));
    assert_eq!(addresses[1].prefix_length.as_deref(), Some("64"));
}

#[tokio::test]
async fn test_content_name_is_last_path_segment() {
    // The descriptor path is `/content/0000` but the blob is addressed by
    // its bare name.
    let source = MockSource::new()
        .with_metadata(METADATA)
        .with_content("0000", "iface eth1 inet static\n    address 10.0.1.15\n");
    let parser = NetworkDataParser::default();

    let config = parser.network_details(&source).await.unwrap().unwrap();
    assert_eq!(
        config.links.unwrap()[0].id.as_deref(),
        Some("eth1")
    );
}

#[test]
fn test_tokenizer_feeds_legacy_parser() {
    let records = debiface::parse(INTERFACES_BLOB);
    assert_eq!(records.len(), 1);

    let config = guest_init_rs::network::parse_legacy(&records).unwrap();
    assert_eq!(config.links.as_ref().unwrap().len(), 1);
    assert_eq!(config.addresses.as_ref().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_content_blob_is_none() {
    let source = MockSource::new()
        .with_metadata(METADATA)
        .with_content("0000", "# nothing but comments\n");
    let parser = NetworkDataParser::default();

    assert!(parser.network_details(&source).await.unwrap().is_none());
}
