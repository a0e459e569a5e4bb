//! Service parser
//!
//! Extracts the global DNS nameserver list from service records.

use super::ServiceConfig;
use super::raw::RawServiceRecord;
use super::schema::SchemaVariant;

/// Raw type strings denoting a nameserver service entry.
const NAMESERVER_TYPES: &[&str] = &["dns", "nameserver"];

/// Collect global DNS nameservers from service records.
///
/// The MAAS shape supports a single global nameserver block, so only the
/// first matching record is honored; the OpenStack shape lists independent
/// DNS entries, which all accumulate in order. Returns `None` when the
/// record sequence is empty (layer absent).
pub fn parse_services(
    records: &[RawServiceRecord],
    variant: SchemaVariant,
) -> Option<ServiceConfig> {
    if records.is_empty() {
        return None;
    }

    let mut nameservers = Vec::new();
    for record in records {
        let is_nameserver = record
            .service_type
            .as_deref()
            .is_some_and(|raw| NAMESERVER_TYPES.contains(&raw));
        if !is_nameserver {
            continue;
        }
        if let Some(address) = record.address.clone() {
            nameservers.extend(address.into_vec());
        }
        if variant == SchemaVariant::Maas {
            break;
        }
    }

    Some(ServiceConfig {
        dns_nameservers: nameservers,
    })
}
