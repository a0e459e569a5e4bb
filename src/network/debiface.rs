//! Debian-interfaces tokenizer
//!
//! Splits a debian `/etc/network/interfaces`-style text blob into per-NIC
//! records for the legacy parser. `inet` and `inet6` stanzas for the same
//! interface merge into one record, with option lines of an `inet6` stanza
//! landing in the 6-suffixed fields.

/// One tokenized interface, merged across its inet and inet6 stanzas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub name: Option<String>,
    pub mac: Option<String>,
    pub address: Option<String>,
    pub netmask: Option<String>,
    pub broadcast: Option<String>,
    pub gateway: Option<String>,
    pub dns_nameservers: Vec<String>,
    pub address6: Option<String>,
    pub netmask6: Option<String>,
    pub gateway6: Option<String>,
}

/// Stanza-level keywords carrying no per-interface option data.
const STANZA_KEYWORDS: &[&str] = &[
    "auto",
    "allow-hotplug",
    "mapping",
    "source",
    "source-directory",
];

/// Tokenize a debian-interfaces blob into interface records, in first-seen
/// order. Unknown option lines are skipped; this tokenizer never fails.
pub fn parse(content: &str) -> Vec<InterfaceRecord> {
    let mut records: Vec<InterfaceRecord> = Vec::new();
    // Index of the open stanza's record and whether the stanza is inet6.
    let mut current: Option<(usize, bool)> = None;

    for line in content.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        if keyword == "iface" {
            let Some(name) = tokens.next() else {
                current = None;
                continue;
            };
            let ipv6 = tokens.next() == Some("inet6");
            let index = records
                .iter()
                .position(|record| record.name.as_deref() == Some(name))
                .unwrap_or_else(|| {
                    records.push(InterfaceRecord {
                        name: Some(name.to_string()),
                        ..Default::default()
                    });
                    records.len() - 1
                });
            current = Some((index, ipv6));
            continue;
        }

        if STANZA_KEYWORDS.contains(&keyword) {
            current = None;
            continue;
        }

        let Some((index, ipv6)) = current else {
            continue;
        };
        let record = &mut records[index];
        let values: Vec<&str> = tokens.collect();
        let first = values.first().copied();

        match (keyword, ipv6) {
            ("address", false) => record.address = first.map(str::to_string),
            ("address", true) => record.address6 = first.map(str::to_string),
            ("netmask", false) => record.netmask = first.map(str::to_string),
            ("netmask", true) => record.netmask6 = first.map(str::to_string),
            ("gateway", false) => record.gateway = first.map(str::to_string),
            ("gateway", true) => record.gateway6 = first.map(str::to_string),
            ("broadcast", false) => record.broadcast = first.map(str::to_string),
            ("hwaddress", _) => {
                // `hwaddress ether <mac>`; some generators omit the class.
                record.mac = match first {
                    Some("ether") => values.get(1).copied().map(str::to_string),
                    other => other.map(str::to_string),
                };
            }
            ("dns-nameservers", _) => {
                record.dns_nameservers = values.iter().map(|value| value.to_string()).collect();
            }
            _ => {}
        }
    }

    records
}
