//! MAAS metadata document helpers
//!
//! MAAS serves one value per metadata path rather than a single JSON
//! document; these helpers decode the fetched text payloads.

use super::{PEM_FOOTER, PEM_HEADER};

/// Split a `public-keys` payload into individual keys, one per non-empty
/// line.
pub fn parse_public_keys(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract every PEM certificate block from an `x509` payload, in order.
/// Text between blocks is ignored; an unterminated block is dropped.
pub fn parse_auth_certs(data: &str) -> Vec<String> {
    let mut certs = Vec::new();
    let mut rest = data;
    while let Some(start) = rest.find(PEM_HEADER) {
        let Some(footer) = rest[start..].find(PEM_FOOTER) else {
            break;
        };
        let end = start + footer + PEM_FOOTER.len();
        certs.push(rest[start..end].to_string());
        rest = &rest[end..];
    }
    certs
}
