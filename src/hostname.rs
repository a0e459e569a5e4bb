//! Hostname normalization
//!
//! Prepares a metadata-provided hostname for the platform: splits the DNS
//! suffix off an FQDN, optionally truncates the label for NetBIOS
//! compatibility, and fixes up a trailing dash. Applying the result is the
//! OS collaborator's job.

use tracing::warn;

/// NetBIOS computer names are limited to 15 characters.
pub const NETBIOS_HOST_NAME_MAX_LEN: usize = 15;

#[derive(Debug, Clone, Copy, Default)]
pub struct HostnameOptions {
    /// Truncate the host label to the NetBIOS limit.
    pub netbios_compatibility: bool,
}

/// A hostname ready to hand to the OS collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedHostname {
    pub hostname: String,
    /// DNS suffix split off the FQDN, when one was present.
    pub dns_domain: Option<String>,
    pub truncated: bool,
}

/// Normalize a metadata-provided hostname.
pub fn prepare_hostname(raw: &str, options: &HostnameOptions) -> PreparedHostname {
    let (label, domain) = match raw.split_once('.') {
        Some((label, domain)) if !domain.is_empty() => (label, Some(domain.to_string())),
        Some((label, _)) => (label, None),
        None => (raw, None),
    };

    let mut hostname = label.to_string();
    let mut truncated = false;
    if options.netbios_compatibility && hostname.chars().count() > NETBIOS_HOST_NAME_MAX_LEN {
        let short: String = hostname.chars().take(NETBIOS_HOST_NAME_MAX_LEN).collect();
        warn!(
            "Truncating host name for NetBIOS compatibility. Old name: {}, new name: {}",
            hostname, short
        );
        hostname = short;
        truncated = true;
    }

    if hostname.ends_with('-') {
        hostname.pop();
        hostname.push('0');
    }

    PreparedHostname {
        hostname,
        dns_domain: domain,
        truncated,
    }
}
