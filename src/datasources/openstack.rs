//! OpenStack instance metadata document
//!
//! Typed view over a `meta_data.json` payload with the accessors the
//! initialization plugins consume: instance identity, public keys, admin
//! password, client certificates, and the legacy network-config
//! descriptor. All accessors are pure; fetching the document is the
//! transport collaborator's job.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::PEM_HEADER;

/// An entry of the `keys` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyEntry {
    #[serde(rename = "type")]
    pub key_type: String,
    pub data: String,
}

/// The legacy `network_config` descriptor pointing at a content blob.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkConfigDescriptor {
    pub content_path: Option<String>,
}

/// Decoded `meta_data.json` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenStackMetadata {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub hostname: Option<String>,
    pub availability_zone: Option<String>,
    pub project_id: Option<String>,
    /// Key name -> public key material. An ordered map keeps the accessors
    /// deterministic across reads of the same document.
    #[serde(default)]
    pub public_keys: BTreeMap<String, String>,
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
    /// Free-form metadata items, each limited to 255 chars provider-side.
    #[serde(default)]
    pub meta: HashMap<String, String>,
    pub admin_pass: Option<String>,
    pub network_config: Option<NetworkConfigDescriptor>,
}

impl OpenStackMetadata {
    /// Parse a raw `meta_data.json` payload.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Hostname, falling back to the instance display name.
    pub fn host_name(&self) -> Option<&str> {
        self.hostname.as_deref().or(self.name.as_deref())
    }

    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// All unique public keys found among the metadata, trimmed; the first
    /// occurrence of a duplicate wins.
    pub fn public_keys(&self) -> Vec<String> {
        let named = self.public_keys.values().map(String::as_str);
        let typed = self
            .keys
            .iter()
            .filter(|key| key.key_type == "ssh")
            .map(|key| key.data.as_str());

        let mut keys: Vec<String> = Vec::new();
        for key in named.chain(typed) {
            let key = key.trim();
            if !key.is_empty() && !keys.iter().any(|existing| existing == key) {
                keys.push(key.to_string());
            }
        }
        keys
    }

    /// Admin password; the `meta` item wins over the top-level field.
    pub fn admin_password(&self) -> Option<&str> {
        self.meta
            .get("admin_pass")
            .map(String::as_str)
            .or(self.admin_pass.as_deref())
    }

    /// Client authentication certificates gathered from the metadata.
    ///
    /// Certificates arrive either chunked as `admin_cert0..N` meta items
    /// (reassembled in index order) or as `keys` entries of type `x509`.
    /// When neither yields anything and the supplied user-data blob starts
    /// with a PEM certificate header, that blob is returned instead.
    pub fn client_auth_certs(&self, user_data: Option<&str>) -> Vec<String> {
        let mut certs: Vec<String> = Vec::new();

        let mut chunked = String::new();
        let mut index = 0;
        while let Some(chunk) = self.meta.get(&format!("admin_cert{}", index)) {
            chunked.push_str(chunk);
            index += 1;
        }
        if !chunked.is_empty() {
            certs.push(chunked.trim().to_string());
        }

        for key in self.keys.iter().filter(|key| key.key_type == "x509") {
            let data = key.data.trim().to_string();
            if !data.is_empty() && !certs.contains(&data) {
                certs.push(data);
            }
        }

        if certs.is_empty() {
            if let Some(user_data) = user_data {
                if user_data.trim_start().starts_with(PEM_HEADER) {
                    certs.push(user_data.trim().to_string());
                }
            }
        }

        certs
    }
}
