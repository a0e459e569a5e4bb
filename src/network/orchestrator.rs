//! Network data orchestrator
//!
//! Selects which source format a metadata read carries (versioned JSON
//! document or the legacy content blob) and drives the parser chain over
//! it. Only one of the two formats contributes to a result; they are never
//! merged.

use tracing::debug;

use crate::GuestInitError;
use crate::datasources::{MetadataSource, OpenStackMetadata};

use super::schema::{NetworkData, SchemaVariant};
use super::{NetworkConfiguration, debiface, legacy};

/// Parser configuration, passed in explicitly at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Force a schema variant instead of detecting one from the document
    /// shape.
    pub variant: Option<SchemaVariant>,
}

/// Drives one metadata read to a unified network configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkDataParser {
    options: ParseOptions,
}

impl NetworkDataParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Resolve the network configuration offered by a metadata source.
    ///
    /// The versioned network document is consulted first; when it is absent
    /// or yields no layers, the legacy `network_config` content blob is
    /// tried instead. `Ok(None)` means the source offers nothing to
    /// configure, which is not an error.
    pub async fn network_details(
        &self,
        source: &dyn MetadataSource,
    ) -> Result<Option<NetworkConfiguration>, GuestInitError> {
        if let Some(document) = source.get_network_data().await? {
            if !document.trim().is_empty() {
                if let Some(details) = self.parse_versioned(&document)? {
                    return Ok(Some(details));
                }
                debug!("Versioned network data yielded no layers");
            }
        }
        self.legacy_details(source).await
    }

    /// Decode and normalize a versioned network document.
    pub fn parse_versioned(
        &self,
        document: &str,
    ) -> Result<Option<NetworkConfiguration>, GuestInitError> {
        Ok(NetworkData::decode(document, self.options.variant)?.and_then(|data| data.normalize()))
    }

    /// Legacy path: follow the instance metadata's `network_config`
    /// descriptor to a debian-interfaces content blob.
    async fn legacy_details(
        &self,
        source: &dyn MetadataSource,
    ) -> Result<Option<NetworkConfiguration>, GuestInitError> {
        let Some(raw) = source.get_metadata().await? else {
            return Ok(None);
        };
        let metadata = OpenStackMetadata::from_json(&raw)?;
        let Some(path) = metadata
            .network_config
            .and_then(|descriptor| descriptor.content_path)
        else {
            return Ok(None);
        };
        let name = path.rsplit('/').next().unwrap_or(path.as_str());
        let Some(content) = source.get_content(name).await? else {
            return Ok(None);
        };
        debug!("Parsing legacy network content '{}'", name);
        Ok(legacy::parse_legacy(&debiface::parse(&content)))
    }
}
