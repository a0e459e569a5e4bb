//! Metadata sources
//!
//! A metadata source hands the normalization core already-fetched raw
//! payloads; transport, retry policy, and caching of the raw bytes live
//! behind this trait, outside the crate.

pub mod maas;
pub mod mock;
pub mod openstack;

use async_trait::async_trait;

use crate::GuestInitError;

pub use openstack::{NetworkConfigDescriptor, OpenStackMetadata};

/// PEM delimiters for certificates embedded in metadata or user data.
pub const PEM_HEADER: &str = "-----BEGIN CERTIFICATE-----";
pub const PEM_FOOTER: &str = "-----END CERTIFICATE-----";

/// Trait for providers of already-fetched metadata payloads.
///
/// `Ok(None)` means the document is absent on this provider; `Err` means
/// fetching or decoding the raw bytes failed. The two are never conflated:
/// absence is an ordinary outcome the caller dispatches on.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Name of this source (e.g., "OpenStack", "MaaS").
    fn name(&self) -> &'static str;

    /// Raw versioned network data document (`network_data.json`
    /// equivalent), if the provider exposes one.
    async fn get_network_data(&self) -> Result<Option<String>, GuestInitError>;

    /// Raw instance metadata document (`meta_data.json` equivalent).
    async fn get_metadata(&self) -> Result<Option<String>, GuestInitError>;

    /// A named content blob referenced from the instance metadata.
    async fn get_content(&self, name: &str) -> Result<Option<String>, GuestInitError>;
}
