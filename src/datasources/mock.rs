//! Mock metadata source for testing
//!
//! Provides a configurable in-memory source for exercising the
//! orchestrator without any transport.

use std::collections::HashMap;

use async_trait::async_trait;

use super::MetadataSource;
use crate::GuestInitError;

/// Mock metadata source
///
/// # Example
/// ```
/// use guest_init_rs::datasources::mock::MockSource;
///
/// let source = MockSource::new()
///     .with_network_data(r#"{"links": []}"#)
///     .with_metadata(r#"{"uuid": "test-123"}"#);
/// ```
pub struct MockSource {
    name: &'static str,
    network_data: Option<String>,
    metadata: Option<String>,
    contents: HashMap<String, String>,
    network_data_error: Option<String>,
    metadata_error: Option<String>,
}

impl MockSource {
    /// Create a new mock source with nothing to offer.
    pub fn new() -> Self {
        Self {
            name: "Mock",
            network_data: None,
            metadata: None,
            contents: HashMap::new(),
            network_data_error: None,
            metadata_error: None,
        }
    }

    /// Set the source name.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Set the versioned network data document.
    pub fn with_network_data(mut self, document: &str) -> Self {
        self.network_data = Some(document.to_string());
        self
    }

    /// Set the instance metadata document.
    pub fn with_metadata(mut self, document: &str) -> Self {
        self.metadata = Some(document.to_string());
        self
    }

    /// Register a named content blob.
    pub fn with_content(mut self, name: &str, body: &str) -> Self {
        self.contents.insert(name.to_string(), body.to_string());
        self
    }

    /// Configure the network data fetch to fail.
    pub fn with_network_data_error(mut self, error: &str) -> Self {
        self.network_data_error = Some(error.to_string());
        self
    }

    /// Configure the metadata fetch to fail.
    pub fn with_metadata_error(mut self, error: &str) -> Self {
        self.metadata_error = Some(error.to_string());
        self
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn get_network_data(&self) -> Result<Option<String>, GuestInitError> {
        if let Some(error) = &self.network_data_error {
            return Err(GuestInitError::Metadata(error.clone()));
        }
        Ok(self.network_data.clone())
    }

    async fn get_metadata(&self) -> Result<Option<String>, GuestInitError> {
        if let Some(error) = &self.metadata_error {
            return Err(GuestInitError::Metadata(error.clone()));
        }
        Ok(self.metadata.clone())
    }

    async fn get_content(&self, name: &str) -> Result<Option<String>, GuestInitError> {
        Ok(self.contents.get(name).cloned())
    }
}
