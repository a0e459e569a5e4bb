//! OS configuration seam
//!
//! The consumer side of a metadata read: an [`OsConfigurator`]
//! implementation owns the actual OS mutation (NIC setup, resolver
//! configuration), while [`apply_network_configuration`] dispatches only
//! the layers present in the normalized result and collects the per-layer
//! reboot requirements.

use crate::GuestInitError;
use crate::network::{AddressDescriptor, LinkDescriptor, NetworkConfiguration, ServiceConfig};

/// Applies normalized network configuration layers to the running OS.
///
/// Each method returns whether its layer requires a reboot to take effect.
pub trait OsConfigurator {
    fn configure_links(&mut self, links: &[LinkDescriptor]) -> Result<bool, GuestInitError>;

    fn configure_addresses(
        &mut self,
        addresses: &[AddressDescriptor],
    ) -> Result<bool, GuestInitError>;

    fn configure_services(&mut self, services: &ServiceConfig) -> Result<bool, GuestInitError>;
}

/// Per-layer application report; `None` marks a layer that was absent from
/// the source and therefore never dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedLayers {
    pub links: Option<bool>,
    pub addresses: Option<bool>,
    pub services: Option<bool>,
}

impl AppliedLayers {
    /// Whether any applied layer requested a reboot.
    pub fn reboot_required(&self) -> bool {
        self.links.unwrap_or(false)
            || self.addresses.unwrap_or(false)
            || self.services.unwrap_or(false)
    }
}

/// Dispatch the layers present in `config` to the OS configurator, links
/// first. A failing layer aborts the dispatch and propagates.
pub fn apply_network_configuration(
    config: &NetworkConfiguration,
    osutils: &mut dyn OsConfigurator,
) -> Result<AppliedLayers, GuestInitError> {
    let mut applied = AppliedLayers::default();
    if let Some(links) = &config.links {
        applied.links = Some(osutils.configure_links(links)?);
    }
    if let Some(addresses) = &config.addresses {
        applied.addresses = Some(osutils.configure_addresses(addresses)?);
    }
    if let Some(services) = &config.services {
        applied.services = Some(osutils.configure_services(services)?);
    }
    Ok(applied)
}
