//! guest-init-rs library
//!
//! This crate provides the metadata normalization core of a cloud guest
//! initialization agent: it turns heterogeneous provider metadata
//! (versioned OpenStack- and MAAS-shaped network documents, legacy
//! debian-interfaces blobs, instance documents) into a unified typed
//! configuration consumed by the OS-configuration layer.
//!
//! # Design Principles
//!
//! - **Safety First**: No unsafe code (`unsafe_code = "forbid"`)
//! - **Pure Core**: every parser is a synchronous, side-effect-free
//!   function over already-fetched payloads; transport and OS mutation
//!   live behind the [`datasources::MetadataSource`] and
//!   [`osconfig::OsConfigurator`] seams
//! - **One Pipeline**: a single consolidated parser chain covers every
//!   supported schema variant instead of per-provider copies

pub mod datasources;
pub mod hostname;
pub mod network;
pub mod osconfig;

mod error;

pub use error::GuestInitError;
pub use network::{
    AddressDescriptor, AddressFamily, BondInfo, LinkDescriptor, LinkType, NetworkConfiguration,
    NetworkDataParser, ParseOptions, RouteRecord, SchemaVariant, ServiceConfig, VlanInfo,
};
