//! Chartdiff Registry - package registry client
//!
//! Fetches a chart version's raw template file set from a registry HTTP
//! API. This crate owns the engine's only asynchronous boundary; the
//! payloads it returns feed straight into `chartdiff_core::decode_templates`.

pub mod client;
pub mod error;

pub use client::RegistryClient;
pub use error::{RegistryError, Result};
