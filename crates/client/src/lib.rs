//! Transformation service client — shared between any grid frontends.
//!
//! This crate owns the full transformation round trip: precondition
//! validation, the single shared busy flag, the HTTP exchange, and handing
//! the response to the reconciler. One request in flight at a time; a second
//! trigger while busy is rejected rather than queued.
//!
//! No GUI concepts. No retries. No streaming.

mod client;
mod config;

pub use client::{TransformClient, TransformError};
pub use config::{config_file_path, load_config, save_config, ServiceConfig, DEFAULT_BASE_URL};
