//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`serve`] - Piste map web server
//! - [`sweep`] - Grid sweep that writes POIs to GeoJSON

pub mod common;
pub mod config;
pub mod serve;
pub mod sweep;
