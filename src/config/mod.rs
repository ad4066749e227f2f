// src/config/mod.rs

//! Configuration loading and validation for layerdag.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a config file from disk.
//! - `validate.rs`: turning the raw model into a checked [`ConfigFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, DummySection, OutputSection, RawConfigFile, ReaderSection};
pub use validate::validate_raw_config;
