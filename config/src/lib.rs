//! # Config Crate
//!
//! Centralized configuration constants for the scene-mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_DIVISION_COUNT, NORMAL_TOLERANCE};
//! use config::MeshConfig;
//!
//! let config = MeshConfig::default();
//! assert_eq!(config.division_count, DEFAULT_DIVISION_COUNT);
//! assert!(config.normal_generation);
//! assert!(NORMAL_TOLERANCE < 1.0e-9);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Construction**: invalid configurations are rejected early
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

pub use constants::{ConfigError, MeshConfig};
