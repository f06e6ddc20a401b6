//! Centralized configuration values shared across the scene-mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a
//! minimal usage example so that downstream crates can remain declarative
//! and avoid scattering literals.

use std::fmt;

/// Default number of angular divisions used when tessellating curved
/// primitives (cones, cylinders, spheres).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DIVISION_COUNT;
/// assert_eq!(DEFAULT_DIVISION_COUNT, 20);
/// ```
pub const DEFAULT_DIVISION_COUNT: u32 = 20;

/// Smallest division count that still produces a closed surface of
/// revolution.
///
/// # Examples
/// ```
/// use config::constants::MIN_DIVISION_COUNT;
/// assert_eq!(MIN_DIVISION_COUNT, 3);
/// ```
pub const MIN_DIVISION_COUNT: u32 = 3;

/// Tolerance on the squared difference of two normal vectors below which
/// they are treated as equal by the normal generator.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_TOLERANCE;
/// assert!(NORMAL_TOLERANCE > 0.0);
/// ```
pub const NORMAL_TOLERANCE: f64 = f64::EPSILON;

/// Immutable snapshot of the mesh conversion settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::MeshConfig;
/// let config = MeshConfig::default();
/// assert_eq!(config.division_count, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshConfig {
    /// Angular division count applied to cone, cylinder and sphere
    /// tessellation.
    pub division_count: u32,
    /// Whether normals are generated for meshes that do not carry any.
    pub normal_generation: bool,
}

impl MeshConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// division count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MeshConfig;
    /// let config = MeshConfig::new(12, false).expect("valid config");
    /// assert_eq!(config.division_count, 12);
    /// ```
    pub fn new(division_count: u32, normal_generation: bool) -> Result<Self, ConfigError> {
        if division_count < MIN_DIVISION_COUNT {
            return Err(ConfigError::InvalidDivisionCount(division_count));
        }
        Ok(Self {
            division_count,
            normal_generation,
        })
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            division_count: DEFAULT_DIVISION_COUNT,
            normal_generation: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the requested division count cannot form a closed
    /// surface.
    InvalidDivisionCount(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDivisionCount(value) => {
                write!(f, "division_count must be >= {MIN_DIVISION_COUNT}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
