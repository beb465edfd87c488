//! Centralized configuration values shared across the mesh import pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// NODE NAMING
// =============================================================================

/// Base name used for mesh nodes whose source geometry carries no name.
///
/// # Examples
/// ```
/// use config::constants::GEOMETRY_NAME;
/// assert_eq!(GEOMETRY_NAME, "Geometry");
/// ```
pub const GEOMETRY_NAME: &str = "Geometry";

/// Base name of the group-id nodes created per (instance, primitive).
///
/// # Examples
/// ```
/// use config::constants::GROUPID_NAME;
/// assert_eq!(GROUPID_NAME, "GroupId");
/// ```
pub const GROUPID_NAME: &str = "GroupId";

/// Separator between node names in a DAG path.
pub const DAG_PATH_SEPARATOR: char = '|';

// =============================================================================
// ATTRIBUTE STRIDES
// =============================================================================

/// Components per vertex position (x, y, z). Always three.
///
/// # Examples
/// ```
/// use config::constants::POSITION_STRIDE;
/// assert_eq!(POSITION_STRIDE, 3);
/// ```
pub const POSITION_STRIDE: usize = 3;

/// Components per normal (x, y, z).
pub const NORMAL_STRIDE: usize = 3;

/// Components per UV point the target format stores. Source sets with a
/// different stride are truncated to this many components.
///
/// # Examples
/// ```
/// use config::constants::UV_STRIDE;
/// assert_eq!(UV_STRIDE, 2);
/// ```
pub const UV_STRIDE: usize = 2;

/// Largest color stride accepted (RGBA).
pub const MAX_COLOR_STRIDE: usize = 4;

/// Number of leading points sampled from a face or hole to determine its winding.
///
/// # Examples
/// ```
/// use config::constants::ORIENTATION_POINT_COUNT;
/// assert_eq!(ORIENTATION_POINT_COUNT, 3);
/// ```
pub const ORIENTATION_POINT_COUNT: usize = 3;

// =============================================================================
// COLOR REPRESENTATION TAGS
// =============================================================================

/// Representation tag for alpha-only color sets (stride 1).
pub const REPRESENTATION_ALPHA: u32 = 1;

/// Representation tag for RGBA color sets. Used for every stride other than 1 and 3.
pub const REPRESENTATION_RGBA: u32 = 2;

/// Representation tag for RGB color sets (stride 3).
pub const REPRESENTATION_RGB: u32 = 3;

// =============================================================================
// IMPORT SETTINGS
// =============================================================================

/// Default scale applied to positions when converting into the host's linear unit.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LINEAR_UNIT_SCALE;
/// assert_eq!(DEFAULT_LINEAR_UNIT_SCALE, 1.0);
/// ```
pub const DEFAULT_LINEAR_UNIT_SCALE: f64 = 1.0;

/// Edges are written hard by default so every face vertex keeps its own normal.
pub const DEFAULT_HARD_EDGES: bool = true;

/// Immutable snapshot of the import settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ImportConfig;
/// let config = ImportConfig::default();
/// assert!(config.linear_unit_scale > 0.0);
/// assert!(config.hard_edges);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportConfig {
    /// Factor converting source positions into the host's linear unit.
    pub linear_unit_scale: f64,
    /// Whether edges are flagged hard in the emitted edge block.
    pub hard_edges: bool,
}

impl ImportConfig {
    /// Builds a configuration, rejecting non-finite or non-positive unit scales.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ImportConfig;
    /// let cfg = ImportConfig::new(0.01, true).expect("valid config");
    /// assert_eq!(cfg.linear_unit_scale, 0.01);
    /// assert!(ImportConfig::new(0.0, true).is_err());
    /// ```
    pub fn new(linear_unit_scale: f64, hard_edges: bool) -> Result<Self, ConfigError> {
        if !linear_unit_scale.is_finite() || linear_unit_scale <= 0.0 {
            return Err(ConfigError::InvalidUnitScale(linear_unit_scale));
        }
        Ok(Self {
            linear_unit_scale,
            hard_edges,
        })
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            linear_unit_scale: DEFAULT_LINEAR_UNIT_SCALE,
            hard_edges: DEFAULT_HARD_EDGES,
        }
    }
}

/// Maps a color set stride onto its representation tag.
///
/// # Examples
/// ```
/// use config::constants::{color_representation, REPRESENTATION_RGB};
/// assert_eq!(color_representation(3), REPRESENTATION_RGB);
/// ```
pub fn color_representation(stride: usize) -> u32 {
    match stride {
        1 => REPRESENTATION_ALPHA,
        3 => REPRESENTATION_RGB,
        _ => REPRESENTATION_RGBA,
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the unit scale is zero, negative or not finite.
    InvalidUnitScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUnitScale(value) => {
                write!(f, "linear_unit_scale must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
