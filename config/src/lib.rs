//! # Config Crate
//!
//! Centralized configuration constants for the mesh import pipeline.
//! Node base names, attribute strides, color representation tags and the
//! tunable import settings are defined here so that the importer crates never
//! scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ImportConfig, POSITION_STRIDE, UV_STRIDE};
//!
//! let cfg = ImportConfig::default();
//! assert_eq!(cfg.linear_unit_scale, 1.0);
//! assert_eq!(POSITION_STRIDE, 3);
//! assert_eq!(UV_STRIDE, 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Names and tags match what the scene file format expects
//! - **Validated**: Tunables are only constructed through checked builders

pub mod constants;
