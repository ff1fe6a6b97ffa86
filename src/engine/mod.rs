//! Media engine for stitching
//!
//! This module drives the external tools through the ports: normalizing
//! single clips into the shared profile and joining the results.

pub mod concat;
pub mod normalizer;

pub use concat::{render_manifest, Concatenator};
pub use normalizer::ClipNormalizer;
