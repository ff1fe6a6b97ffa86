//! StitchX Video Clip Stitcher Library
//!
//! Joins a folder of independently produced clips into one video: the chosen
//! clip plays first, the rest follow in a (optionally seeded) shuffled order,
//! and every clip is normalized to a shared profile before a lossless join.

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::{DomainError, StitchResult};
pub use domain::model::{
    Clip, Dimensions, EncodingProfile, IntermediateClip, PlayOrder, ProfileDefaults,
    ProfileOverrides, StitchReport, StitchRequest,
};
