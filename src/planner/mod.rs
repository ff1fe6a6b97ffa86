//! Planning module for stitch runs
//!
//! This module decides what a run will produce before any media is touched:
//! the play order of the clips and the encoding profile they are normalized to.

pub mod order;
pub mod profile;

pub use order::{play_rng, OrderPlanner};
pub use profile::ProfileResolver;
