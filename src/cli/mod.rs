//! Command-line interfaces for the refit tools
//!
//! Two binaries share the library: `refit` performs material remaps on a
//! blueprint, `blocktree` dumps the loaded block database groupings.

pub mod blocktree;
pub mod refit;
