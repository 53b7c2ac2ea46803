//! # refit
//!
//! A pure-Rust library for remapping structural block materials in
//! From the Depths vehicle blueprints.
//!
//! A blueprint references blocks through a local `ItemDictionary` of small
//! integer IDs. Each structural block variant (e.g. "Wood Armor Slope") is a
//! derived block tied to a base material block and a mesh. Remapping finds
//! the block sharing the original's mesh under a different base material and
//! rewrites the blueprint's block slots accordingly, so a vehicle keeps its
//! shape while changing material.
//!
//! ## Quick Start
//!
//! ```no_run
//! use refit::blueprint::{read_blueprint, refit_blueprint, write_blueprint};
//! use refit::config::AssetPaths;
//! use refit::database::{BlockDatabase, MaterialLetters};
//! use refit::ops::parse_directive;
//!
//! let paths = AssetPaths::detect(None, None)?;
//! let db = BlockDatabase::load(&paths)?;
//! let letters = MaterialLetters::from_database(&db)?;
//!
//! let mut blueprint = read_blueprint("Vehicle.blueprint")?;
//! // Every Wood block becomes its same-shape Stone equivalent.
//! let directive = parse_directive("WS", &letters);
//! refit_blueprint(&db, &mut blueprint, &[directive]);
//! write_blueprint("Vehicle_stone.blueprint", &blueprint)?;
//! # Ok::<(), refit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `refit` and `blocktree` command-line binaries

pub mod blueprint;
pub mod config;
pub mod database;
pub mod error;
pub mod items;
pub mod ops;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::blueprint::{
        read_blueprint, refit_blueprint, write_blueprint, BlockIdAllocator, BlueprintFile,
        Construct, Rewriter,
    };
    pub use crate::config::AssetPaths;
    pub use crate::database::{
        BaseBlock, BlockDatabase, DatabaseStats, DerivedBlock, MaterialLetters, MaterialResolver,
        Mesh,
    };
    pub use crate::error::{Error, Result};
    pub use crate::ops::{parse_directive, RemapDirective};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
