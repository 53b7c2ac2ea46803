//! On-disk item record formats
//!
//! Every asset the game ships is a single JSON record in its own file,
//! grouped by kind under a pack directory: base blocks (`Items/*.item`),
//! derived block variants (`ItemDup/*.itemduplicateandmodify`), and meshes
//! (`Meshes/*.mesh`). Records are parsed into explicit typed structs so a
//! malformed file is rejected where it is read instead of surfacing as a
//! missing-field failure deep in a remap.

pub mod loader;
pub mod types;

pub use loader::load_records;
pub use types::{BaseBlockRecord, ComponentId, DerivedBlockRecord, MeshRecord, Reference};
