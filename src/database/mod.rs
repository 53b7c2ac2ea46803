//! The in-memory structural block database
//!
//! Built once at startup from the game's asset tree: base material blocks,
//! their derived shape variants, and the meshes the variants share. The
//! mesh index is what makes refitting possible - two derived blocks with
//! the same mesh are the same shape in different materials.

mod letters;
mod resolver;

pub use letters::MaterialLetters;
pub use resolver::MaterialResolver;

use indexmap::IndexMap;

use crate::config::{
    AssetPaths, MEGA_SLOPES_2_COMMON_PACK, MEGA_SLOPES_2_OTHER_PACK, MEGA_SLOPES_PACK,
};
use crate::error::Result;
use crate::items::{load_records, BaseBlockRecord, DerivedBlockRecord, MeshRecord};

/// Name returned for GUIDs with no block record.
pub const UNKNOWN_BLOCK: &str = "unknown block";

/// Name returned for GUIDs with no mesh record.
pub const UNKNOWN_MESH: &str = "unknown mesh";

const ITEMS_SUBDIR: &str = "Items";
const ITEM_DUP_SUBDIR: &str = "ItemDup";
const MESHES_SUBDIR: &str = "Meshes";

const ITEM_EXTENSION: &str = "item";
const ITEM_DUP_EXTENSION: &str = "itemduplicateandmodify";
const MESH_EXTENSION: &str = "mesh";

/// An irreducible material/shape unit (e.g. "Wood Block", "Stone").
#[derive(Debug, Clone)]
pub struct BaseBlock {
    /// Globally unique identifier.
    pub guid: String,
    /// Human-readable name.
    pub name: String,
}

/// A block variant duplicating a base block with its own mesh.
#[derive(Debug, Clone)]
pub struct DerivedBlock {
    /// Globally unique identifier.
    pub guid: String,
    /// Human-readable name.
    pub name: String,
    /// GUID of the base block this variant duplicates.
    pub base_block_guid: String,
    /// GUID of the mesh giving this variant its shape.
    pub mesh_guid: String,
}

/// A 3D shape shared across material variants. Used only as a grouping
/// key; the name feeds diagnostics and the `blocktree` listing.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Globally unique identifier.
    pub guid: String,
    /// Human-readable name.
    pub name: String,
}

impl From<BaseBlockRecord> for BaseBlock {
    fn from(record: BaseBlockRecord) -> Self {
        Self {
            guid: record.component_id.guid,
            name: record.component_id.name,
        }
    }
}

impl From<DerivedBlockRecord> for DerivedBlock {
    fn from(record: DerivedBlockRecord) -> Self {
        Self {
            guid: record.component_id.guid,
            name: record.component_id.name,
            base_block_guid: record.id_to_duplicate.guid().to_string(),
            mesh_guid: record.mesh_reference.guid().to_string(),
        }
    }
}

impl From<MeshRecord> for Mesh {
    fn from(record: MeshRecord) -> Self {
        Self {
            guid: record.component_id.guid,
            name: record.component_id.name,
        }
    }
}

/// The complete block database built from the game's asset tree.
#[derive(Debug, Clone, Default)]
pub struct BlockDatabase {
    /// Base blocks indexed by GUID, in load order.
    pub base_blocks: IndexMap<String, BaseBlock>,
    /// Derived blocks indexed by GUID, in load order.
    pub derived_blocks: IndexMap<String, DerivedBlock>,
    /// Meshes indexed by GUID.
    pub meshes: IndexMap<String, Mesh>,
    /// Derived block GUIDs sharing a mesh, sorted by GUID.
    pub by_mesh: IndexMap<String, Vec<String>>,
    /// Derived block GUIDs under a base block, sorted by GUID.
    pub by_base_block: IndexMap<String, Vec<String>>,
}

impl BlockDatabase {
    /// Load the block database from the game's asset tree.
    ///
    /// One unreadable record never aborts the load. If the preferred slope
    /// pack has any derived block records, it and its companion pack are
    /// loaded; otherwise the fallback pack is. The two selections are
    /// mutually exclusive, never merged.
    pub fn load(paths: &AssetPaths) -> Result<Self> {
        tracing::info!("loading block database...");
        let mut db = Self::default();

        let core = paths.core_structural();
        for record in load_records::<BaseBlockRecord>(&core.join(ITEMS_SUBDIR), ITEM_EXTENSION) {
            db.insert_base(record.into());
        }
        for record in load_records::<MeshRecord>(&core.join(MESHES_SUBDIR), MESH_EXTENSION) {
            db.insert_mesh(record.into());
        }
        for record in
            load_records::<DerivedBlockRecord>(&core.join(ITEM_DUP_SUBDIR), ITEM_DUP_EXTENSION)
        {
            db.insert_derived(record.into());
        }

        let common = paths.user_pack(MEGA_SLOPES_2_COMMON_PACK);
        let common_dups = load_records::<DerivedBlockRecord>(
            &common.join(ITEM_DUP_SUBDIR),
            ITEM_DUP_EXTENSION,
        );
        if common_dups.is_empty() {
            db.load_pack(&paths.user_pack(MEGA_SLOPES_PACK));
        } else {
            for record in load_records::<MeshRecord>(&common.join(MESHES_SUBDIR), MESH_EXTENSION) {
                db.insert_mesh(record.into());
            }
            for record in common_dups {
                db.insert_derived(record.into());
            }
            db.load_pack(&paths.user_pack(MEGA_SLOPES_2_OTHER_PACK));
        }

        let stats = db.stats();
        tracing::info!(
            "loaded {} base blocks and {} derived blocks across {} mesh groups",
            stats.base_block_count,
            stats.derived_block_count,
            stats.mesh_group_count
        );
        Ok(db)
    }

    /// Load one content pack's meshes and derived blocks.
    fn load_pack(&mut self, pack_root: &std::path::Path) {
        for record in load_records::<MeshRecord>(&pack_root.join(MESHES_SUBDIR), MESH_EXTENSION) {
            self.insert_mesh(record.into());
        }
        for record in load_records::<DerivedBlockRecord>(
            &pack_root.join(ITEM_DUP_SUBDIR),
            ITEM_DUP_EXTENSION,
        ) {
            self.insert_derived(record.into());
        }
    }

    /// Insert a base block.
    pub fn insert_base(&mut self, block: BaseBlock) {
        self.base_blocks.insert(block.guid.clone(), block);
    }

    /// Insert a mesh.
    pub fn insert_mesh(&mut self, mesh: Mesh) {
        self.meshes.insert(mesh.guid.clone(), mesh);
    }

    /// Insert a derived block, indexing it under its mesh and base block.
    ///
    /// A variant whose base block is unknown is logged and left out of the
    /// indexes; it can still be named but never matched as a remap target.
    pub fn insert_derived(&mut self, block: DerivedBlock) {
        if !self.base_blocks.contains_key(&block.base_block_guid) {
            tracing::warn!(
                "derived block {} ({}) references unknown base block {}",
                block.guid,
                block.name,
                block.base_block_guid
            );
            self.derived_blocks.insert(block.guid.clone(), block);
            return;
        }

        // Buckets stay sorted by GUID; candidate order is the tie-break for
        // ambiguous mesh mappings, so it must not depend on enumeration
        // order during load.
        let mesh_bucket = self.by_mesh.entry(block.mesh_guid.clone()).or_default();
        if let Err(pos) = mesh_bucket.binary_search(&block.guid) {
            mesh_bucket.insert(pos, block.guid.clone());
        }
        let base_bucket = self
            .by_base_block
            .entry(block.base_block_guid.clone())
            .or_default();
        if let Err(pos) = base_bucket.binary_search(&block.guid) {
            base_bucket.insert(pos, block.guid.clone());
        }
        self.derived_blocks.insert(block.guid.clone(), block);
    }

    /// Whether `guid` names a base block.
    #[must_use]
    pub fn is_base_block(&self, guid: &str) -> bool {
        self.base_blocks.contains_key(guid)
    }

    /// Whether `guid` names a derived block.
    #[must_use]
    pub fn is_derived_block(&self, guid: &str) -> bool {
        self.derived_blocks.contains_key(guid)
    }

    /// The base material GUID a block belongs to.
    ///
    /// A base block is its own base material; a derived block resolves to
    /// the block it duplicates. Unknown GUIDs resolve to `None`.
    #[must_use]
    pub fn base_block_guid_of(&self, guid: &str) -> Option<&str> {
        if let Some((key, _)) = self.base_blocks.get_key_value(guid) {
            return Some(key.as_str());
        }
        self.derived_blocks
            .get(guid)
            .map(|block| block.base_block_guid.as_str())
    }

    /// Display name for any block GUID; never fails.
    #[must_use]
    pub fn name_of(&self, guid: &str) -> &str {
        if let Some(block) = self.base_blocks.get(guid) {
            return &block.name;
        }
        if let Some(block) = self.derived_blocks.get(guid) {
            return &block.name;
        }
        UNKNOWN_BLOCK
    }

    /// Display name for a mesh GUID; never fails.
    #[must_use]
    pub fn mesh_name_of(&self, guid: &str) -> &str {
        self.meshes.get(guid).map_or(UNKNOWN_MESH, |m| m.name.as_str())
    }

    /// Derived blocks sharing a mesh, sorted by GUID.
    #[must_use]
    pub fn derived_for_mesh(&self, mesh_guid: &str) -> Option<&[String]> {
        self.by_mesh.get(mesh_guid).map(Vec::as_slice)
    }

    /// Derived blocks under a base block, sorted by GUID.
    #[must_use]
    pub fn derived_for_base(&self, base_block_guid: &str) -> &[String] {
        self.by_base_block
            .get(base_block_guid)
            .map_or(&[], Vec::as_slice)
    }

    /// Get count statistics
    #[must_use]
    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            base_block_count: self.base_blocks.len(),
            derived_block_count: self.derived_blocks.len(),
            mesh_count: self.meshes.len(),
            mesh_group_count: self.by_mesh.len(),
        }
    }
}

/// Statistics about a block database
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub base_block_count: usize,
    pub derived_block_count: usize,
    pub mesh_count: usize,
    pub mesh_group_count: usize,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_block_guid_resolution() {
        let db = testdb::sample();
        assert_eq!(db.base_block_guid_of("W1"), Some("W1"));
        assert_eq!(db.base_block_guid_of("WD-SLOPE"), Some("W1"));
        assert_eq!(db.base_block_guid_of("nope"), None);
    }

    #[test]
    fn name_lookup_never_fails() {
        let db = testdb::sample();
        assert_eq!(db.name_of("WD-SLOPE"), "Wood Armor Slope");
        assert_eq!(db.name_of("nope"), UNKNOWN_BLOCK);
        assert_eq!(db.mesh_name_of("MESH-SLOPE"), "Armour Slope");
        assert_eq!(db.mesh_name_of("nope"), UNKNOWN_MESH);
    }

    #[test]
    fn mesh_buckets_are_sorted_by_guid() {
        let db = testdb::sample();
        assert_eq!(
            db.derived_for_mesh("MESH-SLOPE").unwrap(),
            ["MD-SLOPE", "SD-SLOPE", "WD-SLOPE"]
        );
    }

    #[test]
    fn derived_with_unknown_base_is_unmappable() {
        let mut db = testdb::sample();
        db.insert_derived(testdb::derived(
            "XD-SLOPE",
            "Mystery Slope",
            "X1",
            "MESH-SLOPE",
        ));
        // Still nameable, but indexed nowhere.
        assert_eq!(db.name_of("XD-SLOPE"), "Mystery Slope");
        assert!(!db.derived_for_mesh("MESH-SLOPE").unwrap().contains(&"XD-SLOPE".to_string()));
        assert!(db.derived_for_base("X1").is_empty());
    }
}
