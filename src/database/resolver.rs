//! Mesh-equivalence resolution between base materials

use std::collections::HashSet;

use super::BlockDatabase;

/// Finds the same-mesh block under a different base material.
///
/// Owns the warn-once bookkeeping for unknown, unmappable, and ambiguous
/// inputs, so diagnostics are deduplicated per resolver instance rather
/// than process-wide and repeated runs never leak state into each other.
#[derive(Debug)]
pub struct MaterialResolver<'a> {
    db: &'a BlockDatabase,
    unknown_blocks: HashSet<String>,
    unknown_meshes: HashSet<String>,
    unmappable: HashSet<(String, String)>,
    ambiguous: HashSet<(String, String)>,
}

impl<'a> MaterialResolver<'a> {
    /// Create a resolver over a loaded database.
    #[must_use]
    pub fn new(db: &'a BlockDatabase) -> Self {
        Self {
            db,
            unknown_blocks: HashSet::new(),
            unknown_meshes: HashSet::new(),
            unmappable: HashSet::new(),
            ambiguous: HashSet::new(),
        }
    }

    /// Resolve `input_guid` to its equivalent under `target_base_guid`.
    ///
    /// Base blocks have no shape variants, so a base block substitutes
    /// straight to the target material. Derived blocks resolve through
    /// their mesh: among the derived blocks sharing it, the one belonging
    /// to the target base material wins. An ambiguous match warns once per
    /// (input, target) pair and uses the first candidate in GUID order; an
    /// unknown or unmappable input warns once and resolves to `None`.
    pub fn resolve(&mut self, input_guid: &str, target_base_guid: &str) -> Option<String> {
        if self.db.is_base_block(input_guid) {
            return Some(target_base_guid.to_string());
        }

        let Some(input_block) = self.db.derived_blocks.get(input_guid) else {
            if self.unknown_blocks.insert(input_guid.to_string()) {
                tracing::warn!("guid {input_guid} is not a known structural block");
            }
            return None;
        };

        let Some(candidates) = self.db.derived_for_mesh(&input_block.mesh_guid) else {
            if self.unknown_meshes.insert(input_block.mesh_guid.clone()) {
                tracing::warn!("guid {} is not a known mesh", input_block.mesh_guid);
            }
            return None;
        };

        let matches: Vec<&String> = candidates
            .iter()
            .filter(|guid| self.db.base_block_guid_of(guid) == Some(target_base_guid))
            .collect();

        match matches.as_slice() {
            [] => {
                let key = (input_guid.to_string(), target_base_guid.to_string());
                if self.unmappable.insert(key) {
                    tracing::warn!(
                        "guid {input_guid} ({}) can't be mapped to base block {target_base_guid} ({})",
                        self.db.name_of(input_guid),
                        self.db.name_of(target_base_guid)
                    );
                }
                None
            }
            [only] => Some((*only).clone()),
            [first, ..] => {
                let key = (input_guid.to_string(), target_base_guid.to_string());
                if self.ambiguous.insert(key) {
                    tracing::warn!(
                        "guid {input_guid} ({}) has ambiguous mapping to base block {target_base_guid} ({}), candidates: {matches:?}",
                        self.db.name_of(input_guid),
                        self.db.name_of(target_base_guid)
                    );
                }
                Some((*first).clone())
            }
        }
    }
}
