//! Block ID allocation for rewritten blueprints

use indexmap::IndexMap;

/// Lowest ID handed out for newly introduced blocks. The game reserves the
/// low ID range for itself, so fresh IDs must stay clear of it.
pub const MIN_ALLOCATED_ID: u32 = 100_000;

/// Bidirectional GUID <-> integer block ID table for one blueprint.
///
/// Seeded from the blueprint's on-disk `ItemDictionary`. A GUID first seen
/// during rewriting gets a fresh ID above both the existing maximum and
/// [`MIN_ALLOCATED_ID`]; the table is memoized so the same GUID always maps
/// to the same ID within one run.
#[derive(Debug, Clone)]
pub struct BlockIdAllocator {
    /// The on-disk dictionary, integer ID (as string) -> GUID.
    original: IndexMap<String, String>,
    /// GUID -> integer ID, in dictionary order then allocation order.
    guid_to_id: IndexMap<String, u32>,
    next_id: u32,
}

impl BlockIdAllocator {
    /// Seed the allocator from a blueprint's `ItemDictionary`.
    #[must_use]
    pub fn new(dictionary: &IndexMap<String, String>) -> Self {
        let mut guid_to_id = IndexMap::new();
        let mut max_id = 0;
        for (id, guid) in dictionary {
            match id.parse::<u32>() {
                Ok(id) => {
                    max_id = max_id.max(id);
                    guid_to_id.insert(guid.clone(), id);
                }
                Err(_) => {
                    tracing::warn!("ignoring non-numeric block id {id:?} in item dictionary");
                }
            }
        }
        Self {
            original: dictionary.clone(),
            guid_to_id,
            next_id: (max_id + 1).max(MIN_ALLOCATED_ID),
        }
    }

    /// The ID for `guid`, allocating a fresh one on first sight.
    pub fn get_or_allocate(&mut self, guid: &str) -> u32 {
        if let Some(id) = self.guid_to_id.get(guid) {
            return *id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.guid_to_id.insert(guid.to_string(), id);
        id
    }

    /// The GUID behind an integer block ID.
    ///
    /// Checks the on-disk dictionary first, then IDs allocated this run. An
    /// ID found in neither indicates a corrupt blueprint; it is warned and
    /// resolves to `None`.
    #[must_use]
    pub fn guid_for_id(&self, id: u32) -> Option<&str> {
        if let Some(guid) = self.original.get(id.to_string().as_str()) {
            return Some(guid.as_str());
        }
        let found = self
            .guid_to_id
            .iter()
            .find(|(_, mapped)| **mapped == id)
            .map(|(guid, _)| guid.as_str());
        if found.is_none() {
            tracing::warn!("no GUID for block id {id}");
        }
        found
    }

    /// Regenerate an `ItemDictionary` covering every GUID seen this run,
    /// original or newly allocated.
    #[must_use]
    pub fn into_dictionary(self) -> IndexMap<String, String> {
        self.guid_to_id
            .into_iter()
            .map(|(guid, id)| (id.to_string(), guid))
            .collect()
    }
}
