//! Blueprint document structures
//!
//! Only the fields the rewriter touches are modeled explicitly; everything
//! else in the file rides along untouched in an order-preserving `extra`
//! map, so a load/save round-trip stays faithful to the original document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A saved blueprint file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlueprintFile {
    /// Cached total material cost. Stale after any remap, so it is dropped
    /// on save and the game recomputes it.
    #[serde(
        rename = "SavedMaterialCost",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub saved_material_cost: Option<Value>,

    /// Local integer block IDs (as strings) to block GUIDs.
    #[serde(rename = "ItemDictionary")]
    pub item_dictionary: IndexMap<String, String>,

    /// The root construct.
    #[serde(rename = "Blueprint")]
    pub blueprint: Construct,

    /// Fields this tool does not interpret, preserved in order.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// One construct node: block slots plus nested sub-constructs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Construct {
    /// Block slot IDs, resolved through the blueprint's `ItemDictionary`.
    #[serde(rename = "BlockIds")]
    pub block_ids: Vec<u32>,

    /// Paint color index per slot, co-indexed with `BlockIds`.
    #[serde(rename = "BCI")]
    pub block_color_indices: Vec<u32>,

    /// Nested sub-constructs (turrets, spinners, and the like).
    #[serde(rename = "SCs")]
    pub sub_constructs: Vec<Construct>,

    /// Material cost cached by the game; reset on save.
    #[serde(rename = "ContainedMaterialCost")]
    pub contained_material_cost: f64,

    /// Fields this tool does not interpret, preserved in order.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}
