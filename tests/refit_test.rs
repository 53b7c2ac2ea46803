//! End-to-end tests over a synthetic asset tree and blueprint.

use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;

use refit::prelude::*;

fn write_record(dir: &Path, name: &str, value: &Value) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(name), value.to_string()).unwrap();
}

fn base_item(guid: &str, name: &str) -> Value {
    json!({ "ComponentId": { "Guid": guid, "Name": name } })
}

fn derived_item(guid: &str, name: &str, base: &str, mesh: &str) -> Value {
    json!({
        "ComponentId": { "Guid": guid, "Name": name },
        "IdToDuplicate": { "Reference": { "Guid": base } },
        "MeshReference": { "Reference": { "Guid": mesh } }
    })
}

fn mesh_item(guid: &str, name: &str) -> Value {
    json!({ "ComponentId": { "Guid": guid, "Name": name } })
}

/// Write the Core_Structural pack under `root/game` and return asset paths
/// rooted there, with `root/user` as the (initially empty) user mods tree.
fn sample_tree(root: &Path) -> AssetPaths {
    let core = root.join("game/Core_Structural");
    let items = core.join("Items");
    let dups = core.join("ItemDup");
    let meshes = core.join("Meshes");

    for (file, guid, name) in [
        ("wood.item", "W1", "Wood Block"),
        ("stone.item", "S1", "Stone"),
        ("alloy.item", "A1", "Alloy"),
        ("metal.item", "M1", "Metal"),
        ("heavy.item", "H1", "Heavy Armour"),
        ("glass.item", "G1", "Glass"),
        ("rubber.item", "R1", "Rubber"),
        ("lead.item", "L1", "Lead"),
    ] {
        write_record(&items, file, &base_item(guid, name));
    }

    for (file, guid, name, base, mesh) in [
        (
            "wood_slope.itemduplicateandmodify",
            "WD-SLOPE",
            "Wood Armor Slope",
            "W1",
            "MESH-SLOPE",
        ),
        (
            "stone_slope.itemduplicateandmodify",
            "SD-SLOPE",
            "Stone Armor Slope",
            "S1",
            "MESH-SLOPE",
        ),
        (
            "wood_beam.itemduplicateandmodify",
            "WD-BEAM",
            "Wood Armor Beam",
            "W1",
            "MESH-BEAM",
        ),
        (
            "stone_beam.itemduplicateandmodify",
            "SD-BEAM",
            "Stone Armor Beam",
            "S1",
            "MESH-BEAM",
        ),
    ] {
        write_record(&dups, file, &derived_item(guid, name, base, mesh));
    }

    write_record(&meshes, "slope.mesh", &mesh_item("MESH-SLOPE", "Armour Slope"));
    write_record(&meshes, "beam.mesh", &mesh_item("MESH-BEAM", "Armour Beam"));

    AssetPaths::detect(Some(root.join("game")), Some(root.join("user"))).unwrap()
}

fn sample_blueprint() -> Value {
    json!({
        "Name": "Test Raft",
        "Version": 1,
        "SavedMaterialCost": 812.25,
        "ItemDictionary": { "1": "WD-SLOPE", "2": "WD-BEAM" },
        "Blueprint": {
            "BlockIds": [1, 2, 1],
            "BCI": [9, 9, 3],
            "ContainedMaterialCost": 812.25,
            "LocalPosition": "0,0,0",
            "SCs": [{
                "BlockIds": [2],
                "BCI": [9],
                "ContainedMaterialCost": 12.5,
                "SCs": []
            }]
        }
    })
}

#[test]
fn color_filtered_refit_end_to_end() {
    let root = tempdir().unwrap();
    let paths = sample_tree(root.path());

    let db = BlockDatabase::load(&paths).unwrap();
    let letters = MaterialLetters::from_database(&db).unwrap();

    let input = root.path().join("in.blueprint");
    let output = root.path().join("out.blueprint");
    std::fs::write(&input, sample_blueprint().to_string()).unwrap();

    let mut blueprint = read_blueprint(&input).unwrap();
    let directive = parse_directive("W9S5", &letters);
    refit_blueprint(&db, &mut blueprint, &[directive]);
    write_blueprint(&output, &blueprint).unwrap();

    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();

    // Slots painted 9 remapped to the Stone equivalents and repainted 5;
    // the slot painted 3 is untouched. The sub-construct is rewritten before
    // the root construct's own slots, so its beam takes the first fresh ID.
    let beam_id: u64 = 100_000; // SD-BEAM
    let slope_id: u64 = 100_001; // SD-SLOPE
    assert_eq!(
        saved["Blueprint"]["BlockIds"],
        json!([slope_id, beam_id, 1])
    );
    assert_eq!(saved["Blueprint"]["BCI"], json!([5, 5, 3]));
    assert_eq!(saved["Blueprint"]["SCs"][0]["BlockIds"], json!([beam_id]));
    assert_eq!(saved["Blueprint"]["SCs"][0]["BCI"], json!([5]));

    // Cost bookkeeping cleared; unmodeled fields intact.
    assert!(saved.get("SavedMaterialCost").is_none());
    assert_eq!(saved["Blueprint"]["ContainedMaterialCost"], json!(0.0));
    assert_eq!(saved["Name"], json!("Test Raft"));
    assert_eq!(saved["Blueprint"]["LocalPosition"], json!("0,0,0"));

    // Dictionary regenerated to cover old and new GUIDs alike.
    assert_eq!(saved["ItemDictionary"]["1"], json!("WD-SLOPE"));
    assert_eq!(saved["ItemDictionary"]["100000"], json!("SD-BEAM"));
    assert_eq!(saved["ItemDictionary"]["100001"], json!("SD-SLOPE"));
}

#[test]
fn colorless_refit_remaps_regardless_of_paint() {
    let root = tempdir().unwrap();
    let paths = sample_tree(root.path());

    let db = BlockDatabase::load(&paths).unwrap();
    let letters = MaterialLetters::from_database(&db).unwrap();

    let mut blueprint: BlueprintFile = serde_json::from_value(sample_blueprint()).unwrap();
    refit_blueprint(&db, &mut blueprint, &[parse_directive("WS", &letters)]);

    // The sub-construct's beam allocates first (100000), then the slope.
    assert_eq!(blueprint.blueprint.block_ids, [100_001, 100_000, 100_001]);
    // Paint untouched without a to-color.
    assert_eq!(blueprint.blueprint.block_color_indices, [9, 9, 3]);
}

#[test]
fn zero_directives_round_trip_preserves_the_document() {
    let root = tempdir().unwrap();
    let paths = sample_tree(root.path());
    let db = BlockDatabase::load(&paths).unwrap();

    let original = sample_blueprint();
    let mut blueprint: BlueprintFile = serde_json::from_value(original.clone()).unwrap();
    refit_blueprint(&db, &mut blueprint, &[]);
    let saved = serde_json::to_value(&blueprint).unwrap();

    // Identical modulo the cost fields and the regenerated dictionary.
    let mut expected = original;
    expected.as_object_mut().unwrap().remove("SavedMaterialCost");
    expected["Blueprint"]["ContainedMaterialCost"] = json!(0.0);
    assert_eq!(saved, expected);
}

#[test]
fn preferred_content_pack_wins_over_the_fallback() {
    let root = tempdir().unwrap();
    let paths = sample_tree(root.path());

    let fallback = root.path().join("user/MegaSlopesPack");
    write_record(
        &fallback.join("ItemDup"),
        "fallback.itemduplicateandmodify",
        &derived_item("FB-SLOPE", "Fallback Mega Slope", "W1", "MESH-MEGA"),
    );

    let common = root.path().join("user/MegaSlopesPack2CommonBlockMateri");
    write_record(
        &common.join("ItemDup"),
        "common.itemduplicateandmodify",
        &derived_item("CM-SLOPE", "Common Mega Slope", "W1", "MESH-MEGA"),
    );
    let other = root.path().join("user/MegaSlopesPack2OtherBlockMateria");
    write_record(
        &other.join("ItemDup"),
        "other.itemduplicateandmodify",
        &derived_item("OT-SLOPE", "Other Mega Slope", "L1", "MESH-MEGA"),
    );

    let db = BlockDatabase::load(&paths).unwrap();
    assert!(db.is_derived_block("CM-SLOPE"));
    assert!(db.is_derived_block("OT-SLOPE"));
    assert!(!db.is_derived_block("FB-SLOPE"));
}

#[test]
fn fallback_content_pack_loads_when_preferred_is_absent() {
    let root = tempdir().unwrap();
    let paths = sample_tree(root.path());

    let fallback = root.path().join("user/MegaSlopesPack");
    write_record(
        &fallback.join("ItemDup"),
        "fallback.itemduplicateandmodify",
        &derived_item("FB-SLOPE", "Fallback Mega Slope", "W1", "MESH-MEGA"),
    );

    let db = BlockDatabase::load(&paths).unwrap();
    assert!(db.is_derived_block("FB-SLOPE"));
}

#[test]
fn missing_structural_material_fails_letter_table_construction() {
    let root = tempdir().unwrap();
    let paths = sample_tree(root.path());
    std::fs::remove_file(root.path().join("game/Core_Structural/Items/lead.item")).unwrap();

    let db = BlockDatabase::load(&paths).unwrap();
    let err = MaterialLetters::from_database(&db).unwrap_err();
    assert!(matches!(err, Error::BaseMaterialNotFound { letter: 'L', .. }));
}

#[test]
fn malformed_asset_record_does_not_poison_the_load() {
    let root = tempdir().unwrap();
    let paths = sample_tree(root.path());
    std::fs::write(
        root.path()
            .join("game/Core_Structural/ItemDup/broken.itemduplicateandmodify"),
        "{ not json",
    )
    .unwrap();

    let db = BlockDatabase::load(&paths).unwrap();
    assert!(db.is_derived_block("WD-SLOPE"));
    assert_eq!(db.stats().derived_block_count, 4);
}
