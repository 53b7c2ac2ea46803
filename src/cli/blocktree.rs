//! The `blocktree` command: dump the block database groupings

use std::path::PathBuf;

use clap::Parser;

use crate::config::AssetPaths;
use crate::database::{BlockDatabase, UNKNOWN_BLOCK};

#[derive(Parser)]
#[command(name = "blocktree")]
#[command(about = "List structural blocks grouped by base material and mesh", long_about = None)]
pub struct BlocktreeArgs {
    /// Game install's StreamingAssets/Mods folder (auto-detected by default)
    #[arg(long, value_name = "DIR")]
    pub game_mods: Option<PathBuf>,

    /// User content folder holding optional slope packs
    #[arg(long, value_name = "DIR")]
    pub user_mods: Option<PathBuf>,
}

/// Run the blocktree CLI.
pub fn run() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let args = BlocktreeArgs::parse();
    execute(&args)
}

pub fn execute(args: &BlocktreeArgs) -> anyhow::Result<()> {
    let paths = AssetPaths::detect(args.game_mods.clone(), args.user_mods.clone())?;
    let db = BlockDatabase::load(&paths)?;

    for block in db.base_blocks.values() {
        println!("{} {}", block.guid, block.name);
    }

    println!("{}", "-".repeat(50));

    for (base_guid, derived) in &db.by_base_block {
        println!("{} {}", base_guid, db.name_of(base_guid));
        for guid in derived {
            println!("    {} {}", guid, db.name_of(guid));
        }
    }

    println!("{}", "-".repeat(50));

    for (mesh_guid, derived) in &db.by_mesh {
        println!("{} {}", mesh_guid, db.mesh_name_of(mesh_guid));
        for guid in derived {
            let base_name = db
                .base_block_guid_of(guid)
                .map_or(UNKNOWN_BLOCK, |base| db.name_of(base));
            println!("    {} {} [{}]", guid, db.name_of(guid), base_name);
        }
    }

    Ok(())
}
