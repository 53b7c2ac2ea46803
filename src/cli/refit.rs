//! The `refit` command: remap structural materials in a blueprint

use std::path::PathBuf;

use clap::Parser;

use crate::blueprint::{read_blueprint, refit_blueprint, write_blueprint};
use crate::config::AssetPaths;
use crate::database::{BlockDatabase, MaterialLetters};
use crate::ops::parse_directive;

/// Exit code when refusing to overwrite the input blueprint without `-f`.
const OVERWRITE_REFUSED: i32 = 2;

/// Performs one or more refit operations on an input blueprint, mapping one
/// structural material to another where possible, and saves the result to
/// an output blueprint.
#[derive(Parser)]
#[command(name = "refit")]
#[command(about = "Remap structural block materials in a From the Depths blueprint", long_about = None)]
pub struct RefitArgs {
    /// The blueprint to mutate
    pub input_blueprint: PathBuf,

    /// The output file name for the blueprint to produce
    pub output_blueprint: PathBuf,

    /// Operation descriptors such as "WS" or "W9S5", applied left to right
    #[arg(value_name = "OP")]
    pub ops: Vec<String>,

    /// Allow overwriting of the input blueprint (dangerous!)
    #[arg(short)]
    pub force: bool,

    /// Game install's StreamingAssets/Mods folder (auto-detected by default)
    #[arg(long, value_name = "DIR")]
    pub game_mods: Option<PathBuf>,

    /// User content folder holding optional slope packs
    #[arg(long, value_name = "DIR")]
    pub user_mods: Option<PathBuf>,
}

/// Run the refit CLI.
pub fn run() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let args = RefitArgs::parse();
    execute(&args)
}

pub fn execute(args: &RefitArgs) -> anyhow::Result<()> {
    if args.input_blueprint == args.output_blueprint && !args.force {
        tracing::error!("refusing to overwrite input blueprint (-f to force)");
        std::process::exit(OVERWRITE_REFUSED);
    }

    let paths = AssetPaths::detect(args.game_mods.clone(), args.user_mods.clone())?;
    let db = BlockDatabase::load(&paths)?;
    let letters = MaterialLetters::from_database(&db)?;

    let directives: Vec<_> = args
        .ops
        .iter()
        .map(|op| {
            let directive = parse_directive(op, &letters);
            tracing::info!("parsed {op:?} as {directive:?}");
            directive
        })
        .collect();

    let mut blueprint = read_blueprint(&args.input_blueprint)?;
    refit_blueprint(&db, &mut blueprint, &directives);

    tracing::info!("saving...");
    write_blueprint(&args.output_blueprint, &blueprint)?;
    tracing::info!("all done!");
    Ok(())
}
