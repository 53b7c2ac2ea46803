//! Material remapping for From the Depths blueprints

fn main() -> anyhow::Result<()> {
    refit::cli::refit::run()
}
