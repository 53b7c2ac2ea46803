//! Block database explorer for From the Depths asset trees

fn main() -> anyhow::Result<()> {
    refit::cli::blocktree::run()
}
