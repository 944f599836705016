use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let assets_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(minimal_arcade::default_assets_dir);
    log::info!("Using assets directory '{}'", assets_dir.display());

    minimal_arcade::run(&assets_dir)
}
