use std::path::Path;

use anyhow::Result;
use minimal_arcade_sdl2::App;
use minimal_arcade_sdl2::{SdlContext, SdlInitInfo};
use minimal_arcade_shooter::{Assets, ShooterApp, ShooterConfig};

pub use minimal_arcade_shooter::assets::default_assets_dir;

/// Load the shooter's assets from `assets_dir` and run it until the window
/// is closed.
pub fn run(assets_dir: &Path) -> Result<()> {
    let config = ShooterConfig::default();
    let assets = Assets::load(assets_dir, &config)?;
    let app = ShooterApp::new(config, assets);

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
