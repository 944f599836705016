use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use minimal_arcade_common::ImageData;
use rodio::Decoder;

use crate::config::ShooterConfig;
use crate::sound::SoundType;

/// Name of the directory holding images and sounds.
pub const ASSETS_DIR_NAME: &str = "Assets";

/// Everything the shooter reads from disk, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Assets {
    pub player: ImageData,
    pub background: ImageData,
    pub bullet: ImageData,
    pub sounds: HashMap<SoundType, Vec<u8>>,
}

impl Assets {
    /// Load every asset named in `config` from `dir`.
    ///
    /// Any missing or undecodable file is an error: the game cannot start
    /// without its assets.
    pub fn load(dir: &Path, config: &ShooterConfig) -> Result<Self> {
        log::info!("Loading assets from '{}'", dir.display());
        let player = ImageData::load(dir.join(&config.player_image))?;
        let background = ImageData::load(dir.join(&config.background_image))?;
        let bullet = ImageData::load(dir.join(&config.bullet_image))?;
        let shot = load_wav(&dir.join(&config.shot_sound))?;

        Ok(Self {
            player,
            background,
            bullet,
            sounds: HashMap::from([(SoundType::Shot, shot)]),
        })
    }
}

fn load_wav(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read sound {}", path.display()))?;
    // Decode once up front so a corrupt file fails at startup, not mid-game.
    Decoder::new_wav(Cursor::new(bytes.clone()))
        .with_context(|| format!("failed to decode sound {}", path.display()))?;
    log::debug!("Loaded sound '{}' ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// `Assets` beside the executable if present, otherwise `Assets` in the
/// working directory.
pub fn default_assets_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR_NAME)));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(ASSETS_DIR_NAME),
    }
}
