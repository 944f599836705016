pub mod app;
pub mod assets;
pub mod boundaries;
pub mod config;
pub mod direction;
pub mod sound;
pub mod sprite;

pub use app::ShooterApp;
pub use assets::Assets;
pub use boundaries::Boundaries;
pub use config::ShooterConfig;
pub use direction::Direction;
pub use sprite::Viewport;

/// Window title shown by the frontend.
pub const TITLE: &str = "Minimal Arcade";
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;
