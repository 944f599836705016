pub mod app;
pub mod bitmap;
pub mod color;
pub mod frame;
pub mod key;

pub use app::App;
pub use bitmap::{ImageData, ImageId};
pub use color::Color;
pub use frame::{DrawCommand, Frame};
pub use key::Key;
