mod background;
mod bullet;
mod player;

pub use background::{Background, Scroll};
pub use bullet::Bullet;
pub use player::Player;

use minimal_arcade_common::{Frame, ImageData, ImageId};

/// Logical size of the window sprites live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Shared shape of every entity on screen: an image drawn centered on a
/// position, at a given size.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub image: ImageId,
    pub center_x: f32,
    pub center_y: f32,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    /// A sprite at the image's natural size, placed at the origin.
    pub fn from_image(image: ImageId, data: &ImageData) -> Self {
        Self {
            image,
            center_x: 0.0,
            center_y: 0.0,
            width: data.width,
            height: data.height,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.center_x, self.center_y)
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.center_x = x;
        self.center_y = y;
    }

    pub fn draw(&self, frame: &mut Frame) {
        frame.draw_sprite(self.image, self.center_x, self.center_y, self.width, self.height);
    }
}
