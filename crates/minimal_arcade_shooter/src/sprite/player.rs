use minimal_arcade_common::{Frame, ImageData, ImageId};

use super::{Sprite, Viewport};
use crate::boundaries::Boundaries;
use crate::direction::Direction;

/// Distance the ship keeps from the left and right window edges.
pub const HORIZONTAL_MARGIN: f32 = 50.0;
/// Distance the ship keeps from the top and bottom window edges.
pub const VERTICAL_MARGIN: f32 = 60.0;

/// The player's ship.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    pub speed: f32,
}

impl Player {
    /// Place the ship in the middle of the window.
    pub fn new(image: ImageId, data: &ImageData, speed: f32, viewport: Viewport) -> Self {
        let mut sprite = Sprite::from_image(image, data);
        let (x, y) = viewport.center();
        sprite.set_position(x, y);
        Self { sprite, speed }
    }

    /// Area the ship's center may occupy.
    pub fn bounds(viewport: Viewport) -> Boundaries {
        Boundaries::inset(viewport, HORIZONTAL_MARGIN, VERTICAL_MARGIN)
    }

    pub fn position(&self) -> (f32, f32) {
        self.sprite.position()
    }

    /// Step one frame towards `direction`.
    ///
    /// Moves only while the margin on that side has not been reached, and the
    /// step stops at the margin. `Direction::None` does nothing.
    pub fn move_in(&mut self, direction: Direction, viewport: Viewport) {
        let bounds = Self::bounds(viewport);
        let speed = self.speed;
        let sprite = &mut self.sprite;
        match direction {
            Direction::Up if !bounds.has_reached_y_max(sprite.center_y) => {
                sprite.center_y = (sprite.center_y + speed).min(bounds.y_max);
            }
            Direction::Down if !bounds.has_reached_y_min(sprite.center_y) => {
                sprite.center_y = (sprite.center_y - speed).max(bounds.y_min);
            }
            Direction::Left if !bounds.has_reached_x_min(sprite.center_x) => {
                sprite.center_x = (sprite.center_x - speed).max(bounds.x_min);
            }
            Direction::Right if !bounds.has_reached_x_max(sprite.center_x) => {
                sprite.center_x = (sprite.center_x + speed).min(bounds.x_max);
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.sprite.draw(frame);
    }
}
