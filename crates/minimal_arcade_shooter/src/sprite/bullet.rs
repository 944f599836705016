use minimal_arcade_common::{Frame, ImageId};

use super::{Sprite, Viewport};
use crate::boundaries::Boundaries;

/// Bullets are always drawn at this size, whatever the image's own size.
pub const BULLET_SIZE: u32 = 100;

/// A projectile travelling right at constant speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub sprite: Sprite,
    pub speed: f32,
}

impl Bullet {
    pub fn fire(image: ImageId, x: f32, y: f32, speed: f32) -> Self {
        Self {
            sprite: Sprite {
                image,
                center_x: x,
                center_y: y,
                width: BULLET_SIZE,
                height: BULLET_SIZE,
            },
            speed,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.sprite.position()
    }

    pub fn advance(&mut self) {
        self.sprite.center_x += self.speed;
    }

    /// True once the whole sprite is past the right edge of the window.
    pub fn is_off_screen(&self, viewport: Viewport) -> bool {
        let left_edge = self.sprite.center_x - self.sprite.width as f32 / 2.0;
        left_edge > Boundaries::of_viewport(viewport).x_max
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.sprite.draw(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_speed_each_step() {
        let mut bullet = Bullet::fire(ImageId(2), 250.0, 250.0, 17.0);
        assert_eq!((bullet.sprite.width, bullet.sprite.height), (100, 100));
        bullet.advance();
        bullet.advance();
        assert_eq!(bullet.position(), (284.0, 250.0));
    }

    #[test]
    fn off_screen_once_left_edge_passes_window() {
        let viewport = Viewport::new(500.0, 500.0);
        let mut bullet = Bullet::fire(ImageId(2), 550.0, 250.0, 17.0);
        assert!(!bullet.is_off_screen(viewport));
        bullet.advance();
        assert!(bullet.is_off_screen(viewport));
    }
}
