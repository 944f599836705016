use minimal_arcade_common::{Frame, ImageData, ImageId};

use super::{Sprite, Viewport};

/// Width of the band past the left bound that sends the background back to
/// the right bound.
pub const HYSTERESIS_BAND: f32 = 100.0;

/// Which branch of the scroll-reset policy a frame took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scroll {
    /// At or left of the right bound: shift right by the left bound.
    WrapForward,
    /// Inside the hysteresis band: shift right by the right bound.
    WrapBackward,
    /// Normal one-unit step to the left.
    Step,
}

/// Horizontally scrolling backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub sprite: Sprite,
    pub max_left_bound: f32,
    pub max_right_bound: f32,
}

impl Background {
    pub fn new(image: ImageId, data: &ImageData, viewport: Viewport) -> Self {
        let half_width = data.width as f32 / 2.0;
        let mut sprite = Sprite::from_image(image, data);
        sprite.set_position(half_width, viewport.height / 2.0);
        Self {
            sprite,
            max_left_bound: half_width,
            max_right_bound: viewport.width - half_width,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.sprite.position()
    }

    pub fn update_position(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.sprite.position();
        self.sprite.set_position(x + dx, y + dy);
    }

    /// Apply one frame of the scroll-reset policy. Branch order matters.
    ///
    /// The wrap branches shift by the bound rather than move to it, so the
    /// background settles into a one-unit-per-frame scroll between wraps.
    pub fn scroll(&mut self) -> Scroll {
        let x = self.sprite.center_x;
        if x <= self.max_right_bound {
            self.update_position(self.max_left_bound, 0.0);
            Scroll::WrapForward
        } else if x <= self.max_left_bound + HYSTERESIS_BAND {
            self.update_position(self.max_right_bound, 0.0);
            Scroll::WrapBackward
        } else {
            self.update_position(-1.0, 0.0);
            Scroll::Step
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.sprite.draw(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background() -> Background {
        Background::new(
            ImageId(1),
            &ImageData::blank("background", 600, 500),
            Viewport::new(500.0, 500.0),
        )
    }

    #[test]
    fn bounds_derive_from_image_and_window_width() {
        let bg = background();
        assert_eq!(bg.max_left_bound, 300.0);
        assert_eq!(bg.max_right_bound, 200.0);
        assert_eq!(bg.position(), (300.0, 250.0));
    }

    #[test]
    fn update_position_adds_delta() {
        let mut bg = background();
        bg.update_position(-5.0, 2.0);
        assert_eq!(bg.position(), (295.0, 252.0));
    }

    #[test]
    fn right_bound_shifts_by_left_bound() {
        let mut bg = background();
        bg.sprite.set_position(200.0, 250.0);
        assert_eq!(bg.scroll(), Scroll::WrapForward);
        assert_eq!(bg.position(), (500.0, 250.0));

        bg.sprite.set_position(150.0, 250.0);
        assert_eq!(bg.scroll(), Scroll::WrapForward);
        assert_eq!(bg.position().0, 450.0);
    }

    #[test]
    fn hysteresis_band_shifts_by_right_bound() {
        let mut bg = background();
        for x in [201.0, 300.0, 400.0] {
            bg.sprite.set_position(x, 250.0);
            assert_eq!(bg.scroll(), Scroll::WrapBackward, "x = {x}");
            assert_eq!(bg.position(), (x + 200.0, 250.0));
        }
    }

    #[test]
    fn steps_left_past_the_band() {
        let mut bg = background();
        bg.sprite.set_position(405.0, 250.0);
        let xs: Vec<f32> = (0..6)
            .map(|_| {
                bg.scroll();
                bg.position().0
            })
            .collect();
        // Five steady steps, then the band pushes it forward again.
        assert_eq!(xs, vec![404.0, 403.0, 402.0, 401.0, 400.0, 600.0]);
    }

    #[test]
    fn default_geometry_scrolls_one_unit_per_frame_between_wraps() {
        let mut bg = background();
        let xs: Vec<f32> = (0..450)
            .map(|_| {
                bg.scroll();
                bg.position().0
            })
            .collect();

        // 300 sits in the band, so the first frame pushes it to 500.
        assert_eq!(xs[0], 500.0);
        // Steady scroll down to the band edge.
        for pair in xs[0..101].windows(2) {
            assert_eq!(pair[1], pair[0] - 1.0);
        }
        assert_eq!(xs[100], 400.0);
        // Then a wrap to 600 and a steady run from 600 down to 400.
        assert_eq!(xs[101], 600.0);
        assert_eq!(xs[301], 400.0);
        assert_eq!(xs[302], 600.0);
        for window in [&xs[101..302], &xs[302..450]] {
            for pair in window.windows(2) {
                assert_eq!(pair[1], pair[0] - 1.0);
            }
        }
        let wraps = xs.windows(2).filter(|p| p[1] > p[0]).count();
        assert_eq!(wraps, 2);
    }

    #[test]
    fn right_bound_is_checked_before_the_band() {
        // A background narrower than the window puts the right bound past
        // the band, so the first branch must win.
        let mut bg = Background::new(
            ImageId(1),
            &ImageData::blank("narrow", 100, 100),
            Viewport::new(500.0, 500.0),
        );
        assert_eq!((bg.max_left_bound, bg.max_right_bound), (50.0, 450.0));
        bg.sprite.set_position(140.0, 250.0);
        assert_eq!(bg.scroll(), Scroll::WrapForward);
        assert_eq!(bg.position().0, 190.0);
    }
}
