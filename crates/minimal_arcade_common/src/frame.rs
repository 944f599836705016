use crate::bitmap::ImageId;
use crate::color::Color;

/// One entry of the render list.
///
/// Positions use the game's coordinate system: origin at the bottom-left of
/// the window, y growing upwards. Frontends flip the y axis when presenting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Sprite {
        image: ImageId,
        center_x: f32,
        center_y: f32,
        width: u32,
        height: u32,
    },
}

/// Ordered render list rebuilt every frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub clear_color: Color,
    commands: Vec<DrawCommand>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            commands: Vec::new(),
        }
    }
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_sprite(&mut self, image: ImageId, center_x: f32, center_y: f32, width: u32, height: u32) {
        self.commands.push(DrawCommand::Sprite {
            image,
            center_x,
            center_y,
            width,
            height,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}
