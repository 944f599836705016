use minimal_arcade_common::Key;

/// The single movement intent currently held by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Movement keys: arrows or WASD. Anything else is not a direction.
    pub fn from_key(key: Key) -> Option<Direction> {
        match key {
            Key::Up | Key::W => Some(Direction::Up),
            Key::Down | Key::S => Some(Direction::Down),
            Key::Left | Key::A => Some(Direction::Left),
            Key::Right | Key::D => Some(Direction::Right),
            _ => None,
        }
    }
}
