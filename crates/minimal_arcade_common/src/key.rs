/// Frontend-independent keyboard keys.
///
/// Frontends translate their native key codes into this enum; anything the
/// games do not care about maps to `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Key {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    Escape,
}
