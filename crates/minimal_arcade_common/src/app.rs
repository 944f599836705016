use crate::bitmap::ImageData;
use crate::frame::Frame;
use crate::key::Key;

/// A game driven by one of the frontends.
///
/// The frontend calls `init` once, then every frame forwards the pending key
/// events, calls `update` and finally `draw`. `draw` must not change game
/// state; everything that moves does so in `update`.
pub trait App {
    fn init(&mut self);
    fn update(&mut self);
    fn draw(&self, frame: &mut Frame);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    /// Every image the app may reference from a `DrawCommand`, indexed by
    /// `ImageId`. Uploaded once by the frontend after `init`.
    fn images(&self) -> &[ImageData];

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
