use crate::key::{Key, MouseButton};

/// Contract between a windowing frontend and a game.
///
/// The frontend owns the window and the event pump; once per frame it
/// forwards input, calls `update` with an RGB24 framebuffer of
/// `width() * height() * 3` bytes, then presents that buffer.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn handle_mouse_motion(&mut self, x: i32, y: i32);
    fn handle_mouse_button(&mut self, button: MouseButton, x: i32, y: i32, is_down: bool);
    /// The pointer left the window.
    fn handle_mouse_leave(&mut self) {}
    fn should_exit(&self) -> bool;
    fn exit(&mut self);
    fn cursor_visible(&self) -> bool {
        true
    }

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
