pub mod alien;
pub mod app;
pub mod bullet;
pub mod camera;
pub mod collision;
pub mod detector;
mod font;
pub mod game;
pub mod geometry;
pub mod gesture;
pub mod render;
pub mod scoreboard;
pub mod settings;
pub mod ship;
pub mod sprite;
pub mod stats;

pub use app::{AppConfig, InvasionApp, MirrorPolicy};
pub use game::{Game, GameEvent, GameState};
pub use settings::Settings;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: u32 = 1280;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 720;
/// Integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;

/// Camera frame size requested from the capture device.
pub const CAMERA_WIDTH: u32 = 640;
pub const CAMERA_HEIGHT: u32 = 480;
