use std::fmt;
use std::str::FromStr;

use invasion_common::app::App;
use invasion_common::key::{Key, MouseButton};
use typed_builder::TypedBuilder;

use crate::camera::{Camera, CameraHandle, Frame, SyntheticCamera};
use crate::detector::{LandmarkDetector, PointerEvent, PointerHandDetector};
use crate::game::{Game, GameEvent};
use crate::gesture::{GestureInput, Hand};
use crate::render::Screen;
use crate::settings::Settings;
use crate::{CAMERA_HEIGHT, CAMERA_WIDTH, SCREEN_SCALE};

/// When the camera background is flipped left to right.
///
/// The classic behaviour mirrors only the first two levels, which is the
/// default here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MirrorPolicy {
    Always,
    Never,
    /// Mirror while the level is below this value.
    BelowLevel(u32),
}

impl Default for MirrorPolicy {
    fn default() -> Self {
        MirrorPolicy::BelowLevel(3)
    }
}

impl MirrorPolicy {
    pub fn mirrors(self, level: u32) -> bool {
        match self {
            MirrorPolicy::Always => true,
            MirrorPolicy::Never => false,
            MirrorPolicy::BelowLevel(limit) => level < limit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMirrorPolicyError(String);

impl fmt::Display for ParseMirrorPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mirror policy '{}', expected always, never, early or a level number",
            self.0
        )
    }
}

impl std::error::Error for ParseMirrorPolicyError {}

impl FromStr for MirrorPolicy {
    type Err = ParseMirrorPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(MirrorPolicy::Always),
            "never" => Ok(MirrorPolicy::Never),
            "early" => Ok(MirrorPolicy::default()),
            other => other
                .parse::<u32>()
                .map(MirrorPolicy::BelowLevel)
                .map_err(|_| ParseMirrorPolicyError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, TypedBuilder)]
pub struct AppConfig {
    #[builder(default)]
    pub settings: Settings,
    #[builder(default)]
    pub mirror: MirrorPolicy,
    #[builder(default = CAMERA_WIDTH)]
    pub camera_width: u32,
    #[builder(default = CAMERA_HEIGHT)]
    pub camera_height: u32,
    /// Pixels of noise added to simulated landmarks.
    #[builder(default = 0)]
    pub landmark_jitter: u32,
    #[builder(default = 0)]
    pub seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::builder().build()
    }
}

/// Frontend-facing wrapper: camera, detector, gesture adapter and game.
///
/// Each `update` reads a frame, turns its landmarks into a gesture sample,
/// steps the game and draws the result over the camera image.
pub struct InvasionApp {
    should_exit: bool,
    game: Game,
    gesture: GestureInput,
    camera: CameraHandle,
    detector: Box<dyn LandmarkDetector>,
    last_frame: Option<Frame>,
    /// Hands found in `last_frame`, drawn over it.
    hands: Vec<Hand>,
    camera_failing: bool,
    mirror: MirrorPolicy,
}

impl Default for InvasionApp {
    fn default() -> Self {
        InvasionApp::new(AppConfig::default())
    }
}

impl InvasionApp {
    /// Runs on a synthetic camera with the hand following the mouse.
    pub fn new(config: AppConfig) -> Self {
        let (w, h) = (config.settings.screen_width, config.settings.screen_height);
        let camera = SyntheticCamera::new(config.camera_width, config.camera_height);
        let detector =
            PointerHandDetector::new(w, h).with_jitter(config.landmark_jitter, config.seed);
        InvasionApp::with_devices(config, Box::new(camera), Box::new(detector))
    }

    pub fn with_devices(
        config: AppConfig,
        camera: Box<dyn Camera>,
        detector: Box<dyn LandmarkDetector>,
    ) -> Self {
        InvasionApp {
            should_exit: false,
            gesture: GestureInput::new(config.settings.screen_width),
            game: Game::new(config.settings),
            camera: CameraHandle::new(camera),
            detector,
            last_frame: None,
            hands: Vec::new(),
            camera_failing: false,
            mirror: config.mirror,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn gesture(&self) -> &GestureInput {
        &self.gesture
    }

    pub fn camera_released(&self) -> bool {
        self.camera.is_released()
    }

    /// Returns whether a new frame arrived. A failed read keeps the previous
    /// frame for the background.
    fn poll_camera(&mut self) -> bool {
        match self.camera.read() {
            Ok(frame) => {
                if self.camera_failing {
                    log::info!("Camera frames are back");
                    self.camera_failing = false;
                }
                self.last_frame = Some(frame);
                true
            }
            Err(e) => {
                if !self.camera_failing {
                    log::warn!("Camera read failed, keeping the previous frame: {e}");
                    self.camera_failing = true;
                } else {
                    log::debug!("Camera read failed again: {e}");
                }
                false
            }
        }
    }

    /// Runs the detector on a fresh frame and returns the frame width the
    /// landmarks were measured on.
    fn detect(&mut self, fresh: bool) -> u32 {
        match (&self.last_frame, fresh) {
            (Some(frame), true) => {
                self.hands = self.detector.find_hands(frame);
                frame.width
            }
            _ => 0,
        }
    }

    fn log_events(&mut self) {
        for event in self.game.take_events() {
            match event {
                GameEvent::GameStarted => log::info!("New game started"),
                GameEvent::LevelCleared { level } => log::info!("Fleet cleared, level {level}"),
                GameEvent::GameOver { score } => log::info!("Game over, score {score}"),
                GameEvent::ShipHit { ships_left } => {
                    log::debug!("Ship hit, {ships_left} ships left")
                }
                GameEvent::AliensDestroyed { count, points } => {
                    log::debug!("{count} aliens destroyed for {points} points")
                }
                GameEvent::FleetReversed => log::trace!("Fleet reversed"),
                GameEvent::Fired => log::trace!("Bullet fired"),
            }
        }
    }

    fn render(&self, screen_state: &mut [u8]) {
        let settings = self.game.settings();
        let mut screen = Screen::new(screen_state, settings.screen_width, settings.screen_height);
        match &self.last_frame {
            Some(frame) => {
                let mirror = self.mirror.mirrors(self.game.stats().level);
                screen.blit_frame(frame, mirror);
                for hand in &self.hands {
                    screen.draw_hand(hand, frame.width, frame.height, mirror);
                }
            }
            None => screen.clear(settings.bg_color),
        }
        self.game.draw(&mut screen);
    }
}

impl App for InvasionApp {
    fn init(&mut self) {
        log::info!("Alien Invasion init");
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        let fresh = self.poll_camera();
        let frame_width = self.detect(fresh);
        let hands: &[Hand] = if fresh { &self.hands } else { &[] };
        let sample = self.gesture.sample(hands, frame_width);
        self.game.step(sample);
        self.log_events();
        self.render(screen_state);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        match key {
            Key::Q | Key::Escape if is_down => self.should_exit = true,
            Key::Space => self.detector.observe_pointer(PointerEvent::Raise(is_down)),
            _ => {}
        }
    }

    fn handle_mouse_motion(&mut self, x: i32, y: i32) {
        self.detector.observe_pointer(PointerEvent::Moved { x, y });
    }

    fn handle_mouse_button(&mut self, button: MouseButton, x: i32, y: i32, is_down: bool) {
        match button {
            MouseButton::Left if is_down => {
                self.game.click(x, y);
                self.log_events();
            }
            MouseButton::Right => self.detector.observe_pointer(PointerEvent::Raise(is_down)),
            _ => {}
        }
    }

    fn handle_mouse_leave(&mut self) {
        self.detector.observe_pointer(PointerEvent::Left);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        self.camera.release();
        log::info!("Alien Invasion exit");
    }

    fn cursor_visible(&self) -> bool {
        self.game.cursor_visible()
    }

    fn width(&self) -> u32 {
        self.game.settings().screen_width
    }

    fn height(&self) -> u32 {
        self.game.settings().screen_height
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Alien Invasion".to_string()
    }
}
