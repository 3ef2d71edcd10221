//! Landmark detector seam and a pointer-driven stand-in.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::Frame;
use crate::gesture::{Hand, Landmark, INDEX_TIP, LANDMARK_COUNT};

/// Raw pointer input forwarded from the window, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Moved { x: i32, y: i32 },
    /// The button standing in for "index finger up".
    Raise(bool),
    Left,
}

/// Maps a camera frame to zero or more hands.
pub trait LandmarkDetector {
    fn find_hands(&mut self, frame: &Frame) -> Vec<Hand>;

    /// Only simulated detectors care about the window pointer.
    fn observe_pointer(&mut self, _event: PointerEvent) {}
}

/// Offsets of the 21 landmarks from the middle-finger MCP for an upright
/// open hand, measured on a 480-pixel-high frame.
const HAND_SHAPE: [(i32, i32); LANDMARK_COUNT] = [
    (0, 70),
    (-25, 55),
    (-40, 38),
    (-52, 22),
    (-60, 8),
    (-20, 0),
    (-22, -25),
    (-23, -40),
    (-24, -55),
    (0, 0),
    (0, -28),
    (0, -45),
    (0, -60),
    (18, 2),
    (20, -22),
    (21, -37),
    (22, -50),
    (34, 8),
    (37, -10),
    (39, -22),
    (40, -32),
];

/// Index DIP and tip folded back below the PIP joint.
const CURLED_INDEX: [(i32, i32); 2] = [(-20, -15), (-18, -5)];

const REFERENCE_HEIGHT: f32 = 480.0;

/// Synthesises a hand under the mouse pointer.
///
/// The pointer's screen position is mapped into the frame, the index finger
/// is raised while the raise button is held, and the hand disappears when
/// the pointer leaves the window. `jitter` adds up to that many pixels of
/// noise to every landmark, like a real tracker.
pub struct PointerHandDetector {
    screen_width: u32,
    screen_height: u32,
    pointer: Option<(i32, i32)>,
    raised: bool,
    jitter: i32,
    rng: StdRng,
}

impl PointerHandDetector {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        PointerHandDetector {
            screen_width,
            screen_height,
            pointer: None,
            raised: false,
            jitter: 0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn with_jitter(mut self, jitter: u32, seed: u64) -> Self {
        self.jitter = jitter as i32;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    fn to_frame(&self, x: i32, y: i32, frame: &Frame) -> (i32, i32) {
        let fx = x as i64 * frame.width as i64 / self.screen_width.max(1) as i64;
        let fy = y as i64 * frame.height as i64 / self.screen_height.max(1) as i64;
        (fx as i32, fy as i32)
    }

    fn noise(&mut self) -> i32 {
        if self.jitter == 0 {
            0
        } else {
            self.rng.gen_range(-self.jitter..=self.jitter)
        }
    }
}

impl LandmarkDetector for PointerHandDetector {
    fn find_hands(&mut self, frame: &Frame) -> Vec<Hand> {
        let Some((px, py)) = self.pointer else {
            return Vec::new();
        };
        let (cx, cy) = self.to_frame(px, py, frame);
        let scale = frame.height as f32 / REFERENCE_HEIGHT;

        let mut landmarks = Vec::with_capacity(LANDMARK_COUNT);
        for (id, &(dx, dy)) in HAND_SHAPE.iter().enumerate() {
            let id = id as u8;
            let (dx, dy) = match id {
                7 | INDEX_TIP if !self.raised => CURLED_INDEX[(id - 7) as usize],
                _ => (dx, dy),
            };
            let x = cx + (dx as f32 * scale).round() as i32 + self.noise();
            let y = cy + (dy as f32 * scale).round() as i32 + self.noise();
            landmarks.push(Landmark { id, x, y });
        }
        vec![Hand::new(landmarks)]
    }

    fn observe_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { x, y } => self.pointer = Some((x, y)),
            PointerEvent::Raise(raised) => self.raised = raised,
            PointerEvent::Left => self.pointer = None,
        }
    }
}
