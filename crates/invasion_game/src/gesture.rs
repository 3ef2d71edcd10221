//! Hand landmarks to game input.
//!
//! A detector reports hands as lists of [`Landmark`]s in camera pixel
//! space (y grows downward). [`GestureInput`] turns the first hand into a
//! [`GestureSample`]: a fire edge, true for exactly one frame each time the
//! index finger goes up, and a steering position in screen space.

use std::error::Error;
use std::fmt;

/// Wrist.
pub const WRIST: u8 = 0;
/// Index finger PIP joint.
pub const INDEX_PIP: u8 = 6;
/// Index finger tip.
pub const INDEX_TIP: u8 = 8;
/// Middle finger MCP joint, the steering reference.
pub const MIDDLE_MCP: u8 = 9;
/// Points in the standard hand model.
pub const LANDMARK_COUNT: usize = 21;

/// Bones of the 21-point hand: palm outline, then each finger from its base.
pub const HAND_CONNECTIONS: [(u8, u8); 21] = [
    (0, 1),
    (0, 5),
    (0, 17),
    (5, 9),
    (9, 13),
    (13, 17),
    (1, 2),
    (2, 3),
    (3, 4),
    (5, 6),
    (6, 7),
    (7, 8),
    (9, 10),
    (10, 11),
    (11, 12),
    (13, 14),
    (14, 15),
    (15, 16),
    (17, 18),
    (18, 19),
    (19, 20),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub id: u8,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    pub landmarks: Vec<Landmark>,
}

impl Hand {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Hand { landmarks }
    }

    /// Looks a landmark up by id, not by position in the list.
    pub fn get(&self, id: u8) -> Result<Landmark, GestureError> {
        self.landmarks
            .iter()
            .find(|lm| lm.id == id)
            .copied()
            .ok_or(GestureError::MissingLandmark(id))
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureError {
    MissingLandmark(u8),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::MissingLandmark(id) => write!(f, "hand is missing landmark {id}"),
        }
    }
}

impl Error for GestureError {}

/// Index finger latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Raised,
}

impl GestureState {
    /// Index tip above its PIP joint. Equal heights count as lowered.
    pub fn is_raised(hand: &Hand) -> Result<bool, GestureError> {
        let tip = hand.get(INDEX_TIP)?;
        let pip = hand.get(INDEX_PIP)?;
        Ok(tip.y < pip.y)
    }

    /// Returns the next state and whether this frame is a fire edge.
    pub fn next(self, hand: &Hand) -> Result<(GestureState, bool), GestureError> {
        let raised = Self::is_raised(hand)?;
        Ok(match (self, raised) {
            (GestureState::Idle, true) => (GestureState::Raised, true),
            (GestureState::Raised, true) => (GestureState::Raised, false),
            (_, false) => (GestureState::Idle, false),
        })
    }
}

/// What the game loop consumes each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub fire: bool,
    /// Target x of the ship's center, in screen pixels.
    pub steer_x: f32,
}

/// Gesture latch plus the last steering position.
#[derive(Clone, Debug)]
pub struct GestureInput {
    state: GestureState,
    steer_x: f32,
    screen_width: f32,
}

impl GestureInput {
    /// Steering starts at the horizontal center until a hand is seen.
    pub fn new(screen_width: u32) -> Self {
        let screen_width = screen_width as f32;
        GestureInput {
            state: GestureState::Idle,
            steer_x: screen_width / 2.0,
            screen_width,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn steer_x(&self) -> f32 {
        self.steer_x
    }

    /// Consumes one frame of detections. `frame_width` is the width of the
    /// image the landmarks were measured on.
    ///
    /// Without a hand nothing changes. A hand missing one of the needed
    /// landmarks is rejected as a whole: no fire, steering held, latch kept.
    pub fn sample(&mut self, hands: &[Hand], frame_width: u32) -> GestureSample {
        let hold = GestureSample {
            fire: false,
            steer_x: self.steer_x,
        };
        let Some(hand) = hands.first().filter(|h| !h.is_empty()) else {
            return hold;
        };

        match self.read_hand(hand, frame_width) {
            Ok((state, fire, steer_x)) => {
                self.state = state;
                self.steer_x = steer_x;
                GestureSample { fire, steer_x }
            }
            Err(e) => {
                log::debug!("Ignoring malformed hand: {e}");
                hold
            }
        }
    }

    fn read_hand(
        &self,
        hand: &Hand,
        frame_width: u32,
    ) -> Result<(GestureState, bool, f32), GestureError> {
        let (state, fire) = self.state.next(hand)?;
        let reference = hand.get(MIDDLE_MCP)?;
        let steer_x = if frame_width == 0 {
            self.steer_x
        } else {
            reference.x as f32 * self.screen_width / frame_width as f32
        };
        Ok((state, fire, steer_x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(tip_y: i32, pip_y: i32, ref_x: i32) -> Hand {
        Hand::new(vec![
            Landmark { id: WRIST, x: ref_x, y: 400 },
            Landmark { id: INDEX_PIP, x: ref_x, y: pip_y },
            Landmark { id: INDEX_TIP, x: ref_x, y: tip_y },
            Landmark { id: MIDDLE_MCP, x: ref_x, y: 300 },
        ])
    }

    fn raised(x: i32) -> Hand {
        hand(100, 200, x)
    }

    fn lowered(x: i32) -> Hand {
        hand(250, 200, x)
    }

    #[test]
    fn state_machine_fires_only_on_upward_transition() {
        let s = GestureState::Idle;
        let (s, fired) = s.next(&raised(0)).unwrap();
        assert_eq!((s, fired), (GestureState::Raised, true));
        let (s, fired) = s.next(&raised(0)).unwrap();
        assert_eq!((s, fired), (GestureState::Raised, false));
        let (s, fired) = s.next(&lowered(0)).unwrap();
        assert_eq!((s, fired), (GestureState::Idle, false));
        let (s, fired) = s.next(&raised(0)).unwrap();
        assert_eq!((s, fired), (GestureState::Raised, true));
    }

    #[test]
    fn equal_heights_are_not_raised() {
        assert!(!GestureState::is_raised(&hand(200, 200, 0)).unwrap());
    }

    #[test]
    fn missing_tip_is_an_error() {
        let h = Hand::new(vec![Landmark { id: INDEX_PIP, x: 0, y: 0 }]);
        assert_eq!(
            GestureState::Idle.next(&h),
            Err(GestureError::MissingLandmark(INDEX_TIP))
        );
    }

    #[test]
    fn no_hand_holds_centered_default() {
        let mut input = GestureInput::new(1280);
        let sample = input.sample(&[], 640);
        assert_eq!(sample, GestureSample { fire: false, steer_x: 640.0 });
        let sample = input.sample(&[Hand::default()], 640);
        assert_eq!(sample, GestureSample { fire: false, steer_x: 640.0 });
    }

    #[test]
    fn steering_maps_camera_to_screen_and_holds_when_hand_leaves() {
        let mut input = GestureInput::new(1280);
        let sample = input.sample(&[lowered(160)], 640);
        assert_eq!(sample.steer_x, 320.0);
        let sample = input.sample(&[], 640);
        assert_eq!(sample.steer_x, 320.0);
        assert!(!sample.fire);
    }

    #[test]
    fn latch_survives_frames_without_a_hand() {
        let mut input = GestureInput::new(1280);
        assert!(input.sample(&[raised(100)], 640).fire);
        assert!(!input.sample(&[], 640).fire);
        assert!(!input.sample(&[raised(100)], 640).fire);
        assert!(!input.sample(&[lowered(100)], 640).fire);
        assert!(input.sample(&[raised(100)], 640).fire);
    }

    #[test]
    fn malformed_hand_fails_closed() {
        let mut input = GestureInput::new(1280);
        input.sample(&[lowered(320)], 640);
        let no_reference = Hand::new(vec![
            Landmark { id: INDEX_PIP, x: 0, y: 200 },
            Landmark { id: INDEX_TIP, x: 0, y: 100 },
        ]);
        let sample = input.sample(&[no_reference], 640);
        assert_eq!(sample, GestureSample { fire: false, steer_x: 640.0 });
        assert_eq!(input.state(), GestureState::Idle);
        // The rejected raise did not latch, so a real one still fires.
        assert!(input.sample(&[raised(320)], 640).fire);
    }

    #[test]
    fn only_the_first_hand_counts() {
        let mut input = GestureInput::new(1280);
        let sample = input.sample(&[lowered(64), raised(600)], 640);
        assert!(!sample.fire);
        assert_eq!(sample.steer_x, 128.0);
    }
}
