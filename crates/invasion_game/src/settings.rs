use invasion_common::Color;
use typed_builder::TypedBuilder;

use crate::geometry::Bounds;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Horizontal direction shared by every alien of the fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

/// Values that reset at the start of every game and grow on each level clear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub fleet_direction: FleetDirection,
    pub alien_points: u32,
}

impl Default for DynamicSettings {
    fn default() -> Self {
        Self {
            ship_speed: 12.0,
            bullet_speed: 12.0,
            alien_speed: 10.0,
            fleet_direction: FleetDirection::Right,
            alien_points: 50,
        }
    }
}

/// All tunables of the game.
///
/// Static values are fixed for the process lifetime. `dynamic` is restored
/// from `initial` by [`Settings::reset_dynamic`] and scaled by
/// [`Settings::increase_speed`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct Settings {
    #[builder(default = SCREEN_WIDTH)]
    pub screen_width: u32,
    #[builder(default = SCREEN_HEIGHT)]
    pub screen_height: u32,
    #[builder(default = Color::new_rgb(230, 230, 230))]
    pub bg_color: Color,

    #[builder(default = 48)]
    pub ship_width: u32,
    #[builder(default = 60)]
    pub ship_height: u32,
    #[builder(default = Color::new_rgb(40, 90, 200))]
    pub ship_color: Color,
    /// Lives granted at the start of a game.
    #[builder(default = 3)]
    pub ship_limit: u32,

    #[builder(default = 40)]
    pub alien_width: u32,
    #[builder(default = 32)]
    pub alien_height: u32,
    #[builder(default = Color::new_rgb(60, 170, 60))]
    pub alien_color: Color,
    #[builder(default = 10.0)]
    pub fleet_drop_speed: f32,

    #[builder(default = 3)]
    pub bullet_width: u32,
    #[builder(default = 15)]
    pub bullet_height: u32,
    #[builder(default = Color::new_rgb(248, 180, 0))]
    pub bullet_color: Color,
    #[builder(default = 100)]
    pub bullets_allowed: usize,

    /// Frames the game freezes after the ship is hit.
    #[builder(default = 30)]
    pub hit_pause_frames: u32,

    #[builder(default = 1.1)]
    pub speedup_scale: f32,
    #[builder(default = 1.5)]
    pub score_scale: f32,

    #[builder(default)]
    pub initial: DynamicSettings,
    #[builder(setter(skip), default)]
    pub dynamic: DynamicSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Settings::builder().build();
        settings.reset_dynamic();
        settings
    }
}

impl Settings {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.screen_width as f32, self.screen_height as f32)
    }

    pub fn reset_dynamic(&mut self) {
        self.dynamic = self.initial;
    }

    pub fn increase_speed(&mut self) {
        let d = &mut self.dynamic;
        d.ship_speed *= self.speedup_scale;
        d.bullet_speed *= self.speedup_scale;
        d.alien_speed *= self.speedup_scale;
        d.alien_points = (d.alien_points as f32 * self.score_scale).floor() as u32;
    }

    pub fn reverse_fleet(&mut self) {
        self.dynamic.fleet_direction = self.dynamic.fleet_direction.reversed();
    }
}
