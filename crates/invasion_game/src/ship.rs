use crate::geometry::Rect;
use crate::settings::Settings;

/// The player's ship, parked on the bottom edge of the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    /// Left edge; kept as f32 so slow speeds still accumulate.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            width: settings.ship_width as f32,
            height: settings.ship_height as f32,
        };
        ship.center(settings);
        ship
    }

    /// Mid-bottom of the screen.
    pub fn center(&mut self, settings: &Settings) {
        let bounds = settings.bounds();
        self.x = (bounds.width - self.width) / 2.0;
        self.y = bounds.height - self.height;
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Moves the ship's center towards `target_x`, at most `ship_speed`
    /// pixels, without leaving the screen.
    pub fn steer_towards(&mut self, target_x: f32, settings: &Settings) {
        let speed = settings.dynamic.ship_speed;
        let delta = (target_x - self.center_x()).clamp(-speed, speed);
        let max_x = (settings.bounds().width - self.width).max(0.0);
        self.x = (self.x + delta).clamp(0.0, max_x);
    }
}
