use crate::geometry::Rect;
use crate::settings::Settings;

/// A single fleet member. Direction and speed are fleet-wide and live in
/// [`crate::settings::DynamicSettings`].
#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Touching or past the left/right screen edge.
    pub fn at_edge(&self, settings: &Settings) -> bool {
        let rect = self.rect();
        rect.right() >= settings.screen_width as f32 || rect.left() <= 0.0
    }
}

/// Grid dimensions of a freshly spawned fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: u32,
    pub rows: u32,
}

impl FleetLayout {
    /// One alien of margin on each side and one alien of spacing between
    /// columns and rows; the ship's height is kept free at the bottom.
    pub fn for_settings(settings: &Settings) -> Self {
        let (aw, ah) = (settings.alien_width, settings.alien_height);
        let available_x = settings.screen_width.saturating_sub(4 * aw);
        let available_y = settings
            .screen_height
            .saturating_sub(4 * ah)
            .saturating_sub(settings.ship_height);
        FleetLayout {
            columns: available_x.checked_div(2 * aw).unwrap_or(0),
            rows: available_y.checked_div(2 * ah).unwrap_or(0),
        }
    }

    /// Top-left corner of the alien at `(column, row)`.
    pub fn position(settings: &Settings, column: u32, row: u32) -> (f32, f32) {
        let (aw, ah) = (settings.alien_width as f32, settings.alien_height as f32);
        (aw + 2.0 * aw * column as f32, ah + 2.0 * ah * row as f32)
    }

    pub fn len(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the full fleet, row by row.
pub fn spawn_fleet(settings: &Settings) -> Vec<Alien> {
    let layout = FleetLayout::for_settings(settings);
    let mut aliens = Vec::with_capacity(layout.len());
    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let (x, y) = FleetLayout::position(settings, column, row);
            aliens.push(Alien {
                x,
                y,
                width: settings.alien_width as f32,
                height: settings.alien_height as f32,
            });
        }
    }
    aliens
}

/// If any alien touches a side edge, drops the whole fleet and reverses its
/// direction. Returns whether that happened.
pub fn check_fleet_edges(aliens: &mut [Alien], settings: &mut Settings) -> bool {
    if !aliens.iter().any(|a| a.at_edge(settings)) {
        return false;
    }
    for alien in aliens.iter_mut() {
        alien.y += settings.fleet_drop_speed;
    }
    settings.reverse_fleet();
    true
}

pub fn advance_fleet(aliens: &mut [Alien], settings: &Settings) {
    let dx = settings.dynamic.alien_speed * settings.dynamic.fleet_direction.sign();
    for alien in aliens.iter_mut() {
        alien.x += dx;
    }
}

/// Any alien whose bottom edge reached the bottom of the screen.
pub fn reached_bottom(aliens: &[Alien], settings: &Settings) -> bool {
    let bottom = settings.screen_height as f32;
    aliens.iter().any(|a| a.rect().bottom() >= bottom)
}
