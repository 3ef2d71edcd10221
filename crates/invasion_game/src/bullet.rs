use crate::geometry::Rect;
use crate::settings::Settings;
use crate::ship::Ship;

/// A bullet travelling straight up from where it was fired.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Bullet {
    /// Spawns at the ship's mid-top with the current bullet speed.
    pub fn fire_from(ship: &Ship, settings: &Settings) -> Self {
        let width = settings.bullet_width as f32;
        Bullet {
            x: ship.center_x() - width / 2.0,
            y: ship.y,
            width,
            height: settings.bullet_height as f32,
            speed: settings.dynamic.bullet_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    /// True once the whole bullet is above the top edge.
    pub fn is_off_screen(&self) -> bool {
        self.rect().bottom() <= 0.0
    }
}

/// Adds a bullet unless `bullets_allowed` are already in flight.
pub fn fire_bullet(bullets: &mut Vec<Bullet>, ship: &Ship, settings: &Settings) -> bool {
    if bullets.len() >= settings.bullets_allowed {
        return false;
    }
    bullets.push(Bullet::fire_from(ship, settings));
    true
}

/// Moves every bullet and drops the ones that left the screen.
pub fn update_bullets(bullets: &mut Vec<Bullet>) {
    for bullet in bullets.iter_mut() {
        bullet.update();
    }
    bullets.retain(|b| !b.is_off_screen());
}
