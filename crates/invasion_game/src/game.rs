//! The frame-by-frame game loop.
//!
//! [`Game`] owns every entity and runs one frame per [`Game::step`]:
//! input, bullets, bullet/alien hits, level clear, fleet edges, fleet
//! movement, ship hits. It never blocks; the pause after a hit is counted in
//! frames.

use crate::alien::{self, Alien};
use crate::bullet::{self, Bullet};
use crate::collision;
use crate::gesture::GestureSample;
use crate::render::Screen;
use crate::scoreboard::{PlayButton, Scoreboard};
use crate::settings::Settings;
use crate::ship::Ship;
use crate::sprite;
use crate::stats::GameStats;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Before the first game and after game over: play button shown.
    Inactive,
    Active,
}

/// Things that happened during a frame, drained by the app for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    Fired,
    AliensDestroyed { count: usize, points: u32 },
    LevelCleared { level: u32 },
    FleetReversed,
    ShipHit { ships_left: u32 },
    GameOver { score: u32 },
}

pub struct Game {
    settings: Settings,
    stats: GameStats,
    ship: Ship,
    bullets: Vec<Bullet>,
    aliens: Vec<Alien>,
    scoreboard: Scoreboard,
    play_button: PlayButton,
    pause_frames: u32,
    /// Fire edge seen during the hit pause, spent on the next live frame.
    pending_fire: bool,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(mut settings: Settings) -> Self {
        settings.reset_dynamic();
        let stats = GameStats::new(&settings);
        Game {
            ship: Ship::new(&settings),
            bullets: Vec::new(),
            aliens: Vec::new(),
            scoreboard: Scoreboard::new(&stats),
            play_button: PlayButton::new(&settings),
            pause_frames: 0,
            pending_fire: false,
            events: Vec::new(),
            stats,
            settings,
        }
    }

    pub fn state(&self) -> GameState {
        if self.stats.game_active {
            GameState::Active
        } else {
            GameState::Inactive
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn play_button(&self) -> &PlayButton {
        &self.play_button
    }

    pub fn is_paused(&self) -> bool {
        self.pause_frames > 0
    }

    /// The mouse cursor is only needed to press the play button.
    pub fn cursor_visible(&self) -> bool {
        self.state() == GameState::Inactive
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// A click at `(x, y)`. Starts a new game if it lands on the play button
    /// while inactive; returns whether it did.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        if self.state() != GameState::Inactive || !self.play_button.contains(x, y) {
            return false;
        }
        self.start_game();
        true
    }

    fn start_game(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset(&self.settings);
        self.stats.game_active = true;
        self.scoreboard.prep_all(&self.stats);

        self.bullets.clear();
        self.aliens = alien::spawn_fleet(&self.settings);
        self.ship.center(&self.settings);
        self.pause_frames = 0;
        self.pending_fire = false;
        self.events.push(GameEvent::GameStarted);
    }

    /// Advances one frame. Does nothing while inactive.
    pub fn step(&mut self, input: GestureSample) {
        if self.state() != GameState::Active {
            return;
        }
        if self.pause_frames > 0 {
            self.pause_frames -= 1;
            self.pending_fire |= input.fire;
            return;
        }

        self.ship.steer_towards(input.steer_x, &self.settings);
        let fire = input.fire || std::mem::take(&mut self.pending_fire);
        if fire && bullet::fire_bullet(&mut self.bullets, &self.ship, &self.settings) {
            self.events.push(GameEvent::Fired);
        }

        self.update_bullets();
        self.update_aliens();
    }

    fn update_bullets(&mut self) {
        bullet::update_bullets(&mut self.bullets);
        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let destroyed = collision::resolve_bullet_hits(&mut self.bullets, &mut self.aliens);
        if destroyed == 0 {
            return;
        }

        let points = self.settings.dynamic.alien_points * destroyed as u32;
        let new_high = self.stats.add_score(points);
        self.scoreboard.prep_score(&self.stats);
        if new_high {
            self.scoreboard.prep_high_score(&self.stats);
        }
        self.events.push(GameEvent::AliensDestroyed {
            count: destroyed,
            points,
        });

        if self.aliens.is_empty() {
            self.start_next_level();
        }
    }

    fn start_next_level(&mut self) {
        self.bullets.clear();
        self.aliens = alien::spawn_fleet(&self.settings);
        self.settings.increase_speed();

        self.stats.level += 1;
        self.scoreboard.prep_level(&self.stats);
        self.events.push(GameEvent::LevelCleared {
            level: self.stats.level,
        });
    }

    fn update_aliens(&mut self) {
        if alien::check_fleet_edges(&mut self.aliens, &mut self.settings) {
            self.events.push(GameEvent::FleetReversed);
        }
        alien::advance_fleet(&mut self.aliens, &self.settings);

        let rammed = collision::any_alien_hits(&self.ship.rect(), &self.aliens);
        if rammed || alien::reached_bottom(&self.aliens, &self.settings) {
            self.ship_hit();
        }
    }

    fn ship_hit(&mut self) {
        let ships_left = self.stats.lose_ship();
        self.scoreboard.prep_ships(&self.stats);
        self.events.push(GameEvent::ShipHit { ships_left });

        if ships_left > 0 {
            self.bullets.clear();
            self.aliens = alien::spawn_fleet(&self.settings);
            self.ship.center(&self.settings);
            self.pause_frames = self.settings.hit_pause_frames;
        } else {
            self.stats.game_active = false;
            self.bullets.clear();
            self.aliens.clear();
            self.pause_frames = 0;
            self.events.push(GameEvent::GameOver {
                score: self.stats.score,
            });
        }
    }

    /// Draws everything except the camera background.
    pub fn draw(&self, screen: &mut Screen) {
        screen.draw_sprite(&sprite::SHIP, self.ship.rect(), self.settings.ship_color);
        for alien in &self.aliens {
            screen.draw_sprite(&sprite::ALIEN, alien.rect(), self.settings.alien_color);
        }
        for bullet in &self.bullets {
            screen.fill_rect(bullet.rect(), self.settings.bullet_color);
        }

        self.scoreboard.draw(screen, &self.settings);

        if self.state() == GameState::Inactive {
            self.play_button.draw(screen);
        }
    }
}
