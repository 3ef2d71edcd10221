use crate::settings::Settings;

/// Per-game counters plus the session high score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Survives [`GameStats::reset`]; never written to disk.
    pub high_score: u32,
    pub game_active: bool,
}

impl GameStats {
    /// Starts inactive, waiting for the play button.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = GameStats {
            ships_left: 0,
            score: 0,
            level: 1,
            high_score: 0,
            game_active: false,
        };
        stats.reset(settings);
        stats
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Adds to the score and returns true if the high score moved.
    pub fn add_score(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
            return true;
        }
        false
    }

    /// Takes one life away and returns how many are left.
    pub fn lose_ship(&mut self) -> u32 {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left
    }
}
