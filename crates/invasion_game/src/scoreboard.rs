use invasion_common::Color;

use crate::geometry::Rect;
use crate::render::{text_height, text_width, Screen};
use crate::settings::Settings;
use crate::sprite::SHIP;
use crate::stats::GameStats;

const MARGIN: i32 = 20;
const TEXT_SCALE: u32 = 3;
const TEXT_COLOR: Color = Color::WHITE;
const SHIP_ICON_SCALE: f32 = 0.5;

/// Score rounded to the nearest ten with thousands separators.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Cached HUD strings. Each `prep_*` refreshes one cache from the stats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score_text: String,
    high_score_text: String,
    level_text: String,
    ships_left: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut scoreboard = Scoreboard::default();
        scoreboard.prep_all(stats);
        scoreboard
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format!("HI {}", format_score(stats.high_score));
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = format!("L{}", stats.level);
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships_left = stats.ships_left;
    }

    pub fn prep_all(&mut self, stats: &GameStats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats);
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn high_score_text(&self) -> &str {
        &self.high_score_text
    }

    pub fn level_text(&self) -> &str {
        &self.level_text
    }

    pub fn ships_left(&self) -> u32 {
        self.ships_left
    }

    /// Score top-right, level under it, high score top-center, remaining
    /// ships top-left.
    pub fn draw(&self, screen: &mut Screen, settings: &Settings) {
        let width = screen.width() as i32;

        let score_x = width - MARGIN - text_width(&self.score_text, TEXT_SCALE) as i32;
        screen.draw_text(&self.score_text, score_x, MARGIN, TEXT_SCALE, TEXT_COLOR);

        let level_y = MARGIN + text_height(TEXT_SCALE) as i32 + 10;
        let level_x = width - MARGIN - text_width(&self.level_text, TEXT_SCALE) as i32;
        screen.draw_text(&self.level_text, level_x, level_y, TEXT_SCALE, TEXT_COLOR);

        let high_x = (width - text_width(&self.high_score_text, TEXT_SCALE) as i32) / 2;
        screen.draw_text(&self.high_score_text, high_x, MARGIN, TEXT_SCALE, TEXT_COLOR);

        let icon_w = settings.ship_width as f32 * SHIP_ICON_SCALE;
        let icon_h = settings.ship_height as f32 * SHIP_ICON_SCALE;
        for i in 0..self.ships_left {
            let rect = Rect::new(10.0 + i as f32 * (icon_w + 4.0), 10.0, icon_w, icon_h);
            screen.draw_sprite(&SHIP, rect, settings.ship_color);
        }
    }
}

/// The centered button that starts a game.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayButton {
    pub rect: Rect,
    pub label: &'static str,
}

impl PlayButton {
    const WIDTH: f32 = 200.0;
    const HEIGHT: f32 = 50.0;
    const COLOR: Color = Color::GREEN;
    const LABEL_SCALE: u32 = 4;

    pub fn new(settings: &Settings) -> Self {
        let bounds = settings.bounds();
        PlayButton {
            rect: Rect::new(
                (bounds.width - Self::WIDTH) / 2.0,
                (bounds.height - Self::HEIGHT) / 2.0,
                Self::WIDTH,
                Self::HEIGHT,
            ),
            label: "PLAY",
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x as f32, y as f32)
    }

    pub fn draw(&self, screen: &mut Screen) {
        screen.fill_rect(self.rect, Self::COLOR);
        let tw = text_width(self.label, Self::LABEL_SCALE) as f32;
        let th = text_height(Self::LABEL_SCALE) as f32;
        let x = self.rect.center_x() - tw / 2.0;
        let y = self.rect.top() + (self.rect.h - th) / 2.0;
        screen.draw_text(
            self.label,
            x.round() as i32,
            y.round() as i32,
            Self::LABEL_SCALE,
            Color::WHITE,
        );
    }
}
