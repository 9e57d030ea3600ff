//! Score, high score, level and remaining-ship HUD.
//!
//! The `prep_*` methods turn stats into display text when they change, so
//! drawing a frame never formats numbers.

use crate::entities::GameStats;
use crate::geometry::Rect;
use crate::render::{Align, Renderer, Sprite};
use crate::settings::Settings;

const MARGIN: f32 = 20.0;
const TEXT_HEIGHT: f32 = 30.0;
const TEXT_WIDTH: f32 = 300.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// Ship icons to draw in the top-left corner.
    pub ships: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Scoreboard::default();
        sb.prep_score(stats);
        sb.prep_high_score(stats);
        sb.prep_level(stats);
        sb.prep_ships(stats);
        sb
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships = stats.ships_left;
    }

    /// Raise the high score if the current score beats it. Returns whether
    /// it changed.
    pub fn check_high_score(&mut self, stats: &mut GameStats) -> bool {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
            true
        } else {
            false
        }
    }

    pub fn show_score<R: Renderer>(&self, out: &mut R, settings: &Settings) -> Result<(), R::Error> {
        let score_rect = Rect::new(
            settings.screen_width - MARGIN - TEXT_WIDTH,
            MARGIN,
            TEXT_WIDTH,
            TEXT_HEIGHT,
        );
        out.draw_text(&self.score_text, settings.text_color, score_rect, Align::Right)?;

        let high_rect = Rect::new(
            (settings.screen_width - TEXT_WIDTH) / 2.0,
            MARGIN,
            TEXT_WIDTH,
            TEXT_HEIGHT,
        );
        out.draw_text(&self.high_score_text, settings.text_color, high_rect, Align::Center)?;

        let level_rect = Rect { y: score_rect.bottom() + 10.0, ..score_rect };
        out.draw_text(&self.level_text, settings.text_color, level_rect, Align::Right)?;

        for n in 0..self.ships {
            let icon = Rect::new(
                10.0 + n as f32 * settings.ship_width,
                10.0,
                settings.ship_width,
                settings.ship_height,
            );
            out.draw_sprite(Sprite::Ship, icon)?;
        }
        Ok(())
    }
}

/// Round to the nearest ten and group thousands: `12345` → `"12,350"`.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
