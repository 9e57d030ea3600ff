//! The game state controller.
//!
//! `Game` owns every piece of mutable state. The host drives it with
//! `handle_event` for input and `tick` once per frame while active, and
//! honours the grace pause a tick may ask for.

use std::time::Duration;

use tracing::{debug, info};

use crate::button::Button;
use crate::collision::{resolve_bullet_alien_collisions, ship_collides};
use crate::entities::{Alien, Bullet, GameStats, GameStatus, Ship};
use crate::error::ConfigError;
use crate::fleet::{any_alien_at_bottom, check_fleet_edges, create_fleet, update_aliens};
use crate::input::{InputEvent, Key};
use crate::scoreboard::Scoreboard;
use crate::settings::{DynamicSettings, Settings};

/// Whether the host loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipHit {
    /// A ship was lost and the board was reset; play resumes after the pause.
    ShipLost { ships_left: u32 },
    GameOver,
}

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub aliens_destroyed: usize,
    pub wave_cleared: bool,
    pub ship_hit: Option<ShipHit>,
    /// Blocking delay the host should apply before processing more input.
    pub pause: Option<Duration>,
}

pub struct Game {
    pub settings: Settings,
    pub dynamic: DynamicSettings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub scoreboard: Scoreboard,
    pub play_button: Button,
    pub pointer_visible: bool,
}

impl Game {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let stats = GameStats::new(&settings);
        Ok(Game {
            dynamic: DynamicSettings::new(&settings),
            scoreboard: Scoreboard::new(&stats),
            ship: Ship::new(&settings),
            bullets: Vec::new(),
            aliens: create_fleet(&settings),
            play_button: Button::new(&settings),
            pointer_visible: true,
            stats,
            settings,
        })
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => return Control::Quit,
            InputEvent::KeyDown(Key::Left) => self.ship.moving_left = true,
            InputEvent::KeyDown(Key::Right) => self.ship.moving_right = true,
            InputEvent::KeyDown(Key::Fire) => {
                if self.stats.is_active() {
                    self.fire_bullet();
                }
            }
            InputEvent::KeyDown(Key::Start) => {
                self.start_game();
            }
            InputEvent::KeyUp(Key::Left) => self.ship.moving_left = false,
            InputEvent::KeyUp(Key::Right) => self.ship.moving_right = false,
            InputEvent::KeyUp(_) => {}
            InputEvent::MouseDown { x, y } => {
                if self.play_button.is_clicked(x, y) {
                    self.start_game();
                }
            }
        }
        Control::Continue
    }

    /// Begin a new game. Only fires from the inactive state; returns whether
    /// a game was started.
    pub fn start_game(&mut self) -> bool {
        if self.stats.is_active() {
            return false;
        }
        self.dynamic.reset(&self.settings);
        self.stats.reset_stats(&self.settings);
        self.stats.status = GameStatus::Active;
        self.scoreboard.prep_score(&self.stats);
        self.scoreboard.prep_level(&self.stats);
        self.scoreboard.prep_ships(&self.stats);

        self.reset_board();
        self.pointer_visible = false;
        info!(ships = self.stats.ships_left, "new game started");
        true
    }

    /// Fire a bullet unless `bullets_allowed` are already in flight.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.bullets_allowed {
            debug!(in_flight = self.bullets.len(), "fire rejected");
            return false;
        }
        self.bullets.push(Bullet::new(&self.ship, &self.settings));
        true
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Advance one frame. Does nothing while inactive.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if !self.stats.is_active() {
            return report;
        }
        self.ship.update(self.dynamic.ship_speed());
        self.update_bullets(&mut report);
        self.update_aliens(&mut report);

        if let Some(ShipHit::ShipLost { .. }) = report.ship_hit {
            report.pause = Some(self.grace_pause());
        }
        report
    }

    fn update_bullets(&mut self, report: &mut TickReport) {
        let speed = self.dynamic.bullet_speed();
        for bullet in self.bullets.iter_mut() {
            bullet.update(speed);
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.check_bullet_alien_collisions(report);
    }

    fn check_bullet_alien_collisions(&mut self, report: &mut TickReport) {
        let batch = resolve_bullet_alien_collisions(&mut self.bullets, &mut self.aliens);
        if !batch.is_empty() {
            report.aliens_destroyed = batch.aliens_destroyed;
            self.stats.score = self
                .stats
                .score
                .saturating_add(batch.points(self.dynamic.alien_points()));
            self.scoreboard.prep_score(&self.stats);
            self.scoreboard.check_high_score(&mut self.stats);
        }

        if self.aliens.is_empty() {
            self.bullets.clear();
            self.aliens = create_fleet(&self.settings);
            self.dynamic.increase_speed(&self.settings);
            self.stats.level += 1;
            self.scoreboard.prep_level(&self.stats);
            report.wave_cleared = true;
            info!(level = self.stats.level, score = self.stats.score, "wave cleared");
        }
    }

    fn update_aliens(&mut self, report: &mut TickReport) {
        check_fleet_edges(&mut self.aliens, &mut self.dynamic, &self.settings);
        update_aliens(&mut self.aliens, &self.dynamic);

        // A hit resets the board, so at most one is processed per tick.
        if ship_collides(&self.ship, &self.aliens)
            || any_alien_at_bottom(&self.aliens, self.settings.screen_height)
        {
            report.ship_hit = self.ship_hit();
        }
    }

    // ── Ship loss ────────────────────────────────────────────────────────────

    /// Respond to the ship being hit, or an alien reaching the bottom.
    ///
    /// Losing the last ship ends the game with `ships_left == 0`; otherwise
    /// the board is reset and the caller should apply `grace_pause`.
    /// Returns `None` while inactive.
    pub fn ship_hit(&mut self) -> Option<ShipHit> {
        if !self.stats.is_active() {
            return None;
        }
        if self.stats.ships_left > 1 {
            self.stats.ships_left -= 1;
            self.scoreboard.prep_ships(&self.stats);
            self.reset_board();
            info!(ships_left = self.stats.ships_left, "ship hit");
            Some(ShipHit::ShipLost {
                ships_left: self.stats.ships_left,
            })
        } else {
            self.stats.ships_left = 0;
            self.scoreboard.prep_ships(&self.stats);
            self.stats.status = GameStatus::Inactive;
            self.pointer_visible = true;
            info!(
                score = self.stats.score,
                high_score = self.stats.high_score,
                "game over"
            );
            Some(ShipHit::GameOver)
        }
    }

    pub fn grace_pause(&self) -> Duration {
        Duration::from_millis(self.settings.ship_hit_pause_ms)
    }

    /// Fresh fleet, no bullets, ship back in the centre.
    fn reset_board(&mut self) {
        self.aliens.clear();
        self.bullets.clear();
        self.aliens = create_fleet(&self.settings);
        self.ship.center_ship();
    }
}
