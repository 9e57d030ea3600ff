//! Game entities and the per-frame movement rules that belong to each one.
//!
//! Every constructor takes only the settings it needs; nothing here holds a
//! reference back to the game.

use crate::geometry::Rect;
use crate::settings::{FleetDirection, Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting on the play button. Initial state, and the state after the
    /// last ship is lost.
    Inactive,
    Active,
}

// ── Ship ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Continuous horizontal position, copied into `rect.x` on update.
    pub x: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    screen_width: f32,
    screen_height: f32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            rect: Rect::new(0.0, 0.0, settings.ship_width, settings.ship_height),
            x: 0.0,
            moving_left: false,
            moving_right: false,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
        };
        ship.center_ship();
        ship
    }

    /// Put the ship back at the bottom centre of the screen.
    pub fn center_ship(&mut self) {
        self.rect
            .set_midbottom(self.screen_width / 2.0, self.screen_height);
        self.x = self.rect.x;
    }

    pub fn update(&mut self, speed: f32) {
        if self.moving_right && self.rect.right() < self.screen_width {
            self.x += speed;
        }
        if self.moving_left && self.rect.left() > 0.0 {
            self.x -= speed;
        }
        self.rect.x = self.x;
    }
}

// ── Bullet ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    pub y: f32,
}

impl Bullet {
    /// A bullet emerging from the top of the ship.
    pub fn new(ship: &Ship, settings: &Settings) -> Self {
        let mut rect = Rect::new(0.0, 0.0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(ship.rect.center_x(), ship.rect.top());
        Bullet { rect, y: rect.y }
    }

    pub fn update(&mut self, speed: f32) {
        self.y -= speed;
        self.rect.y = self.y;
    }

    /// True once the bullet has left through the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

// ── Alien ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    pub x: f32,
}

impl Alien {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Alien {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
            x,
        }
    }

    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0.0
    }

    pub fn update(&mut self, direction: FleetDirection, speed: f32) {
        self.x += speed * direction.sign();
        self.rect.x = self.x;
    }

    pub fn drop_by(&mut self, distance: f32) {
        self.rect.y += distance;
    }
}

// ── Statistics ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Survives every reset for the lifetime of the process.
    pub high_score: u32,
    pub status: GameStatus,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = GameStats {
            ships_left: 0,
            score: 0,
            level: 0,
            high_score: 0,
            status: GameStatus::Inactive,
        };
        stats.reset_stats(settings);
        stats
    }

    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }
}
