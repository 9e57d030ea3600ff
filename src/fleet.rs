//! Fleet layout and collective movement.

use tracing::debug;

use crate::entities::Alien;
use crate::settings::{DynamicSettings, Settings};

/// How many aliens fit on screen, per row and per column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: usize,
    pub rows: usize,
}

impl FleetLayout {
    /// One alien width of margin on each side; one alien height above the
    /// fleet and two alien heights plus the ship below it. Aliens are spaced
    /// two widths apart horizontally and two heights vertically, and any
    /// remainder is left as margin.
    pub fn compute(settings: &Settings) -> Self {
        let aw = settings.alien_width;
        let ah = settings.alien_height;

        let available_x = settings.screen_width - 2.0 * aw;
        let available_y = settings.screen_height - 3.0 * ah - settings.ship_height;

        FleetLayout {
            columns: slots(available_x, 2.0 * aw),
            rows: slots(available_y, 2.0 * ah),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }
}

fn slots(available: f32, spacing: f32) -> usize {
    if !(spacing > 0.0) || !(available > 0.0) {
        return 0;
    }
    (available / spacing).floor() as usize
}

/// Build a full fleet in row-major order.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let layout = FleetLayout::compute(settings);
    let aw = settings.alien_width;
    let ah = settings.alien_height;

    let mut aliens = Vec::with_capacity(layout.len());
    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let x = aw + 2.0 * aw * column as f32;
            let y = ah + 2.0 * ah * row as f32;
            aliens.push(Alien::new(x, y, settings));
        }
    }
    debug!(columns = layout.columns, rows = layout.rows, "fleet created");
    aliens
}

/// If any alien touches a side of the screen, drop the whole fleet once and
/// reverse its direction. Returns whether that happened.
pub fn check_fleet_edges(
    aliens: &mut [Alien],
    dynamic: &mut DynamicSettings,
    settings: &Settings,
) -> bool {
    if !aliens.iter().any(|a| a.check_edges(settings.screen_width)) {
        return false;
    }
    for alien in aliens.iter_mut() {
        alien.drop_by(settings.fleet_drop_speed);
    }
    dynamic.reverse_fleet_direction();
    true
}

pub fn update_aliens(aliens: &mut [Alien], dynamic: &DynamicSettings) {
    let direction = dynamic.fleet_direction();
    let speed = dynamic.alien_speed();
    for alien in aliens.iter_mut() {
        alien.update(direction, speed);
    }
}

pub fn any_alien_at_bottom(aliens: &[Alien], screen_height: f32) -> bool {
    aliens.iter().any(|a| a.rect.bottom() >= screen_height)
}
