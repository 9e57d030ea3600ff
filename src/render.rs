//! The drawing seam between game state and whatever paints it.

use crate::game::Game;
use crate::geometry::Rect;
use crate::settings::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Alien,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub trait Renderer {
    type Error;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> Result<(), Self::Error>;
    fn draw_rect(&mut self, color: Color, rect: Rect) -> Result<(), Self::Error>;
    fn draw_text(
        &mut self,
        text: &str,
        color: Color,
        rect: Rect,
        align: Align,
    ) -> Result<(), Self::Error>;
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Render one complete frame.
pub fn draw_frame<R: Renderer>(game: &Game, out: &mut R) -> Result<(), R::Error> {
    out.clear(game.settings.bg_color)?;
    out.draw_sprite(Sprite::Ship, game.ship.rect)?;
    for bullet in &game.bullets {
        out.draw_rect(game.settings.bullet_color, bullet.rect)?;
    }
    for alien in &game.aliens {
        out.draw_sprite(Sprite::Alien, alien.rect)?;
    }

    game.scoreboard.show_score(out, &game.settings)?;

    if !game.stats.is_active() {
        game.play_button.draw_button(out)?;
    }
    out.present()
}

// ── World ↔ terminal mapping ─────────────────────────────────────────────────

/// Maps world units onto a grid of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: f32,
    pub world_height: f32,
}

/// A rectangle in cell coordinates, at least one cell in each direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_width: f32, world_height: f32) -> Self {
        Viewport {
            cols,
            rows,
            world_width,
            world_height,
        }
    }

    fn scale_x(&self) -> f32 {
        self.cols as f32 / self.world_width
    }

    fn scale_y(&self) -> f32 {
        self.rows as f32 / self.world_height
    }

    /// Cell rectangle covering `rect`, clipped to the grid. `None` when the
    /// rect lies entirely off screen.
    pub fn to_cells(&self, rect: &Rect) -> Option<CellRect> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        let left = (rect.left() * self.scale_x()).floor();
        let top = (rect.top() * self.scale_y()).floor();
        let right = (rect.right() * self.scale_x()).ceil().max(left + 1.0);
        let bottom = (rect.bottom() * self.scale_y()).ceil().max(top + 1.0);

        let max_col = self.cols as f32;
        let max_row = self.rows as f32;
        if right <= 0.0 || bottom <= 0.0 || left >= max_col || top >= max_row {
            return None;
        }
        let left = left.max(0.0);
        let top = top.max(0.0);
        let right = right.min(max_col);
        let bottom = bottom.min(max_row);
        Some(CellRect {
            col: left as u16,
            row: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }

    /// World coordinates of the centre of a cell.
    pub fn to_world(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) / self.scale_x(),
            (row as f32 + 0.5) / self.scale_y(),
        )
    }
}
