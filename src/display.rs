//! Terminal renderer: all terminal drawing lives here.
//!
//! World rectangles are mapped onto character cells through a `Viewport`;
//! sprites are drawn as box-drawing art stretched to their cell footprint.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use alien_invasion::geometry::Rect;
use alien_invasion::render::{Align, CellRect, Renderer, Sprite, Viewport};
use alien_invasion::settings::Color;

// ── Terminal session ──────────────────────────────────────────────────────────

/// Enter the alternate screen, hide the cursor and capture the mouse. When
/// `enhance_keyboard` is set, also request key-release reports.
///
/// Returns whether keyboard enhancement ended up active. If any step fails,
/// everything already applied is undone before the error is returned. Raw
/// mode is left to the caller.
pub fn setup_terminal<W: Write>(out: &mut W, enhance_keyboard: bool) -> io::Result<bool> {
    let applied = (|| -> io::Result<()> {
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        out.execute(EnableMouseCapture)?;
        Ok(())
    })();
    if let Err(e) = applied {
        restore_terminal(out, false);
        return Err(e);
    }

    let enhanced = enhance_keyboard
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    Ok(enhanced)
}

/// Undo `setup_terminal`. Best effort: every step runs even if one fails.
pub fn restore_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SHIP: style::Color = style::Color::Rgb { r: 20, g: 40, b: 140 };
const C_ALIEN: style::Color = style::Color::Rgb { r: 20, g: 120, b: 40 };

fn term_color(c: Color) -> style::Color {
    style::Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport: Viewport,
    bg: Color,
    /// Filled rectangles drawn this frame, so text on top keeps their colour.
    fills: Vec<(CellRect, Color)>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        TerminalRenderer {
            out,
            viewport,
            bg: Color(0, 0, 0),
            fills: Vec::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    fn background_at(&self, col: u16, row: u16) -> Color {
        self.fills
            .iter()
            .rev()
            .find(|(r, _)| {
                col >= r.col && col < r.col + r.width && row >= r.row && row < r.row + r.height
            })
            .map(|(_, c)| *c)
            .unwrap_or(self.bg)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn clear(&mut self, color: Color) -> io::Result<()> {
        self.bg = color;
        self.fills.clear();
        self.out.queue(style::SetBackgroundColor(term_color(color)))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> io::Result<()> {
        let Some(cells) = self.viewport.to_cells(&rect) else {
            return Ok(());
        };
        let fg = match sprite {
            Sprite::Ship => C_SHIP,
            Sprite::Alien => C_ALIEN,
        };
        self.out.queue(style::SetBackgroundColor(term_color(self.bg)))?;
        self.out.queue(style::SetForegroundColor(fg))?;
        for (i, line) in sprite_art(sprite, cells.width, cells.height).iter().enumerate() {
            self.out.queue(cursor::MoveTo(cells.col, cells.row + i as u16))?;
            self.out.queue(Print(line))?;
        }
        Ok(())
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) -> io::Result<()> {
        let Some(cells) = self.viewport.to_cells(&rect) else {
            return Ok(());
        };
        self.out.queue(style::SetBackgroundColor(term_color(color)))?;
        let blank = " ".repeat(cells.width as usize);
        for row in cells.row..cells.row + cells.height {
            self.out.queue(cursor::MoveTo(cells.col, row))?;
            self.out.queue(Print(&blank))?;
        }
        self.fills.push((cells, color));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, color: Color, rect: Rect, align: Align) -> io::Result<()> {
        let Some(cells) = self.viewport.to_cells(&rect) else {
            return Ok(());
        };
        let len = text.chars().count() as u16;
        let col = match align {
            Align::Left => cells.col,
            Align::Center => cells.col + cells.width.saturating_sub(len) / 2,
            Align::Right => cells.col + cells.width.saturating_sub(len),
        };
        let row = cells.row + cells.height / 2;
        let visible: String = text
            .chars()
            .take(self.viewport.cols.saturating_sub(col) as usize)
            .collect();

        let bg = self.background_at(col, row);
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetBackgroundColor(term_color(bg)))?;
        self.out.queue(style::SetForegroundColor(term_color(color)))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.viewport.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

// ── Sprite art ────────────────────────────────────────────────────────────────

/// Sprite art sized to `width`×`height` cells.
///
/// Ship:       Alien:
///    ▲         «▼▼▼»
///   /███\      ╚═══╝
fn sprite_art(sprite: Sprite, width: u16, height: u16) -> Vec<String> {
    let w = width as usize;
    (0..height)
        .map(|row| match (sprite, row) {
            (Sprite::Ship, 0) => {
                let pad = w.saturating_sub(1) / 2;
                format!("{}▲{}", " ".repeat(pad), " ".repeat(w.saturating_sub(pad + 1)))
            }
            (Sprite::Ship, _) => framed('/', '█', '\\', w),
            (Sprite::Alien, 0) => framed('«', '▼', '»', w),
            (Sprite::Alien, _) => framed('╚', '═', '╝', w),
        })
        .collect()
}

fn framed(left: char, fill: char, right: char, width: usize) -> String {
    match width {
        0 => String::new(),
        1 => fill.to_string(),
        _ => {
            let mut s = String::with_capacity(width * 3);
            s.push(left);
            s.extend(std::iter::repeat(fill).take(width - 2));
            s.push(right);
            s
        }
    }
}
