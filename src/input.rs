//! Translation from raw terminal events to game input events.
//!
//! Terminals that support the keyboard-enhancement protocol report key
//! releases, so `KeyUp` comes straight from the terminal. Classic terminals
//! only send presses (OS key-repeat shows up as repeated presses); for those
//! a movement key is treated as released once no press has arrived for
//! `HOLD_WINDOW` frames.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::render::Viewport;

/// A key counts as held if its last press/repeat arrived within this many
/// frames. The OS key-repeat rate is ≥ 15 Hz, so at 30 FPS a window of 4
/// frames is always refreshed before it expires.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    Start,
    Quit,
}

impl Key {
    fn is_movement(self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Mouse press, already converted to world coordinates.
    MouseDown { x: f32, y: f32 },
}

pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Key::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

pub struct KeyTracker {
    viewport: Viewport,
    /// Terminal reports `Release` events.
    release_events: bool,
    frame: u64,
    /// Held movement key → frame it was last seen.
    held: HashMap<Key, u64>,
}

impl KeyTracker {
    pub fn new(viewport: Viewport, release_events: bool) -> Self {
        KeyTracker {
            viewport,
            release_events,
            frame: 0,
            held: HashMap::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    /// Append the game events produced by one terminal event.
    pub fn translate(&mut self, event: &Event, out: &mut Vec<InputEvent>) {
        match event {
            Event::Key(key) => self.translate_key(key, out),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let (x, y) = self.viewport.to_world(*column, *row);
                out.push(InputEvent::MouseDown { x, y });
            }
            Event::Resize(cols, rows) => {
                self.viewport.cols = *cols;
                self.viewport.rows = *rows;
            }
            _ => {}
        }
    }

    fn translate_key(&mut self, event: &KeyEvent, out: &mut Vec<InputEvent>) {
        if event.kind == KeyEventKind::Press
            && event.modifiers.contains(KeyModifiers::CONTROL)
            && event.code == KeyCode::Char('c')
        {
            out.push(InputEvent::Quit);
            return;
        }
        let Some(key) = map_key(event.code) else {
            return;
        };

        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat if key.is_movement() => {
                if self.held.insert(key, self.frame).is_none() {
                    out.push(InputEvent::KeyDown(key));
                }
            }
            KeyEventKind::Press => out.push(InputEvent::KeyDown(key)),
            KeyEventKind::Repeat => {}
            KeyEventKind::Release => {
                self.held.remove(&key);
                out.push(InputEvent::KeyUp(key));
            }
        }
    }

    /// Close out the current frame: on terminals without release reports,
    /// movement keys that went quiet are released.
    pub fn finish_frame(&mut self, out: &mut Vec<InputEvent>) {
        if !self.release_events {
            let frame = self.frame;
            let mut expired: Vec<Key> = self
                .held
                .iter()
                .filter(|(_, &last)| frame.saturating_sub(last) >= HOLD_WINDOW)
                .map(|(&key, _)| key)
                .collect();
            expired.sort_by_key(|k| *k as u8);
            for key in expired {
                self.held.remove(&key);
                out.push(InputEvent::KeyUp(key));
            }
        }
        self.frame += 1;
    }
}
