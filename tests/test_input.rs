use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use alien_invasion::geometry::Rect;
use alien_invasion::input::*;
use alien_invasion::render::{CellRect, Viewport};

/// 100×50 cells over a 200×100 world: two world units per column and per row.
fn viewport() -> Viewport {
    Viewport::new(100, 50, 200.0, 100.0)
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

fn translate(tracker: &mut KeyTracker, event: Event) -> Vec<InputEvent> {
    let mut out = Vec::new();
    tracker.translate(&event, &mut out);
    out
}

// ── Key mapping ───────────────────────────────────────────────────────────────

#[test]
fn arrows_and_wasd_both_steer() {
    assert_eq!(map_key(KeyCode::Left), Some(Key::Left));
    assert_eq!(map_key(KeyCode::Char('a')), Some(Key::Left));
    assert_eq!(map_key(KeyCode::Right), Some(Key::Right));
    assert_eq!(map_key(KeyCode::Char('D')), Some(Key::Right));
    assert_eq!(map_key(KeyCode::Char(' ')), Some(Key::Fire));
    assert_eq!(map_key(KeyCode::Enter), Some(Key::Start));
    assert_eq!(map_key(KeyCode::Esc), Some(Key::Quit));
    assert_eq!(map_key(KeyCode::Char('z')), None);
}

#[test]
fn ctrl_c_quits() {
    let mut t = KeyTracker::new(viewport(), false);
    let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(translate(&mut t, ev), vec![InputEvent::Quit]);
}

#[test]
fn fire_emits_on_every_press() {
    let mut t = KeyTracker::new(viewport(), false);
    assert_eq!(translate(&mut t, press(KeyCode::Char(' '))), vec![InputEvent::KeyDown(Key::Fire)]);
    assert_eq!(translate(&mut t, press(KeyCode::Char(' '))), vec![InputEvent::KeyDown(Key::Fire)]);
}

// ── Hold tracking ─────────────────────────────────────────────────────────────

#[test]
fn repeated_presses_of_a_held_key_emit_once() {
    let mut t = KeyTracker::new(viewport(), false);
    assert_eq!(translate(&mut t, press(KeyCode::Left)), vec![InputEvent::KeyDown(Key::Left)]);
    assert!(translate(&mut t, press(KeyCode::Left)).is_empty());
    assert!(t.is_held(Key::Left));
}

#[test]
fn silent_key_expires_after_hold_window() {
    let mut t = KeyTracker::new(viewport(), false);
    translate(&mut t, press(KeyCode::Right));

    let mut out = Vec::new();
    for _ in 0..HOLD_WINDOW {
        t.finish_frame(&mut out);
    }
    assert!(out.is_empty());
    assert!(t.is_held(Key::Right));

    t.finish_frame(&mut out);
    assert_eq!(out, vec![InputEvent::KeyUp(Key::Right)]);
    assert!(!t.is_held(Key::Right));
}

#[test]
fn key_repeat_keeps_key_alive() {
    let mut t = KeyTracker::new(viewport(), false);
    translate(&mut t, press(KeyCode::Left));

    let mut out = Vec::new();
    for _ in 0..(HOLD_WINDOW * 3) {
        t.finish_frame(&mut out);
        translate(&mut t, press(KeyCode::Left));
    }
    assert!(out.is_empty());
}

#[test]
fn release_events_end_holds_immediately() {
    let mut t = KeyTracker::new(viewport(), true);
    translate(&mut t, press(KeyCode::Left));

    let mut out = Vec::new();
    for _ in 0..(HOLD_WINDOW * 3) {
        t.finish_frame(&mut out);
    }
    // Never expires on its own
    assert!(out.is_empty());

    assert_eq!(translate(&mut t, release(KeyCode::Left)), vec![InputEvent::KeyUp(Key::Left)]);
    assert!(!t.is_held(Key::Left));
}

// ── Mouse & viewport ──────────────────────────────────────────────────────────

#[test]
fn mouse_down_is_reported_in_world_units() {
    let mut t = KeyTracker::new(viewport(), false);
    let ev = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 10,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(translate(&mut t, ev), vec![InputEvent::MouseDown { x: 11.0, y: 21.0 }]);

    let moved = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 5,
        row: 10,
        modifiers: KeyModifiers::NONE,
    });
    assert!(translate(&mut t, moved).is_empty());
}

#[test]
fn resize_updates_viewport() {
    let mut t = KeyTracker::new(viewport(), false);
    assert!(translate(&mut t, Event::Resize(80, 24)).is_empty());
    assert_eq!(t.viewport().cols, 80);
    assert_eq!(t.viewport().rows, 24);
}

#[test]
fn rects_map_onto_cells() {
    let v = viewport();
    assert_eq!(
        v.to_cells(&Rect::new(10.0, 20.0, 30.0, 10.0)),
        Some(CellRect { col: 5, row: 10, width: 15, height: 5 })
    );
    // Anything visible takes at least one cell
    assert_eq!(
        v.to_cells(&Rect::new(1.0, 1.0, 0.5, 0.5)),
        Some(CellRect { col: 0, row: 0, width: 1, height: 1 })
    );
    assert_eq!(v.to_cells(&Rect::new(-50.0, -50.0, 10.0, 10.0)), None);
    // Clipped at the right edge
    assert_eq!(
        v.to_cells(&Rect::new(190.0, 0.0, 40.0, 2.0)),
        Some(CellRect { col: 95, row: 0, width: 5, height: 1 })
    );
}
