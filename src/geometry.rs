//! Axis-aligned rectangles in world units.
//!
//! World units are continuous (`f32`); the terminal renderer maps them to
//! character cells through a `Viewport`.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Place the rect so its bottom edge midpoint sits on `(cx, bottom)`.
    pub fn set_midbottom(&mut self, cx: f32, bottom: f32) {
        self.x = cx - self.w / 2.0;
        self.y = bottom - self.h;
    }

    /// Place the rect so its top edge midpoint sits on `(cx, top)`.
    pub fn set_midtop(&mut self, cx: f32, top: f32) {
        self.x = cx - self.w / 2.0;
        self.y = top;
    }

    /// A `w`×`h` rect centred inside `outer`.
    pub fn centered_in(outer: &Rect, w: f32, h: f32) -> Self {
        Rect {
            x: outer.center_x() - w / 2.0,
            y: outer.y + (outer.h - h) / 2.0,
            w,
            h,
        }
    }

    /// Strict overlap: rects that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}
