use crate::geometry::Rect;
use crate::render::{Align, Renderer};
use crate::settings::{Color, Settings};

/// The play button shown while the game is inactive.
#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub color: Color,
    pub text_color: Color,
}

impl Button {
    pub fn new(settings: &Settings) -> Self {
        let screen = Rect::new(0.0, 0.0, settings.screen_width, settings.screen_height);
        Button {
            rect: Rect::centered_in(&screen, settings.button_width, settings.button_height),
            label: settings.button_label.clone(),
            color: settings.button_color,
            text_color: settings.button_text_color,
        }
    }

    pub fn is_clicked(&self, x: f32, y: f32) -> bool {
        self.rect.contains_point(x, y)
    }

    pub fn draw_button<R: Renderer>(&self, out: &mut R) -> Result<(), R::Error> {
        out.draw_rect(self.color, self.rect)?;
        out.draw_text(&self.label, self.text_color, self.rect, Align::Center)
    }
}
