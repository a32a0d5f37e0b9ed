//! Built-in slider parts: the default look and a prominent handle.

use std::fmt::Display;
use std::sync::Arc;

use egui::{Color32, CornerRadius, FontId, Galley, Painter, Rect, Stroke};

use crate::parts::{HandleState, SliderHandle, SliderLabel, SliderTick, SliderTrack};
use crate::{sizing, theme};

/// Rounded bar with an accent fill.
#[derive(Debug, Clone)]
pub struct DefaultSliderTrack {
    pub height: f32,
    pub color: Color32,
    pub fill_color: Color32,
}

impl Default for DefaultSliderTrack {
    fn default() -> Self {
        Self {
            height: sizing::TRACK_HEIGHT,
            color: theme::TRACK,
            fill_color: theme::ACCENT,
        }
    }
}

impl SliderTrack for DefaultSliderTrack {
    fn height(&self) -> f32 {
        self.height
    }

    fn paint_track(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, CornerRadius::same(sizing::TRACK_RADIUS), self.color);
    }

    fn paint_fill(&self, painter: &Painter, rect: Rect) {
        if rect.width() > 0.0 {
            painter.rect_filled(rect, CornerRadius::same(sizing::TRACK_RADIUS), self.fill_color);
        }
    }
}

/// Small rounded bar.
#[derive(Debug, Clone)]
pub struct DefaultSliderTick {
    pub width: f32,
    pub height: f32,
    pub color: Color32,
}

impl Default for DefaultSliderTick {
    fn default() -> Self {
        Self {
            width: sizing::TICK_WIDTH,
            height: sizing::TICK_HEIGHT,
            color: theme::TICK,
        }
    }
}

impl SliderTick for DefaultSliderTick {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, CornerRadius::same(2), self.color);
    }
}

/// White knob with a soft shadow and a border that turns accent on hover.
#[derive(Debug, Clone)]
pub struct DefaultSliderHandle {
    pub width: f32,
    pub height: f32,
}

impl Default for DefaultSliderHandle {
    fn default() -> Self {
        Self {
            width: sizing::HANDLE,
            height: sizing::HANDLE,
        }
    }
}

impl SliderHandle for DefaultSliderHandle {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn paint(&self, painter: &Painter, rect: Rect, state: HandleState) {
        let radius = rect.width().min(rect.height()) / 2.0;
        let center = rect.center();

        // Shadow
        painter.circle_filled(
            center + egui::vec2(0.0, 1.0),
            radius,
            Color32::from_black_alpha(30),
        );
        painter.circle_filled(center, radius, Color32::WHITE);

        let border = if state.hovered || state.dragging {
            theme::ACCENT
        } else {
            theme::BORDER
        };
        painter.circle_stroke(center, radius - 0.5, Stroke::new(1.0, border));
    }
}

/// Accent ring around a center that follows the light/dark theme.
#[derive(Debug, Clone)]
pub struct ProminentSliderHandle {
    pub width: f32,
    pub height: f32,
    pub color: Color32,
}

impl Default for ProminentSliderHandle {
    fn default() -> Self {
        Self {
            width: 24.0,
            height: 24.0,
            color: theme::ACCENT,
        }
    }
}

impl SliderHandle for ProminentSliderHandle {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn paint(&self, painter: &Painter, rect: Rect, state: HandleState) {
        let radius = rect.width().min(rect.height()) / 2.0;
        let center = rect.center();
        let dark_mode = painter.ctx().style().visuals.dark_mode;
        let inner = if dark_mode {
            Color32::BLACK
        } else {
            Color32::WHITE
        };
        // Ring gets thicker while dragging
        let ring = if state.dragging { 3.0 } else { 2.0 };

        painter.circle_filled(center, radius, self.color);
        painter.circle_filled(center, (radius - ring).max(0.0), inner);
    }
}

/// Caption text for options that implement `Display`.
#[derive(Debug, Clone)]
pub struct DefaultSliderLabel {
    pub font_size: f32,
    pub color: Color32,
}

impl Default for DefaultSliderLabel {
    fn default() -> Self {
        Self {
            font_size: sizing::LABEL_FONT,
            color: theme::TEXT_MUTED,
        }
    }
}

impl<T: Display> SliderLabel<T> for DefaultSliderLabel {
    fn layout(&self, painter: &Painter, option: &T) -> Option<Arc<Galley>> {
        let text = option.to_string();
        if text.is_empty() {
            return None;
        }
        Some(painter.layout_no_wrap(text, FontId::proportional(self.font_size), self.color))
    }
}

/// Label built from a closure, for options without a `Display` impl.
pub struct FnSliderLabel<F> {
    text: F,
    font_size: f32,
    color: Color32,
}

impl<F> FnSliderLabel<F> {
    /// Create a label that shows `text(option)`.
    pub fn new(text: F) -> Self {
        Self {
            text,
            font_size: sizing::LABEL_FONT,
            color: theme::TEXT_MUTED,
        }
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }
}

impl<T, F> SliderLabel<T> for FnSliderLabel<F>
where
    F: Fn(&T) -> Option<String>,
{
    fn layout(&self, painter: &Painter, option: &T) -> Option<Arc<Galley>> {
        let text = (self.text)(option)?;
        Some(painter.layout_no_wrap(text, FontId::proportional(self.font_size), self.color))
    }
}
