//! Pluggable visual parts of a slider.
//!
//! Each part declares its size and paints itself into a rect it is given. The
//! slider only reads sizes for its geometry; everything visual is up to the
//! part.

use std::sync::Arc;

use egui::{Galley, Painter, Rect};
use kurbo::Size;

use discrete_slider_core::PartMetrics;

use crate::styles::{DefaultSliderHandle, DefaultSliderTick, DefaultSliderTrack};

/// The bar the handle moves along.
pub trait SliderTrack {
    /// Thickness of the track.
    fn height(&self) -> f32;

    /// Paint the full track.
    fn paint_track(&self, painter: &Painter, rect: Rect);

    /// Paint the filled part, from the leading edge to the handle's center.
    fn paint_fill(&self, painter: &Painter, rect: Rect);
}

/// A marker at one discrete position.
pub trait SliderTick {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn paint(&self, painter: &Painter, rect: Rect);
}

/// Interaction state passed to handles so they can show feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleState {
    pub hovered: bool,
    pub dragging: bool,
}

/// The draggable thumb.
pub trait SliderHandle {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn paint(&self, painter: &Painter, rect: Rect, state: HandleState);
}

/// Renders the label shown under one option.
pub trait SliderLabel<T> {
    /// Lay out the label for `option`, or `None` to leave its slot empty.
    ///
    /// The galley's size is what the label row is measured with.
    fn layout(&self, painter: &Painter, option: &T) -> Option<Arc<Galley>>;
}

/// The set of parts one slider draws with.
pub struct SliderSkin<T> {
    pub track: Box<dyn SliderTrack>,
    /// `None` draws no ticks and disables tick taps.
    pub tick: Option<Box<dyn SliderTick>>,
    pub handle: Box<dyn SliderHandle>,
    /// `None` draws no labels.
    pub label: Option<Box<dyn SliderLabel<T>>>,
}

impl<T> SliderSkin<T> {
    /// Sizes the core geometry works with.
    pub fn metrics(&self) -> PartMetrics {
        PartMetrics {
            handle: Size::new(
                f64::from(self.handle.width()),
                f64::from(self.handle.height()),
            ),
            tick: self
                .tick
                .as_ref()
                .map(|tick| Size::new(f64::from(tick.width()), f64::from(tick.height()))),
            track_height: f64::from(self.track.height()),
        }
    }
}

impl<T> Default for SliderSkin<T> {
    fn default() -> Self {
        Self {
            track: Box::new(DefaultSliderTrack::default()),
            tick: Some(Box::new(DefaultSliderTick::default())),
            handle: Box::new(DefaultSliderHandle::default()),
            label: None,
        }
    }
}

/// Convert a slider-local frame into screen space.
pub(crate) fn to_screen(rect: kurbo::Rect, origin: egui::Pos2) -> Rect {
    Rect::from_min_max(
        egui::pos2(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        egui::pos2(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}
