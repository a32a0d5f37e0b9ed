//! Frames of the slider's visual parts.
//!
//! Frames are relative to the slider's own origin: x grows along the track
//! from its leading edge, y grows downward from the top of the slider row.

use kurbo::{Point, Rect, Size};

use crate::geometry::{fill_width, tick_offset};
use crate::tick::TickDisplayGuide;

/// Declared sizes of the visual parts, the only thing geometry needs from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartMetrics {
    /// Handle size.
    pub handle: Size,
    /// Tick size, `None` when the slider draws no ticks.
    pub tick: Option<Size>,
    /// Track thickness.
    pub track_height: f64,
}

impl Default for PartMetrics {
    fn default() -> Self {
        Self {
            handle: Size::new(27.0, 27.0),
            tick: Some(Size::new(4.0, 8.0)),
            track_height: 4.0,
        }
    }
}

impl PartMetrics {
    /// Height of the slider row: the tallest part.
    pub fn slider_height(&self) -> f64 {
        let tick_height = self.tick.map_or(0.0, |tick| tick.height);
        self.handle.height.max(self.track_height).max(tick_height)
    }

    /// Horizontal inset of the first and last label center.
    ///
    /// Labels line up with tick centers, so the inset is half a tick. Without
    /// ticks they line up with handle centers instead.
    pub fn label_edge_spacing(&self) -> f64 {
        match self.tick {
            Some(tick) => tick.width / 2.0,
            None => self.handle.width / 2.0,
        }
    }
}

/// A positioned tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFrame {
    pub index: usize,
    pub rect: Rect,
    /// Hidden ticks keep their slot but are neither drawn nor tappable.
    pub visible: bool,
}

/// Frames for every part of one slider row.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    pub size: Size,
    pub track: Rect,
    pub fill: Rect,
    pub ticks: Vec<TickFrame>,
    pub handle: Rect,
}

impl SliderLayout {
    /// Lay out a slider row of `track_width` with the handle at `handle_offset`.
    pub fn compute(
        track_width: f64,
        handle_offset: f64,
        metrics: &PartMetrics,
        step: f64,
        count: usize,
        guide: TickDisplayGuide,
    ) -> Self {
        let track_width = track_width.max(0.0);
        let height = metrics.slider_height();
        let center_y = height / 2.0;

        let track = centered_rect(0.0, track_width, center_y, metrics.track_height);
        let fill_end = fill_width(handle_offset, metrics.handle.width).clamp(0.0, track_width);
        let fill = centered_rect(0.0, fill_end, center_y, metrics.track_height);

        let ticks = match metrics.tick {
            Some(tick) if step != 0.0 => (0..count)
                .map(|index| {
                    let x = tick_offset(index, track_width, tick.width, step);
                    TickFrame {
                        index,
                        rect: centered_rect(x, x + tick.width, center_y, tick.height),
                        visible: guide.is_visible(index),
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        let handle = centered_rect(
            handle_offset,
            handle_offset + metrics.handle.width,
            center_y,
            metrics.handle.height,
        );

        Self {
            size: Size::new(track_width, height),
            track,
            fill,
            ticks,
            handle,
        }
    }

    /// Index of the visible tick under `point`, if any.
    pub fn tick_at(&self, point: Point) -> Option<usize> {
        self.ticks
            .iter()
            .find(|tick| tick.visible && tick.rect.contains(point))
            .map(|tick| tick.index)
    }

    /// Check if `point` is on the handle.
    pub fn handle_contains(&self, point: Point) -> bool {
        self.handle.contains(point)
    }
}

fn centered_rect(x0: f64, x1: f64, center_y: f64, height: f64) -> Rect {
    Rect::new(x0, center_y - height / 2.0, x1, center_y + height / 2.0)
}
