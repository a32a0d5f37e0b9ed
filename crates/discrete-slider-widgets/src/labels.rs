//! Row of option labels lined up under the slider's ticks.

use std::sync::Arc;

use egui::{Galley, Response, Sense, Ui};
use kurbo::Size;

use discrete_slider_core::{LabelLayout, OptionList};

use crate::parts::{SliderLabel, to_screen};

/// A label row for a set of options.
///
/// Label `i` is centered at
/// `(width - 2 * edge_spacing) / (count - 1) * i + edge_spacing`, so with the
/// slider's edge spacing every label sits over its tick.
pub struct SliderLabels<'a, T> {
    options: &'a OptionList<T>,
    label: &'a dyn SliderLabel<T>,
    edge_spacing: f64,
}

impl<'a, T: PartialEq> SliderLabels<'a, T> {
    pub fn new(options: &'a OptionList<T>, label: &'a dyn SliderLabel<T>) -> Self {
        Self {
            options,
            label,
            edge_spacing: 0.0,
        }
    }

    /// Set the inset of the first and last label center.
    pub fn edge_spacing(mut self, spacing: f64) -> Self {
        self.edge_spacing = spacing;
        self
    }

    /// Show the row across the available width.
    pub fn show(self, ui: &mut Ui) -> Response {
        let width = ui.available_width();
        let painter = ui.painter();

        let galleys: Vec<Option<Arc<Galley>>> = self
            .options
            .iter()
            .map(|option| self.label.layout(painter, option))
            .collect();
        let sizes: Vec<Size> = galleys
            .iter()
            .map(|galley| {
                galley.as_ref().map_or(Size::ZERO, |galley| {
                    Size::new(f64::from(galley.size().x), f64::from(galley.size().y))
                })
            })
            .collect();
        let layout = LabelLayout::compute(f64::from(width), self.edge_spacing, &sizes);

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, layout.row_height as f32), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            for (galley, frame) in galleys.into_iter().zip(&layout.frames) {
                if let Some(galley) = galley {
                    let screen = to_screen(*frame, rect.min);
                    painter.galley(screen.min, galley, egui::Color32::PLACEHOLDER);
                }
            }
        }

        response
    }
}
