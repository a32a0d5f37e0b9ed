//! The discrete slider widget.

use std::fmt::Display;

use egui::{CursorIcon, Response, Sense, Ui};

use discrete_slider_core::{
    Binding, OptionList, SliderConfig, SliderControl, SliderResult, TickDisplayGuide,
};

use crate::labels::SliderLabels;
use crate::parts::{
    HandleState, SliderHandle, SliderLabel, SliderSkin, SliderTick, SliderTrack, to_screen,
};
use crate::styles::DefaultSliderLabel;

/// Vertical gap between the slider row and its labels.
const LABEL_GAP: f32 = 4.0;

/// A slider that selects one option from a fixed list.
///
/// Unlike most egui widgets this one is retained: keep it in your app state
/// and call [`DiscreteSlider::show`] every frame, so the drag session and the
/// handle animation survive between frames.
///
/// ```ignore
/// let size = Binding::new("M");
/// let mut slider = DiscreteSlider::new(vec!["S", "M", "L"], size.clone()).default_label();
/// // every frame
/// if slider.show(ui).changed() {
///     log::info!("picked {}", size.get());
/// }
/// ```
pub struct DiscreteSlider<T> {
    control: SliderControl<T>,
    skin: SliderSkin<T>,
}

impl<T: PartialEq + Clone + 'static> DiscreteSlider<T> {
    /// Create a slider over `options`, reading and writing `selected`.
    ///
    /// Track, tick and handle start with the default styles. There is no
    /// default label for arbitrary `T`, so no labels are drawn until one is
    /// set; options that implement `Display` can use
    /// [`default_label`](Self::default_label).
    pub fn new(options: impl Into<OptionList<T>>, selected: Binding<T>) -> Self {
        let skin = SliderSkin::default();
        let control = SliderControl::new(options, selected).with_metrics(skin.metrics());
        Self { control, skin }
    }

    /// Use a custom track.
    pub fn track(mut self, track: impl SliderTrack + 'static) -> Self {
        self.skin.track = Box::new(track);
        self.refresh_metrics();
        self
    }

    /// Use a custom tick.
    pub fn tick(mut self, tick: impl SliderTick + 'static) -> Self {
        self.skin.tick = Some(Box::new(tick));
        self.refresh_metrics();
        self
    }

    /// Draw no ticks.
    pub fn without_ticks(mut self) -> Self {
        self.skin.tick = None;
        self.refresh_metrics();
        self
    }

    /// Use a custom handle.
    pub fn handle(mut self, handle: impl SliderHandle + 'static) -> Self {
        self.skin.handle = Box::new(handle);
        self.refresh_metrics();
        self
    }

    /// Draw labels under the ticks.
    pub fn label(mut self, label: impl SliderLabel<T> + 'static) -> Self {
        self.skin.label = Some(Box::new(label));
        self
    }

    /// Which ticks are drawn. An invalid guide falls back to drawing all of them.
    pub fn tick_display_guide(mut self, guide: TickDisplayGuide) -> Self {
        let guide = match guide.validate() {
            Ok(()) => guide,
            Err(err) => {
                log::warn!("Ignoring tick display guide: {}", err);
                TickDisplayGuide::AlwaysPresent
            }
        };
        let config = self.control.config().with_tick_display_guide(guide);
        self.apply_config(config);
        self
    }

    /// Animate the handle when the selection changes.
    pub fn animated(mut self, animated: bool) -> Self {
        let config = self.control.config().with_animated(animated);
        self.apply_config(config);
        self
    }

    /// Show or hide the label row.
    pub fn show_labels(mut self, show: bool) -> Self {
        let config = self.control.config().with_labels(show);
        self.apply_config(config);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SliderConfig) -> SliderResult<Self> {
        self.control.set_config(config)?;
        Ok(self)
    }

    /// Called with each option the handle passes over while dragging.
    pub fn on_item_preselected(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.control = self.control.on_item_preselected(callback);
        self
    }

    /// The underlying control.
    pub fn control(&self) -> &SliderControl<T> {
        &self.control
    }

    /// The underlying control, for driving it directly.
    pub fn control_mut(&mut self) -> &mut SliderControl<T> {
        &mut self.control
    }

    /// The parts this slider draws with.
    pub fn skin(&self) -> &SliderSkin<T> {
        &self.skin
    }

    fn refresh_metrics(&mut self) {
        self.control.set_metrics(self.skin.metrics());
    }

    fn apply_config(&mut self, config: SliderConfig) {
        if let Err(err) = self.control.set_config(config) {
            log::warn!("Ignoring slider configuration: {}", err);
        }
    }

    /// Show the slider. The response is marked changed when a drag or a tick
    /// tap wrote a new value.
    ///
    /// The label row always goes beneath the track, also inside a horizontal
    /// layout.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| self.show_rows(ui)).inner
    }

    fn show_rows(&mut self, ui: &mut Ui) -> Response {
        let now = ui.input(|i| i.time);
        self.control.begin_frame(now);

        let metrics = self.skin.metrics();
        let width = ui.available_width();
        let height = metrics.slider_height() as f32;
        let (rect, mut response) =
            ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());

        self.control.set_track_width(f64::from(rect.width()));
        self.control.sync_selection();

        let mut changed = false;

        // Ticks first so the handle wins where they overlap
        if self.skin.tick.is_some() {
            for tick in self.control.layout().ticks.iter().filter(|t| t.visible) {
                let tick_rect = to_screen(tick.rect, rect.min);
                let tick_response =
                    ui.interact(tick_rect, response.id.with(("tick", tick.index)), Sense::click());
                if tick_response.clicked() {
                    changed |= self.control.tap_tick(tick.index);
                }
            }
        }

        let handle_rect = to_screen(self.control.layout().handle, rect.min);
        let handle_response = ui.interact(handle_rect, response.id.with("handle"), Sense::drag());
        let half_handle = metrics.handle.width / 2.0;
        let pointer_x = handle_response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()))
            .map(|pos| f64::from(pos.x - rect.left()) - half_handle);

        if handle_response.drag_started() {
            if let Some(x) = pointer_x {
                self.control.drag_started(x);
            }
        }
        if handle_response.dragged() {
            if let Some(x) = pointer_x {
                self.control.drag_changed(x);
            }
        }
        if handle_response.drag_stopped() {
            changed |= match pointer_x {
                Some(x) => self.control.drag_ended(x),
                None => self.control.drag_ended_at_last(),
            };
        } else if self.control.is_dragging() && !handle_response.dragged() {
            self.control.drag_cancelled();
        }

        if ui.is_rect_visible(rect) {
            let layout = self.control.layout();
            let painter = ui.painter();

            self.skin
                .track
                .paint_track(painter, to_screen(layout.track, rect.min));
            self.skin
                .track
                .paint_fill(painter, to_screen(layout.fill, rect.min));

            if let Some(tick) = &self.skin.tick {
                for frame in layout.ticks.iter().filter(|t| t.visible) {
                    tick.paint(painter, to_screen(frame.rect, rect.min));
                }
            }

            let state = HandleState {
                hovered: handle_response.hovered(),
                dragging: self.control.is_dragging(),
            };
            self.skin
                .handle
                .paint(painter, to_screen(layout.handle, rect.min), state);
        }

        if self.control.is_animating() {
            ui.ctx().request_repaint();
        }

        if self.control.shows_labels() {
            if let Some(label) = &self.skin.label {
                ui.add_space(LABEL_GAP);
                let labels = SliderLabels::new(self.control.options(), &**label)
                    .edge_spacing(metrics.label_edge_spacing())
                    .show(ui);
                response = response.union(labels);
            }
        }

        let handle_response = handle_response.on_hover_cursor(CursorIcon::Grab);
        let mut response = response.union(handle_response);
        if changed {
            response.mark_changed();
        }
        response
    }
}

impl<T: PartialEq + Clone + Display + 'static> DiscreteSlider<T> {
    /// Label each option with its `Display` text.
    pub fn default_label(self) -> Self {
        self.label(DefaultSliderLabel::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DiscreteSlider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscreteSlider")
            .field("control", &self.control)
            .finish_non_exhaustive()
    }
}
