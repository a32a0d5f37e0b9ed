//! Slider control: the interaction machine bound to an external value.
//!
//! The handle offset is derived from the bound value and the track width and
//! is recomputed from exactly three places:
//!
//! - [`SliderControl::mount`]: first layout, never animated.
//! - [`SliderControl::sync_selection`]: the bound value changed, from the host
//!   or from a commit; animated when the configuration asks for it.
//! - [`SliderControl::set_track_width`]: the host resized the track, never
//!   animated.
//!
//! While dragging, the offset follows the pointer directly instead.

use std::fmt;

use kurbo::{Point, Size};

use crate::animation::OffsetTransition;
use crate::binding::Binding;
use crate::config::SliderConfig;
use crate::error::SliderResult;
use crate::geometry::offset_for_index;
use crate::interaction::{Commit, Interaction, Track};
use crate::labels::{LabelLayout, labels_visible};
use crate::layout::{PartMetrics, SliderLayout};
use crate::options::OptionList;

type PreselectCallback<T> = Box<dyn FnMut(&T)>;

/// A discrete slider's state, independent of any UI framework.
pub struct SliderControl<T> {
    options: OptionList<T>,
    selected: Binding<T>,
    metrics: PartMetrics,
    config: SliderConfig,
    on_item_preselected: Option<PreselectCallback<T>>,
    interaction: Interaction,
    track_width: f64,
    /// Resting offset; the end point of `transition` when one is running.
    offset: f64,
    transition: Option<OffsetTransition>,
    observed_version: u64,
    mounted: bool,
    now: f64,
}

impl<T: PartialEq + Clone> SliderControl<T> {
    /// Create a control over `options`, reading and writing `selected`.
    pub fn new(options: impl Into<OptionList<T>>, selected: Binding<T>) -> Self {
        let observed_version = selected.version();
        Self {
            options: options.into(),
            selected,
            metrics: PartMetrics::default(),
            config: SliderConfig::default(),
            on_item_preselected: None,
            interaction: Interaction::new(),
            track_width: 0.0,
            offset: 0.0,
            transition: None,
            observed_version,
            mounted: false,
            now: 0.0,
        }
    }

    /// Set the part sizes.
    pub fn with_metrics(mut self, metrics: PartMetrics) -> Self {
        self.set_metrics(metrics);
        self
    }

    /// Set the behavior configuration.
    pub fn with_config(mut self, config: SliderConfig) -> SliderResult<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    /// Register a callback fired for every distinct preselection while dragging.
    pub fn on_item_preselected(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_item_preselected = Some(Box::new(callback));
        self
    }

    /// Replace the part sizes and re-derive the offset without animation.
    pub fn set_metrics(&mut self, metrics: PartMetrics) {
        self.metrics = metrics;
        if self.mounted {
            self.recompute_offset(false);
        }
    }

    /// Replace the configuration after validating it.
    pub fn set_config(&mut self, config: SliderConfig) -> SliderResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Advance the clock used to start and sample transitions.
    ///
    /// Call once per frame with the host's time in seconds.
    pub fn begin_frame(&mut self, now: f64) {
        self.now = now;
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }

    /// First layout: adopt `track_width` and place the handle without animation.
    pub fn mount(&mut self, track_width: f64) {
        self.track_width = track_width;
        self.mounted = true;
        self.observed_version = self.selected.version();
        self.recompute_offset(false);
        log::debug!(
            "Slider mounted: width {:.1}, {} options, index {}",
            track_width,
            self.options.len(),
            self.selected_index()
        );
    }

    /// Adopt a new track width. Returns `true` if the offset was recomputed.
    ///
    /// The first call mounts the control. Resizing never animates.
    pub fn set_track_width(&mut self, track_width: f64) -> bool {
        if !self.mounted {
            self.mount(track_width);
            return true;
        }
        if self.track_width == track_width {
            return false;
        }
        log::debug!(
            "Slider resized: {:.1} -> {:.1}",
            self.track_width,
            track_width
        );
        self.track_width = track_width;
        self.recompute_offset(false);
        true
    }

    /// React to a change of the bound value. Returns `true` if one was seen.
    ///
    /// Writes made by the host between frames are picked up here; commits made
    /// by the control call this immediately after writing.
    pub fn sync_selection(&mut self) -> bool {
        let version = self.selected.version();
        if version == self.observed_version {
            return false;
        }
        self.observed_version = version;
        log::debug!("Slider selection changed to index {}", self.selected_index());
        self.recompute_offset(self.config.animated);
        true
    }

    /// Re-derive the handle offset from the selected index.
    pub fn recompute_offset(&mut self, animated: bool) {
        let target = offset_for_index(
            self.selected_index(),
            self.track_width,
            self.metrics.handle.width,
            self.options.step(),
        );
        let current = self.handle_offset();
        let spec = self.config.animation;
        self.transition = if animated && spec.duration > 0.0 && current != target {
            Some(OffsetTransition::new(current, target, self.now, spec))
        } else {
            None
        };
        self.offset = target;
    }

    /// Pointer pressed on the handle.
    pub fn drag_started(&mut self, pointer_x: f64) {
        self.interaction.begin_drag(pointer_x);
    }

    /// Pointer moved while dragging.
    ///
    /// The handle follows the pointer unsnapped. When the snapped candidate
    /// moves to a new option the preselection callback fires.
    pub fn drag_changed(&mut self, pointer_x: f64) {
        let track = self.track();
        let update = self.interaction.drag_to(pointer_x, &track);
        self.transition = None;
        self.offset = update.offset;

        if let Some(index) = update.preselected {
            log::trace!("Slider preselected index {}", index);
            if let (Some(option), Some(callback)) =
                (self.options.get(index), self.on_item_preselected.as_mut())
            {
                callback(option);
            }
        }
    }

    /// Pointer released at `pointer_x`. Returns `true` if the bound value changed.
    pub fn drag_ended(&mut self, pointer_x: f64) -> bool {
        let track = self.track();
        let commit = self.interaction.end_drag(pointer_x, &track);
        self.apply_commit(commit)
    }

    /// Pointer released where it was last seen. Returns `true` if the bound
    /// value changed; `false` as well when no drag was active.
    pub fn drag_ended_at_last(&mut self) -> bool {
        let track = self.track();
        match self.interaction.end_drag_at_last(&track) {
            Some(commit) => self.apply_commit(commit),
            None => false,
        }
    }

    /// Platform cancelled the gesture: return to the committed position.
    pub fn drag_cancelled(&mut self) {
        if self.interaction.cancel() {
            log::debug!("Slider drag cancelled");
            self.recompute_offset(self.config.animated);
        }
    }

    /// Tick at `index` tapped. Returns `true` if the bound value changed.
    ///
    /// Out-of-range indices are ignored.
    pub fn tap_tick(&mut self, index: usize) -> bool {
        match self.options.get(index).cloned() {
            Some(option) => self.set_selected_item(option, true),
            None => false,
        }
    }

    /// Tap at `point` in slider coordinates, selecting the visible tick there.
    ///
    /// Returns the tapped index, if a visible tick was hit.
    pub fn tap_at(&mut self, point: Point) -> Option<usize> {
        let index = self.layout().tick_at(point)?;
        self.tap_tick(index);
        Some(index)
    }

    /// Select `option`. Returns `true` if the bound value changed.
    ///
    /// Writing a new value runs the value-change path. Re-selecting the
    /// current value writes nothing, so the handle is snapped back here.
    pub fn set_selected_item(&mut self, option: T, animated: bool) -> bool {
        if self.selected.set(option) {
            log::debug!("Slider committed index {}", self.selected_index());
            self.sync_selection();
            true
        } else {
            self.recompute_offset(animated);
            false
        }
    }

    fn apply_commit(&mut self, commit: Commit) -> bool {
        let option = match commit {
            Commit::Index(index) => self.options.get(index).cloned(),
            Commit::First => self.options.first().cloned(),
            Commit::Nothing => None,
        };
        match option {
            Some(option) => self.set_selected_item(option, self.config.animated),
            None => {
                self.recompute_offset(self.config.animated);
                false
            }
        }
    }

    fn track(&self) -> Track {
        Track {
            width: self.track_width,
            handle_width: self.metrics.handle.width,
            step: self.options.step(),
            count: self.options.len(),
        }
    }

    /// Handle offset to draw this frame.
    pub fn handle_offset(&self) -> f64 {
        match self.transition {
            Some(transition) => transition.sample(self.now),
            None => self.offset,
        }
    }

    /// Offset the handle is resting at or moving toward.
    pub fn target_offset(&self) -> f64 {
        self.offset
    }

    /// Check if a transition is still running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(self.now))
    }

    /// Running transition, if any.
    pub fn transition(&self) -> Option<&OffsetTransition> {
        self.transition.as_ref()
    }

    /// Index of the bound value, 0 when it is not among the options.
    pub fn selected_index(&self) -> usize {
        self.options.selected_index(&self.selected.borrow())
    }

    /// Current bound value.
    pub fn selected(&self) -> T {
        self.selected.get()
    }

    /// Handle to the bound value.
    pub fn binding(&self) -> &Binding<T> {
        &self.selected
    }

    /// Option the active drag is heading for.
    pub fn preselected(&self) -> Option<&T> {
        self.interaction
            .state()
            .preselected()
            .and_then(|index| self.options.get(index))
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Check if the control has been laid out.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fractional distance between positions.
    pub fn step(&self) -> f64 {
        self.options.step()
    }

    /// Current track width.
    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// The options.
    pub fn options(&self) -> &OptionList<T> {
        &self.options
    }

    /// The behavior configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The part sizes.
    pub fn metrics(&self) -> &PartMetrics {
        &self.metrics
    }

    /// Frames of every part at the current offset.
    pub fn layout(&self) -> SliderLayout {
        SliderLayout::compute(
            self.track_width,
            self.handle_offset(),
            &self.metrics,
            self.options.step(),
            self.options.len(),
            self.config.tick_display_guide,
        )
    }

    /// Check if the label row should be drawn.
    pub fn shows_labels(&self) -> bool {
        self.config.show_labels && labels_visible(self.options.len())
    }

    /// Place labels with the given measured sizes.
    pub fn label_layout(&self, sizes: &[Size]) -> LabelLayout {
        LabelLayout::compute(self.track_width, self.metrics.label_edge_spacing(), sizes)
    }
}

impl<T: fmt::Debug> fmt::Debug for SliderControl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderControl")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("track_width", &self.track_width)
            .field("offset", &self.offset)
            .field("interaction", &self.interaction)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::tick::TickDisplayGuide;

    fn metrics() -> PartMetrics {
        PartMetrics {
            handle: Size::new(30.0, 30.0),
            tick: Some(Size::new(4.0, 8.0)),
            track_height: 4.0,
        }
    }

    fn control(selected: &'static str) -> (SliderControl<&'static str>, Binding<&'static str>) {
        let binding = Binding::new(selected);
        let control = SliderControl::new(vec!["Low", "Mid", "High"], binding.clone())
            .with_metrics(metrics());
        (control, binding)
    }

    #[test]
    fn test_mount_places_handle_without_animation() {
        let (mut control, _) = control("High");
        control.mount(300.0);
        assert_eq!(control.handle_offset(), 270.0);
        assert!(!control.is_animating());
    }

    #[test]
    fn test_drag_to_center_selects_mid() {
        let (mut control, binding) = control("Low");
        control.mount(300.0);
        control.drag_started(0.0);
        control.drag_changed(135.0);
        assert_eq!(control.handle_offset(), 135.0);
        assert!(control.drag_ended(135.0));
        assert_eq!(binding.get(), "Mid");
        assert_eq!(control.target_offset(), 135.0);
    }

    #[test]
    fn test_drag_to_start_selects_low() {
        let (mut control, binding) = control("High");
        control.mount(300.0);
        control.drag_changed(0.0);
        control.drag_ended(0.0);
        assert_eq!(binding.get(), "Low");
        assert_eq!(control.target_offset(), 0.0);
    }

    #[test]
    fn test_release_on_same_option_snaps_back() {
        let (mut control, binding) = control("Mid");
        control.mount(300.0);
        control.drag_changed(150.0);
        assert_eq!(control.handle_offset(), 150.0);
        assert!(!control.drag_ended(150.0));
        assert_eq!(binding.version(), 0);
        assert_eq!(control.target_offset(), 135.0);
        assert!(control.is_animating());
        control.begin_frame(1.0);
        assert_eq!(control.handle_offset(), 135.0);
    }

    #[test]
    fn test_external_change_animates() {
        let (mut control, binding) = control("Low");
        control.begin_frame(5.0);
        control.mount(300.0);
        binding.set("High");
        assert!(control.sync_selection());
        assert_eq!(control.target_offset(), 270.0);
        assert!(control.is_animating());
        assert_eq!(control.handle_offset(), 0.0);
        control.begin_frame(5.175);
        let mid = control.handle_offset();
        assert!(mid > 0.0 && mid < 270.0);
        control.begin_frame(6.0);
        assert_eq!(control.handle_offset(), 270.0);
        assert!(!control.sync_selection());
    }

    #[test]
    fn test_external_change_without_animation() {
        let config = SliderConfig::new().with_animated(false);
        let (control, binding) = control("Low");
        let mut control = control.with_config(config).unwrap();
        control.mount(300.0);
        binding.set("High");
        control.sync_selection();
        assert!(!control.is_animating());
        assert_eq!(control.handle_offset(), 270.0);
    }

    #[test]
    fn test_resize_recomputes_without_animation() {
        let (mut control, _) = control("High");
        control.mount(300.0);
        assert!(control.set_track_width(130.0));
        assert!(!control.is_animating());
        assert_eq!(control.handle_offset(), 100.0);
        assert!(!control.set_track_width(130.0));
    }

    #[test]
    fn test_track_narrower_than_handle_pins_offset() {
        let (mut control, _) = control("High");
        control.mount(300.0);
        control.set_track_width(20.0);
        assert_eq!(control.handle_offset(), 0.0);
        assert_eq!(control.layout().handle.x0, 0.0);
    }

    #[test]
    fn test_first_width_mounts() {
        let (mut control, _) = control("Mid");
        assert!(!control.is_mounted());
        control.set_track_width(300.0);
        assert!(control.is_mounted());
        assert_eq!(control.handle_offset(), 135.0);
    }

    #[test]
    fn test_preselection_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let binding = Binding::new("Low");
        let mut control = SliderControl::new(vec!["Low", "Mid", "High"], binding.clone())
            .with_metrics(metrics())
            .on_item_preselected(move |option| sink.borrow_mut().push(*option));
        control.mount(300.0);

        control.drag_started(0.0);
        for x in [0.0, 20.0, 100.0, 140.0, 250.0, 300.0] {
            control.drag_changed(x);
        }
        assert_eq!(control.preselected(), Some(&"High"));
        assert_eq!(*seen.borrow(), vec!["Low", "Mid", "High"]);
        assert_eq!(binding.get(), "Low");

        control.drag_ended(300.0);
        assert_eq!(control.preselected(), None);
        assert_eq!(binding.get(), "High");
    }

    #[test]
    fn test_single_option_pins_selection() {
        let binding = Binding::new("Other");
        let mut control =
            SliderControl::new(vec!["Only"], binding.clone()).with_metrics(metrics());
        control.mount(300.0);
        control.drag_changed(200.0);
        assert_eq!(control.handle_offset(), 200.0);
        assert!(control.drag_ended(200.0));
        assert_eq!(binding.get(), "Only");
        assert_eq!(control.target_offset(), 0.0);

        control.drag_changed(120.0);
        assert!(!control.drag_ended(120.0));
        assert_eq!(control.target_offset(), 0.0);
    }

    #[test]
    fn test_empty_options_do_not_write() {
        let binding = Binding::new(7);
        let mut control = SliderControl::new(Vec::<i32>::new(), binding.clone());
        control.mount(300.0);
        assert_eq!(control.selected_index(), 0);
        control.drag_changed(100.0);
        assert!(!control.drag_ended(100.0));
        assert_eq!(binding.get(), 7);
        assert_eq!(binding.version(), 0);
        assert_eq!(control.target_offset(), 0.0);
        assert!(!control.tap_tick(0));
    }

    #[test]
    fn test_unknown_value_falls_back_to_first_position() {
        let (mut control, _) = control("Unknown");
        control.mount(300.0);
        assert_eq!(control.selected_index(), 0);
        assert_eq!(control.handle_offset(), 0.0);
    }

    #[test]
    fn test_tick_tap_selects_with_animation() {
        let (mut control, binding) = control("Low");
        control.mount(300.0);
        assert!(control.tap_tick(2));
        assert_eq!(binding.get(), "High");
        assert!(control.is_animating());
        assert!(!control.tap_tick(9));
    }

    #[test]
    fn test_tap_on_hidden_tick_is_ignored() {
        let config = SliderConfig::new()
            .with_tick_display_guide(TickDisplayGuide::OnDemandPresent { divide_by: 2 });
        let (control, binding) = control("Low");
        let mut control = control.with_config(config).unwrap();
        control.mount(300.0);
        // Tick 1 sits at 148..152 and is hidden.
        assert_eq!(control.tap_at(Point::new(150.0, 15.0)), None);
        assert_eq!(binding.get(), "Low");
        assert_eq!(control.tap_at(Point::new(298.0, 15.0)), Some(2));
        assert_eq!(binding.get(), "High");
    }

    #[test]
    fn test_cancel_reverts_without_writing() {
        let (mut control, binding) = control("Mid");
        control.mount(300.0);
        control.drag_changed(260.0);
        control.drag_cancelled();
        assert!(!control.is_dragging());
        assert_eq!(binding.get(), "Mid");
        assert_eq!(control.target_offset(), 135.0);
    }

    #[test]
    fn test_drag_ended_at_last_position() {
        let (mut control, binding) = control("Low");
        control.mount(300.0);
        assert!(!control.drag_ended_at_last());
        control.drag_changed(265.0);
        assert!(control.drag_ended_at_last());
        assert_eq!(binding.get(), "High");
    }

    #[test]
    fn test_labels_follow_option_count() {
        let (control, _) = control("Low");
        assert!(control.shows_labels());
        let single = SliderControl::new(vec![1], Binding::new(1));
        assert!(!single.shows_labels());
    }
}
