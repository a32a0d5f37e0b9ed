//! Slider behavior configuration.

use serde::{Deserialize, Serialize};

use crate::animation::AnimationSpec;
use crate::error::SliderResult;
use crate::tick::TickDisplayGuide;

/// Behavior options shared by every slider instance.
///
/// Visual parts are configured on the rendering side; this only covers policy
/// that the state machine reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Which ticks are drawn.
    pub tick_display_guide: TickDisplayGuide,
    /// Whether committed-value changes animate the handle.
    pub animated: bool,
    /// Duration and curve used when `animated` is set.
    pub animation: AnimationSpec,
    /// Whether option labels are drawn under the track.
    pub show_labels: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            tick_display_guide: TickDisplayGuide::AlwaysPresent,
            animated: true,
            animation: AnimationSpec::default(),
            show_labels: true,
        }
    }
}

impl SliderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick display guide.
    pub fn with_tick_display_guide(mut self, guide: TickDisplayGuide) -> Self {
        self.tick_display_guide = guide;
        self
    }

    /// Enable or disable committed-value animation.
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Set the animation duration and curve.
    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Show or hide option labels.
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Check every field for usable values.
    pub fn validate(&self) -> SliderResult<()> {
        self.tick_display_guide.validate()?;
        self.animation.validate()?;
        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> SliderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> SliderResult<Self> {
        let config: SliderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
