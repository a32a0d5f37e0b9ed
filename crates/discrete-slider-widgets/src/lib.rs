//! egui widget for picking one option from a fixed list.
//!
//! The slider snaps to discrete positions, one per option, and keeps its
//! selection in a [`Binding`] shared with the host:
//!
//! - **Slider**: [`DiscreteSlider`], the composed widget
//! - **Parts**: track, tick, handle and label traits a skin is built from
//! - **Styles**: the default parts and a prominent handle
//! - **Labels**: a label row lined up with the ticks

pub mod labels;
pub mod parts;
pub mod slider;
pub mod styles;

pub use discrete_slider_core::{Binding, OptionList, SliderConfig, TickDisplayGuide};
pub use labels::SliderLabels;
pub use parts::{HandleState, SliderHandle, SliderLabel, SliderSkin, SliderTick, SliderTrack};
pub use slider::DiscreteSlider;
pub use styles::{
    DefaultSliderHandle, DefaultSliderLabel, DefaultSliderTick, DefaultSliderTrack,
    FnSliderLabel, ProminentSliderHandle,
};

/// Standard sizing constants used across the slider parts.
pub mod sizing {
    /// Default handle diameter
    pub const HANDLE: f32 = 27.0;
    /// Default track thickness
    pub const TRACK_HEIGHT: f32 = 4.0;
    /// Track corner radius
    pub const TRACK_RADIUS: u8 = 2;
    /// Default tick width
    pub const TICK_WIDTH: f32 = 4.0;
    /// Default tick height
    pub const TICK_HEIGHT: f32 = 8.0;
    /// Label font size
    pub const LABEL_FONT: f32 = 11.0;
}

/// Standard colors used across the slider parts.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Empty track
    pub const TRACK: Color32 = Color32::from_rgb(229, 231, 235);
    /// Tick marks
    pub const TICK: Color32 = Color32::from_rgb(156, 163, 175);
}
