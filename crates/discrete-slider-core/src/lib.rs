//! Discrete Slider Core Library
//!
//! Platform-agnostic state and geometry for a slider that selects one value
//! from an ordered, finite list of options.

pub mod animation;
pub mod binding;
pub mod config;
pub mod control;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod labels;
pub mod layout;
pub mod options;
pub mod tick;

pub use animation::{AnimationSpec, DEFAULT_ANIMATION_DURATION, Easing, OffsetTransition};
pub use binding::Binding;
pub use config::SliderConfig;
pub use control::SliderControl;
pub use error::{SliderError, SliderResult};
pub use geometry::{index_for_pointer, offset_for_index, step_for_count};
pub use interaction::{Commit, DragUpdate, Interaction, InteractionState};
pub use labels::{LabelLayout, label_center_x, labels_visible};
pub use layout::{PartMetrics, SliderLayout, TickFrame};
pub use options::OptionList;
pub use tick::{DEFAULT_TICK_DIVISOR, TickDisplayGuide};
