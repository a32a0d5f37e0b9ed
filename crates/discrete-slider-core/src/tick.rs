//! Tick visibility policy.

use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Default divisor for [`TickDisplayGuide::OnDemandPresent`].
pub const DEFAULT_TICK_DIVISOR: usize = 2;

/// Decides which tick indices are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum TickDisplayGuide {
    /// Every tick is visible.
    #[default]
    AlwaysPresent,
    /// Only ticks at indices divisible by `divide_by` are visible.
    OnDemandPresent {
        #[serde(default = "default_divisor")]
        divide_by: usize,
    },
}

fn default_divisor() -> usize {
    DEFAULT_TICK_DIVISOR
}

impl TickDisplayGuide {
    /// Show every `divide_by`-th tick, starting at index 0.
    pub fn on_demand(divide_by: usize) -> SliderResult<Self> {
        let guide = TickDisplayGuide::OnDemandPresent { divide_by };
        guide.validate()?;
        Ok(guide)
    }

    /// Check that the divisor is usable.
    pub fn validate(&self) -> SliderResult<()> {
        match *self {
            TickDisplayGuide::OnDemandPresent { divide_by: 0 } => {
                Err(SliderError::InvalidTickDivisor(0))
            }
            _ => Ok(()),
        }
    }

    /// Whether the tick at `index` is drawn.
    ///
    /// A zero divisor never passes validation; if one is constructed directly
    /// it behaves like `AlwaysPresent` instead of dividing by zero.
    pub fn is_visible(&self, index: usize) -> bool {
        match *self {
            TickDisplayGuide::AlwaysPresent => true,
            TickDisplayGuide::OnDemandPresent { divide_by: 0 } => true,
            TickDisplayGuide::OnDemandPresent { divide_by } => index % divide_by == 0,
        }
    }

    /// Whether the tick at `index` is hidden.
    pub fn is_hidden(&self, index: usize) -> bool {
        !self.is_visible(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_present_shows_everything() {
        let guide = TickDisplayGuide::AlwaysPresent;
        assert!((0..10).all(|i| guide.is_visible(i)));
    }

    #[test]
    fn test_on_demand_divide_by_three() {
        let guide = TickDisplayGuide::on_demand(3).unwrap();
        let visible: Vec<usize> = (0..6).filter(|&i| guide.is_visible(i)).collect();
        let hidden: Vec<usize> = (0..6).filter(|&i| guide.is_hidden(i)).collect();
        assert_eq!(visible, vec![0, 3]);
        assert_eq!(hidden, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_zero_divisor_rejected() {
        assert_eq!(
            TickDisplayGuide::on_demand(0),
            Err(SliderError::InvalidTickDivisor(0))
        );
    }

    #[test]
    fn test_zero_divisor_does_not_panic() {
        let guide = TickDisplayGuide::OnDemandPresent { divide_by: 0 };
        assert!(guide.is_visible(3));
    }

    #[test]
    fn test_missing_divisor_defaults_to_two() {
        let guide: TickDisplayGuide =
            serde_json::from_str(r#"{"mode":"on_demand_present"}"#).unwrap();
        assert_eq!(guide, TickDisplayGuide::OnDemandPresent { divide_by: 2 });
    }
}
