//! Property tests for the slider geometry.
//!
//! Uses proptest to verify:
//! - offsets never decrease as the index grows
//! - pointer snapping is stable under repetition
//! - snapping the offset of an index returns that index
//! - pointers at or beyond the ends select the first and last option

use discrete_slider_core::geometry::{clamp_drag_offset, line_width};
use discrete_slider_core::{index_for_pointer, offset_for_index, step_for_count};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

/// Track and handle widths with a positive line width.
fn arb_widths() -> impl Strategy<Value = (f64, f64)> {
    (0.0..60.0_f64).prop_flat_map(|handle| ((handle + 20.0)..4000.0_f64, Just(handle)))
}

fn arb_count() -> impl Strategy<Value = usize> {
    2usize..64
}

proptest! {
    /// Offsets are non-decreasing in the index.
    #[test]
    fn offset_monotone_in_index((track, handle) in arb_widths(), count in arb_count()) {
        let step = step_for_count(count);
        let offsets: Vec<f64> = (0..count)
            .map(|i| offset_for_index(i, track, handle, step))
            .collect();
        for pair in offsets.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        prop_assert_eq!(offsets[0], 0.0);
    }

    /// Snapping the same pointer twice gives the same index.
    #[test]
    fn pointer_snap_is_stable(
        (track, handle) in arb_widths(),
        count in arb_count(),
        x in -500.0..5000.0_f64,
    ) {
        let step = step_for_count(count);
        let first = index_for_pointer(x, track, handle, step, count);
        let second = index_for_pointer(x, track, handle, step, count);
        prop_assert_eq!(first, second);
        prop_assert!(first.is_some_and(|i| i < count));
    }

    /// The offset of index `i` snaps back to `i`.
    #[test]
    fn offset_roundtrips_to_index(
        (track, handle) in arb_widths(),
        count in arb_count(),
        seed in any::<prop::sample::Index>(),
    ) {
        let step = step_for_count(count);
        let index = seed.index(count);
        let offset = offset_for_index(index, track, handle, step);
        prop_assert_eq!(index_for_pointer(offset, track, handle, step, count), Some(index));
    }

    /// Pointers at or before the start select the first option, at or past
    /// the end of the line the last.
    #[test]
    fn boundaries_select_ends(
        (track, handle) in arb_widths(),
        count in arb_count(),
        overshoot in 0.0..1000.0_f64,
    ) {
        let step = step_for_count(count);
        let line = line_width(track, handle);
        prop_assert_eq!(index_for_pointer(-overshoot, track, handle, step, count), Some(0));
        prop_assert_eq!(
            index_for_pointer(line + overshoot, track, handle, step, count),
            Some(count - 1)
        );
    }

    /// The dragged handle never leaves the line.
    #[test]
    fn drag_offset_stays_on_line((track, handle) in arb_widths(), x in -5000.0..5000.0_f64) {
        let offset = clamp_drag_offset(x, track, handle);
        prop_assert!(offset >= 0.0);
        prop_assert!(offset <= line_width(track, handle));
    }
}
