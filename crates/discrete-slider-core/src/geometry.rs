//! Pure coordinate math mapping pointer positions to discrete indices and
//! indices back to handle offsets.
//!
//! All distances are in pixels along the track, measured from its leading
//! edge. The usable travel of the handle is the *line width*,
//! `track_width - handle_width`: the handle's leading edge moves in
//! `[0, line_width]`.

/// Fractional distance between adjacent option positions.
///
/// Returns 0 for fewer than two options, meaning there are no discrete
/// positions to move between.
pub fn step_for_count(count: usize) -> f64 {
    if count > 1 {
        1.0 / (count - 1) as f64
    } else {
        0.0
    }
}

/// Usable travel of the handle's leading edge.
pub fn line_width(track_width: f64, handle_width: f64) -> f64 {
    track_width - handle_width
}

/// Handle offset for the option at `index`.
///
/// A track narrower than the handle pins every option to 0.
pub fn offset_for_index(index: usize, track_width: f64, handle_width: f64, step: f64) -> f64 {
    if step == 0.0 {
        return 0.0;
    }
    line_width(track_width, handle_width).max(0.0) * index as f64 * step
}

/// Normalized pointer position in `[0, 1]`, clamped before any rounding.
fn pointer_percentage(pointer_x: f64, line_width: f64) -> f64 {
    if line_width <= 0.0 || pointer_x.is_nan() {
        return 0.0;
    }
    (pointer_x / line_width).clamp(0.0, 1.0)
}

/// Discrete index the pointer snaps to.
///
/// The percentage is clamped to `[0, 1]` first, then `percentage / step` is
/// rounded half away from zero. Returns `None` when there are no discrete
/// positions (`step == 0` or `count == 0`); callers pin zero/one-option
/// sliders themselves.
pub fn index_for_pointer(
    pointer_x: f64,
    track_width: f64,
    handle_width: f64,
    step: f64,
    count: usize,
) -> Option<usize> {
    if step == 0.0 || count == 0 {
        return None;
    }
    let percentage = pointer_percentage(pointer_x, line_width(track_width, handle_width));
    let page = (percentage / step).round();
    Some((page as usize).min(count - 1))
}

/// Raw handle offset while dragging: the pointer clamped into the line.
pub fn clamp_drag_offset(pointer_x: f64, track_width: f64, handle_width: f64) -> f64 {
    let line = line_width(track_width, handle_width).max(0.0);
    if pointer_x.is_nan() {
        return 0.0;
    }
    pointer_x.clamp(0.0, line)
}

/// Leading edge of the tick at `index`.
///
/// Ticks are spread across `track_width - tick_width`, so the first and last
/// tick sit flush with the track ends.
pub fn tick_offset(index: usize, track_width: f64, tick_width: f64, step: f64) -> f64 {
    index as f64 * step * (track_width - tick_width)
}

/// Width of the filled part of the track, reaching the handle's center.
pub fn fill_width(handle_offset: f64, handle_width: f64) -> f64 {
    handle_offset + handle_width / 2.0
}
