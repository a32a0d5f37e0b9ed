//! Placement of per-option labels beneath the track.

use kurbo::{Point, Rect, Size};

/// Minimum number of options for the composed slider to draw labels.
pub const MIN_LABELED_OPTIONS: usize = 2;

/// Whether a slider with `count` options draws its label row.
pub fn labels_visible(count: usize) -> bool {
    count >= MIN_LABELED_OPTIONS
}

/// Horizontal center of the label for `index`.
///
/// A single label is centered on the track. Otherwise labels are spread evenly
/// between `edge_spacing` and `track_width - edge_spacing`.
pub fn label_center_x(index: usize, count: usize, track_width: f64, edge_spacing: f64) -> f64 {
    if count <= 1 {
        return track_width / 2.0;
    }
    (track_width - 2.0 * edge_spacing) / (count - 1) as f64 * index as f64 + edge_spacing
}

/// Positioned label row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelLayout {
    /// Height of the row, the tallest measured label.
    pub row_height: f64,
    /// One frame per measured label, in option order.
    pub frames: Vec<Rect>,
}

impl LabelLayout {
    /// Lay out labels with the given measured sizes.
    pub fn compute(track_width: f64, edge_spacing: f64, sizes: &[Size]) -> Self {
        let count = sizes.len();
        let row_height = sizes.iter().map(|size| size.height).fold(0.0, f64::max);
        let frames = sizes
            .iter()
            .enumerate()
            .map(|(index, size)| {
                let center = Point::new(
                    label_center_x(index, count, track_width, edge_spacing),
                    row_height / 2.0,
                );
                Rect::from_center_size(center, *size)
            })
            .collect();
        Self { row_height, frames }
    }

    /// Check if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_rule() {
        assert!(!labels_visible(0));
        assert!(!labels_visible(1));
        assert!(labels_visible(2));
        assert!(labels_visible(5));
    }

    #[test]
    fn test_single_label_centered() {
        assert_eq!(label_center_x(0, 1, 300.0, 2.0), 150.0);
    }

    #[test]
    fn test_centers_match_tick_centers() {
        let centers: Vec<f64> = (0..3).map(|i| label_center_x(i, 3, 300.0, 2.0)).collect();
        assert_eq!(centers, vec![2.0, 150.0, 298.0]);
    }

    #[test]
    fn test_row_height_is_tallest() {
        let sizes = [
            Size::new(20.0, 12.0),
            Size::new(30.0, 16.0),
            Size::new(24.0, 14.0),
        ];
        let layout = LabelLayout::compute(300.0, 2.0, &sizes);
        assert_eq!(layout.row_height, 16.0);
        assert_eq!(layout.frames[0], Rect::new(-8.0, 2.0, 12.0, 14.0));
        assert_eq!(layout.frames[1].center(), Point::new(150.0, 8.0));
    }

    #[test]
    fn test_empty() {
        let layout = LabelLayout::compute(300.0, 2.0, &[]);
        assert!(layout.is_empty());
        assert_eq!(layout.row_height, 0.0);
    }
}
