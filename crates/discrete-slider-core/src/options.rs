//! The ordered set of values a slider can select from.

use crate::geometry::step_for_count;

/// Ordered, fixed list of options for one slider.
///
/// Options only need equality so the current selection can be located by
/// value. Duplicates are allowed; lookups return the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionList<T> {
    items: Vec<T>,
    step: f64,
}

impl<T: PartialEq> OptionList<T> {
    /// Create an option list.
    pub fn new(items: Vec<T>) -> Self {
        let step = step_for_count(items.len());
        Self { items, step }
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no options.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fractional distance between adjacent positions, 0 for fewer than two options.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Check if the list has at least two distinct positions.
    pub fn has_positions(&self) -> bool {
        self.step != 0.0
    }

    /// Get the option at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Get the first option.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Position of `value`, first match wins.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Index used for layout: position of `value`, or 0 when absent.
    pub fn selected_index(&self, value: &T) -> usize {
        self.index_of(value).unwrap_or(0)
    }

    /// Iterate over the options.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the options as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> From<Vec<T>> for OptionList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: PartialEq> FromIterator<T> for OptionList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a OptionList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_for_three_options() {
        let options = OptionList::new(vec!["Low", "Mid", "High"]);
        assert!((options.step() - 0.5).abs() < f64::EPSILON);
        assert!(options.has_positions());
    }

    #[test]
    fn test_step_zero_for_single_and_empty() {
        assert_eq!(OptionList::new(vec![1]).step(), 0.0);
        assert_eq!(OptionList::<i32>::new(vec![]).step(), 0.0);
    }

    #[test]
    fn test_selected_index_falls_back_to_zero() {
        let options = OptionList::new(vec!["a", "b", "c"]);
        assert_eq!(options.selected_index(&"c"), 2);
        assert_eq!(options.selected_index(&"z"), 0);
        assert_eq!(options.index_of(&"z"), None);
    }

    #[test]
    fn test_duplicates_first_match_wins() {
        let options = OptionList::new(vec![1, 2, 1, 2]);
        assert_eq!(options.index_of(&2), Some(1));
    }

    #[test]
    fn test_get_out_of_range() {
        let options: OptionList<u8> = OptionList::new(vec![]);
        assert_eq!(options.get(0), None);
        assert_eq!(options.first(), None);
        assert_eq!(options.selected_index(&7), 0);
    }

    #[test]
    fn test_collect() {
        let options: OptionList<u32> = (1..=4).collect();
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().copied().sum::<u32>(), 10);
    }
}
