//! Two-way value sharing between the host and a slider.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct Slot<T> {
    value: T,
    version: u64,
}

/// Shared mutable cell holding the selected value.
///
/// Cloning a `Binding` yields another handle to the same cell. The host keeps
/// one handle and the slider another; a write through either is visible to
/// both. Every write that actually changes the value bumps [`version`], which
/// is how the slider notices external changes without observer callbacks.
///
/// The cell is single-threaded (`!Send`), matching the UI thread it lives on.
///
/// [`version`]: Binding::version
pub struct Binding<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Binding<T> {
    /// Create a binding holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot { value, version: 0 })),
        }
    }

    /// Borrow the current value.
    pub fn borrow(&self) -> Ref<'_, T> {
        Ref::map(self.slot.borrow(), |slot| &slot.value)
    }

    /// Change counter, bumped on every effective write.
    pub fn version(&self) -> u64 {
        self.slot.borrow().version
    }

    /// Check if two handles refer to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: Clone> Binding<T> {
    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.slot.borrow().value.clone()
    }
}

impl<T: PartialEq> Binding<T> {
    /// Store `value`. Returns `true` if the stored value changed.
    ///
    /// Writing an equal value is not a change and leaves the version alone.
    pub fn set(&self, value: T) -> bool {
        let mut slot = self.slot.borrow_mut();
        if slot.value == value {
            return false;
        }
        slot.value = value;
        slot.version += 1;
        true
    }

    /// Check if the current value equals `other`.
    pub fn is(&self, other: &T) -> bool {
        self.slot.borrow().value == *other
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Binding")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let host = Binding::new("Low");
        let slider = host.clone();
        assert!(slider.set("High"));
        assert_eq!(host.get(), "High");
        assert!(host.ptr_eq(&slider));
    }

    #[test]
    fn test_version_bumps_only_on_change() {
        let binding = Binding::new(1);
        assert_eq!(binding.version(), 0);
        assert!(!binding.set(1));
        assert_eq!(binding.version(), 0);
        assert!(binding.set(2));
        assert_eq!(binding.version(), 1);
    }

    #[test]
    fn test_borrow_and_is() {
        let binding = Binding::new(String::from("Mid"));
        assert_eq!(binding.borrow().as_str(), "Mid");
        assert!(binding.is(&String::from("Mid")));
    }

    #[test]
    fn test_independent_bindings() {
        let a = Binding::new(0);
        let b = Binding::new(0);
        assert!(!a.ptr_eq(&b));
    }
}
