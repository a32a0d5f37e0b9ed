//! Drag interaction state machine.
//!
//! The machine is `Idle` until a drag starts. While `Dragging` every pointer
//! move yields a raw handle offset and, when the snapped candidate moves to a
//! new option, a preselection. Releasing resolves a [`Commit`] and returns to
//! `Idle` within the same call; committing never outlives the release event.

use crate::geometry::{clamp_drag_offset, index_for_pointer};

/// Geometry inputs shared by every drag call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub width: f64,
    pub handle_width: f64,
    pub step: f64,
    pub count: usize,
}

impl Track {
    fn candidate(&self, pointer_x: f64) -> Option<usize> {
        index_for_pointer(pointer_x, self.width, self.handle_width, self.step, self.count)
    }
}

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// The handle follows the pointer.
    Dragging {
        /// Option index the pointer is currently heading for.
        preselected: Option<usize>,
        /// Last pointer position seen, in track coordinates.
        last_pointer_x: f64,
    },
}

impl InteractionState {
    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Preselected index of the current drag.
    pub fn preselected(&self) -> Option<usize> {
        match self {
            Self::Dragging { preselected, .. } => *preselected,
            Self::Idle => None,
        }
    }
}

/// Result of one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Unsnapped handle offset following the pointer.
    pub offset: f64,
    /// Set when the preselected option changed on this move.
    pub preselected: Option<usize>,
}

/// How a released drag resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Select the option at this index.
    Index(usize),
    /// The slider has a single option: select it wherever the pointer is.
    First,
    /// The slider has no options; nothing to select.
    Nothing,
}

/// The drag state machine.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    /// Create an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Idle -> Dragging. Restarting an active drag keeps its preselection.
    pub fn begin_drag(&mut self, pointer_x: f64) {
        if let InteractionState::Idle = self.state {
            self.state = InteractionState::Dragging {
                preselected: None,
                last_pointer_x: pointer_x,
            };
        }
    }

    /// Handle a pointer move while dragging.
    ///
    /// A move without a preceding [`begin_drag`](Self::begin_drag) starts the drag.
    pub fn drag_to(&mut self, pointer_x: f64, track: &Track) -> DragUpdate {
        self.begin_drag(pointer_x);

        let candidate = track.candidate(pointer_x);
        let mut changed = None;
        if let InteractionState::Dragging {
            preselected,
            last_pointer_x,
        } = &mut self.state
        {
            *last_pointer_x = pointer_x;
            if candidate.is_some() && candidate != *preselected {
                *preselected = candidate;
                changed = candidate;
            }
        }

        DragUpdate {
            offset: clamp_drag_offset(pointer_x, track.width, track.handle_width),
            preselected: changed,
        }
    }

    /// Release the pointer at `pointer_x` and resolve what to select.
    pub fn end_drag(&mut self, pointer_x: f64, track: &Track) -> Commit {
        self.state = InteractionState::Idle;
        match track.candidate(pointer_x) {
            Some(index) => Commit::Index(index),
            None if track.count > 0 => Commit::First,
            None => Commit::Nothing,
        }
    }

    /// Release at the last pointer position seen during the drag.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn end_drag_at_last(&mut self, track: &Track) -> Option<Commit> {
        match self.state {
            InteractionState::Dragging { last_pointer_x, .. } => {
                Some(self.end_drag(last_pointer_x, track))
            }
            InteractionState::Idle => None,
        }
    }

    /// Abandon the drag without committing. Returns `true` if one was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = InteractionState::Idle;
        was_dragging
    }
}
