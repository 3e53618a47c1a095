//! Drag and resize gestures as an explicit state machine.
//!
//! A gesture is one atomic interaction: pointer-down enters `Dragging` or
//! `Resizing`, pointer moves update transient visual state only, and the
//! end event produces a single [`GestureCommit`] for the store layer.
//! Intermediate motion must never cause a persistence write.

use crate::model::note::NoteId;

/// Current gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    /// A note follows the pointer; `grab_dx/grab_dy` is the pointer offset
    /// from the note origin captured at gesture start.
    Dragging {
        note: NoteId,
        grab_dx: i32,
        grab_dy: i32,
    },
    Resizing {
        note: NoteId,
    },
}

/// Final coordinates produced when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCommit {
    Move { note: NoteId, x: i32, y: i32 },
    Resize { note: NoteId, width: u32, height: u32 },
}

/// Tracks at most one in-flight gesture.
///
/// Starting a new gesture while one is active replaces it; there is no
/// cancellation beyond [`GestureTracker::cancel`] and the natural end.
#[derive(Debug, Default)]
pub struct GestureTracker {
    state: Option<GestureState>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state.unwrap_or(GestureState::Idle)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Enters `Dragging`, capturing the pointer offset from the note origin.
    pub fn begin_drag(
        &mut self,
        note: NoteId,
        pointer_x: i32,
        pointer_y: i32,
        note_x: i32,
        note_y: i32,
    ) {
        self.state = Some(GestureState::Dragging {
            note,
            grab_dx: pointer_x - note_x,
            grab_dy: pointer_y - note_y,
        });
    }

    pub fn begin_resize(&mut self, note: NoteId) {
        self.state = Some(GestureState::Resizing { note });
    }

    /// Transient note position for the current pointer location.
    ///
    /// Purely visual; returns `None` unless a drag is in flight.
    pub fn drag_position(&self, pointer_x: i32, pointer_y: i32) -> Option<(i32, i32)> {
        match self.state {
            Some(GestureState::Dragging {
                grab_dx, grab_dy, ..
            }) => Some((pointer_x - grab_dx, pointer_y - grab_dy)),
            _ => None,
        }
    }

    /// Ends a drag, returning the move commit to apply to the store.
    pub fn finish_drag(&mut self, pointer_x: i32, pointer_y: i32) -> Option<GestureCommit> {
        match self.state.take() {
            Some(GestureState::Dragging {
                note,
                grab_dx,
                grab_dy,
            }) => Some(GestureCommit::Move {
                note,
                x: pointer_x - grab_dx,
                y: pointer_y - grab_dy,
            }),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Ends a resize with the settled size reported by the observer.
    pub fn finish_resize(&mut self, width: u32, height: u32) -> Option<GestureCommit> {
        match self.state.take() {
            Some(GestureState::Resizing { note }) => {
                Some(GestureCommit::Resize { note, width, height })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Returns to idle without producing a commit.
    pub fn cancel(&mut self) {
        self.state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{GestureCommit, GestureState, GestureTracker};
    use uuid::Uuid;

    #[test]
    fn drag_tracks_grab_offset_and_commits_once() {
        let note = Uuid::new_v4();
        let mut tracker = GestureTracker::new();

        // Pointer grabs the note 10,5 inside its top-left corner.
        tracker.begin_drag(note, 110, 55, 100, 50);
        assert!(tracker.is_active());
        assert_eq!(tracker.drag_position(160, 35), Some((150, 30)));

        let commit = tracker.finish_drag(160, 35);
        assert_eq!(
            commit,
            Some(GestureCommit::Move { note, x: 150, y: 30 })
        );
        assert_eq!(tracker.state(), GestureState::Idle);
    }

    #[test]
    fn finish_without_matching_gesture_yields_nothing() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.finish_drag(10, 10), None);

        let note = Uuid::new_v4();
        tracker.begin_resize(note);
        // A drag-end while resizing leaves the resize in flight.
        assert_eq!(tracker.finish_drag(10, 10), None);
        assert_eq!(
            tracker.finish_resize(300, 240),
            Some(GestureCommit::Resize {
                note,
                width: 300,
                height: 240
            })
        );
    }

    #[test]
    fn cancel_discards_the_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(Uuid::new_v4(), 0, 0, 0, 0);
        tracker.cancel();
        assert!(!tracker.is_active());
        assert_eq!(tracker.finish_drag(50, 50), None);
    }
}
