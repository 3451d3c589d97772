//! Two-state modal surface used by the detail overlay and the edit dialog.

use tracing::trace;

/// Whether a modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Hidden.
    #[default]
    Closed,
    /// Showing.
    Open,
}

/// Things that can happen to a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// An edit/detail request or explicit trigger.
    Open,
    /// The modal's own close control was used.
    CloseControl,
    /// The edit the modal was showing was saved.
    UpdateSucceeded,
    /// A pointer or activation event landed outside the modal surface.
    OutsideActivation,
}

/// A modal surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    /// A closed modal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Check whether the modal is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Apply an event and return the resulting state.
    ///
    /// Opening an open modal keeps it open; close events on a closed modal
    /// are no-ops.
    pub fn handle(&mut self, event: ModalEvent) -> ModalState {
        let next = match event {
            ModalEvent::Open => ModalState::Open,
            ModalEvent::CloseControl
            | ModalEvent::UpdateSucceeded
            | ModalEvent::OutsideActivation => ModalState::Closed,
        };
        trace!(from = ?self.state, to = ?next, ?event, "Modal transition");
        self.state = next;
        next
    }
}
