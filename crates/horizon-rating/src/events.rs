//! Pointer event types for the rating widget.
//!
//! The widget does not listen to a host event system directly. Instead, the
//! host's event layer translates its own pointer signals into these explicit
//! event types and feeds them to [`RatingBar::event`](crate::RatingBar::event)
//! (or to the individual `pointer_*` handlers). This keeps the interaction
//! state machine testable without a real UI surface.

/// Common data for all pointer events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Mark the event as accepted (handled).
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as ignored (not handled).
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Check whether the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// The pointer entered a rating position.
#[derive(Debug, Clone, Copy)]
pub struct PointerEnterEvent {
    /// Base event data.
    pub base: EventBase,
    /// The 0-based index of the entered position.
    pub index: usize,
}

impl PointerEnterEvent {
    /// Create a new pointer enter event.
    pub fn new(index: usize) -> Self {
        Self {
            base: EventBase::new(),
            index,
        }
    }
}

/// The pointer left a rating position.
#[derive(Debug, Clone, Copy)]
pub struct PointerLeaveEvent {
    /// Base event data.
    pub base: EventBase,
    /// The position the pointer moved to, when it is another tracked
    /// position. `None` means the pointer left the widget entirely.
    pub related_index: Option<usize>,
}

impl PointerLeaveEvent {
    /// Create a new pointer leave event.
    pub fn new(related_index: Option<usize>) -> Self {
        Self {
            base: EventBase::new(),
            related_index,
        }
    }
}

/// A rating position was clicked.
#[derive(Debug, Clone, Copy)]
pub struct PointerCommitEvent {
    /// Base event data.
    pub base: EventBase,
    /// The 0-based index of the clicked position.
    pub index: usize,
}

impl PointerCommitEvent {
    /// Create a new pointer commit event.
    pub fn new(index: usize) -> Self {
        Self {
            base: EventBase::new(),
            index,
        }
    }
}

/// A pointer event dispatched to the rating widget.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// The pointer entered a position.
    Enter(PointerEnterEvent),
    /// The pointer left a position.
    Leave(PointerLeaveEvent),
    /// A position was clicked.
    Commit(PointerCommitEvent),
}

impl PointerEvent {
    /// Mark the event as accepted (handled).
    pub fn accept(&mut self) {
        match self {
            Self::Enter(e) => e.base.accept(),
            Self::Leave(e) => e.base.accept(),
            Self::Commit(e) => e.base.accept(),
        }
    }

    /// Check whether the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Enter(e) => e.base.is_accepted(),
            Self::Leave(e) => e.base.is_accepted(),
            Self::Commit(e) => e.base.is_accepted(),
        }
    }
}
