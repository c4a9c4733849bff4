//! Render surface abstraction.
//!
//! The widget does not own a render target. The host supplies a
//! [`RenderSurface`] - the pre-existing container the stars live in - and the
//! widget pushes [`Snapshot`]s into it whenever the effective rating changes.
//! Creation, destruction, and styling of the container stay with the host.
//!
//! The surface also carries the host's *editable* attribute: the widget reads
//! it once at construction to decide whether pointer interaction is enabled,
//! and calls [`mark_editable`](RenderSurface::mark_editable) back so the host
//! can style the widget accordingly.
//!
//! [`MemorySurface`] is a ready-made in-memory implementation for hosts
//! without a retained render target (and for tests).

use std::sync::Arc;

use parking_lot::Mutex;

use crate::visual::Snapshot;

/// A host-owned container that rating snapshots are rendered into.
///
/// Implementations translate each applied [`Snapshot`] into whatever the
/// host's positions are made of. Applying a snapshot replaces the previous
/// one wholesale; the per-position states in a snapshot are exclusive, so an
/// implementation never has to combine markers.
pub trait RenderSurface: Send {
    /// The host-supplied editable attribute.
    ///
    /// Read by the widget once, during construction. When `true`, the widget
    /// attaches its interaction controller and calls
    /// [`mark_editable`](Self::mark_editable).
    fn is_editable(&self) -> bool;

    /// Called by the widget when it is constructed as editable, so the host
    /// can apply interactive styling.
    fn mark_editable(&mut self);

    /// Render a snapshot: position `i` of the snapshot styles position `i`
    /// of the surface.
    fn apply(&mut self, snapshot: &Snapshot);
}

/// Shared state behind a [`MemorySurface`] and its handles.
#[derive(Debug, Default)]
struct SurfaceState {
    editable: bool,
    marked_editable: bool,
    last_snapshot: Option<Snapshot>,
    apply_count: usize,
}

/// An in-memory [`RenderSurface`] that records what was rendered.
///
/// The surface itself moves into the widget at construction; observe it from
/// outside through the cloneable [`SurfaceHandle`] returned by
/// [`handle`](Self::handle).
///
/// # Example
///
/// ```
/// use horizon_rating::{MemorySurface, RatingBar};
///
/// let surface = MemorySurface::new(false);
/// let handle = surface.handle();
///
/// let bar = RatingBar::builder()
///     .surface(surface)
///     .max_rating(5)
///     .initial_rating(2.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(handle.last_snapshot().unwrap().to_string(), "★★⯨☆☆");
/// # let _ = bar;
/// ```
#[derive(Debug)]
pub struct MemorySurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl MemorySurface {
    /// Create a surface with the given host editable attribute.
    pub fn new(editable: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(SurfaceState {
                editable,
                ..SurfaceState::default()
            })),
        }
    }

    /// Get an observation handle that stays valid after the surface moves
    /// into a widget.
    pub fn handle(&self) -> SurfaceHandle {
        SurfaceHandle {
            state: self.state.clone(),
        }
    }
}

impl RenderSurface for MemorySurface {
    fn is_editable(&self) -> bool {
        self.state.lock().editable
    }

    fn mark_editable(&mut self) {
        self.state.lock().marked_editable = true;
    }

    fn apply(&mut self, snapshot: &Snapshot) {
        let mut state = self.state.lock();
        state.last_snapshot = Some(snapshot.clone());
        state.apply_count += 1;
    }
}

/// Observation handle for a [`MemorySurface`].
#[derive(Debug, Clone)]
pub struct SurfaceHandle {
    state: Arc<Mutex<SurfaceState>>,
}

impl SurfaceHandle {
    /// The most recently applied snapshot, if any.
    pub fn last_snapshot(&self) -> Option<Snapshot> {
        self.state.lock().last_snapshot.clone()
    }

    /// Whether the widget marked the surface editable.
    pub fn is_marked_editable(&self) -> bool {
        self.state.lock().marked_editable
    }

    /// How many snapshots have been applied so far.
    pub fn apply_count(&self) -> usize {
        self.state.lock().apply_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_records_applies() {
        let mut surface = MemorySurface::new(true);
        let handle = surface.handle();

        assert!(surface.is_editable());
        assert_eq!(handle.apply_count(), 0);
        assert!(handle.last_snapshot().is_none());

        surface.apply(&Snapshot::for_rating(2.0, 4));
        surface.apply(&Snapshot::for_rating(3.0, 4));

        assert_eq!(handle.apply_count(), 2);
        assert_eq!(handle.last_snapshot(), Some(Snapshot::for_rating(3.0, 4)));
    }

    #[test]
    fn test_mark_editable_visible_through_handle() {
        let mut surface = MemorySurface::new(true);
        let handle = surface.handle();
        assert!(!handle.is_marked_editable());

        surface.mark_editable();
        assert!(handle.is_marked_editable());
    }
}
