//! Rating bar widget implementation.
//!
//! This module provides [`RatingBar`], a row of discrete star positions
//! displaying a bounded numeric rating, with optional pointer interaction
//! for picking a new rating.
//!
//! # Example
//!
//! ```
//! use horizon_rating::{MemorySurface, RatingBar};
//!
//! let surface = MemorySurface::new(false);
//!
//! let mut bar = RatingBar::builder()
//!     .surface(surface)
//!     .max_rating(5)
//!     .initial_rating(3.0)
//!     .build()
//!     .unwrap();
//!
//! // Connect to rating changes
//! bar.rating_changed.connect(|&rating| {
//!     println!("Rating: {}", rating);
//! });
//!
//! bar.set_rating(Some(4.0), true);
//! assert_eq!(bar.rating(), 4.0);
//! ```

use std::fmt;

use horizon_rating_core::{Property, Signal};

use crate::error::{RatingError, Result};
use crate::events::PointerEvent;
use crate::surface::RenderSurface;
use crate::visual::Snapshot;

/// A widget displaying a bounded numeric rating as a row of stars.
///
/// The widget owns `max_rating` positions, indexed from 0, created once at
/// construction. Each position's appearance is a pure function of the
/// effective rating and the position index (see
/// [`VisualState::for_position`](crate::VisualState::for_position)); the
/// widget recomputes the full row and applies it to the host's
/// [`RenderSurface`] on every change.
///
/// Fractional ratings render with half stars. Pointer commits always produce
/// whole numbers (clicking position `i` commits `i + 1`); only programmatic
/// [`set_rating`](Self::set_rating) calls can store fractional values.
///
/// # Editable Mode
///
/// Whether the widget reacts to pointer events is decided once, at
/// construction, from the surface's host-supplied editable attribute. An
/// editable widget previews `index + 1` stars while the pointer hovers a
/// position (half stars are suppressed during preview), reverts to the
/// committed rating when the pointer leaves the widget, and commits on click.
/// A non-editable widget ignores pointer events entirely.
///
/// # Signals
///
/// - `rating_changed(f64)`: Emitted after a commit or a non-suppressed
///   `set_rating` call, with the current rating
pub struct RatingBar {
    /// The host container snapshots are rendered into.
    surface: Box<dyn RenderSurface>,

    /// Number of positions. Fixed for the widget's lifetime.
    max_rating: u32,

    /// The committed rating, always within `[0, max_rating]`.
    rating: Property<f64>,

    /// Whether the interaction controller is attached.
    editable: bool,

    /// The position currently under the pointer, if any.
    ///
    /// Hover state is a transient overlay; it never touches `rating`.
    hover_index: Option<usize>,

    /// Signal emitted when the rating is set.
    pub rating_changed: Signal<f64>,
}

impl RatingBar {
    /// Start building a rating bar.
    ///
    /// See [`RatingBarBuilder`] for the construction contract.
    pub fn builder() -> RatingBarBuilder {
        RatingBarBuilder::new()
    }

    /// The number of positions.
    pub fn max_rating(&self) -> u32 {
        self.max_rating
    }

    /// Whether the widget reacts to pointer events.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Get the committed rating.
    pub fn rating(&self) -> f64 {
        self.rating.get()
    }

    /// The position currently being hovered, if any.
    ///
    /// `Some` only while an editable widget shows a hover preview.
    pub fn hovered_position(&self) -> Option<usize> {
        self.hover_index
    }

    /// Set the committed rating and re-render every position.
    ///
    /// A `None` value means "no new value": the current rating is retained
    /// and the positions are simply re-rendered from it. Out-of-bounds
    /// values (negative, or above `max_rating`) make the whole call a silent
    /// no-op - nothing is rendered and no signal is emitted.
    ///
    /// When `invoke_callback` is true and the call is not rejected,
    /// `rating_changed` is emitted with the current rating after the
    /// re-render - even if the value did not change.
    ///
    /// A value of exactly `0.0` (or NaN) is treated as "no new value", not
    /// as a bound violation: the current rating is retained. Consequently a
    /// rating of 0 cannot be set after construction through this method.
    /// This matches the widget's historical behavior; hosts that need to
    /// clear a rating should construct a new widget.
    pub fn set_rating(&mut self, value: Option<f64>, invoke_callback: bool) {
        let v = value.unwrap_or(0.0);
        let provided = v != 0.0 && !v.is_nan();

        if (provided && v < 0.0) || v > self.max_rating as f64 {
            tracing::trace!(
                target: "horizon_rating::rating_bar",
                value = v,
                max_rating = self.max_rating,
                "ignoring out-of-bounds rating"
            );
            return;
        }

        if provided {
            let changed = self.rating.set(v);
            tracing::trace!(
                target: "horizon_rating::rating_bar",
                rating = v,
                changed,
                "rating set"
            );
        }

        self.render_committed();

        if invoke_callback {
            self.rating_changed.emit(self.rating.get());
        }
    }

    // =========================================================================
    // Interaction Controller
    // =========================================================================

    /// Handle the pointer entering position `index`.
    ///
    /// Shows the hover preview: positions `0..=index` active, the rest
    /// inactive, no half states. The committed rating is untouched. Returns
    /// whether the event was handled (always `false` when not editable or
    /// when `index` is not a tracked position).
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        if !self.editable || index >= self.max_rating as usize {
            return false;
        }

        self.hover_index = Some(index);
        let preview = Snapshot::preview(index, self.max_rating);
        self.surface.apply(&preview);
        true
    }

    /// Handle the pointer leaving a position.
    ///
    /// `related_index` is the position the pointer moved to, when it is
    /// another tracked position; moving between adjacent positions keeps the
    /// preview alive (the subsequent enter updates it). Only when the
    /// pointer truly leaves the widget (`related_index` is `None` or not a
    /// tracked position) does the widget revert to the committed rating,
    /// without emitting `rating_changed`.
    pub fn pointer_leave(&mut self, related_index: Option<usize>) -> bool {
        if !self.editable {
            return false;
        }

        if matches!(related_index, Some(i) if i < self.max_rating as usize) {
            return false;
        }

        self.hover_index = None;
        self.set_rating(None, false);
        true
    }

    /// Handle a click on position `index`.
    ///
    /// Commits `index + 1` as the new rating and emits `rating_changed`.
    /// A click unconditionally overrides any in-progress hover preview.
    pub fn pointer_commit(&mut self, index: usize) -> bool {
        if !self.editable || index >= self.max_rating as usize {
            return false;
        }

        tracing::debug!(
            target: "horizon_rating::rating_bar",
            index,
            rating = index + 1,
            "pointer commit"
        );

        self.hover_index = None;
        self.set_rating(Some((index + 1) as f64), true);
        true
    }

    /// Dispatch a pointer event to the matching handler.
    ///
    /// Handled events are accepted. This is the entry point for hosts that
    /// route event objects; the individual `pointer_*` handlers are
    /// equivalent for hosts that call directly.
    pub fn event(&mut self, event: &mut PointerEvent) -> bool {
        let handled = match event {
            PointerEvent::Enter(e) => self.pointer_enter(e.index),
            PointerEvent::Leave(e) => self.pointer_leave(e.related_index),
            PointerEvent::Commit(e) => self.pointer_commit(e.index),
        };

        if handled {
            event.accept();
        }
        handled
    }

    /// Re-render every position from the committed rating.
    fn render_committed(&mut self) {
        let snapshot = Snapshot::for_rating(self.rating.get(), self.max_rating);
        self.surface.apply(&snapshot);
    }
}

// The boxed surface and the signal are opaque; show the widget state.
impl fmt::Debug for RatingBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingBar")
            .field("max_rating", &self.max_rating)
            .field("rating", &self.rating)
            .field("editable", &self.editable)
            .field("hover_index", &self.hover_index)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RatingBar`].
///
/// The construction contract mirrors the widget's host API: a render
/// surface, an optional initial rating (defaulting to 0), a required
/// positive `max_rating`, and an optional change callback.
///
/// [`build`](Self::build) fails when the surface is missing, when
/// `max_rating` is absent or zero, or when the initial rating falls outside
/// `[0, max_rating]`. An absent or zero initial rating is coerced to 0
/// rather than failing.
#[derive(Default)]
pub struct RatingBarBuilder {
    surface: Option<Box<dyn RenderSurface>>,
    initial_rating: f64,
    max_rating: Option<u32>,
    on_change: Option<Box<dyn Fn(f64) + Send + Sync>>,
}

impl RatingBarBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host render surface. Required.
    pub fn surface<S: RenderSurface + 'static>(mut self, surface: S) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// Set the initial rating. Optional; defaults to 0.
    pub fn initial_rating(mut self, rating: f64) -> Self {
        self.initial_rating = rating;
        self
    }

    /// Set the number of positions. Required, must be positive.
    pub fn max_rating(mut self, max_rating: u32) -> Self {
        self.max_rating = Some(max_rating);
        self
    }

    /// Connect a change callback, invoked with the new rating whenever a
    /// commit (or explicit non-suppressed `set_rating`) occurs.
    ///
    /// Equivalent to connecting to
    /// [`rating_changed`](RatingBar::rating_changed) after `build()`.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Build the widget, validate its configuration, and render the initial
    /// rating into the surface.
    ///
    /// # Errors
    ///
    /// - [`RatingError::MissingSurface`] when no surface was supplied
    /// - [`RatingError::MissingMaxRating`] when `max_rating` is absent or zero
    /// - [`RatingError::RatingOutOfBounds`] when the initial rating is
    ///   outside `[0, max_rating]`
    pub fn build(self) -> Result<RatingBar> {
        let mut surface = self.surface.ok_or(RatingError::MissingSurface)?;

        let max_rating = match self.max_rating {
            Some(max) if max > 0 => max,
            _ => return Err(RatingError::MissingMaxRating),
        };

        // An unset or zero rating means "start empty"; NaN counts as unset.
        let initial = if self.initial_rating.is_nan() {
            0.0
        } else {
            self.initial_rating
        };
        if initial < 0.0 || initial > max_rating as f64 {
            return Err(RatingError::out_of_bounds(initial, max_rating));
        }

        let editable = surface.is_editable();
        if editable {
            surface.mark_editable();
        }

        let mut bar = RatingBar {
            surface,
            max_rating,
            rating: Property::new(initial),
            editable,
            hover_index: None,
            rating_changed: Signal::new(),
        };

        if let Some(callback) = self.on_change {
            bar.rating_changed.connect(move |&rating| callback(rating));
        }

        bar.render_committed();
        Ok(bar)
    }
}

// Ensure RatingBar can move to another thread with its surface
static_assertions::assert_impl_all!(RatingBar: Send);
