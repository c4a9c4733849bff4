//! Horizon Rating - a star rating widget with half-star rendering and hover
//! preview.
//!
//! The widget renders a row of discrete star positions for a bounded numeric
//! rating in `[0, max_rating]`, with fractional ratings displayed as half
//! stars. When the host's surface is flagged editable, pointer interaction
//! previews and commits new ratings.
//!
//! The core is deliberately split from rendering: the widget computes a
//! [`Snapshot`] of per-position [`VisualState`]s and applies it to a
//! host-supplied [`RenderSurface`]. The host owns the actual container and
//! its styling; [`MemorySurface`] is provided for hosts (and tests) without
//! a retained render target.
//!
//! # Example
//!
//! ```
//! use horizon_rating::{MemorySurface, PointerEvent, PointerCommitEvent, RatingBar};
//!
//! // An editable surface (the host decides this)
//! let surface = MemorySurface::new(true);
//! let handle = surface.handle();
//!
//! let mut bar = RatingBar::builder()
//!     .surface(surface)
//!     .max_rating(5)
//!     .initial_rating(3.0)
//!     .on_change(|rating| println!("New rating: {rating}"))
//!     .build()?;
//!
//! // The host's event layer feeds pointer events in
//! let mut click = PointerEvent::Commit(PointerCommitEvent::new(3));
//! bar.event(&mut click);
//!
//! assert_eq!(bar.rating(), 4.0);
//! assert_eq!(handle.last_snapshot().unwrap().to_string(), "★★★★☆");
//! # Ok::<(), horizon_rating::RatingError>(())
//! ```

pub mod error;
pub mod events;
pub mod prelude;
pub mod rating_bar;
pub mod surface;
pub mod visual;

mod tests;

pub use error::{RatingError, Result};
pub use events::{
    EventBase, PointerCommitEvent, PointerEnterEvent, PointerEvent, PointerLeaveEvent,
};
pub use rating_bar::{RatingBar, RatingBarBuilder};
pub use surface::{MemorySurface, RenderSurface, SurfaceHandle};
pub use visual::{Snapshot, StarStyle, VisualState};

// Re-export the core signal/property types used in the public API.
pub use horizon_rating_core::{ConnectionId, Property, Signal};
