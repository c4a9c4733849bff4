//! Prelude module for Horizon Rating.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use horizon_rating::prelude::*;
//! ```
//!
//! This provides access to:
//! - The widget and its builder (`RatingBar`, `RatingBarBuilder`)
//! - The surface seam (`RenderSurface`, `MemorySurface`)
//! - The visual state model (`VisualState`, `Snapshot`)
//! - Pointer events (`PointerEvent` and friends)
//! - Signal/slot system (`Signal`, `Property`)

pub use crate::error::{RatingError, Result};
pub use crate::events::{PointerCommitEvent, PointerEnterEvent, PointerEvent, PointerLeaveEvent};
pub use crate::rating_bar::{RatingBar, RatingBarBuilder};
pub use crate::surface::{MemorySurface, RenderSurface, SurfaceHandle};
pub use crate::visual::{Snapshot, StarStyle, VisualState};

pub use horizon_rating_core::{ConnectionId, Property, Signal};
