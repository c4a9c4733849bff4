//! Error types for the rating widget.
//!
//! All errors are raised synchronously during construction. Once a
//! [`RatingBar`](crate::RatingBar) exists, every operation on it is total:
//! out-of-bounds values are absorbed silently rather than reported.

/// Result type alias for rating widget operations.
pub type Result<T> = std::result::Result<T, RatingError>;

/// Errors that can occur while constructing a rating widget.
///
/// Construction never partially completes: when any of these is returned, no
/// positions were created and the surface was not touched.
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    /// No render surface was supplied to the builder.
    #[error("no render surface supplied")]
    MissingSurface,

    /// The maximum rating was absent or zero.
    #[error("no max rating supplied (max rating must be a positive integer)")]
    MissingMaxRating,

    /// The initial rating falls outside `[0, max_rating]`.
    #[error("initial rating {rating} is out of bounds (max rating is {max_rating})")]
    RatingOutOfBounds {
        /// The rejected initial rating.
        rating: f64,
        /// The configured maximum rating.
        max_rating: u32,
    },
}

impl RatingError {
    /// Create an out-of-bounds error for an initial rating.
    pub fn out_of_bounds(rating: f64, max_rating: u32) -> Self {
        Self::RatingOutOfBounds { rating, max_rating }
    }
}
