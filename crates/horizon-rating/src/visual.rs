//! Visual state model for the rating widget.
//!
//! This module contains the pure rendering algorithm: the mapping from a
//! numeric rating to the per-position [`VisualState`] of each star, and the
//! [`Snapshot`] data structure that carries one full row of states to the
//! host for rendering.
//!
//! The widget never touches a render target directly. It computes a
//! `Snapshot` and hands it to the host through the
//! [`RenderSurface`](crate::surface::RenderSurface) seam, which keeps the
//! algorithm independent of any rendering technology.
//!
//! # Threshold Formula
//!
//! For a rating `r` and a 0-based position index `i`, let `diff = i - r`:
//!
//! - `diff < -0.75` - the rating covers this position by more than
//!   three-quarters of a step: **Active**
//! - `-0.75 <= diff <= -0.25` - the quarter-to-three-quarter band: **Half**
//! - otherwise: **Inactive**
//!
//! This produces natural-looking half-star thresholds for integer and
//! fractional ratings alike. A rating of 2.5 over five stars renders as
//! `[Active, Active, Half, Inactive, Inactive]`.

use std::fmt;

/// The rendered appearance of a single rating position.
///
/// Exactly one state applies to a position at any time; `Active` and `Half`
/// never coexist. A `VisualState` is always derived from the effective
/// rating and the position index - it is never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// The position is not covered by the rating.
    #[default]
    Inactive,
    /// The rating partially covers the position (half-star).
    Half,
    /// The rating fully covers the position.
    Active,
}

impl VisualState {
    /// Compute the visual state of position `index` for a rating value.
    ///
    /// This is a pure function of `(rating, index)`; see the module docs for
    /// the threshold constants.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_rating::VisualState;
    ///
    /// assert_eq!(VisualState::for_position(3.0, 2), VisualState::Active);
    /// assert_eq!(VisualState::for_position(2.5, 2), VisualState::Half);
    /// assert_eq!(VisualState::for_position(3.0, 3), VisualState::Inactive);
    /// ```
    pub fn for_position(rating: f64, index: usize) -> Self {
        let diff = index as f64 - rating;
        if diff < -0.75 {
            Self::Active
        } else if diff <= -0.25 {
            Self::Half
        } else {
            Self::Inactive
        }
    }

    /// Whether this state marks the position as at least partially filled.
    pub fn is_filled(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Glyph style for formatting a [`Snapshot`] as a star row.
///
/// Used by [`Snapshot::to_row`] and the `Display` implementation. Handy for
/// logs, debugging, and console hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarStyle {
    /// ASCII characters: `*` active, `~` half, `-` inactive.
    Ascii,
    /// Unicode star glyphs: `★` active, `⯨` half, `☆` inactive.
    #[default]
    Unicode,
}

impl StarStyle {
    fn glyph(&self, state: VisualState) -> char {
        match (self, state) {
            (Self::Ascii, VisualState::Active) => '*',
            (Self::Ascii, VisualState::Half) => '~',
            (Self::Ascii, VisualState::Inactive) => '-',
            (Self::Unicode, VisualState::Active) => '★',
            (Self::Unicode, VisualState::Half) => '⯨',
            (Self::Unicode, VisualState::Inactive) => '☆',
        }
    }
}

/// An ordered row of per-position visual states.
///
/// A snapshot is the widget's only rendering output: position `i` of the
/// snapshot describes position `i` of the widget (0 = lowest). The host
/// applies it to whatever its positions are made of - DOM nodes, draw calls,
/// terminal glyphs.
///
/// Snapshots are cheap, immutable values; the widget recomputes one on every
/// render rather than mutating a previous row, so each application replaces
/// all previous state markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    states: Vec<VisualState>,
}

impl Snapshot {
    /// Compute the committed render for `rating` over `max_rating` positions.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_rating::{Snapshot, VisualState};
    ///
    /// let snapshot = Snapshot::for_rating(2.5, 5);
    /// assert_eq!(
    ///     snapshot.states(),
    ///     &[
    ///         VisualState::Active,
    ///         VisualState::Active,
    ///         VisualState::Half,
    ///         VisualState::Inactive,
    ///         VisualState::Inactive,
    ///     ]
    /// );
    /// ```
    pub fn for_rating(rating: f64, max_rating: u32) -> Self {
        let states = (0..max_rating as usize)
            .map(|index| VisualState::for_position(rating, index))
            .collect();
        Self { states }
    }

    /// Compute the hover preview for a pointer over position `hover_index`.
    ///
    /// Preview rows are integer-only: every position up to and including the
    /// hovered one is `Active`, everything after is `Inactive`. Half states
    /// are suppressed entirely during hover.
    pub fn preview(hover_index: usize, max_rating: u32) -> Self {
        let states = (0..max_rating as usize)
            .map(|index| {
                if index <= hover_index {
                    VisualState::Active
                } else {
                    VisualState::Inactive
                }
            })
            .collect();
        Self { states }
    }

    /// The per-position states, ordered by position index.
    pub fn states(&self) -> &[VisualState] {
        &self.states
    }

    /// The number of positions in this snapshot.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the snapshot has no positions.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get the state of a single position, if it exists.
    pub fn state(&self, index: usize) -> Option<VisualState> {
        self.states.get(index).copied()
    }

    /// Format the snapshot as a star row in the given style.
    ///
    /// ```
    /// use horizon_rating::{Snapshot, StarStyle};
    ///
    /// let snapshot = Snapshot::for_rating(2.5, 5);
    /// assert_eq!(snapshot.to_row(StarStyle::Ascii), "**~--");
    /// ```
    pub fn to_row(&self, style: StarStyle) -> String {
        self.states.iter().map(|&s| style.glyph(s)).collect()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_row(StarStyle::Unicode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_rating_thresholds() {
        // Rating 3 over 5 positions: diffs are -3, -2, -1, 0, 1. Integer
        // ratings never produce half stars.
        assert_eq!(VisualState::for_position(3.0, 0), VisualState::Active);
        assert_eq!(VisualState::for_position(3.0, 1), VisualState::Active);
        assert_eq!(VisualState::for_position(3.0, 2), VisualState::Active);
        assert_eq!(VisualState::for_position(3.0, 3), VisualState::Inactive);
        assert_eq!(VisualState::for_position(3.0, 4), VisualState::Inactive);
    }

    #[test]
    fn test_fractional_rating_thresholds() {
        // Rating 2.5: position 1 has diff -1.5 (active), position 2 has
        // diff -0.5 (half), position 3 has diff 0.5 (inactive).
        assert_eq!(VisualState::for_position(2.5, 1), VisualState::Active);
        assert_eq!(VisualState::for_position(2.5, 2), VisualState::Half);
        assert_eq!(VisualState::for_position(2.5, 3), VisualState::Inactive);
    }

    #[test]
    fn test_band_boundaries() {
        // diff == -0.75 is half, just below is active.
        assert_eq!(VisualState::for_position(0.75, 0), VisualState::Half);
        assert_eq!(VisualState::for_position(0.76, 0), VisualState::Active);

        // diff == -0.25 is half, just above is inactive.
        assert_eq!(VisualState::for_position(0.25, 0), VisualState::Half);
        assert_eq!(VisualState::for_position(0.24, 0), VisualState::Inactive);
    }

    #[test]
    fn test_zero_rating_all_inactive() {
        let snapshot = Snapshot::for_rating(0.0, 5);
        assert!(snapshot.states().iter().all(|&s| s == VisualState::Inactive));
    }

    #[test]
    fn test_full_rating_all_active() {
        let snapshot = Snapshot::for_rating(5.0, 5);
        assert!(snapshot.states().iter().all(|&s| s == VisualState::Active));
    }

    #[test]
    fn test_snapshot_matches_per_position_formula() {
        for tenths in 0..=50 {
            let rating = tenths as f64 / 10.0;
            let snapshot = Snapshot::for_rating(rating, 5);
            assert_eq!(snapshot.len(), 5);
            for index in 0..5 {
                assert_eq!(
                    snapshot.state(index),
                    Some(VisualState::for_position(rating, index)),
                    "rating {rating}, position {index}"
                );
            }
        }
    }

    #[test]
    fn test_preview_has_no_half_states() {
        let snapshot = Snapshot::preview(1, 5);
        assert_eq!(
            snapshot.states(),
            &[
                VisualState::Active,
                VisualState::Active,
                VisualState::Inactive,
                VisualState::Inactive,
                VisualState::Inactive,
            ]
        );
        assert!(!snapshot.states().contains(&VisualState::Half));
    }

    #[test]
    fn test_preview_last_position() {
        let snapshot = Snapshot::preview(4, 5);
        assert!(snapshot.states().iter().all(|&s| s == VisualState::Active));
    }

    #[test]
    fn test_row_formatting() {
        let snapshot = Snapshot::for_rating(2.5, 5);
        assert_eq!(snapshot.to_row(StarStyle::Ascii), "**~--");
        assert_eq!(snapshot.to_row(StarStyle::Unicode), "★★⯨☆☆");
        assert_eq!(format!("{snapshot}"), "★★⯨☆☆");
    }
}
