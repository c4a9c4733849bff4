//! Tests for the full widget flow: events, surface, and rating state together.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::events::{PointerCommitEvent, PointerEnterEvent, PointerEvent, PointerLeaveEvent};
    use crate::rating_bar::RatingBar;
    use crate::surface::RenderSurface;
    use crate::visual::{Snapshot, StarStyle};

    /// A simple test surface that logs every rendered row as ASCII.
    struct RowLogSurface {
        editable: bool,
        rows: Arc<Mutex<Vec<String>>>,
    }

    impl RowLogSurface {
        fn new(editable: bool) -> (Self, Arc<Mutex<Vec<String>>>) {
            let rows = Arc::new(Mutex::new(Vec::new()));
            let surface = Self {
                editable,
                rows: rows.clone(),
            };
            (surface, rows)
        }
    }

    impl RenderSurface for RowLogSurface {
        fn is_editable(&self) -> bool {
            self.editable
        }

        fn mark_editable(&mut self) {
            // Styling is the host's concern; this surface has none.
        }

        fn apply(&mut self, snapshot: &Snapshot) {
            self.rows.lock().push(snapshot.to_row(StarStyle::Ascii));
        }
    }

    #[test]
    fn test_full_editable_flow_through_events() {
        let (surface, rows) = RowLogSurface::new(true);
        let mut bar = RatingBar::builder()
            .surface(surface)
            .initial_rating(2.5)
            .max_rating(5)
            .build()
            .unwrap();

        // Construction renders the committed rating.
        assert_eq!(rows.lock().last().unwrap(), "**~--");

        // Hover position 1: integer-only preview.
        let mut enter = PointerEvent::Enter(PointerEnterEvent::new(1));
        assert!(bar.event(&mut enter));
        assert!(enter.is_accepted());
        assert_eq!(rows.lock().last().unwrap(), "**---");

        // Crossing to the adjacent position: the leave is absorbed, the
        // following enter repaints the preview.
        let mut crossing = PointerEvent::Leave(PointerLeaveEvent::new(Some(2)));
        assert!(!bar.event(&mut crossing));
        assert!(!crossing.is_accepted());
        let mut enter_next = PointerEvent::Enter(PointerEnterEvent::new(2));
        assert!(bar.event(&mut enter_next));
        assert_eq!(rows.lock().last().unwrap(), "***--");

        // Leaving the widget entirely reverts to the committed render.
        let mut leave = PointerEvent::Leave(PointerLeaveEvent::new(None));
        assert!(bar.event(&mut leave));
        assert_eq!(rows.lock().last().unwrap(), "**~--");
        assert_eq!(bar.rating(), 2.5);

        // Click position 3: commits 4 and repaints.
        let mut click = PointerEvent::Commit(PointerCommitEvent::new(3));
        assert!(bar.event(&mut click));
        assert!(click.is_accepted());
        assert_eq!(bar.rating(), 4.0);
        assert_eq!(rows.lock().last().unwrap(), "****-");
    }

    #[test]
    fn test_non_editable_flow_only_renders_committed() {
        let (surface, rows) = RowLogSurface::new(false);
        let mut bar = RatingBar::builder()
            .surface(surface)
            .initial_rating(2.5)
            .max_rating(5)
            .build()
            .unwrap();

        let mut enter = PointerEvent::Enter(PointerEnterEvent::new(4));
        assert!(!bar.event(&mut enter));
        let mut click = PointerEvent::Commit(PointerCommitEvent::new(4));
        assert!(!bar.event(&mut click));

        // Only the construction render happened, showing the half star.
        let rows = rows.lock();
        assert_eq!(rows.as_slice(), &["**~--".to_string()]);
    }

    #[test]
    fn test_zero_rating_unreachable_after_construction() {
        let (surface, _rows) = RowLogSurface::new(true);
        let mut bar = RatingBar::builder()
            .surface(surface)
            .initial_rating(1.0)
            .max_rating(5)
            .build()
            .unwrap();

        // A zero value is "no new value", so the rating sticks at 1.
        bar.set_rating(Some(0.0), true);
        assert_eq!(bar.rating(), 1.0);
    }

    #[test]
    fn test_wide_widget_positions_in_order() {
        let (surface, rows) = RowLogSurface::new(false);
        let bar = RatingBar::builder()
            .surface(surface)
            .initial_rating(7.5)
            .max_rating(10)
            .build()
            .unwrap();

        assert_eq!(bar.max_rating(), 10);
        assert_eq!(rows.lock().last().unwrap(), "*******~--");
    }
}
