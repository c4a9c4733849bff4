//! Console walkthrough of the rating widget.
//!
//! Builds an editable five-star rating, then simulates the pointer hovering
//! across the row and committing a new rating, printing the rendered star
//! row after each step.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example console_rating
//! ```
//!
//! Set `RUST_LOG=trace` to see the widget's tracing output.

use horizon_rating::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let surface = MemorySurface::new(true);
    let handle = surface.handle();

    let mut bar = RatingBar::builder()
        .surface(surface)
        .initial_rating(2.5)
        .max_rating(5)
        .on_change(|rating| println!("  -> rating_changed({rating})"))
        .build()?;

    let print_row = |label: &str| {
        if let Some(snapshot) = handle.last_snapshot() {
            println!("{label:<28} {snapshot}");
        }
    };

    print_row("initial (2.5):");

    // Sweep the pointer across the row.
    for index in 0..bar.max_rating() as usize {
        bar.event(&mut PointerEvent::Enter(PointerEnterEvent::new(index)));
        print_row(&format!("hover position {index}:"));
        if index + 1 < bar.max_rating() as usize {
            // Crossing into the next position; the preview stays alive.
            bar.event(&mut PointerEvent::Leave(PointerLeaveEvent::new(Some(
                index + 1,
            ))));
        }
    }

    // Leave the widget: back to the committed rating.
    bar.event(&mut PointerEvent::Leave(PointerLeaveEvent::new(None)));
    print_row("pointer left widget:");

    // Click the fourth star.
    bar.event(&mut PointerEvent::Commit(PointerCommitEvent::new(3)));
    print_row("clicked position 3:");

    println!("final rating: {}", bar.rating());
    Ok(())
}
