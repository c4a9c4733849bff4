//! Core systems for Horizon Rating.
//!
//! This crate provides the foundational components of the Horizon Rating
//! widget library:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Reactive values with change detection
//!
//! Everything here is synchronous: the rating widget is a single-threaded UI
//! component, so signals invoke their slots directly in the emitting thread.
//! There is no event loop and no queued dispatch.
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_rating_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<f64>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(4.0);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_rating_core::{Property, Signal};
//!
//! // A reactive value with change notification
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn new() -> Self {
//!         Self {
//!             value: Property::new(0),
//!             value_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionId, Signal};
