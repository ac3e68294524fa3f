//! Event narration.
//!
//! The turn machine announces what happens as [`GameEvent`]s. Delivery is
//! fire-and-forget: events sit in the machine's outbox until drained, and
//! the engine never depends on anyone reading them.
//!
//! ## Example Usage
//!
//! ```
//! use rust_ur::events::{dispatch, EventSink, GameLog, Statistics};
//! use rust_ur::{Game, UrConfig};
//!
//! let mut game = Game::new(UrConfig::default());
//! let mut log = GameLog::new();
//! let mut stats = Statistics::new();
//!
//! let events = game.drain_events();
//! dispatch(&events, &mut [&mut log as &mut dyn EventSink, &mut stats]);
//! assert_eq!(log.entries()[0], "New game started");
//! ```

mod event;
mod log;
mod stats;

pub use event::{GameEvent, PassReason};
pub use log::GameLog;
pub use stats::{PlayerStats, Statistics};

/// A consumer of game events.
pub trait EventSink {
    /// Handle one event.
    fn record(&mut self, event: &GameEvent);
}

/// Hand every event to every sink, in order.
pub fn dispatch(events: &[GameEvent], sinks: &mut [&mut dyn EventSink]) {
    for event in events {
        for sink in sinks.iter_mut() {
            sink.record(event);
        }
    }
}
