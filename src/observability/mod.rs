//! Observability for the gateway
//!
//! Structured JSON-line logging of typed lifecycle and request events.
//!
//! ```ignore
//! use planetlocal::observability::{Event, Logger};
//!
//! Logger::info(Event::QueryComplete, &[("rows", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
