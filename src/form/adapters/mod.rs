//! Adapter implementations for the notifier port.

pub mod memory;

mod logging;

pub use logging::TracingNotifier;
