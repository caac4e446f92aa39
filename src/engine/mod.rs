//! Engine execution context.
//!
//! The searches themselves are synchronous and CPU-bound; this module
//! supplies the background thread that keeps them off the caller's
//! interaction thread, one request in and one response out.

mod controller;

pub use controller::EngineController;
