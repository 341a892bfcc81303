//! Observability for the warehouse tools.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every entry of one session
//! - `StructuredLogger` - Structured logging with session context

mod logging;
mod session;

pub use logging::*;
pub use session::*;
