//! # researcher-telemetry
//!
//! Structured logging for the investment research assistant using `tracing`.
//!
//! Library crates only emit events through the re-exported macros. Nothing is
//! printed until a binary calls [`init_telemetry`]; without a subscriber every
//! event is discarded.
//!
//! ## Usage
//!
//! ```rust
//! use researcher_telemetry::{info, init_telemetry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("investment-researcher")?;
//!     info!("ready");
//!     Ok(())
//! }
//! ```

pub mod init;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, trace, warn};

pub use init::{init_telemetry, init_telemetry_with_level};
