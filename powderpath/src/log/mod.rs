//! Logging abstraction layer.
//!
//! Components that report progress to the operator (the grid sweep, the piste
//! server) log through the [`Logger`] trait instead of calling `tracing`
//! directly, so tests can swap in a silent or capturing logger.
//!
//! - `Logger` trait: the interface components log through
//! - `TracingLogger`: production adapter that forwards to `tracing`
//! - `NoOpLogger`: discards everything
//! - `MemoryLogger`: keeps every line so tests can assert on it
//!
//! ```
//! use powderpath::log::{Logger, NoOpLogger};
//! use powderpath::{log_info, log_warn};
//! use std::sync::Arc;
//!
//! struct Sweeper {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl Sweeper {
//!     fn visit(&self, lon: f64, lat: f64, ok: bool) {
//!         if ok {
//!             log_info!(self.logger, "Queried ({}, {})", lon, lat);
//!         } else {
//!             log_warn!(self.logger, "Error querying ({}, {})", lon, lat);
//!         }
//!     }
//! }
//!
//! let sweeper = Sweeper { logger: Arc::new(NoOpLogger) };
//! sweeper.visit(6.568, 45.296, true);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
