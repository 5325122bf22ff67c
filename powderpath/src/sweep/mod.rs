//! Grid sweep collector.
//!
//! Walks the inclusive lattice of a bounding box, asks a [`PoiProvider`] for
//! the features near each point, and keeps the first copy of every feature id.
//!
//! ```ignore
//! use powderpath::coord::BoundingBox;
//! use powderpath::provider::{AsyncReqwestClient, TilequeryProvider};
//! use powderpath::sweep::{self, SweepConfig};
//!
//! let bbox: BoundingBox = "6.568,45.296,6.585,45.305".parse()?;
//! let provider = TilequeryProvider::new(AsyncReqwestClient::new()?, token);
//! let result = sweep::collect(&bbox, &SweepConfig::default(), &provider).await?;
//! println!("{}", result.summary());
//! ```
//!
//! [`PoiProvider`]: crate::provider::PoiProvider

mod collector;
mod config;
mod error;
mod result;

pub use collector::{collect, GridSweep};
pub use config::{
    SweepConfig, DEFAULT_DELAY, DEFAULT_LIMIT, DEFAULT_MAX_RETRIES, DEFAULT_RADIUS,
    DEFAULT_RETRY_BASE_DELAY, DEFAULT_STEP,
};
pub use error::SweepError;
pub use result::SweepResult;
