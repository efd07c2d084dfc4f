//! Batch processing for time-indexed energy measurement CSVs: ingestion,
//! derived sum columns, inclusive date-range filtering and fixed-bucket
//! downsampling, plus a handle-based store for the presentation layer.

pub mod derived;
pub mod error;
pub mod filter;
pub mod frame;
pub mod fs;
pub mod ingest;
pub mod misc;
pub mod resample;
pub mod schema;
pub mod store;
pub mod utils;

pub use error::{DataError, Result};
pub use frame::SeriesFrame;
pub use resample::SamplingInterval;
pub use store::{FrameHandle, FrameStore};
