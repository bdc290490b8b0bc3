//! Feature extraction for recorded battles.
//!
//! A [`FeatureExtractor`] makes one forward pass over a battle's timeline,
//! feeding every turn to the trackers its [`ExtractorConfig`] enables, then
//! normalises their totals into a flat [`FeatureRecord`]. Batches run on a
//! rayon pool and collect bad records instead of failing.
//!
//! ```ignore
//! use kinesis_features::{ExtractorConfig, FeatureExtractor, WorkerPool};
//!
//! let extractor = FeatureExtractor::from_config(ExtractorConfig::full());
//! let outcome = extractor.extract_lines(&jsonl, WorkerPool::default())?;
//! outcome.table.write_csv(std::io::stdout())?;
//! ```

mod batch;
mod config;
mod error;
mod extractor;
mod record;
mod tests;

pub use batch::{BatchFailure, BatchOutcome, WorkerPool};
pub use config::{ExtractorConfig, FeatureGroup};
pub use error::ExtractError;
pub use extractor::FeatureExtractor;
pub use record::{FeatureRecord, FeatureTable, ID_COLUMN, OUTCOME_COLUMN};
