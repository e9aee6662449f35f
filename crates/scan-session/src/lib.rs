//! Scan Session Orchestration
//!
//! Drives one rating attempt end to end:
//! - polls the external landmark model at the sampling cadence
//! - scores the first detected face per frame
//! - feeds the collection window state machine
//! - surfaces countdown events and the final report or no-result signal

mod config;
mod session;
mod source;

pub use config::ScanConfig;
pub use session::{ScanOutcome, ScanReport, ScanSession, SessionEvent};
pub use source::LandmarkSource;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Scan error types
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    /// The landmark model failed to produce detections
    #[error("Landmark source failed: {0}")]
    Source(String),
}

/// Initialize structured logging for binaries and test harnesses
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
