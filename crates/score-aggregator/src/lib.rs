//! Temporal Aggregator
//!
//! Collects per-frame feature scores over a fixed sampling window and
//! reduces them to stable per-feature scores:
//! - 3 s continuous-detection gate before a window may open
//! - 5 s collection window sampled at the caller's cadence
//! - lowest-quartile trimmed mean per feature on window close
//! - explicit no-result signal for windows with too few samples

mod collector;
mod trim;

pub use collector::{
    Phase, SampleCollector, TickEvent, WindowConfig, WindowOutcome, WindowScores,
};
pub use trim::{quartile_trimmed_mean, MIN_WINDOW_SAMPLES};
