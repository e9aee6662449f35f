//! Collection window state machine

use crate::trim::quartile_trimmed_mean;
use feature_scoring::{Feature, FeatureScores, FrameScores};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Collection window timing parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Continuous detection required before a window may open (milliseconds)
    pub hold_ms: u64,
    /// Collection window length (milliseconds)
    pub window_ms: u64,
    /// Minimum samples for a reducible window
    pub min_samples: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            hold_ms: 3000,
            window_ms: 5000,
            min_samples: crate::trim::MIN_WINDOW_SAMPLES,
        }
    }
}

/// Aggregator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No active scan; the continuous-detection gate may be running
    Idle,
    /// Accumulating samples for the current window
    Collecting,
}

/// Result of advancing the collector by one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    /// Face present in Idle, gate timer running
    Holding { held_ms: u64 },
    /// Face lost in Idle, gate timer reset to zero
    HoldReset,
    /// Gate satisfied, window opened
    Started,
    /// Collecting; countdown to window close
    Sampling { remaining_ms: u64 },
    /// Window closed and reduced
    Closed(WindowOutcome),
}

/// Reduction result for one closed window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowOutcome {
    /// Per-feature trimmed means
    Scores(WindowScores),
    /// Too few samples to reduce; callers branch on this to offer a retry
    Insufficient { collected: usize },
}

/// Stable per-feature scores for one completed window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowScores {
    /// Trimmed-mean score per feature
    pub features: FeatureScores,
    /// Samples that entered the reduction
    pub samples: usize,
    /// Samples that carried degenerate-geometry fallbacks
    pub low_confidence_frames: usize,
}

/// Owned per-session sample accumulator.
///
/// Tick-driven: the caller reports elapsed time and the frame's scores (or
/// `None` when no face was detected), at its own cadence. All timing is
/// caller-supplied, so the machine is testable without a wall clock.
///
/// A single logical task must own the collector; the trimmed-mean reduction
/// is not incremental.
#[derive(Debug)]
pub struct SampleCollector {
    config: WindowConfig,
    phase: Phase,
    held_ms: u64,
    elapsed_ms: u64,
    samples: Vec<FrameScores>,
    generation: u64,
}

impl SampleCollector {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            held_ms: 0,
            elapsed_ms: 0,
            samples: Vec::new(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Window identity, bumped at every close and cancel.
    ///
    /// A sample produced against generation G must be discarded once the
    /// collector has moved past G; late model results never contaminate the
    /// next window.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Milliseconds until the current window closes
    pub fn remaining_ms(&self) -> Option<u64> {
        match self.phase {
            Phase::Collecting => Some(self.config.window_ms.saturating_sub(self.elapsed_ms)),
            Phase::Idle => None,
        }
    }

    /// Whole-second countdown for display, driven by the same window clock
    /// so zero coincides with the close tick
    pub fn countdown_seconds(&self) -> Option<u64> {
        self.remaining_ms().map(|ms| ms.div_ceil(1000))
    }

    /// Advance by one tick.
    ///
    /// `dt_ms` is the time since the previous tick; `sample` is the frame's
    /// scores, `None` when no face was detected. Absence resets the gate in
    /// Idle but merely skips the frame while Collecting.
    pub fn advance(&mut self, dt_ms: u64, sample: Option<FrameScores>) -> TickEvent {
        match self.phase {
            Phase::Idle => match sample {
                Some(_) => {
                    self.held_ms += dt_ms;
                    if self.held_ms >= self.config.hold_ms {
                        self.phase = Phase::Collecting;
                        self.elapsed_ms = 0;
                        self.samples.clear();
                        debug!(held_ms = self.held_ms, "Collection window opened");
                        TickEvent::Started
                    } else {
                        TickEvent::Holding {
                            held_ms: self.held_ms,
                        }
                    }
                }
                None => {
                    let was_holding = self.held_ms > 0;
                    self.held_ms = 0;
                    if was_holding {
                        TickEvent::HoldReset
                    } else {
                        TickEvent::Holding { held_ms: 0 }
                    }
                }
            },
            Phase::Collecting => {
                self.elapsed_ms += dt_ms;
                if let Some(frame) = sample {
                    self.samples.push(frame);
                }
                if self.elapsed_ms >= self.config.window_ms {
                    TickEvent::Closed(self.close())
                } else {
                    TickEvent::Sampling {
                        remaining_ms: self.config.window_ms - self.elapsed_ms,
                    }
                }
            }
        }
    }

    /// Discard all accumulated state with no partial emission
    pub fn cancel(&mut self) {
        debug!(
            discarded = self.samples.len(),
            "Collection cancelled, samples discarded"
        );
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.held_ms = 0;
        self.elapsed_ms = 0;
        self.samples.clear();
        self.generation += 1;
    }

    /// Reduce the closed window and return to Idle
    fn close(&mut self) -> WindowOutcome {
        let collected = self.samples.len();
        let min_samples = self.config.min_samples.max(crate::trim::MIN_WINDOW_SAMPLES);
        if collected < min_samples {
            info!(collected, "Window closed with too few samples");
            self.reset();
            return WindowOutcome::Insufficient { collected };
        }

        let mut features = FeatureScores::default();
        let mut column = Vec::with_capacity(collected);
        for feature in Feature::ALL {
            column.clear();
            column.extend(self.samples.iter().map(|s| s.scores.get(feature)));
            let mean =
                quartile_trimmed_mean(&column).unwrap_or(feature_scoring::NEUTRAL_SCORE);
            features.set(feature, mean);
        }

        let low_confidence_frames = self.samples.iter().filter(|s| s.low_confidence).count();
        info!(
            samples = collected,
            low_confidence_frames, "Window reduced to trimmed means"
        );

        self.reset();
        WindowOutcome::Scores(WindowScores {
            features,
            samples: collected,
            low_confidence_frames,
        })
    }
}

impl Default for SampleCollector {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}
