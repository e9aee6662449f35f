//! Scan session state and the async sampling loop

use crate::config::ScanConfig;
use crate::source::LandmarkSource;
use crate::ScanError;
use chrono::{DateTime, Utc};
use face_geometry::{measure, FaceDetection};
use feature_scoring::{score_frame, FeatureScores, Gender};
use score_aggregator::{SampleCollector, TickEvent, WindowOutcome, WindowScores};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

/// Event emitted by one session tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Face present, continuous-detection gate running
    AwaitingFace { held_ms: u64 },
    /// Face lost before the gate was satisfied
    FaceLost,
    /// Gate satisfied, collection window opened
    WindowOpened,
    /// Collecting; countdown for display
    Countdown { remaining_ms: u64, seconds: u64 },
    /// Window closed with its reduction outcome
    WindowClosed(WindowOutcome),
}

/// Final result of one scan run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScanOutcome {
    /// Window reduced to stable feature scores
    Completed(ScanReport),
    /// Window closed with too few samples; the caller offers a retry
    NoResult { collected: usize },
    /// Run cancelled; partial samples discarded
    Cancelled,
}

/// Stable per-feature scores for one completed scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub gender: Gender,
    /// Trimmed-mean score per feature
    pub features: FeatureScores,
    /// Samples that entered the reduction
    pub samples: usize,
    /// Samples scored with degenerate-geometry fallbacks
    pub low_confidence_frames: usize,
}

impl ScanReport {
    /// Serialize for export to the caller's store
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One rating attempt.
///
/// Owns the sample collector for its lifetime; all accumulation happens on
/// the task driving the session, so there are no concurrent writers.
pub struct ScanSession {
    gender: Gender,
    config: ScanConfig,
    collector: SampleCollector,
}

impl ScanSession {
    pub fn new(gender: Gender, config: ScanConfig) -> Self {
        info!(?gender, cadence_ms = config.cadence_ms, "Starting scan session");
        Self {
            gender,
            config,
            collector: SampleCollector::new(config.window),
        }
    }

    /// Whole-second countdown for display, `None` outside a window
    pub fn countdown_seconds(&self) -> Option<u64> {
        self.collector.countdown_seconds()
    }

    /// Discard the run; no partial scores are emitted
    pub fn cancel(&mut self) {
        self.collector.cancel();
    }

    /// Advance one tick with the frame's detections.
    ///
    /// Only the first detection is scored; additional faces in the frame are
    /// ignored. An empty slice is a no-face frame.
    pub fn step(&mut self, detections: &[FaceDetection]) -> SessionEvent {
        let sample = detections
            .first()
            .map(|face| score_frame(&measure(face), self.gender));

        match self.collector.advance(self.config.cadence_ms, sample) {
            TickEvent::Holding { held_ms } => SessionEvent::AwaitingFace { held_ms },
            TickEvent::HoldReset => SessionEvent::FaceLost,
            TickEvent::Started => SessionEvent::WindowOpened,
            TickEvent::Sampling { remaining_ms } => SessionEvent::Countdown {
                remaining_ms,
                seconds: remaining_ms.div_ceil(1000),
            },
            TickEvent::Closed(outcome) => SessionEvent::WindowClosed(outcome),
        }
    }

    /// Drive the session against a landmark source until the window closes
    /// or the run is cancelled.
    pub async fn run<S: LandmarkSource>(
        &mut self,
        source: &mut S,
        cancel: &mut watch::Receiver<bool>,
    ) -> Result<ScanOutcome, ScanError> {
        let mut ticker = time::interval(Duration::from_millis(self.config.cadence_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cancel_open = true;

        loop {
            tokio::select! {
                cancelled = async { cancel.wait_for(|cancelled| *cancelled).await.map(|c| *c) }, if cancel_open => {
                    match cancelled {
                        Ok(_) => {
                            self.cancel();
                            info!("Scan cancelled, partial samples discarded");
                            return Ok(ScanOutcome::Cancelled);
                        }
                        // Sender gone; the scan can no longer be cancelled
                        Err(_) => cancel_open = false,
                    }
                }
                _ = ticker.tick() => {
                    let generation = self.collector.generation();
                    let detections = source.next_detections().await?;
                    // A model result that outlives the window it was sampled
                    // for must not leak into the next window.
                    if self.collector.generation() != generation {
                        debug!("Discarding detections from a closed window");
                        continue;
                    }

                    match self.step(&detections) {
                        SessionEvent::WindowClosed(WindowOutcome::Scores(window)) => {
                            return Ok(ScanOutcome::Completed(self.report(window)));
                        }
                        SessionEvent::WindowClosed(WindowOutcome::Insufficient { collected }) => {
                            return Ok(ScanOutcome::NoResult { collected });
                        }
                        event => debug!(?event, "Scan tick"),
                    }
                }
            }
        }
    }

    fn report(&self, window: WindowScores) -> ScanReport {
        let report = ScanReport {
            scan_id: Uuid::new_v4(),
            completed_at: Utc::now(),
            gender: self.gender,
            features: window.features,
            samples: window.samples,
            low_confidence_frames: window.low_confidence_frames,
        };
        info!(
            scan_id = %report.scan_id,
            samples = report.samples,
            "Scan completed"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_geometry::{mesh, BoundingBox, LandmarkSet, Point3, MESH_POINTS};

    fn plain_detection() -> FaceDetection {
        let mut points = vec![Point3::default(); MESH_POINTS];
        for i in mesh::LEFT_EYE {
            points[i] = Point3::new(30.0, 40.0, 0.0);
        }
        for i in mesh::RIGHT_EYE {
            points[i] = Point3::new(70.0, 40.0, 0.0);
        }
        points[mesh::FOREHEAD] = Point3::new(50.0, 20.0, 0.0);
        points[mesh::NOSE_BASE] = Point3::new(50.0, 70.0, 0.0);
        points[mesh::CHIN] = Point3::new(50.0, 120.0, 0.0);
        points[mesh::NOSE_TIP] = Point3::new(50.0, 60.0, 0.0);
        points[mesh::MOUTH_BOTTOM] = Point3::new(50.0, 90.0, 0.0);
        points[mesh::LEFT_CHEEK] = Point3::new(20.0, 55.0, 0.0);
        points[mesh::RIGHT_CHEEK] = Point3::new(80.0, 55.0, 0.0);
        points[mesh::LEFT_JAW] = Point3::new(10.0, 90.0, 0.0);
        points[mesh::RIGHT_JAW] = Point3::new(92.0, 90.0, 0.0);
        points[mesh::NOSE_LEFT] = Point3::new(36.0, 60.0, 0.0);
        points[mesh::NOSE_RIGHT] = Point3::new(64.0, 60.0, 0.0);
        FaceDetection {
            landmarks: LandmarkSet::new(points).unwrap(),
            bbox: BoundingBox::from_corners((0.0, 0.0), (100.0, 120.0)),
        }
    }

    #[test]
    fn test_step_gate_then_window() {
        let mut session = ScanSession::new(Gender::Male, ScanConfig::default());
        let face = [plain_detection()];

        for _ in 0..29 {
            let event = session.step(&face);
            assert!(matches!(event, SessionEvent::AwaitingFace { .. }));
        }
        assert_eq!(session.step(&face), SessionEvent::WindowOpened);
        assert_eq!(session.countdown_seconds(), Some(5));
    }

    #[test]
    fn test_step_empty_frame_resets_gate() {
        let mut session = ScanSession::new(Gender::Female, ScanConfig::default());
        let face = [plain_detection()];

        session.step(&face);
        assert_eq!(session.step(&[]), SessionEvent::FaceLost);
        assert_eq!(
            session.step(&face),
            SessionEvent::AwaitingFace { held_ms: 100 }
        );
    }

    #[test]
    fn test_only_first_detection_is_scored() {
        // Second face has wildly different geometry; if it were scored the
        // runs would diverge
        let mut single = ScanSession::new(Gender::Male, ScanConfig::default());
        let mut multi = ScanSession::new(Gender::Male, ScanConfig::default());

        let mut skewed = plain_detection();
        skewed.bbox = BoundingBox::from_corners((0.0, 0.0), (10.0, 10.0));

        let one = [plain_detection()];
        let two = [plain_detection(), skewed];

        let mut outcomes = Vec::new();
        for frames in [&one[..], &two[..]] {
            let session = if frames.len() == 1 { &mut single } else { &mut multi };
            for _ in 0..30 {
                session.step(frames);
            }
            for _ in 0..49 {
                session.step(frames);
            }
            match session.step(frames) {
                SessionEvent::WindowClosed(outcome) => outcomes.push(outcome),
                other => panic!("expected close, got {other:?}"),
            }
        }
        assert_eq!(outcomes[0], outcomes[1]);
    }

    #[test]
    fn test_cancel_mid_window() {
        let mut session = ScanSession::new(Gender::Male, ScanConfig::default());
        let face = [plain_detection()];
        for _ in 0..40 {
            session.step(&face);
        }
        assert!(session.countdown_seconds().is_some());
        session.cancel();
        assert_eq!(session.countdown_seconds(), None);
    }
}
