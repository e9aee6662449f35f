//! Scan session configuration

use score_aggregator::WindowConfig;
use serde::{Deserialize, Serialize};

/// Session timing configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Sampling cadence (milliseconds between frames)
    pub cadence_ms: u64,
    /// Collection window parameters
    pub window: WindowConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            cadence_ms: 100,
            window: WindowConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Compressed timings for tests and demos
    pub fn fast() -> Self {
        Self {
            cadence_ms: 50,
            window: WindowConfig {
                hold_ms: 300,
                window_ms: 500,
                min_samples: 4,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = ScanConfig::default();
        assert_eq!(config.cadence_ms, 100);
        assert_eq!(config.window.hold_ms, 3000);
        assert_eq!(config.window.window_ms, 5000);
    }

    #[test]
    fn test_fast_preserves_minimum_samples() {
        let config = ScanConfig::fast();
        assert!(config.window.window_ms / config.cadence_ms >= config.window.min_samples as u64);
    }
}
