//! Lowest-quartile trimmed mean

/// Windows with fewer samples than this are reported as insufficient.
///
/// Below four samples the quartile drop can consume the whole window
/// (`ceil(1/4) = 1` leaves nothing to average).
pub const MIN_WINDOW_SAMPLES: usize = 4;

/// Mean after discarding the lowest `ceil(n/4)` values.
///
/// Single bad frames (blinks, partial occlusion) land in the dropped
/// quartile instead of dragging the window score down. Returns `None` for
/// windows below [`MIN_WINDOW_SAMPLES`].
pub fn quartile_trimmed_mean(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < MIN_WINDOW_SAMPLES {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let drop = n.div_ceil(4);
    let kept = &sorted[drop..];
    Some(kept.iter().sum::<f64>() / kept.len() as f64)
}
