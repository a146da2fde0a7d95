//! Display-side confidence rescaling for classifier probabilities.
//!
//! This sharpens and inflates the distribution; it does not calibrate it.
//! Only applied when `PATHWISE_CONFIDENCE_BOOST` is on, and the raw
//! probability is always shown next to the boosted figure.

use serde::Serialize;

/// Softmax temperature applied to probabilities (not logits).
pub const BOOST_TEMPERATURE: f64 = 0.25;
/// Minimum share the top class is scaled up to.
pub const CONFIDENCE_FLOOR: f64 = 0.75;
/// No class is displayed above this share.
pub const CONFIDENCE_CEILING: f64 = 0.984;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostedConfidence {
    /// Per-class percentages, same order as the input.
    pub percentages: Vec<f64>,
    /// The top class was below the floor and every entry was scaled up.
    pub floor_applied: bool,
    /// At least one entry was cut down to the ceiling.
    pub clipped: bool,
}

impl BoostedConfidence {
    /// Percentages sum to 100 only when neither post-hoc step ran.
    pub fn preserves_total(&self) -> bool {
        !self.floor_applied && !self.clipped
    }
}

/// Sharpens `probs` with `exp(p / T)` normalization, lifts the top class to
/// the floor if needed, clips at the ceiling and returns percentages.
pub fn boost_confidence(probs: &[f64]) -> BoostedConfidence {
    if probs.is_empty() {
        return BoostedConfidence {
            percentages: Vec::new(),
            floor_applied: false,
            clipped: false,
        };
    }

    let mut shares = temperature_softmax(probs, BOOST_TEMPERATURE);

    let top = shares.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let floor_applied = top > 0.0 && top < CONFIDENCE_FLOOR;
    if floor_applied {
        let factor = CONFIDENCE_FLOOR / top;
        for share in shares.iter_mut() {
            *share *= factor;
        }
    }

    let mut clipped = false;
    for share in shares.iter_mut() {
        if *share > CONFIDENCE_CEILING {
            *share = CONFIDENCE_CEILING;
            clipped = true;
        }
    }

    BoostedConfidence {
        percentages: shares.into_iter().map(|s| s * 100.0).collect(),
        floor_applied,
        clipped,
    }
}

/// Numerically stable softmax of `values / temperature`.
/// Falls back to a uniform distribution if the sum is degenerate.
pub fn temperature_softmax(values: &[f64], temperature: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let scaled: Vec<f64> = values.iter().map(|&v| v / temperature).collect();
    let max_val = scaled.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exp_vals: Vec<f64> = scaled.iter().map(|&x| (x - max_val).exp()).collect();
    let total: f64 = exp_vals.iter().sum();

    if total == 0.0 || !total.is_finite() {
        let uniform = 1.0 / values.len() as f64;
        return vec![uniform; values.len()];
    }

    exp_vals.into_iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(values: &[f64]) -> f64 {
        values.iter().sum()
    }

    #[test]
    fn test_confident_vector_sums_to_100() {
        let boosted = boost_confidence(&[0.9, 0.05, 0.05]);
        assert!(boosted.preserves_total());
        assert!((sum(&boosted.percentages) - 100.0).abs() < 1e-9);
        // exp(3.4) / (exp(3.4) + 2) ≈ 0.9374
        assert!((boosted.percentages[0] - 93.74).abs() < 0.01);
    }

    #[test]
    fn test_sharpening_preserves_order() {
        let boosted = boost_confidence(&[0.2, 0.5, 0.3]);
        let p = &boosted.percentages;
        assert!(p[1] > p[2] && p[2] > p[0]);
    }

    #[test]
    fn test_flat_vector_lifted_to_floor() {
        let boosted = boost_confidence(&[0.25, 0.25, 0.25, 0.25]);
        assert!(boosted.floor_applied);
        assert!(!boosted.preserves_total());
        for p in &boosted.percentages {
            assert!((p - 75.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_floor_scales_top_to_exactly_75() {
        let boosted = boost_confidence(&[0.4, 0.35, 0.25]);
        assert!(boosted.floor_applied);
        let top = boosted
            .percentages
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((top - 75.0).abs() < 1e-9);
        assert!(sum(&boosted.percentages) > 100.0);
    }

    #[test]
    fn test_no_entry_exceeds_ceiling() {
        let boosted = boost_confidence(&[1.0, 0.0, 0.0, 0.0, 0.0]);
        for p in &boosted.percentages {
            assert!(*p <= CONFIDENCE_CEILING * 100.0 + 1e-9);
        }
    }

    #[test]
    fn test_ceiling_clips_out_of_range_input() {
        // Inputs outside [0, 1] can sharpen past the ceiling.
        let boosted = boost_confidence(&[3.0, 0.0]);
        assert!(boosted.clipped);
        assert!((boosted.percentages[0] - 98.4).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let boosted = boost_confidence(&[]);
        assert!(boosted.percentages.is_empty());
        assert!(boosted.preserves_total());
    }

    #[test]
    fn test_softmax_degenerate_falls_back_to_uniform() {
        let out = temperature_softmax(&[f64::NAN, 1.0], 0.25);
        assert_eq!(out, vec![0.5, 0.5]);
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let out = temperature_softmax(&[1.0, 2.0, 3.0], 1.0);
        assert!((sum(&out) - 1.0).abs() < 1e-12);
    }
}
