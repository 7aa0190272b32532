//! Capacity growth policy.
//!
//! Growth is geometric-like (a fixed headroom ratio on top of the required
//! occupancy) and bounded by the ceiling. Once the headroom-padded target
//! gets close enough to the ceiling, the policy commits to the ceiling
//! outright so a list approaching its limit from below does not reallocate
//! over and over in small steps.

use crate::error::LimitedVecError;

/// Tunables for deciding how far to grow the backing block.
///
/// Validated at container construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthPolicy {
    /// Extra slots allocated on growth, as a fraction of the required
    /// occupancy. Rounded half away from zero.
    ///
    /// Default: 0.2. Must be finite and non-negative.
    pub headroom_ratio: f64,

    /// When `optimal / max_capacity` reaches this ratio, grow straight to
    /// `max_capacity` (a "full extension").
    ///
    /// Default: 0.9. Must be finite and in `(0, 1]`.
    pub full_extension_threshold: f64,
}

impl GrowthPolicy {
    /// Default headroom: 20% on top of the required occupancy.
    pub const DEFAULT_HEADROOM_RATIO: f64 = 0.2;

    /// Default full-extension cutoff: 90% of the ceiling.
    pub const DEFAULT_FULL_EXTENSION_THRESHOLD: f64 = 0.9;

    /// Create a policy from explicit ratios. Call [`validate`](Self::validate)
    /// before use; the container does this on construction.
    pub const fn new(headroom_ratio: f64, full_extension_threshold: f64) -> Self {
        Self {
            headroom_ratio,
            full_extension_threshold,
        }
    }

    /// Check both ratios are inside their accepted domain.
    pub fn validate(&self) -> Result<(), LimitedVecError> {
        if !self.headroom_ratio.is_finite() || self.headroom_ratio < 0.0 {
            return Err(LimitedVecError::InvalidPolicy {
                reason: format!(
                    "headroom ratio must be finite and >= 0, got {}",
                    self.headroom_ratio
                ),
            });
        }
        let threshold = self.full_extension_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(LimitedVecError::InvalidPolicy {
                reason: format!("full extension threshold must be in (0, 1], got {threshold}"),
            });
        }
        Ok(())
    }

    /// `required` plus its rounded headroom, saturating at `usize::MAX`.
    pub fn optimal_capacity(&self, required: usize) -> usize {
        // f64 -> usize casts saturate, so a huge product cannot wrap.
        let headroom = (required as f64 * self.headroom_ratio).round() as usize;
        required.saturating_add(headroom)
    }

    /// Whether growing to `optimal` slots is close enough to
    /// `max_capacity` to jump straight to the ceiling.
    ///
    /// Also true whenever `optimal > max_capacity`, since that ratio is at
    /// least 1.
    pub fn is_full_extension(&self, optimal: usize, max_capacity: usize) -> bool {
        if max_capacity == 0 {
            return true;
        }
        optimal as f64 / max_capacity as f64 >= self.full_extension_threshold
    }

    /// New block length for a container that must hold `required` elements
    /// under a ceiling of `max_capacity`.
    ///
    /// The result never exceeds `max_capacity`, and is at least `required`
    /// whenever `required <= max_capacity`.
    pub fn target_capacity(&self, required: usize, max_capacity: usize) -> usize {
        let optimal = self.optimal_capacity(required);
        if self.is_full_extension(optimal, max_capacity) {
            max_capacity
        } else {
            optimal
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_HEADROOM_RATIO,
            Self::DEFAULT_FULL_EXTENSION_THRESHOLD,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert!(GrowthPolicy::default().validate().is_ok());
    }

    #[test]
    fn adds_twenty_percent_headroom() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.target_capacity(10, 1000), 12);
        assert_eq!(policy.target_capacity(8, 1000), 10);
        assert_eq!(policy.target_capacity(100, 1000), 120);
    }

    #[test]
    fn headroom_rounds_half_away_from_zero() {
        let policy = GrowthPolicy::default();
        // 2 * 0.2 = 0.4 rounds down, 3 * 0.2 = 0.6 rounds up.
        assert_eq!(policy.optimal_capacity(2), 2);
        assert_eq!(policy.optimal_capacity(3), 4);
        let half = GrowthPolicy::new(0.5, 0.9);
        assert_eq!(half.optimal_capacity(5), 8);
    }

    #[test]
    fn near_ceiling_commits_to_max() {
        let policy = GrowthPolicy::default();
        // 95 + 19 = 114, 114 / 100 >= 0.9.
        assert_eq!(policy.target_capacity(95, 100), 100);
        // 75 + 15 = 90, exactly at the threshold.
        assert_eq!(policy.target_capacity(75, 100), 100);
        // 74 + 15 = 89, just under it.
        assert_eq!(policy.target_capacity(74, 100), 89);
    }

    #[test]
    fn optimal_past_ceiling_clamps_to_max() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.target_capacity(3, 3), 3);
        assert_eq!(policy.target_capacity(1, 1), 1);
    }

    #[test]
    fn zero_ceiling_targets_zero() {
        assert_eq!(GrowthPolicy::default().target_capacity(0, 0), 0);
    }

    #[test]
    fn huge_request_saturates() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.optimal_capacity(usize::MAX), usize::MAX);
        assert_eq!(policy.target_capacity(usize::MAX, usize::MAX), usize::MAX);
    }

    #[test]
    fn rejects_negative_headroom() {
        let err = GrowthPolicy::new(-0.1, 0.9).validate().unwrap_err();
        assert!(matches!(err, LimitedVecError::InvalidPolicy { .. }));
    }

    #[test]
    fn rejects_nan_and_out_of_range_threshold() {
        assert!(GrowthPolicy::new(0.2, f64::NAN).validate().is_err());
        assert!(GrowthPolicy::new(0.2, 0.0).validate().is_err());
        assert!(GrowthPolicy::new(0.2, 1.5).validate().is_err());
        assert!(GrowthPolicy::new(f64::INFINITY, 0.9).validate().is_err());
        assert!(GrowthPolicy::new(0.0, 1.0).validate().is_ok());
    }

    #[test]
    fn zero_headroom_grows_exactly() {
        let policy = GrowthPolicy::new(0.0, 1.0);
        assert_eq!(policy.target_capacity(42, 1000), 42);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn target_never_exceeds_ceiling(
                max in 0usize..100_000,
                required_frac in 0.0f64..=1.0,
            ) {
                let required = (max as f64 * required_frac) as usize;
                let target = GrowthPolicy::default().target_capacity(required, max);
                prop_assert!(target <= max);
            }

            #[test]
            fn target_covers_required(
                max in 1usize..100_000,
                required_frac in 0.0f64..=1.0,
                headroom in 0.0f64..2.0,
                threshold in 0.01f64..=1.0,
            ) {
                let required = (max as f64 * required_frac) as usize;
                let policy = GrowthPolicy::new(headroom, threshold);
                prop_assert!(policy.target_capacity(required, max) >= required);
            }

            #[test]
            fn below_threshold_is_exact_optimal(
                max in 100usize..100_000,
                required in 0usize..50,
            ) {
                let policy = GrowthPolicy::default();
                let optimal = policy.optimal_capacity(required);
                prop_assume!(!policy.is_full_extension(optimal, max));
                prop_assert_eq!(policy.target_capacity(required, max), optimal);
            }
        }
    }
}
