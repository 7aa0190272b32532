//! Construction parameters for a bounded array.

use crate::error::LimitedVecError;
use crate::policy::GrowthPolicy;

/// Configuration for a bounded array.
///
/// Controls the element ceiling, the size of the first allocation, and the
/// growth policy. Validated at construction; all values are immutable after
/// creation.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitedVecConfig {
    /// Hard ceiling on the number of elements.
    ///
    /// Default: `i32::MAX` (2_147_483_647).
    pub max_capacity: usize,

    /// Number of slots allocated up front.
    ///
    /// Default: `min(10, max_capacity)`. Must not exceed `max_capacity`.
    pub initial_capacity: usize,

    /// How the backing block grows when it runs out of room.
    pub policy: GrowthPolicy,
}

impl LimitedVecConfig {
    /// Default ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = i32::MAX as usize;

    /// Default number of slots allocated up front.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Create a config for the given ceiling.
    ///
    /// The initial capacity is the default, clamped to the ceiling; the
    /// growth policy is [`GrowthPolicy::default`].
    pub fn new(max_capacity: usize) -> Self {
        Self {
            max_capacity,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY.min(max_capacity),
            policy: GrowthPolicy::default(),
        }
    }

    /// Replace the initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Replace the growth policy.
    pub fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check `initial_capacity <= max_capacity` and the policy ratios.
    pub fn validate(&self) -> Result<(), LimitedVecError> {
        if self.initial_capacity > self.max_capacity {
            return Err(LimitedVecError::InvalidCapacity {
                max_capacity: self.max_capacity,
                initial_capacity: self.initial_capacity,
            });
        }
        self.policy.validate()
    }
}

impl Default for LimitedVecConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = LimitedVecConfig::default();
        assert_eq!(config.max_capacity, 2_147_483_647);
        assert_eq!(config.initial_capacity, 10);
        assert_eq!(config.policy, GrowthPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn small_ceiling_clamps_initial_capacity() {
        let config = LimitedVecConfig::new(4);
        assert_eq!(config.initial_capacity, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_ceiling_is_valid() {
        let config = LimitedVecConfig::new(0);
        assert_eq!(config.initial_capacity, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn initial_above_max_rejected() {
        let err = LimitedVecConfig::new(3)
            .with_initial_capacity(4)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            LimitedVecError::InvalidCapacity {
                max_capacity: 3,
                initial_capacity: 4,
            }
        );
    }

    #[test]
    fn invalid_policy_rejected() {
        let config = LimitedVecConfig::new(10).with_policy(GrowthPolicy::new(0.2, 2.0));
        assert!(matches!(
            config.validate(),
            Err(LimitedVecError::InvalidPolicy { .. })
        ));
    }
}
