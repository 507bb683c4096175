//! Construction parameters and the growth rule.

use crate::error::RingError;

/// Backing size used by `RingBuffer::new` and as the growth floor.
pub const DEFAULT_CAPACITY: usize = 8;

/// Parameters controlling ring buffer construction and growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    /// Initial backing size (default: 8). Zero is allowed.
    pub capacity: usize,
    /// Smallest capacity a growable ring grows to (default: 8).
    pub default_capacity: usize,
}

impl RingConfig {
    /// Create a configuration with the default capacities.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the initial backing size.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the growth floor.
    pub fn with_default_capacity(mut self, default_capacity: usize) -> Self {
        self.default_capacity = default_capacity;
        self
    }

    /// Checks that the configuration can drive a ring buffer.
    ///
    /// # Errors
    /// Returns [`RingError::InvalidConfig`] if `default_capacity` is zero.
    pub fn validate(&self) -> Result<(), RingError> {
        if self.default_capacity == 0 {
            return Err(RingError::InvalidConfig(
                "default_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Capacity a full growable ring moves to: 1.5x, never below the floor,
/// always strictly larger than `current`.
#[inline]
pub fn grown_capacity(current: usize, default_capacity: usize) -> usize {
    let scaled = current.saturating_mul(3) / 2;
    scaled
        .max(default_capacity)
        .max(current.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RingConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.default_capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = RingConfig::new().with_capacity(0).with_default_capacity(3);
        assert_eq!(config.capacity, 0);
        assert_eq!(config.default_capacity, 3);
    }

    #[test]
    fn zero_default_capacity_rejected() {
        let err = RingConfig::new().with_default_capacity(0).validate();
        assert!(matches!(err, Err(RingError::InvalidConfig(_))));
    }

    #[test]
    fn growth_sequence() {
        assert_eq!(grown_capacity(0, 8), 8);
        assert_eq!(grown_capacity(8, 8), 12);
        assert_eq!(grown_capacity(12, 8), 18);
        assert_eq!(grown_capacity(3, 8), 8);
    }

    #[test]
    fn growth_is_strict_for_tiny_capacities() {
        assert_eq!(grown_capacity(1, 1), 2);
        assert_eq!(grown_capacity(2, 1), 3);
        assert_eq!(grown_capacity(usize::MAX, 1), usize::MAX);
    }
}
