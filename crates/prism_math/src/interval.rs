#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Copy of this interval with a new upper bound.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Every distance in front of a ray origin, excluding the origin itself
    /// and anything closer than `epsilon`.
    pub fn ahead(epsilon: f32) -> Interval {
        Interval::new(epsilon, f32::INFINITY)
    }

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.25), 0.25);
        assert_eq!(Interval::UNIT.clamp(1.0), 1.0);
        assert_eq!(Interval::UNIT.clamp(3.0), 1.0);
    }

    #[test]
    fn test_interval_ahead() {
        let ahead = Interval::ahead(1e-5);

        assert!(!ahead.surrounds(0.0));
        assert!(!ahead.surrounds(1e-5));
        assert!(ahead.surrounds(1e-4));
        assert!(ahead.surrounds(1e10));

        let narrowed = ahead.with_max(2.0);
        assert!(narrowed.surrounds(1.5));
        assert!(!narrowed.surrounds(2.0));
        assert_eq!(narrowed.min, ahead.min);
    }
}
