//! One-shot latch over repeatable viewport-intersection callbacks.
//!
//! An `IntersectionObserver` keeps reporting on every enter and exit; the
//! counters only care about the first time their card becomes visible. The
//! latch is a two-state machine, `Unobserved -> Visible`, with `Visible`
//! terminal.

/// Fraction of the element that must be in view before a counter starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityLatch {
    #[default]
    Unobserved,
    Visible,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::Unobserved
    }

    /// Feed one intersection report. Returns `true` exactly once: the first
    /// time `ratio` meets `threshold`. Later reports, including exits and
    /// re-entries, return `false`.
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        match self {
            Self::Unobserved if ratio >= threshold => {
                *self = Self::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_crossing() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.observe(0.0, VISIBILITY_THRESHOLD));
        assert!(latch.observe(0.5, VISIBILITY_THRESHOLD));
        assert!(!latch.observe(0.9, VISIBILITY_THRESHOLD));
        assert!(latch.is_visible());
    }

    #[test]
    fn never_fires_below_threshold() {
        let mut latch = VisibilityLatch::new();
        for _ in 0..100 {
            assert!(!latch.observe(0.09, 0.1));
        }
        assert!(!latch.is_visible());
    }

    #[test]
    fn exact_threshold_counts() {
        let mut latch = VisibilityLatch::new();
        assert!(latch.observe(0.1, 0.1));
    }

    #[test]
    fn stays_latched_across_exit_and_reentry() {
        let mut latch = VisibilityLatch::new();
        assert!(latch.observe(0.8, 0.1));
        // element scrolls out, then back in
        assert!(!latch.observe(0.0, 0.1));
        assert!(!latch.observe(0.8, 0.1));
        assert!(latch.is_visible());
    }
}
