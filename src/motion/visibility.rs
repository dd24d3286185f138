/// One-shot latch over viewport intersection ratios.
///
/// Starts unfired and fires the first time an observed ratio meets the
/// threshold. Once fired it stays fired for the rest of its lifetime - a
/// latch that is never offered a record (element never attached, observer
/// unavailable) simply stays unfired, which is a valid terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    fired: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Offer an intersection ratio to the latch.
    ///
    /// Returns `true` only on the firing transition, so the caller can
    /// release the observation subscription exactly once.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.fired {
            return false;
        }
        if ratio >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.fired
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut latch = VisibilityLatch::new(0.15);
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.1));
        assert!(!latch.observe(0.149));
        assert!(!latch.is_visible());
    }

    #[test]
    fn fires_once_at_threshold_and_stays_fired() {
        let mut latch = VisibilityLatch::new(0.15);
        assert!(!latch.observe(0.05));
        // 0.2 >= 0.15 is the firing transition
        assert!(latch.observe(0.2));
        assert!(latch.is_visible());
        // later records never re-fire, even ones back below the threshold
        assert!(!latch.observe(0.9));
        assert!(!latch.observe(0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn exact_threshold_counts() {
        let mut latch = VisibilityLatch::new(0.15);
        assert!(latch.observe(0.15));
        assert!(latch.is_visible());
    }

    #[test]
    fn zero_threshold_fires_on_any_record() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(latch.observe(0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn unobserved_latch_is_a_valid_terminal_state() {
        let latch = VisibilityLatch::new(0.1);
        assert!(!latch.is_visible());
    }
}
