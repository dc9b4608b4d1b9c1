/// Options for a scroll-triggered reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// Stop observing after the first entry.
    pub once: bool,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            once: true,
        }
    }
}

impl ViewportOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }
}

/// Host capability that reports when an element scrolls into view.
///
/// The callback receives the new visibility. With `once` it is called a single
/// time with `true`; otherwise it follows every enter and leave.
pub trait ViewportObserver {
    type Handle;

    fn on_enter(
        &self,
        element_id: &str,
        callback: Box<dyn FnMut(bool)>,
        options: ViewportOptions,
    ) -> Option<Self::Handle>;
}

/// Turns raw intersection notifications into visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    once: bool,
    in_view: bool,
    done: bool,
}

impl RevealLatch {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            in_view: false,
            done: false,
        }
    }

    /// Feed one intersection sample. Returns the new visibility when it changed.
    pub fn observe(&mut self, intersecting: bool) -> Option<bool> {
        if self.done || intersecting == self.in_view {
            return None;
        }
        if !intersecting && self.once {
            return None;
        }
        self.in_view = intersecting;
        if intersecting && self.once {
            self.done = true;
        }
        Some(intersecting)
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// A `once` latch that already fired no longer needs notifications.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_latch_reports_first_entry_only() {
        let mut latch = RevealLatch::new(true);
        assert_eq!(latch.observe(false), None);
        assert_eq!(latch.observe(true), Some(true));
        assert!(latch.is_done());
        assert_eq!(latch.observe(false), None);
        assert_eq!(latch.observe(true), None);
        assert!(latch.in_view());
    }

    #[test]
    fn repeating_latch_tracks_enter_and_leave() {
        let mut latch = RevealLatch::new(false);
        assert_eq!(latch.observe(true), Some(true));
        assert_eq!(latch.observe(true), None);
        assert_eq!(latch.observe(false), Some(false));
        assert_eq!(latch.observe(true), Some(true));
        assert!(!latch.is_done());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ViewportOptions::threshold(1.5).threshold, 1.0);
        assert_eq!(ViewportOptions::threshold(-0.2).threshold, 0.0);
        assert!(ViewportOptions::threshold(0.2).once);
    }
}
