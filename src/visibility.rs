//! One-shot viewport visibility tracking.
//!
//! The browser side (an `IntersectionObserver`) only feeds ratios in; every
//! decision about whether an element counts as revealed lives here.

pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Unobserved,
    Observing,
    Revealed,
}

/// Result of feeding an intersection event to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// The element just crossed the threshold; the caller should stop watching it.
    Revealed,
}

#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f64,
    state: VisibilityState,
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl VisibilityObserver {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            state: VisibilityState::Unobserved,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Revealed
    }

    /// Called once the element exists. Without viewport observation support the
    /// element is revealed right away so content is never stuck hidden.
    pub fn attach(&mut self, supported: bool) -> VisibilityState {
        if self.state == VisibilityState::Unobserved {
            self.state = if supported {
                VisibilityState::Observing
            } else {
                log::debug!("viewport observation unsupported, revealing immediately");
                VisibilityState::Revealed
            };
        }
        self.state
    }

    /// Feeds one intersection entry. The browser reports `intersecting` for an
    /// element touching the viewport edge even at a zero ratio.
    pub fn on_intersection(&mut self, intersecting: bool, ratio: f64) -> Transition {
        if self.state != VisibilityState::Observing {
            return Transition::Ignored;
        }
        if intersecting && ratio >= self.threshold {
            self.state = VisibilityState::Revealed;
            Transition::Revealed
        } else {
            Transition::Ignored
        }
    }

    /// Feeds a batch of `(intersecting, ratio)` entries from one observer
    /// callback. Entries after the one that reveals the element are dropped.
    pub fn on_entries<I>(&mut self, entries: I) -> Transition
    where
        I: IntoIterator<Item = (bool, f64)>,
    {
        // the observer only fires once the element is attached
        self.attach(true);
        for (intersecting, ratio) in entries {
            if self.on_intersection(intersecting, ratio) == Transition::Revealed {
                return Transition::Revealed;
            }
        }
        Transition::Ignored
    }

    /// Element unmounted. A revealed element stays revealed.
    pub fn detach(&mut self) {
        if self.state == VisibilityState::Observing {
            self.state = VisibilityState::Unobserved;
        }
    }
}

/// The element handed to the browser observer. Without support nothing is
/// observed, since creating the observer would fail.
pub fn observed_element<T>(supported: bool, element: Option<T>) -> Option<T> {
    element.filter(|_| supported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_and_unobserved() {
        let obs = VisibilityObserver::default();
        assert_eq!(obs.state(), VisibilityState::Unobserved);
        assert!(!obs.is_visible());
        assert_eq!(obs.threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_events_without_attached_element_do_nothing() {
        let mut obs = VisibilityObserver::default();
        assert_eq!(obs.on_intersection(true, 1.0), Transition::Ignored);
        assert!(!obs.is_visible());
    }

    #[test]
    fn test_reveals_once_threshold_reached() {
        let mut obs = VisibilityObserver::new(0.25);
        obs.attach(true);
        assert_eq!(obs.on_intersection(true, 0.1), Transition::Ignored);
        assert!(!obs.is_visible());
        assert_eq!(obs.on_intersection(true, 0.25), Transition::Revealed);
        assert!(obs.is_visible());
    }

    #[test]
    fn test_never_hides_again() {
        let mut obs = VisibilityObserver::default();
        obs.attach(true);
        obs.on_intersection(true, 0.5);
        for (intersecting, ratio) in [(false, 0.0), (true, 0.05), (false, 0.0)] {
            assert_eq!(obs.on_intersection(intersecting, ratio), Transition::Ignored);
            assert!(obs.is_visible());
        }
        obs.detach();
        assert!(obs.is_visible());
        // re-attaching keeps the terminal state
        assert_eq!(obs.attach(true), VisibilityState::Revealed);
    }

    #[test]
    fn test_fail_open_when_unsupported() {
        let mut obs = VisibilityObserver::default();
        assert_eq!(obs.attach(false), VisibilityState::Revealed);
        assert!(obs.is_visible());
    }

    #[test]
    fn test_detach_while_observing() {
        let mut obs = VisibilityObserver::default();
        obs.attach(true);
        obs.detach();
        assert_eq!(obs.state(), VisibilityState::Unobserved);
        assert_eq!(obs.on_intersection(true, 1.0), Transition::Ignored);
    }

    #[test]
    fn test_zero_threshold_reveals_on_edge_contact() {
        let mut obs = VisibilityObserver::new(0.0);
        obs.attach(true);
        assert_eq!(obs.on_intersection(false, 0.0), Transition::Ignored);
        assert_eq!(obs.on_intersection(true, 0.0), Transition::Revealed);
    }

    #[test]
    fn test_batch_stops_at_first_reveal() {
        let mut obs = VisibilityObserver::new(0.5);
        let batch = [(true, 0.2), (true, 0.6), (false, 0.0)];
        assert_eq!(obs.on_entries(batch), Transition::Revealed);
        assert!(obs.is_visible());
        // later callbacks, even below threshold, change nothing
        assert_eq!(obs.on_entries([(true, 0.9)]), Transition::Ignored);
        assert_eq!(obs.on_entries([(false, 0.0)]), Transition::Ignored);
        assert!(obs.is_visible());
    }

    #[test]
    fn test_batch_below_threshold_keeps_observing() {
        let mut obs = VisibilityObserver::default();
        assert_eq!(obs.on_entries([(false, 0.0), (true, 0.05)]), Transition::Ignored);
        assert_eq!(obs.state(), VisibilityState::Observing);
    }

    #[test]
    fn test_unsupported_host_observes_nothing_and_reveals_on_mount() {
        assert_eq!(observed_element(false, Some("node")), None);
        assert_eq!(observed_element(true, Some("node")), Some("node"));
        assert_eq!(observed_element::<&str>(true, None), None);

        let mut obs = VisibilityObserver::default();
        assert_eq!(obs.attach(false), VisibilityState::Revealed);
        // no observer exists, so no entries can arrive; a stray batch is inert
        assert_eq!(obs.on_entries([(true, 1.0)]), Transition::Ignored);
        assert!(obs.is_visible());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(VisibilityObserver::new(4.0).threshold(), 1.0);
        assert_eq!(VisibilityObserver::new(-1.0).threshold(), 0.0);
        assert_eq!(VisibilityObserver::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
    }
}
