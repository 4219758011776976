//! Host lifecycle bridge.
//!
//! Mirrors the host application's foreground/background transitions 1:1
//! onto the browser surface's resume/pause primitives, and decides what a
//! back request does: step the in-surface history, or fall through to the
//! default host behavior (exiting the shell).

use explorer_webview::BrowserSurface;
use tracing::debug;

/// The two host-driven lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Foregrounded,
    Backgrounded,
}

/// Outcome of a back-request event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackDecision {
    /// The request was consumed: the surface stepped one history entry back.
    Consumed,
    /// No in-surface history; the request falls through to the host default.
    Forwarded,
}

/// Tracks the host phase and forwards transitions to the surface.
#[derive(Debug)]
pub struct LifecycleBridge {
    phase: Phase,
}

impl LifecycleBridge {
    /// A freshly launched shell starts foregrounded.
    pub fn new() -> Self {
        Self {
            phase: Phase::Foregrounded,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply a host foreground/background transition. Redundant
    /// notifications (the host repeating the current phase) are ignored so
    /// the surface sees each transition exactly once.
    pub fn set_foregrounded(&mut self, surface: &mut dyn BrowserSurface, foregrounded: bool) {
        let next = if foregrounded {
            Phase::Foregrounded
        } else {
            Phase::Backgrounded
        };
        if next == self.phase {
            return;
        }
        self.phase = next;
        match next {
            Phase::Foregrounded => {
                debug!("host resumed: resuming surface");
                surface.resume();
            }
            Phase::Backgrounded => {
                debug!("host paused: suspending surface");
                surface.pause();
            }
        }
    }

    /// Decide a back-request event: consume it by stepping the in-surface
    /// history if there is any, otherwise forward it unconsumed.
    pub fn back_request(surface: &mut dyn BrowserSurface) -> BackDecision {
        if surface.can_go_back() {
            surface.go_back();
            BackDecision::Consumed
        } else {
            BackDecision::Forwarded
        }
    }
}

impl Default for LifecycleBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records surface calls; history depth is injectable.
    #[derive(Default)]
    struct MockSurface {
        history_depth: usize,
        loads: Vec<String>,
        back_steps: usize,
        resumes: usize,
        pauses: usize,
    }

    impl BrowserSurface for MockSurface {
        fn load(&mut self, url: &str) {
            self.loads.push(url.to_string());
        }

        fn can_go_back(&self) -> bool {
            self.history_depth > 1
        }

        fn go_back(&mut self) -> bool {
            if self.history_depth > 1 {
                self.history_depth -= 1;
                self.back_steps += 1;
                true
            } else {
                false
            }
        }

        fn resume(&mut self) {
            self.resumes += 1;
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[test]
    fn back_with_history_is_consumed_and_steps_once() {
        let mut surface = MockSurface {
            history_depth: 3,
            ..Default::default()
        };
        assert_eq!(
            LifecycleBridge::back_request(&mut surface),
            BackDecision::Consumed
        );
        assert_eq!(surface.back_steps, 1);
        assert_eq!(surface.history_depth, 2);
    }

    #[test]
    fn back_without_history_is_forwarded_unconsumed() {
        let mut surface = MockSurface {
            history_depth: 1,
            ..Default::default()
        };
        assert_eq!(
            LifecycleBridge::back_request(&mut surface),
            BackDecision::Forwarded
        );
        assert_eq!(surface.back_steps, 0);
    }

    #[test]
    fn background_then_foreground_mirrors_pause_resume() {
        let mut bridge = LifecycleBridge::new();
        let mut surface = MockSurface::default();

        bridge.set_foregrounded(&mut surface, false);
        assert_eq!(bridge.phase(), Phase::Backgrounded);
        assert_eq!(surface.pauses, 1);
        assert_eq!(surface.resumes, 0);

        bridge.set_foregrounded(&mut surface, true);
        assert_eq!(bridge.phase(), Phase::Foregrounded);
        assert_eq!(surface.resumes, 1);
    }

    #[test]
    fn redundant_transitions_are_ignored() {
        let mut bridge = LifecycleBridge::new();
        let mut surface = MockSurface::default();

        // Already foregrounded at launch.
        bridge.set_foregrounded(&mut surface, true);
        assert_eq!(surface.resumes, 0);

        bridge.set_foregrounded(&mut surface, false);
        bridge.set_foregrounded(&mut surface, false);
        assert_eq!(surface.pauses, 1);
    }
}
