//! Explicit load-state machine for the progress and refresh indicators.
//!
//! The shell's only mutable state is the current page-load cycle. Rather
//! than toggling indicator flags ad hoc inside callbacks, the transitions
//! live in a pure reducer so they are testable without a live surface.

/// Where the current page load stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// A load-cycle event delivered by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    /// The surface started loading a page.
    Started,
    /// The surface finished loading and the document became ready.
    Finished,
    /// The load could not complete.
    Failed,
}

/// Visible side effects the app must apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    /// Desired visibility of the progress indicator.
    pub progress_visible: bool,
    /// Whether to clear the refresh gesture's "in progress" visual state.
    pub clear_refresh: bool,
    /// Whether to replace the displayed content with the offline page.
    pub show_fallback: bool,
}

impl LoadState {
    /// Apply a load event, producing the next state and its effects.
    ///
    /// Transitions do not depend on the prior state: a failure always ends
    /// the indicator cycle and shows the fallback, whatever came before.
    pub fn apply(self, event: LoadEvent) -> (LoadState, Effects) {
        match event {
            LoadEvent::Started => (
                LoadState::Loading,
                Effects {
                    progress_visible: true,
                    clear_refresh: false,
                    show_fallback: false,
                },
            ),
            LoadEvent::Finished => (
                LoadState::Loaded,
                Effects {
                    progress_visible: false,
                    clear_refresh: true,
                    show_fallback: false,
                },
            ),
            LoadEvent::Failed => (
                LoadState::Failed,
                Effects {
                    progress_visible: false,
                    clear_refresh: true,
                    show_fallback: true,
                },
            ),
        }
    }
}
