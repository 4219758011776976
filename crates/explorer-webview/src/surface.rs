//! Narrow interface over the host browser-engine capability.
//!
//! The shell only configures the engine, it never implements one. Keeping
//! this seam small lets the lifecycle and back-navigation logic run against
//! a mock in tests, and lets another platform's web component slot in.

/// The browser-surface operations the shell relies on.
///
/// None of these block or propagate errors: engine failures on individual
/// operations are logged by the implementation and dropped.
pub trait BrowserSurface {
    /// Issue a navigation to the given URL.
    fn load(&mut self, url: &str);

    /// Whether the surface has in-surface history to step back to.
    fn can_go_back(&self) -> bool;

    /// Step one entry back in the in-surface history. Returns `false`
    /// when there was nothing to go back to.
    fn go_back(&mut self) -> bool;

    /// Resume active rendering, timers, and media.
    fn resume(&mut self);

    /// Suspend active rendering, timers, and media.
    fn pause(&mut self);
}
