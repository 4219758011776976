//! Shell event types.

/// State of a page load lifecycle as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the shell WebView, drained on the event loop thread.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// A page load started in the surface. Carries the URL.
    LoadStarted { url: String },
    /// A page load finished in the surface. Carries the URL.
    LoadFinished { url: String },
    /// A navigation was classified for external handling and dispatched
    /// to the system default handler instead of the surface.
    NavigationDelegated { url: String },
    /// An IPC message was received from JavaScript.
    Ipc { body: String },
}
