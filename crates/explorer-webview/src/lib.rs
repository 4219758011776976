//! Embedded browser shell around the remote GitHub Explorer web app.
//!
//! Wraps the `wry` crate to provide:
//! - A single managed WebView surface loading the configured backend origin
//! - Navigation interception: in-shell rendering vs. system-browser handoff
//! - Page load lifecycle events and an explicit load-state reducer
//! - A locally generated offline page with a user-initiated retry
//! - In-surface back history tracked shell-side

pub mod events;
pub mod fallback;
pub mod history;
pub mod ipc;
pub mod policy;
pub mod shell;
pub mod state;
pub mod surface;

pub use events::{PageLoadState, ShellEvent};
pub use history::NavHistory;
pub use ipc::IpcMessage;
pub use policy::{Decision, NavigationPolicy};
pub use shell::{is_shell_internal, ShellView, SurfaceConfig};
pub use state::{Effects, LoadEvent, LoadState};
pub use surface::BrowserSurface;
