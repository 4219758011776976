//! IPC protocol between the page and the shell.
//!
//! Messages flow from JavaScript to Rust: page scripts call
//! `window.explorer.ipc.send(kind, payload)`, which triggers the
//! `ipc_handler` registered on the WebView. The shell only listens; it
//! never scripts the remote page beyond the injected bridge.

use serde::{Deserialize, Serialize};

/// The document became interactive. Used to distinguish a real page from
/// an engine error page when the load reports finished.
pub const KIND_PAGE_READY: &str = "page-ready";
/// The offline page's retry button was activated.
pub const KIND_RETRY: &str = "retry";
/// The pull-to-refresh gesture fired.
pub const KIND_REFRESH: &str = "refresh";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON, usually null).
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript bridge injected into every document the surface loads.
///
/// Besides the `window.explorer.ipc` sender it installs the two native
/// affordances the remote app does not know about:
/// - a `page-ready` beacon on DOMContentLoaded (offline detection)
/// - an overscroll-at-top detector that maps the mobile pull-to-refresh
///   gesture onto desktop wheel/touch input
pub const INIT_SCRIPT: &str = r#"
(function() {
    window.explorer = window.explorer || {};
    window.explorer.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        }
    };

    var ready = function() {
        window.explorer.ipc.send('page-ready', window.location.href);
    };
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', ready);
    } else {
        ready();
    }

    // Pull-to-refresh: sustained upward overscroll while already at the top.
    var pull = 0;
    var reset;
    window.addEventListener('wheel', function(e) {
        if (window.scrollY > 0 || e.deltaY >= 0) { pull = 0; return; }
        pull -= e.deltaY;
        clearTimeout(reset);
        reset = setTimeout(function() { pull = 0; }, 300);
        if (pull > 240) {
            pull = 0;
            window.explorer.ipc.send('refresh');
        }
    }, { passive: true });

    var touchStartY = null;
    window.addEventListener('touchstart', function(e) {
        touchStartY = window.scrollY === 0 ? e.touches[0].clientY : null;
    }, { passive: true });
    window.addEventListener('touchmove', function(e) {
        if (touchStartY === null) { return; }
        if (e.touches[0].clientY - touchStartY > 160) {
            touchStartY = null;
            window.explorer.ipc.send('refresh');
        }
    }, { passive: true });
})();
"#;
