//! The shell's single WebView surface.
//!
//! `ShellView` owns the wry WebView, wires up the interception and load
//! handlers, and tracks the in-surface back history. All handler callbacks
//! push `ShellEvent`s into a sink the event loop drains; nothing runs off
//! the UI thread.

use std::sync::{Arc, Mutex};

use explorer_common::ShellError;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ShellEvent};
use crate::fallback;
use crate::history::NavHistory;
use crate::ipc::{self, IpcMessage};
use crate::policy::{dispatch_external, Decision, NavigationPolicy};
use crate::surface::BrowserSurface;

/// Base client identifier; the product token is appended to it.
const UA_BASE: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Version/17.0 Safari/537.36";

/// The augmented client identifier string: engine base plus product token.
pub fn augmented_user_agent(product_token: &str) -> String {
    format!("{UA_BASE} {product_token}")
}

/// Whether a URL is a document the shell itself injects rather than a link
/// the page requested. `load_html` commits the offline page as a navigation
/// to the engine's empty page (`about:blank`, or a `data:` URL on some
/// engines); these must never be run through the link policy.
pub fn is_shell_internal(url: &str) -> bool {
    url.starts_with("about:blank") || url.starts_with("data:")
}

/// Full interception rule for one navigation request: shell-injected
/// documents always render, everything else is classified by the policy.
fn navigation_decision(policy: &NavigationPolicy, url: &str) -> Decision {
    if is_shell_internal(url) {
        return Decision::RenderInline;
    }
    policy.classify(url)
}

/// Pauses media elements, remembering which ones the shell stopped.
const SUSPEND_SCRIPT: &str = r#"
document.querySelectorAll('video, audio').forEach(function(m) {
    if (!m.paused) { m.dataset.explorerSuspended = '1'; m.pause(); }
});
"#;

/// Resumes only the media elements the shell itself paused.
const RESUME_SCRIPT: &str = r#"
document.querySelectorAll('video, audio').forEach(function(m) {
    if (m.dataset.explorerSuspended === '1') {
        delete m.dataset.explorerSuspended;
        m.play();
    }
});
"#;

/// Configuration for creating the shell surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Backend origin to load and to classify navigations against.
    pub origin: String,
    /// Full user agent string sent by the surface.
    pub user_agent: String,
    /// Whether to enable dev tools (on in debug builds).
    pub devtools: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl SurfaceConfig {
    /// Standard shell surface for the given origin: augmented user agent,
    /// media autoplay on, devtools in debug builds only.
    pub fn new(origin: impl Into<String>, product_token: &str) -> Self {
        Self {
            origin: origin.into(),
            user_agent: augmented_user_agent(product_token),
            devtools: cfg!(debug_assertions),
            autoplay: true,
        }
    }
}

/// The embedded browser surface plus shell-side bookkeeping.
pub struct ShellView {
    webview: wry::WebView,
    /// Event sink — handler callbacks push here, the event loop drains.
    events: Arc<Mutex<Vec<ShellEvent>>>,
    history: NavHistory,
    origin: String,
    /// Set while a shell-initiated back load is in flight so the resulting
    /// commit does not get re-recorded as a forward navigation.
    going_back: bool,
}

impl ShellView {
    /// Create the WebView as a child of the given window and immediately
    /// issue the initial navigation to the configured origin.
    ///
    /// Script execution and persistent storage are on (wry defaults, and
    /// incognito explicitly off); pinch zoom stays at the platform default,
    /// which shows no on-screen controls.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: SurfaceConfig,
    ) -> explorer_common::Result<Self> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let policy = NavigationPolicy::new(config.origin);
        let origin = policy.origin().to_string();

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_autoplay(config.autoplay)
            .with_incognito(false)
            .with_initialization_script(ipc::INIT_SCRIPT)
            .with_user_agent(&config.user_agent);

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), policy);

        builder = builder.with_url(&origin);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| ShellError::WebView(e.to_string()))?;
        debug!(url = %origin, "shell WebView created");

        Ok(Self {
            webview,
            events,
            history: NavHistory::new(),
            origin,
            going_back: false,
        })
    }

    fn attach_ipc_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'_> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if IpcMessage::from_json(&body).is_none() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from page");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellEvent::Ipc { body });
            }
        })
    }

    fn attach_page_load_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'_> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(match state {
                    PageLoadState::Started => ShellEvent::LoadStarted { url },
                    PageLoadState::Finished => ShellEvent::LoadFinished { url },
                });
            }
        })
    }

    fn attach_navigation_handler(
        builder: WebViewBuilder<'_>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'_> {
        builder.with_navigation_handler(move |url| match navigation_decision(&policy, &url) {
            Decision::RenderInline => {
                debug!(url = %url, "navigation renders in-shell");
                true
            }
            Decision::DelegateExternal => {
                debug!(url = %url, "navigation delegated to system handler");
                dispatch_external(&url);
                if let Ok(mut evts) = events.lock() {
                    evts.push(ShellEvent::NavigationDelegated { url });
                }
                false
            }
        })
    }

    /// Drain pending events and update the back history from committed
    /// navigations. Called once per event-loop iteration.
    pub fn pump_events(&mut self) -> Vec<ShellEvent> {
        let events = match self.events.lock() {
            Ok(mut evts) => std::mem::take(&mut *evts),
            Err(_) => Vec::new(),
        };
        for event in &events {
            if let ShellEvent::LoadFinished { url } = event {
                if self.going_back {
                    self.going_back = false;
                } else {
                    self.history.record(url);
                }
            }
        }
        events
    }

    /// The normalized backend origin this surface is bound to.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Reload the currently displayed page (pull-to-refresh).
    pub fn reload(&self) {
        if let Err(e) = self.webview.evaluate_script("window.location.reload();") {
            warn!(error = %e, "reload failed");
        }
    }

    /// Replace the displayed content with the freshly generated offline page.
    pub fn show_fallback(&mut self) {
        if let Err(e) = self.webview.load_html(&fallback::offline_page()) {
            warn!(error = %e, "failed to display offline page");
        }
    }

    /// Resize the surface to match the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(error = %e, "failed to update surface bounds");
        }
    }
}

impl BrowserSurface for ShellView {
    fn load(&mut self, url: &str) {
        if let Err(e) = self.webview.load_url(url) {
            warn!(url = %url, error = %e, "load failed to issue");
        }
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn go_back(&mut self) -> bool {
        match self.history.go_back() {
            Some(previous) => {
                self.going_back = true;
                if let Err(e) = self.webview.load_url(&previous) {
                    warn!(url = %previous, error = %e, "back navigation failed to issue");
                }
                true
            }
            None => false,
        }
    }

    fn resume(&mut self) {
        if let Err(e) = self.webview.evaluate_script(RESUME_SCRIPT) {
            warn!(error = %e, "resume script failed");
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.webview.evaluate_script(SUSPEND_SCRIPT) {
            warn!(error = %e, "suspend script failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_is_base_plus_product_token() {
        let ua = augmented_user_agent("GitHubExplorer/1.0");
        assert!(ua.starts_with("Mozilla/5.0"));
        assert!(ua.ends_with(" GitHubExplorer/1.0"));
    }

    #[test]
    fn surface_config_defaults() {
        let config = SurfaceConfig::new("https://app.example.com", "GitHubExplorer/1.0");
        assert_eq!(config.origin, "https://app.example.com");
        assert!(config.autoplay);
        assert_eq!(config.devtools, cfg!(debug_assertions));
        assert!(config.user_agent.contains("GitHubExplorer/1.0"));
    }

    #[test]
    fn offline_page_injection_is_not_delegated() {
        // The fallback document commits as a synthetic navigation; it must
        // render in-shell even though it matches no configured prefix.
        let policy = NavigationPolicy::new("https://app.example.com");
        assert_eq!(
            navigation_decision(&policy, "about:blank"),
            Decision::RenderInline
        );
        assert_eq!(
            navigation_decision(&policy, "data:text/html,<html></html>"),
            Decision::RenderInline
        );
    }

    #[test]
    fn link_navigations_still_follow_the_policy() {
        let policy = NavigationPolicy::new("https://app.example.com");
        assert_eq!(
            navigation_decision(&policy, "https://app.example.com/repos"),
            Decision::RenderInline
        );
        assert_eq!(
            navigation_decision(&policy, "https://github.com/foo/bar"),
            Decision::DelegateExternal
        );
        assert_eq!(
            navigation_decision(&policy, "https://evil.example.com"),
            Decision::DelegateExternal
        );
    }

    #[test]
    fn suspend_and_resume_scripts_are_paired() {
        assert!(SUSPEND_SCRIPT.contains("explorerSuspended"));
        assert!(RESUME_SCRIPT.contains("explorerSuspended"));
        assert!(SUSPEND_SCRIPT.contains("pause()"));
        assert!(RESUME_SCRIPT.contains("play()"));
    }
}
