//! Navigation interception policy.
//!
//! Every navigation the surface is about to perform is classified before it
//! executes: links into the configured backend render in-shell, everything
//! else is handed to the operating system's default URL handler.

use tracing::warn;

/// github.com links open in the system browser even though they would
/// already fail the origin-prefix rule. Kept as a distinct first rule so a
/// future deep-link target for the code host stays a one-line change.
pub const EXTERNAL_CODE_HOST: &str = "https://github.com";

/// Classification of an in-flight navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Navigation proceeds normally inside the embedded surface.
    RenderInline,
    /// Navigation is suppressed in the surface and the URL is dispatched
    /// to the system default handler.
    DelegateExternal,
}

/// Pure, total classification of navigation URLs against a fixed origin.
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    origin: String,
}

impl NavigationPolicy {
    /// Create a policy for the given backend origin. A trailing slash on
    /// the origin is ignored so `https://a.example/` and `https://a.example`
    /// behave identically.
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// The normalized backend origin.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Classify a navigation request. Deterministic and side-effect-free;
    /// total over arbitrary input strings.
    pub fn classify(&self, url: &str) -> Decision {
        if url.starts_with(EXTERNAL_CODE_HOST) {
            return Decision::DelegateExternal;
        }
        if !url.starts_with(&self.origin) {
            return Decision::DelegateExternal;
        }
        Decision::RenderInline
    }
}

/// Dispatch a URL to the operating system's default handler.
///
/// Fire-and-forget: failures are logged, never propagated, and the
/// currently displayed page is left unchanged.
pub fn dispatch_external(url: &str) {
    if let Err(e) = open::that_detached(url) {
        warn!(url = %url, error = %e, "system URL dispatch failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> NavigationPolicy {
        NavigationPolicy::new("https://app.example.com")
    }

    // -- In-shell URLs --

    #[test]
    fn backend_origin_renders_inline() {
        assert_eq!(
            policy().classify("https://app.example.com"),
            Decision::RenderInline
        );
        assert_eq!(
            policy().classify("https://app.example.com/repos/123"),
            Decision::RenderInline
        );
        assert_eq!(
            policy().classify("https://app.example.com/search?q=rust"),
            Decision::RenderInline
        );
    }

    #[test]
    fn trailing_slash_on_origin_is_normalized() {
        let policy = NavigationPolicy::new("https://app.example.com/");
        assert_eq!(policy.origin(), "https://app.example.com");
        assert_eq!(
            policy.classify("https://app.example.com/repos"),
            Decision::RenderInline
        );
    }

    // -- Code-host URLs delegate regardless of origin --

    #[test]
    fn github_links_delegate_external() {
        assert_eq!(
            policy().classify("https://github.com/foo/bar"),
            Decision::DelegateExternal
        );
    }

    #[test]
    fn github_delegates_even_when_configured_as_origin() {
        // The code-host rule is evaluated first, so it wins even for a
        // shell pointed at github.com itself.
        let policy = NavigationPolicy::new("https://github.com");
        assert_eq!(
            policy.classify("https://github.com/foo/bar"),
            Decision::DelegateExternal
        );
    }

    // -- Everything else delegates --

    #[test]
    fn foreign_origins_delegate_external() {
        assert_eq!(
            policy().classify("https://evil.example.com"),
            Decision::DelegateExternal
        );
        assert_eq!(
            policy().classify("https://docs.rs/wry"),
            Decision::DelegateExternal
        );
    }

    #[test]
    fn non_http_schemes_delegate_external() {
        assert_eq!(
            policy().classify("mailto:team@example.com"),
            Decision::DelegateExternal
        );
        assert_eq!(
            policy().classify("file:///etc/passwd"),
            Decision::DelegateExternal
        );
    }

    #[test]
    fn garbage_input_delegates_external() {
        assert_eq!(policy().classify(""), Decision::DelegateExternal);
        assert_eq!(policy().classify("not-a-url"), Decision::DelegateExternal);
        assert_eq!(policy().classify("   "), Decision::DelegateExternal);
    }

    #[test]
    fn classification_is_deterministic() {
        let policy = policy();
        for _ in 0..3 {
            assert_eq!(
                policy.classify("https://github.com/x"),
                Decision::DelegateExternal
            );
            assert_eq!(
                policy.classify("https://app.example.com/x"),
                Decision::RenderInline
            );
        }
    }
}
