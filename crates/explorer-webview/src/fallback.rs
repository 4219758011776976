//! Offline fallback page.
//!
//! When a load fails the shell replaces the displayed content with a
//! locally generated static document. It carries no external resource
//! references, so it renders with no network connectivity; the retry
//! button posts an IPC message and the shell re-issues a load of the
//! configured origin (not the URL that failed).

use crate::ipc::KIND_RETRY;

/// Generate the offline page, fresh on every call.
pub fn offline_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>GitHub Explorer</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
body{{font-family:Arial,sans-serif;text-align:center;padding:50px;}}
.error{{color:#e74c3c;font-size:18px;margin:20px 0;}}
.retry-btn{{background:#3498db;color:white;padding:10px 20px;border:none;border-radius:5px;font-size:16px;cursor:pointer;}}
</style>
</head>
<body>
<h1>GitHub Explorer</h1>
<div class="error">Unable to connect to server</div>
<p>Please check your internet connection and try again.</p>
<button class="retry-btn" onclick="window.explorer.ipc.send('{KIND_RETRY}')">Retry</button>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_title_message_and_instructions() {
        let html = offline_page();
        assert!(html.contains("<title>GitHub Explorer</title>"));
        assert!(html.contains("Unable to connect to server"));
        assert!(html.contains("check your internet connection"));
    }

    #[test]
    fn retry_button_posts_retry_ipc() {
        let html = offline_page();
        assert!(html.contains("Retry"));
        assert!(html.contains(&format!("ipc.send('{KIND_RETRY}')")));
        // Retry must go through the shell so it reloads the configured
        // origin, never the failed URL.
        assert!(!html.contains("location.reload"));
    }

    #[test]
    fn carries_no_external_resource_references() {
        let html = offline_page();
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert!(!html.contains("src="));
        assert!(!html.contains("href="));
        assert!(!html.contains("@import"));
    }

    #[test]
    fn generated_fresh_each_time() {
        assert_eq!(offline_page(), offline_page());
    }
}
