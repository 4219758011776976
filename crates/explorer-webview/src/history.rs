//! In-surface navigation history, tracked shell-side.
//!
//! wry does not expose the engine's back stack, so the shell keeps its own:
//! every committed in-shell navigation pushes an entry, and going back pops
//! one and re-issues a load of the previous URL.

/// Stack of committed in-shell page URLs, newest last.
#[derive(Debug, Default)]
pub struct NavHistory {
    entries: Vec<String>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed navigation. Reloads of the current page and
    /// synthetic documents (`about:blank`, the offline page) do not grow
    /// the stack.
    pub fn record(&mut self, url: &str) {
        if url.is_empty() || url == "about:blank" {
            return;
        }
        if self.entries.last().map(String::as_str) == Some(url) {
            return;
        }
        self.entries.push(url.to_string());
    }

    /// Whether there is an older entry to step back to.
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Step back one entry: pops the current page and returns the URL now
    /// on top. Returns `None` (and consumes nothing) when there is no
    /// older entry.
    pub fn go_back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop();
        self.entries.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_cannot_go_back() {
        let mut history = NavHistory::new();
        assert!(!history.can_go_back());
        assert_eq!(history.go_back(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn single_entry_cannot_go_back() {
        let mut history = NavHistory::new();
        history.record("https://app.example.com");
        assert!(!history.can_go_back());
        assert_eq!(history.go_back(), None);
        assert_eq!(history.len(), 1, "failed back must not consume the entry");
    }

    #[test]
    fn back_steps_one_entry() {
        let mut history = NavHistory::new();
        history.record("https://app.example.com");
        history.record("https://app.example.com/repos");
        history.record("https://app.example.com/repos/123");

        assert!(history.can_go_back());
        assert_eq!(
            history.go_back().as_deref(),
            Some("https://app.example.com/repos")
        );
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.go_back().as_deref(),
            Some("https://app.example.com")
        );
        assert!(!history.can_go_back());
    }

    #[test]
    fn reload_does_not_grow_history() {
        let mut history = NavHistory::new();
        history.record("https://app.example.com");
        history.record("https://app.example.com");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn synthetic_documents_are_not_recorded() {
        let mut history = NavHistory::new();
        history.record("about:blank");
        history.record("");
        assert!(history.is_empty());
    }
}
