//! Address normalization and in-app navigation history.

/// Page shown when the browser opens.
pub const HOME_URL: &str = "https://en.wikipedia.org/wiki/Glassmorphism";

/// Prefixes `https://` when the input does not already start with `http`.
///
/// Returns `None` for blank input.
pub fn normalize_url(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input.starts_with("http") {
        Some(input.to_string())
    } else {
        Some(format!("https://{input}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Linear back/forward history. Navigating from the middle drops the forward entries.
pub struct BrowserHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for BrowserHistory {
    fn default() -> Self {
        Self::new(HOME_URL)
    }
}

impl BrowserHistory {
    /// Starts a history at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entries: vec![url.into()],
            cursor: 0,
        }
    }

    /// Current address.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Pushes `url` unless it is already current. Returns whether the address changed.
    pub fn navigate(&mut self, url: String) -> bool {
        if self.current() == url {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor += 1;
        true
    }

    /// Whether [`Self::back`] would move.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`Self::forward`] would move.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Steps back. Returns whether the address changed.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps forward. Returns whether the address changed.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_hosts_get_https() {
        assert_eq!(
            normalize_url(" example.com ").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_url("http://example.com").as_deref(),
            Some("http://example.com")
        );
        assert_eq!(normalize_url("   "), None);
    }

    #[test]
    fn back_and_forward_walk_the_history() {
        let mut history = BrowserHistory::default();
        assert_eq!(history.current(), HOME_URL);
        assert!(!history.can_go_back());

        assert!(history.navigate("https://a.test".to_string()));
        assert!(history.navigate("https://b.test".to_string()));
        assert!(history.back());
        assert_eq!(history.current(), "https://a.test");
        assert!(history.forward());
        assert_eq!(history.current(), "https://b.test");
        assert!(!history.forward());
    }

    #[test]
    fn navigating_after_back_drops_forward_entries() {
        let mut history = BrowserHistory::default();
        history.navigate("https://a.test".to_string());
        history.back();
        history.navigate("https://c.test".to_string());
        assert!(!history.can_go_forward());
        history.back();
        assert_eq!(history.current(), HOME_URL);
    }

    #[test]
    fn navigating_to_the_current_page_is_a_no_op() {
        let mut history = BrowserHistory::default();
        assert!(!history.navigate(HOME_URL.to_string()));
        assert!(!history.can_go_back());
    }
}
