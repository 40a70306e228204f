use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("location is not available: {0}")]
    Unavailable(String),
    #[error("failed to replace URL: {0}")]
    Replace(String),
}

/// The host's address bar, reduced to what URL sync needs.
pub trait Location {
    /// Current query string, with or without the leading `?`.
    fn query(&self) -> String;

    /// Replace the query string in place, without adding a
    /// back/forward history entry.
    fn replace_query(&mut self, query: &str) -> Result<(), LocationError>;
}

/// In-memory address bar for native hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    path: String,
    query: String,
    /// Number of in-place replacements performed.
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            path: path.into(),
            query: query.trim_start_matches('?').to_owned(),
            replacements: 0,
        }
    }

    /// Split an href like `/demos/cvs/dashboard?role=support` into path and
    /// query. Any `#fragment` is dropped.
    pub fn from_href(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        match href.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(href, ""),
        }
    }

    /// Simulate a browser navigation (link click, back/forward).
    pub fn navigate(&mut self, href: &str) {
        let replacements = self.replacements;
        *self = Self::from_href(href);
        self.replacements = replacements;
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) -> Result<(), LocationError> {
        self.query = query.trim_start_matches('?').to_owned();
        self.replacements += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_splits_path_and_query() {
        let loc = MemoryLocation::from_href("/demos/cvs/tickets?role=support#top");
        assert_eq!(loc.path(), "/demos/cvs/tickets");
        assert_eq!(loc.query(), "role=support");
        assert_eq!(loc.href(), "/demos/cvs/tickets?role=support");
    }

    #[test]
    fn navigate_keeps_replacement_count() {
        let mut loc = MemoryLocation::new("/", "");
        assert_eq!(loc.replace_query("?theme=dark"), Ok(()));
        loc.navigate("/admin?role=admin");
        assert_eq!(loc.replacements(), 1);
        assert_eq!(loc.href(), "/admin?role=admin");
    }
}
