//! Scan configuration.

/// Attribute texts the dispatcher treats specially.
///
/// Markers are compared after all whitespace is removed from both sides, so
/// `#[ cfg( test ) ]` in a file matches the marker `#[cfg(test)]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Attributes marking a single test function.
    pub test_markers: Vec<String>,
    /// Attributes marking a test module.
    pub test_module_markers: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            test_markers: vec!["#[test]".to_owned()],
            test_module_markers: vec!["#[cfg(test)]".to_owned()],
        }
    }
}

impl ScanConfig {
    /// Replace the single-test markers.
    #[must_use]
    pub fn with_test_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the test-module markers.
    #[must_use]
    pub fn with_test_module_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_module_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// `attribute` must already be whitespace-free.
    pub(crate) fn is_test_marker(&self, attribute: &str) -> bool {
        matches_any(&self.test_markers, attribute)
    }

    pub(crate) fn is_test_module_marker(&self, attribute: &str) -> bool {
        matches_any(&self.test_module_markers, attribute)
    }
}

fn matches_any(markers: &[String], attribute: &str) -> bool {
    markers
        .iter()
        .any(|m| m.chars().filter(|c| !c.is_whitespace()).eq(attribute.chars()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScanConfig::default();
        assert!(config.is_test_marker("#[test]"));
        assert!(config.is_test_module_marker("#[cfg(test)]"));
        assert!(!config.is_test_marker("#[cfg(test)]"));
    }

    #[test]
    fn markers_ignore_whitespace() {
        let config = ScanConfig::default().with_test_markers(["#[ tokio::test ]", "#[test]"]);
        assert!(config.is_test_marker("#[tokio::test]"));
        assert!(config.is_test_marker("#[test]"));
        assert!(!config.is_test_marker("#[tokio::main]"));
    }

    #[test]
    fn no_module_markers() {
        let config = ScanConfig::default().with_test_module_markers(Vec::<String>::new());
        assert!(!config.is_test_module_marker("#[cfg(test)]"));
    }
}
