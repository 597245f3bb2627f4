//! Extraction settings.
//!
//! The defaults describe the published road traffic regulations on
//! likumi.lv. Everything here is site structure, not algorithm, so the CLI
//! can override it when the site moves.

use std::path::PathBuf;

/// Origin that relative image paths are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://likumi.lv";

/// Path of the regulations document on [`DEFAULT_BASE_URL`].
pub const DEFAULT_DOCUMENT_PATH: &str = "/ta/id/274865";

/// Class of the `<div>` holding the document text.
pub const DEFAULT_BODY_CLASS: &str = "doc-body";

/// Heading that precedes the road sign tables.
pub const SIGN_SECTION_MARKER: &str = "Ceļa zīmes";

/// Heading that precedes the road marking tables.
pub const MARKING_SECTION_MARKER: &str = "Ceļa apzīmējumi";

/// Settings for one extraction run.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub document_path: String,
    pub body_class: String,
    /// Heading texts, in the order their sections appear: signs, then markings.
    pub section_markers: [String; 2],
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            document_path: DEFAULT_DOCUMENT_PATH.to_string(),
            body_class: DEFAULT_BODY_CLASS.to_string(),
            section_markers: [
                SIGN_SECTION_MARKER.to_string(),
                MARKING_SECTION_MARKER.to_string(),
            ],
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Full URL of the regulations page.
    pub fn document_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.document_path
        )
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn is_section_marker(&self, text: &str) -> bool {
        self.section_markers.iter().any(|m| m == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url() {
        let config = Config::default();
        assert_eq!(config.document_url(), "https://likumi.lv/ta/id/274865");

        let config = Config::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.document_url(), "http://localhost:8080/ta/id/274865");
    }

    #[test]
    fn test_section_markers() {
        let config = Config::default();
        assert!(config.is_section_marker("Ceļa zīmes"));
        assert!(config.is_section_marker("Ceļa apzīmējumi"));
        assert!(!config.is_section_marker("Ceļa zīmes "));
    }
}
