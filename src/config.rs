//! Fixed conversion settings.
//!
//! Every filename, title and marker the converters treat specially lives here
//! so discovery and extraction never embed their own literals.

use std::path::{Path, PathBuf};

/// Pages matched by `*.html` that are not class references.
pub const SKIP_FILES: &[&str] = &["index.html", "Search.html", "Functions.html", "stylesheet.css"];

/// Headings of the site's own index pages.
pub const RESERVED_TITLES: &[&str] = &["Avorion Script API Documentation", "Avorion Documentation"];

/// Any heading containing one of these is a site header, not a class name.
pub const RESERVED_HEADER_TOKENS: &[&str] = &["Avorion", "Documentation"];

/// Filename suffix of callback listing pages.
pub const CALLBACK_SUFFIX: &str = "Callbacks.html";

pub const INPUT_EXTENSION: &str = "html";

pub const OUTPUT_EXTENSION: &str = "yaml";

/// Settings shared by discovery, extraction and output.
#[derive(Debug, Clone)]
pub struct Config {
    pub skip_files: Vec<String>,
    pub reserved_titles: Vec<String>,
    pub reserved_header_tokens: Vec<String>,
    pub callback_suffix: String,
    /// Where YAML files go; `None` writes next to each input file
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_files: to_owned(SKIP_FILES),
            reserved_titles: to_owned(RESERVED_TITLES),
            reserved_header_tokens: to_owned(RESERVED_HEADER_TOKENS),
            callback_suffix: CALLBACK_SUFFIX.to_string(),
            output_dir: None,
        }
    }
}

impl Config {
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn is_skipped(&self, file_name: &str) -> bool {
        self.skip_files.iter().any(|f| f == file_name)
    }

    /// Output path for an input page: `dir/X.html` → `<out>/X.yaml`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let sibling = input.with_extension(OUTPUT_EXTENSION);
        match (&self.output_dir, sibling.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => sibling,
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_list_is_exact_match() {
        let config = Config::default();
        assert!(config.is_skipped("index.html"));
        assert!(config.is_skipped("stylesheet.css"));
        assert!(!config.is_skipped("Index.html"));
        assert!(!config.is_skipped("Ship.html"));
    }

    #[test]
    fn output_path_is_sibling_by_default() {
        let config = Config::default();
        assert_eq!(
            config.output_path(Path::new("docs/Ship.html")),
            PathBuf::from("docs/Ship.yaml")
        );
    }

    #[test]
    fn output_path_honors_output_dir() {
        let config = Config::default().with_output_dir(Some(PathBuf::from("out")));
        assert_eq!(
            config.output_path(Path::new("docs/ShipCallbacks.html")),
            PathBuf::from("out/ShipCallbacks.yaml")
        );
    }
}
