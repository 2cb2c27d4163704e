//! Batch conversion: discover pages, convert each one, report progress.
//!
//! Every file is independent. A failure is logged and counted, then the
//! batch moves on to the next file.

use crate::config::{Config, INPUT_EXTENSION};
use crate::error::ConvertError;
use crate::extract::callback::CallbackExtractor;
use crate::extract::class::ClassExtractor;
use crate::extract::Extractor;
use crate::render::callback::CallbackYaml;
use crate::render::class::ClassYaml;
use crate::render::Renderer;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 70;

/// Which converter to run over a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Classes,
    Callbacks,
}

impl DocKind {
    fn banner(&self) -> &'static str {
        match self {
            DocKind::Classes => "Avorion API Documentation HTML to YAML Converter",
            DocKind::Callbacks => "Avorion Callbacks Documentation HTML to YAML Converter",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            DocKind::Classes => "HTML files to convert",
            DocKind::Callbacks => "callback files",
        }
    }
}

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(PathBuf),
    Skipped,
}

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.errors
    }

    fn print(&self) {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!("Conversion Summary:");
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("  Converted: {}", self.converted);
        println!("  Skipped:   {}", self.skipped);
        println!("  Errors:    {}", self.errors);
        println!("  Total:     {}", self.total());
        println!("\nDone!");
    }
}

/// Find the input pages for a converter, sorted by path.
///
/// Only the directory itself is scanned, not its subdirectories.
pub fn discover(kind: DocKind, dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let suffix = match kind {
        DocKind::Classes => format!("*.{}", INPUT_EXTENSION),
        DocKind::Callbacks => format!("*{}", config.callback_suffix),
    };
    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        suffix
    );

    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| match kind {
            DocKind::Classes => !p
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| config.is_skipped(n)),
            DocKind::Callbacks => true,
        })
        .collect();
    files.sort();
    files.dedup();
    Ok(files)
}

/// Read, extract, render and write a single page.
pub fn convert_file<E, R>(
    path: &Path,
    extractor: &E,
    renderer: &R,
    config: &Config,
) -> Result<Outcome, ConvertError>
where
    E: Extractor,
    R: Renderer<Record = E::Record>,
{
    let html = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;

    let Some(record) = extractor.extract(&html)? else {
        return Ok(Outcome::Skipped);
    };
    let yaml = renderer.render(&record);

    let out_path = config
        .output_path(path)
        .with_extension(renderer.file_extension());
    fs::write(&out_path, yaml).map_err(|e| ConvertError::io(&out_path, e))?;

    Ok(Outcome::Created(out_path))
}

/// Convert every page of one kind found in `dir`.
pub fn run(kind: DocKind, dir: &Path, config: &Config) -> Result<Summary> {
    if let Some(ref out) = config.output_dir {
        fs::create_dir_all(out)
            .with_context(|| format!("failed to create output directory: {}", out.display()))?;
    }

    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", kind.banner());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("\nWorking directory: {}", dir.display());

    let files = discover(kind, dir, config)?;
    println!("Found {} {}\n", files.len(), kind.noun());

    let summary = match kind {
        DocKind::Classes => run_files(&files, &ClassExtractor::new(config), &ClassYaml, config),
        DocKind::Callbacks => run_files(&files, &CallbackExtractor, &CallbackYaml, config),
    };
    summary.print();
    Ok(summary)
}

fn run_files<E, R>(files: &[PathBuf], extractor: &E, renderer: &R, config: &Config) -> Summary
where
    E: Extractor,
    R: Renderer<Record = E::Record>,
{
    let mut summary = Summary::default();

    for (i, path) in files.iter().enumerate() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("[{}/{}] {}", i + 1, files.len(), file_name);

        match convert_file(path, extractor, renderer, config) {
            Ok(Outcome::Created(out)) => {
                let out_name = out
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                println!("    [OK] Created {}", out_name);
                summary.converted += 1;
            }
            Ok(Outcome::Skipped) => {
                tracing::info!(file = %path.display(), "not a documentation page");
                println!("    [SKIP] Skipped");
                summary.skipped += 1;
            }
            Err(e) => {
                tracing::error!(file = %path.display(), "{}", e);
                println!("    [FAIL] Conversion failed");
                summary.errors += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_classes_honors_skip_list() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Ship.html", "");
        touch(dir.path(), "index.html", "");
        touch(dir.path(), "Search.html", "");
        touch(dir.path(), "Functions.html", "");
        touch(dir.path(), "Entity.html", "");
        touch(dir.path(), "notes.txt", "");

        let files = discover(DocKind::Classes, dir.path(), &Config::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["Entity.html", "Ship.html"]);
    }

    #[test]
    fn discover_callbacks_by_suffix() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Ship.html", "");
        touch(dir.path(), "ShipCallbacks.html", "");
        touch(dir.path(), "SectorCallbacks.html", "");

        let files = discover(DocKind::Callbacks, dir.path(), &Config::default()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("SectorCallbacks.html"));
        assert!(files[1].ends_with("ShipCallbacks.html"));
    }

    #[test]
    fn discover_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(discover(DocKind::Classes, &missing, &Config::default()).is_err());
    }

    #[test]
    fn convert_writes_sibling_yaml() {
        let dir = TempDir::new().unwrap();
        let page = touch(dir.path(), "Galaxy.html", "<h1>Galaxy</h1>");

        let outcome = convert_file(&page, &ClassExtractor::default(), &ClassYaml, &Config::default())
            .unwrap();
        let out = dir.path().join("Galaxy.yaml");
        assert_eq!(outcome, Outcome::Created(out.clone()));
        assert!(fs::read_to_string(out).unwrap().starts_with("# Galaxy API Documentation\n"));
    }

    #[test]
    fn convert_skips_index_page() {
        let dir = TempDir::new().unwrap();
        let page = touch(dir.path(), "Main.html", "<h1>Avorion Script API Documentation</h1>");

        let outcome = convert_file(&page, &ClassExtractor::default(), &ClassYaml, &Config::default())
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(!dir.path().join("Main.yaml").exists());
    }

    #[test]
    fn convert_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = convert_file(
            &dir.path().join("Gone.html"),
            &CallbackExtractor,
            &CallbackYaml,
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }

    #[test]
    fn run_counts_outcomes() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ShipCallbacks.html", "<h1>Ship Callbacks</h1>");
        touch(dir.path(), "BrokenCallbacks.html", "<p>no title</p>");

        let summary = run(DocKind::Callbacks, dir.path(), &Config::default()).unwrap();
        assert_eq!(
            summary,
            Summary {
                converted: 1,
                skipped: 0,
                errors: 1
            }
        );
        assert!(dir.path().join("ShipCallbacks.yaml").exists());
        assert!(!dir.path().join("BrokenCallbacks.yaml").exists());
    }
}
