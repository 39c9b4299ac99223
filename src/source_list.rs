//! The static list of known source-publication names.
//!
//! A JSON array of strings is embedded in the binary and can be replaced by
//! a file path in the config. The list is loaded once at startup and only
//! populates the source selector; it is never refreshed during a session.

use std::path::{Path, PathBuf};

use thiserror::Error;

const EMBEDDED_SOURCES: &str = include_str!("../assets/sources.json");

/// Errors raised while loading a source-name list.
#[derive(Debug, Error)]
pub enum SourceListError {
    #[error("Failed to read source list at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Source list at {path} is not a JSON array of strings: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the source list, preferring the override file when configured.
pub fn load(override_path: Option<&Path>) -> Result<Vec<String>, SourceListError> {
    match override_path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| SourceListError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse(&text).map_err(|source| SourceListError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
        None => Ok(embedded()),
    }
}

/// The list compiled into the binary.
pub fn embedded() -> Vec<String> {
    parse(EMBEDDED_SOURCES).expect("embedded source list is valid JSON")
}

fn parse(text: &str) -> Result<Vec<String>, serde_json::Error> {
    let names: Vec<String> = serde_json::from_str(text)?;
    Ok(names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn embedded_list_is_nonempty_and_trimmed() {
        let names = embedded();
        assert!(!names.is_empty());
        assert!(names.iter().all(|name| name == name.trim()));
        assert!(names.iter().any(|name| name == "All News Today"));
    }

    #[test]
    fn override_file_replaces_embedded_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sources.json");
        std::fs::write(&path, r#"["Custom Gazette", "  ", "Local Post"]"#).unwrap();
        let names = load(Some(&path)).unwrap();
        assert_eq!(names, vec!["Custom Gazette", "Local Post"]);
    }

    #[test]
    fn malformed_override_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sources.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, SourceListError::Parse { .. }));
    }
}
