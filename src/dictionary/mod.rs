use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

/// Errors that can occur while loading a user dictionary
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dictionary file {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Corrections shipped with the app, used whenever no usable user
/// dictionary is available.
static DEFAULT_CORRECTIONS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    [
        ("hellow", "hello"),
        ("teh", "the"),
        ("adn", "and"),
        ("mu", "my"),
        ("namu", "name"),
        ("iimprove", "improve"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
});

/// The built-in correction set.
pub fn default_corrections() -> HashMap<String, String> {
    DEFAULT_CORRECTIONS.clone()
}

/// Load the correction mapping, falling back to the built-in defaults.
///
/// A user dictionary is a UTF-8 JSON object of misspelling -> replacement.
/// Any failure (missing file, unreadable file, malformed JSON, non-string
/// values) is logged and swallowed: a bad custom dictionary must never
/// break startup, so the caller always gets a usable mapping.
pub fn load_corrections(path: Option<&Path>) -> HashMap<String, String> {
    let Some(path) = path else {
        return default_corrections();
    };

    if !path.exists() {
        debug!("No user dictionary at {}, using defaults", path.display());
        return default_corrections();
    }

    match read_dictionary(path) {
        Ok(corrections) => {
            debug!(
                "Loaded {} corrections from {}",
                corrections.len(),
                path.display()
            );
            corrections
        }
        Err(e) => {
            warn!("Error loading custom dictionary: {}", e);
            default_corrections()
        }
    }
}

fn read_dictionary(path: &Path) -> Result<HashMap<String, String>, DictionaryError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DictionaryError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DictionaryError::ParseFailed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_dictionary(contents: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("corrections.json");
        fs::write(&dict_path, contents).unwrap();
        (temp_dir, dict_path)
    }

    #[test]
    fn test_defaults_without_path() {
        let corrections = load_corrections(None);
        assert_eq!(corrections.get("teh").unwrap(), "the");
        assert_eq!(corrections.get("adn").unwrap(), "and");
        assert_eq!(corrections.get("hellow").unwrap(), "hello");
        assert_eq!(corrections.get("mu").unwrap(), "my");
        assert_eq!(corrections.get("namu").unwrap(), "name");
        assert_eq!(corrections.get("iimprove").unwrap(), "improve");
        assert_eq!(corrections.len(), 6);
    }

    #[test]
    fn test_defaults_for_missing_file() {
        let missing = PathBuf::from("/non/existent/dictionary.json");
        let corrections = load_corrections(Some(&missing));
        assert_eq!(corrections, default_corrections());
    }

    #[test]
    fn test_valid_user_dictionary_replaces_defaults() {
        let (_temp_dir, dict_path) =
            write_dictionary(r#"{"recieve": "receive", "seperate": "separate"}"#);
        let corrections = load_corrections(Some(&dict_path));

        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections.get("recieve").unwrap(), "receive");
        assert_eq!(corrections.get("seperate").unwrap(), "separate");
        // No merging with the built-in set
        assert!(corrections.get("teh").is_none());
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let (_temp_dir, dict_path) = write_dictionary("{not valid json");
        let corrections = load_corrections(Some(&dict_path));
        assert_eq!(corrections, default_corrections());
    }

    #[test]
    fn test_non_object_top_level_falls_back() {
        let (_temp_dir, dict_path) = write_dictionary(r#"["teh", "the"]"#);
        let corrections = load_corrections(Some(&dict_path));
        assert_eq!(corrections, default_corrections());
    }

    #[test]
    fn test_non_string_values_fall_back() {
        let (_temp_dir, dict_path) = write_dictionary(r#"{"teh": 42}"#);
        let corrections = load_corrections(Some(&dict_path));
        assert_eq!(corrections, default_corrections());
    }

    #[test]
    fn test_empty_object_is_accepted_verbatim() {
        let (_temp_dir, dict_path) = write_dictionary("{}");
        let corrections = load_corrections(Some(&dict_path));
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_read_dictionary_error_display() {
        let missing = PathBuf::from("/non/existent/dictionary.json");
        let err = read_dictionary(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read dictionary file"));
        assert!(err.to_string().contains("/non/existent/dictionary.json"));
    }
}
