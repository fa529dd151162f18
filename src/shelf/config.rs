use crate::error::{Result, ShelfError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "shelf.json";
const DEFAULT_BOOKS_PATH: &str = "json/books.json";
const DEFAULT_ID_PATH: &str = "json/id_storage.json";

/// Configuration for shelf, stored in `shelf.json` in the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Where the book list lives
    #[serde(default = "default_books_path")]
    pub books_path: PathBuf,

    /// Where the id counter lives
    #[serde(default = "default_id_path")]
    pub id_path: PathBuf,
}

fn default_books_path() -> PathBuf {
    PathBuf::from(DEFAULT_BOOKS_PATH)
}

fn default_id_path() -> PathBuf {
    PathBuf::from(DEFAULT_ID_PATH)
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            books_path: default_books_path(),
            id_path: default_id_path(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Document paths, with relative entries anchored at `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> (PathBuf, PathBuf) {
        (
            base_dir.join(&self.books_path),
            base_dir.join(&self.id_path),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.books_path, PathBuf::from("json/books.json"));
        assert_eq!(config.id_path, PathBuf::from("json/id_storage.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
        assert!(!temp_dir.path().join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "books_path": "library.json" }"#,
        )
        .unwrap();

        let config = ShelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.books_path, PathBuf::from("library.json"));
        assert_eq!(config.id_path, PathBuf::from("json/id_storage.json"));
    }

    #[test]
    fn test_full_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "books_path": "a.json", "id_path": "b.json" }"#,
        )
        .unwrap();

        let config = ShelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.books_path, PathBuf::from("a.json"));
        assert_eq!(config.id_path, PathBuf::from("b.json"));
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let base = Path::new("/work");
        let config = ShelfConfig {
            books_path: "/data/books.json".into(),
            id_path: "ids.json".into(),
        };
        let (books, ids) = config.resolve(base);
        assert_eq!(books, PathBuf::from("/data/books.json"));
        assert_eq!(ids, PathBuf::from("/work/ids.json"));
    }
}
