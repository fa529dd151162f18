use super::DocumentStore;
use crate::error::{Result, ShelfError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// A document stored as one JSON file.
pub struct JsonFile<T> {
    path: PathBuf,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T> {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl<T> DocumentStore<T> for JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    fn load(&self) -> Result<T> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "document missing, creating empty one");
            let doc = T::default();
            self.save(&doc)?;
            return Ok(doc);
        }

        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let doc = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        debug!(path = %self.path.display(), "document loaded");
        Ok(doc)
    }

    fn save(&self, doc: &T) -> Result<()> {
        self.ensure_parent()?;

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        doc.serialize(&mut ser).map_err(ShelfError::Serialization)?;
        fs::write(&self.path, buf).map_err(ShelfError::Io)?;

        debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}
