use std::{fs, path::PathBuf};

use crate::error::CatalogError;

/// How raw resource text reaches the loaders.  The loaders only ever see
/// the full text of a named resource, never the transport behind it.
pub trait TextSource {
    fn fetch_text(&self, name: &str) -> Result<String, CatalogError>;
}

pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> FileSource {
        return FileSource { root: root.into() };
    }
}

impl TextSource for FileSource {
    fn fetch_text(&self, name: &str) -> Result<String, CatalogError> {
        return Ok(fs::read_to_string(self.root.join(name))?);
    }
}
