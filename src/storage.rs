// ABOUTME: Output directory layout and overwriting writes
// ABOUTME: Resolves node paths under the root, writes documents and copies streams

use crate::{Error, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

pub struct OutputDir {
    pub root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        OutputDir { root: root.into() }
    }

    /// Join a node path (`/news/hello`) onto the root. Leading slashes are
    /// dropped; parent components are rejected.
    pub fn resolve(&self, node_path: &str) -> Result<PathBuf> {
        let mut resolved = self.root.clone();
        for component in Path::new(node_path.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return Err(Error::InvalidPath(node_path.into())),
            }
        }
        Ok(resolved)
    }

    pub fn document_path(&self, node_path: &str, filename: &str) -> Result<PathBuf> {
        Ok(self.resolve(node_path)?.join(filename))
    }

    pub fn binary_path(&self, node_path: &str) -> Result<PathBuf> {
        let path = self.resolve(node_path)?;
        if path == self.root {
            return Err(Error::InvalidPath(node_path.into()));
        }
        Ok(path)
    }

    /// Recursively delete the root. A missing root is not an error.
    pub fn clean(&self) -> Result<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub fn write_document(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)?;
    Ok(())
}

/// Copy `reader` to `path`, replacing whatever is there. Returns bytes written.
pub fn copy_stream(path: &Path, reader: &mut dyn Read) -> Result<u64> {
    ensure_parent(path)?;
    let mut file = fs::File::create(path)?;
    let written = io::copy(reader, &mut file)?;
    file.sync_all()?;
    Ok(written)
}
