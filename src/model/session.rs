//! Document session - owns the single open document

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::{DocumentEngine, EngineError, PageSource};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
    #[error("no document is open")]
    NoDocument,
}

/// An opened document and the facts the viewer needs about it
pub struct OpenDocument {
    pub handle: Box<dyn PageSource>,
    pub path: PathBuf,
    pub display_name: String,
    pub page_count: usize,
}

impl std::fmt::Debug for OpenDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenDocument")
            .field("path", &self.path)
            .field("display_name", &self.display_name)
            .field("page_count", &self.page_count)
            .finish_non_exhaustive()
    }
}

/// Final path component, lossily decoded
pub fn display_name_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Holds at most one open document at a time
pub struct DocumentSession {
    engine: Box<dyn DocumentEngine>,
    document: Option<OpenDocument>,
}

impl std::fmt::Debug for DocumentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSession")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl DocumentSession {
    pub fn new(engine: Box<dyn DocumentEngine>) -> Self {
        Self {
            engine,
            document: None,
        }
    }

    /// Open `path`, closing the current document first.
    ///
    /// On failure the session is left empty.
    pub fn open(&mut self, path: &Path) -> Result<&OpenDocument, SessionError> {
        self.close();

        let handle = self.engine.open(path).map_err(|source| SessionError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let page_count = handle.page_count();
        let display_name = display_name_for(path);

        tracing::info!("Opened {} ({} pages)", path.display(), page_count);

        Ok(self.document.insert(OpenDocument {
            handle,
            path: path.to_path_buf(),
            display_name,
            page_count,
        }))
    }

    /// Release the current document; a no-op when nothing is open
    pub fn close(&mut self) {
        if let Some(doc) = self.document.take() {
            tracing::debug!("Closed {}", doc.path.display());
        }
    }

    /// Re-open the current document from disk
    pub fn reload(&mut self) -> Result<&OpenDocument, SessionError> {
        let path = self
            .document
            .as_ref()
            .map(|d| d.path.clone())
            .ok_or(SessionError::NoDocument)?;
        self.open(&path)
    }

    #[inline]
    pub fn document(&self) -> Option<&OpenDocument> {
        self.document.as_ref()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.document.is_some()
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |d| d.page_count)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.display_name.as_str())
    }
}
