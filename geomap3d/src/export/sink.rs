use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Destination for a rendered document
///
/// `write` stores the document and returns a location the host can open;
/// `reveal` hands that location to whatever displays it.
pub trait OutputSink {
    fn write(&mut self, document: &str) -> Result<String>;

    fn reveal(&mut self, location: &str) -> Result<()>;
}

/// Writes the document to a file and opens it in the default browser
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `file://` URL for an absolute path
fn file_url(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| Error::Reveal {
            location: path.display().to_string(),
            reason: "path cannot be expressed as a file URL".to_string(),
        })
}

impl OutputSink for FileSink {
    fn write(&mut self, document: &str) -> Result<String> {
        std::fs::write(&self.path, document).map_err(|e| Error::io(&self.path, e))?;
        // Not canonicalize: file URLs cannot carry the Windows \\?\ prefix
        let absolute = std::path::absolute(&self.path).map_err(|e| Error::io(&self.path, e))?;
        debug!("wrote {:?}", absolute);
        file_url(&absolute)
    }

    fn reveal(&mut self, location: &str) -> Result<()> {
        debug!("opening {location}");
        webbrowser::open(location).map_err(|e| Error::Reveal {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Keeps documents in memory; used by tests and embedders
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub documents: Vec<String>,
    pub revealed: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Most recently written document
    pub fn last(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, document: &str) -> Result<String> {
        self.documents.push(document.to_string());
        Ok(format!("memory://{}", self.documents.len() - 1))
    }

    fn reveal(&mut self, location: &str) -> Result<()> {
        self.revealed.push(location.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        let first = sink.write("<html>1</html>").unwrap();
        let second = sink.write("<html>2</html>").unwrap();
        assert_eq!(first, "memory://0");
        assert_eq!(second, "memory://1");
        assert_eq!(sink.last(), Some("<html>2</html>"));

        sink.reveal(&second).unwrap();
        assert_eq!(sink.revealed, vec!["memory://1".to_string()]);
    }

    #[test]
    fn test_file_sink_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");
        let mut sink = FileSink::new(&path);

        let location = sink.write("<html></html>").unwrap();
        assert!(location.starts_with("file://"));
        assert!(location.ends_with("map.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");

        let url = Url::parse(&location).unwrap();
        assert_eq!(url.scheme(), "file");
        assert_eq!(url.to_file_path().unwrap(), std::path::absolute(&path).unwrap());
    }

    #[test]
    fn test_file_url_escapes_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my map.html");
        let location = FileSink::new(&path).write("<html></html>").unwrap();
        assert!(location.ends_with("my%20map.html"));
        assert!(!location.contains('\\'));
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let mut sink = FileSink::new("/nonexistent/dir/map.html");
        assert!(matches!(sink.write("x"), Err(Error::Io { .. })));
    }
}
