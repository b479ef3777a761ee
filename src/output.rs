//! Output sinks for finished documents

use crate::Result;
use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination for a rendered sheet
pub trait PdfSink {
    /// Compress and serialize `doc` into this sink
    fn write_pdf(&mut self, doc: &mut Document) -> Result<()>;
}

/// Writes the PDF to a file, replacing any existing file
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PdfSink for FileSink {
    fn write_pdf(&mut self, doc: &mut Document) -> Result<()> {
        debug!("Saving PDF to {}", self.path.display());
        doc.compress();
        let mut writer = BufWriter::new(File::create(&self.path)?);
        doc.save_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Collects the PDF in memory, e.g. for a download response.
/// Previous contents of the buffer are discarded.
impl PdfSink for Vec<u8> {
    fn write_pdf(&mut self, doc: &mut Document) -> Result<()> {
        self.clear();
        doc.compress();
        doc.save_to(self)?;
        debug!("Serialized PDF into {} bytes", self.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, dictionary};

    fn empty_document() -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_buffer_sink_produces_pdf() {
        let mut buf = Vec::new();
        buf.write_pdf(&mut empty_document()).unwrap();
        assert!(buf.starts_with(b"%PDF-1.5"));

        let reloaded = Document::load_mem(&buf).unwrap();
        assert!(reloaded.get_pages().is_empty());
    }

    #[test]
    fn test_buffer_sink_replaces_previous_contents() {
        let mut buf = b"stale bytes".to_vec();
        buf.write_pdf(&mut empty_document()).unwrap();
        assert!(buf.starts_with(b"%PDF-1.5"));
        assert!(Document::load_mem(&buf).is_ok());
    }

    #[test]
    fn test_file_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdf");
        let mut sink = FileSink::new(&path);
        sink.write_pdf(&mut empty_document()).unwrap();

        let bytes = std::fs::read(sink.path()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_file_sink_reports_missing_directory() {
        let mut sink = FileSink::new("/no/such/dir/out.pdf");
        let err = sink.write_pdf(&mut empty_document()).unwrap_err();
        assert!(matches!(err, crate::SheetError::Io(_)));
    }
}
