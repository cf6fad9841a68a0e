//! # PDF to Text
//!
//! Accepts a PDF upload, produces its text and exports that text as a
//! `.txt` file named after the PDF.
//!
//! Text extraction is not implemented: [`extract_text`] returns a fixed
//! notice for every document. Upload validation and the export path are
//! complete, so a real extractor only has to replace that one function.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::pdf_text::{text_file_name, PdfUpload};
//!
//! let upload = PdfUpload::new("report.pdf", b"%PDF-1.7\n...".to_vec()).unwrap();
//! assert_eq!(upload.text_file_name(), "report.txt");
//!
//! assert!(PdfUpload::new("photo.png", vec![0x89, b'P', b'N', b'G']).is_err());
//! assert_eq!(text_file_name(""), "extracted-text.txt");
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Magic bytes that open every PDF document
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// The header may be preceded by junk, but only within the first 1024 bytes.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Export name used when the upload has no usable file name
pub const FALLBACK_TEXT_NAME: &str = "extracted-text.txt";

/// Text returned for every document until real extraction exists.
pub const EXTRACTION_NOTICE: &str = "This is a demo. In production, actual PDF text extraction would happen here using libraries like pdf.js or similar PDF parsing tools.";

/// A file that has been checked to be a PDF.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl PdfUpload {
    /// Accept `bytes` as a PDF named `file_name`.
    ///
    /// # Returns
    ///
    /// * `Err(CalcError::InvalidFileType)` - The name does not end in `.pdf`
    ///   or the content has no PDF header
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> CalcResult<Self> {
        let file_name = file_name.into();

        if !has_pdf_extension(&file_name) {
            return Err(CalcError::invalid_file_type(&file_name, "Please upload a PDF file"));
        }
        if !has_pdf_header(&bytes) {
            return Err(CalcError::invalid_file_type(
                &file_name,
                "File content is not a PDF document",
            ));
        }

        tracing::debug!(file_name = %file_name, size = bytes.len(), "pdf upload accepted");
        Ok(PdfUpload { file_name, bytes })
    }

    /// Read and validate a PDF from disk.
    pub fn from_path(path: &Path) -> CalcResult<Self> {
        let bytes = fs::read(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        PdfUpload::new(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Name of the `.txt` file this upload exports to
    pub fn text_file_name(&self) -> String {
        text_file_name(&self.file_name)
    }
}

fn has_pdf_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn has_pdf_header(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
    window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

/// Derive the export name: the PDF's base name with `.txt` in place of
/// `.pdf`. Directory components are dropped; an empty name falls back to
/// `extracted-text.txt`.
pub fn text_file_name(pdf_name: &str) -> String {
    let base = Path::new(pdf_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if base.is_empty() {
        return FALLBACK_TEXT_NAME.to_string();
    }

    let stem_len = base.len().saturating_sub(4);
    if base.len() > 4 && base.is_char_boundary(stem_len) && base[stem_len..].eq_ignore_ascii_case(".pdf") {
        format!("{}.txt", &base[..stem_len])
    } else {
        format!("{}.txt", base)
    }
}

/// Produce the text for an uploaded PDF.
pub fn extract_text(upload: &PdfUpload) -> String {
    tracing::debug!(file_name = upload.file_name(), "returning extraction notice");
    EXTRACTION_NOTICE.to_string()
}

/// Extracted text ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextExport {
    pub file_name: String,
    pub text: String,
}

impl TextExport {
    /// Extract the upload's text and name the export after it.
    pub fn from_upload(upload: &PdfUpload) -> Self {
        TextExport {
            file_name: upload.text_file_name(),
            text: extract_text(upload),
        }
    }

    /// Write the text into `dir` and return the final path.
    ///
    /// The file is written to a `.tmp` sibling, synced and then renamed, so
    /// a half-written export never appears under the final name.
    pub fn save(&self, dir: &Path) -> CalcResult<PathBuf> {
        fs::create_dir_all(dir)
            .map_err(|e| CalcError::file_error("create directory", dir.display().to_string(), e.to_string()))?;

        let path = dir.join(&self.file_name);
        let tmp_path = dir.join(format!("{}.tmp", self.file_name));

        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.write_all(self.text.as_bytes()).map_err(|e| {
            CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.sync_all().map_err(|e| {
            CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
        })?;

        tracing::info!(path = %path.display(), bytes = self.text.len(), "text export saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_pdf() -> Vec<u8> {
        b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF\n".to_vec()
    }

    #[test]
    fn test_accepts_pdf() {
        let upload = PdfUpload::new("Invoice.PDF", minimal_pdf()).unwrap();
        assert_eq!(upload.file_name(), "Invoice.PDF");
        assert_eq!(upload.text_file_name(), "Invoice.txt");
        assert!(upload.size() > 0);
    }

    #[test]
    fn test_rejects_wrong_extension() {
        let err = PdfUpload::new("notes.txt", minimal_pdf()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FILE_TYPE");
    }

    #[test]
    fn test_rejects_wrong_content() {
        let err = PdfUpload::new("fake.pdf", b"GIF89a".to_vec()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FILE_TYPE");
        assert!(PdfUpload::new("empty.pdf", Vec::new()).is_err());
    }

    #[test]
    fn test_header_after_leading_junk() {
        let mut bytes = vec![b' '; 16];
        bytes.extend_from_slice(&minimal_pdf());
        assert!(PdfUpload::new("junk.pdf", bytes).is_ok());
    }

    #[test]
    fn test_text_file_names() {
        assert_eq!(text_file_name("report.pdf"), "report.txt");
        assert_eq!(text_file_name("archive.2024.pdf"), "archive.2024.txt");
        assert_eq!(text_file_name("dir/sub/scan.Pdf"), "scan.txt");
        assert_eq!(text_file_name("README"), "README.txt");
        assert_eq!(text_file_name(".pdf"), ".pdf.txt");
        assert_eq!(text_file_name(""), FALLBACK_TEXT_NAME);
    }

    #[test]
    fn test_extract_returns_notice() {
        let upload = PdfUpload::new("a.pdf", minimal_pdf()).unwrap();
        let export = TextExport::from_upload(&upload);
        assert_eq!(export.file_name, "a.txt");
        assert_eq!(export.text, EXTRACTION_NOTICE);
    }
}
