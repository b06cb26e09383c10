//! PDF page text extraction built on `lopdf`.

use lopdf::Document;

use super::*;

/// Reads the text of every page of the PDF at `path`, in page order.
///
/// A page whose content stream cannot be decoded contributes an empty string
/// so that page numbering stays aligned with the document.
///
/// # Errors
///
/// Returns [`GleanerError::Lopdf`] if the document itself cannot be parsed.
pub fn read_pages(path: &Path) -> Result<Vec<String>> {
  let doc = Document::load(path)?;

  let pages = doc
    .get_pages()
    .into_keys()
    .map(|page_number| match doc.extract_text(&[page_number]) {
      Ok(text) => text,
      Err(e) => {
        debug!("No text extracted from page {page_number} of {}: {e}", path.display());
        String::new()
      },
    })
    .collect::<Vec<_>>();

  trace!("Extracted {} pages from {}", pages.len(), path.display());
  Ok(pages)
}
