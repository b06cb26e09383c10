//! Word document paragraph extraction.
//!
//! DOCX files are ZIP archives whose main body lives in `word/document.xml`.
//! Paragraphs are `<w:p>` elements and their visible text is the content of
//! the nested `<w:t>` runs.

use std::io::{BufReader, Read, Seek};

use quick_xml::{events::Event, Reader};

use super::*;

/// Location of the main document part inside the archive.
const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the non-empty, trimmed paragraphs of the Word document at `path`.
///
/// # Errors
///
/// - [`GleanerError::Zip`] if the file is not a ZIP archive or lacks the document part
/// - [`GleanerError::Xml`] if the document part is malformed
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
  let file = std::fs::File::open(path)?;
  let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
  let xml = read_document_part(&mut archive)?;
  parse_paragraphs(&xml)
}

/// Reads the main document part out of the archive.
fn read_document_part<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> Result<String> {
  let mut part = archive.by_name(DOCUMENT_PART)?;
  let mut xml = String::new();
  part.read_to_string(&mut xml)?;
  Ok(xml)
}

/// Collects the text of each `<w:p>` element of a document part.
pub(crate) fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
  let mut reader = Reader::from_str(xml);

  let mut paragraphs = Vec::new();
  let mut current = String::new();
  let mut in_text = false;

  loop {
    match reader.read_event().map_err(|e| GleanerError::Xml(e.to_string()))? {
      Event::Start(e) => match e.name().as_ref() {
        b"w:t" => in_text = true,
        b"w:p" => current.clear(),
        _ => {},
      },
      Event::Empty(e) => match e.name().as_ref() {
        b"w:tab" => current.push('\t'),
        b"w:br" => current.push(' '),
        _ => {},
      },
      Event::End(e) => match e.name().as_ref() {
        b"w:t" => in_text = false,
        b"w:p" => {
          let paragraph = current.trim();
          if !paragraph.is_empty() {
            paragraphs.push(paragraph.to_string());
          }
          current.clear();
        },
        _ => {},
      },
      Event::Text(e) if in_text => {
        let text = e.unescape().map_err(|e| GleanerError::Xml(e.to_string()))?;
        current.push_str(&text);
      },
      Event::Eof => break,
      _ => {},
    }
  }

  Ok(paragraphs)
}
