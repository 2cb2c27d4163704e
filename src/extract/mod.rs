//! Extractor module — recover documentation records from raw page markup.
//!
//! Extraction works on the text of the page with regular expressions tuned
//! to the markup the documentation generator emits. No DOM is built.

pub mod callback;
pub mod class;
pub mod markup;

use crate::error::ConvertError;

/// Turns the raw markup of one page into a record.
///
/// `Ok(None)` means the page is not a document of this kind and should be
/// skipped; `Err` means the page could not be processed.
pub trait Extractor {
    type Record;

    fn extract(&self, html: &str) -> Result<Option<Self::Record>, ConvertError>;
}
