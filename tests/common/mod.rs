use std::path::Path;

use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with assertion helpers.
pub struct GeneratedPdf {
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            doc: LopdfDocument::load(path)?,
        })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of every page, concatenated in page order.
    pub fn all_text(&self) -> String {
        let mut text = String::new();
        for page_num in 1..=self.page_count() {
            if let Ok(page_text) = self.doc.extract_text(&[page_num as u32]) {
                text.push_str(&page_text);
                text.push('\n');
            }
        }
        text
    }
}
