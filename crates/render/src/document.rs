//! In-memory PDF document assembly over `lopdf`.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::debug;
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use crate::error::RenderError;
use crate::geometry::{PAGE_HEIGHT, PAGE_WIDTH};

/// Builds the document's object graph page by page, then writes it out once
/// every page has rendered. Text uses the builtin Type1 Helvetica faces with
/// WinAnsi encoding, so no fonts are embedded.
pub struct WorksheetDocument {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl WorksheetDocument {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let regular_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });

        // One shared resources dictionary for every page.
        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
        }
    }

    /// Appends one page holding the given content stream.
    pub fn add_page(&mut self, content: Content) -> Result<(), RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        let content_id = self.document.add_object(stream);
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Finalizes the page tree and writes the document to `path`.
    pub fn save(self, path: &Path) -> Result<(), RenderError> {
        debug!(
            "writing {} page(s) to {}",
            self.page_ids.len(),
            path.display()
        );
        let mut document = self.finalize();
        let mut writer = BufWriter::new(File::create(path)?);
        document.save_to(&mut writer)?;
        Ok(())
    }

    /// In-memory variant of [`WorksheetDocument::save`].
    pub fn save_to_bytes(self) -> Result<Vec<u8>, RenderError> {
        let mut document = self.finalize();
        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        Ok(bytes)
    }

    fn finalize(self) -> Document {
        let Self {
            mut document,
            pages_id,
            page_ids,
            ..
        } = self;

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);
        document
    }
}

impl Default for WorksheetDocument {
    fn default() -> Self {
        Self::new()
    }
}
