//! PDF drawing operations for vocabulary sheets

use crate::Result;
use crate::constants::{BACKGROUND_RESOURCE, FONT_RESOURCE};
use crate::error::SheetError;
use crate::layout::{PageGeometry, PagePlan, SheetLayout};
use crate::template::TemplateImage;
use crate::text::{decode_win_ansi, encode_win_ansi, estimate_text_width};
use lopdf::{
    Document, Object, ObjectId, Stream,
    content::{Content, Operation},
    dictionary,
};
use tracing::{debug, instrument, trace};

/// Extension trait for lopdf::Document to add vocabulary sheet pages
pub trait SheetDrawing {
    /// Append one page per [`PagePlan`] to the page tree `pages_id`.
    ///
    /// The template and font are added once and shared by all pages.
    /// Returns the IDs of the new pages in order.
    fn draw_sheet(
        &mut self,
        pages_id: ObjectId,
        layout: &SheetLayout,
        template: &TemplateImage,
    ) -> Result<Vec<ObjectId>>;

    /// Strings shown by `Tj` on a page, in drawing order
    fn page_strings(&self, page_id: ObjectId) -> Result<Vec<String>>;
}

impl SheetDrawing for Document {
    #[instrument(skip(self, layout, template), fields(pages = layout.pages.len()))]
    fn draw_sheet(
        &mut self,
        pages_id: ObjectId,
        layout: &SheetLayout,
        template: &TemplateImage,
    ) -> Result<Vec<ObjectId>> {
        let geometry = &layout.geometry;

        let font_id = self.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Object::Name(geometry.font_name.as_bytes().to_vec()),
            "Encoding" => "WinAnsiEncoding",
        });
        let image_id = self.add_object(template.to_xobject());
        let resources_id = self.add_object(dictionary! {
            "Font" => dictionary! { FONT_RESOURCE => font_id },
            "XObject" => dictionary! { BACKGROUND_RESOURCE => image_id },
        });

        let mut page_ids = Vec::with_capacity(layout.pages.len());
        for page in &layout.pages {
            let operations = generate_page_operations(page, geometry);
            let page_id = add_page(self, pages_id, resources_id, geometry, operations)?;
            page_ids.push(page_id);
        }

        debug!("Drew {} pages", page_ids.len());
        Ok(page_ids)
    }

    fn page_strings(&self, page_id: ObjectId) -> Result<Vec<String>> {
        let content = Content::decode(&self.get_page_content(page_id)?)?;
        Ok(content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(decode_win_ansi(bytes)),
                _ => None,
            })
            .collect())
    }
}

/// Render a laid-out sheet into a new document.
///
/// A layout without pages still produces a well-formed document with an
/// empty page tree.
pub fn render_layout(layout: &SheetLayout, template: &TemplateImage) -> Result<Document> {
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

    doc.draw_sheet(pages_id, layout, template)?;
    Ok(doc)
}

/// Generate PDF operations for one page: background first, then text
pub fn generate_page_operations(page: &PagePlan, geometry: &PageGeometry) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(8 + page.rows.len() * 4);

    // Background stretched to the full page
    operations.push(Operation::new("q", vec![]));
    operations.push(Operation::new(
        "cm",
        vec![
            geometry.page_width.into(),
            0.into(),
            0.into(),
            geometry.page_height.into(),
            0.into(),
            0.into(),
        ],
    ));
    operations.push(Operation::new(
        "Do",
        vec![Object::Name(BACKGROUND_RESOURCE.as_bytes().to_vec())],
    ));
    operations.push(Operation::new("Q", vec![]));

    // Font and color are page state and must be set on every page
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![
            Object::Name(FONT_RESOURCE.as_bytes().to_vec()),
            geometry.font_size.into(),
        ],
    ));
    operations.push(Operation::new(
        "rg",
        vec![
            geometry.text_color.r.into(),
            geometry.text_color.g.into(),
            geometry.text_color.b.into(),
        ],
    ));

    for row in &page.rows {
        let term_width = estimate_text_width(&row.term, geometry.font_size);
        if geometry.left_column_x + term_width > geometry.right_column_x {
            debug!(
                "Term {:?} in row {} likely runs into the translation column",
                row.term, row.index
            );
        }

        trace!("Row {} at y = {}", row.index, row.y);
        operations.extend(show_text_at(&row.term, geometry.left_column_x, row.y));
        operations.extend(show_text_at(
            &row.translation,
            geometry.right_column_x,
            row.y,
        ));
    }

    operations.push(Operation::new("ET", vec![]));
    operations
}

/// Position the text matrix absolutely and show one string
fn show_text_at(text: &str, x: f32, y: f32) -> Vec<Operation> {
    vec![
        Operation::new(
            "Tm",
            vec![
                1.into(),
                0.into(),
                0.into(),
                1.into(),
                x.into(),
                y.into(),
            ],
        ),
        Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
    ]
}

/// Add a page with the given content to the page tree
fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    geometry: &PageGeometry,
    operations: Vec<Operation>,
) -> Result<ObjectId> {
    trace!("Adding page with {} operations", operations.len());

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            geometry.page_width.into(),
            geometry.page_height.into(),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    // Add page to Pages kids array
    match doc.get_object_mut(pages_id) {
        Ok(Object::Dictionary(pages_dict)) => {
            if let Ok(Object::Array(kids)) = pages_dict.get_mut(b"Kids") {
                kids.push(page_id.into());
            }

            // Update page count
            if let Ok(Object::Integer(count)) = pages_dict.get(b"Count") {
                let count = *count;
                pages_dict.set("Count", Object::Integer(count + 1));
            }
        }
        Ok(_) => return Err(SheetError::InvalidPageTree(pages_id)),
        Err(_) => return Err(SheetError::PageTreeNotFound(pages_id)),
    }

    trace!("Created page {:?}", page_id);
    Ok(page_id)
}
