//! Printable vocabulary sheets built on lopdf
//!
//! This library turns a semicolon-separated vocabulary list into a PDF in
//! which every page shows a background template with two columns of
//! term/translation pairs drawn at fixed offsets.

use lopdf::Document;
use tracing::{debug, info, instrument};

pub mod constants;
mod drawing;
pub mod error;
pub mod layout;
pub mod output;
pub mod style;
pub mod template;
pub mod text;
pub mod vocab;
pub mod web;

pub use drawing::{SheetDrawing, generate_page_operations, render_layout};
pub use error::{Result, SheetError};
pub use layout::{PageGeometry, PagePlan, PlacedRow, SheetLayout, calculate_layout};
pub use output::{FileSink, PdfSink};
pub use style::{Color, SheetStyle};
pub use template::TemplateImage;
pub use vocab::{ParsedVocab, SkippedLine, VocabPair, VocabSource, parse_vocab};

/// Summary of one generated sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    /// Pairs drawn
    pub pairs: usize,
    /// Pages in the output
    pub pages: usize,
    /// Non-empty lines that were dropped
    pub skipped: Vec<SkippedLine>,
}

/// Render pairs onto pages of the template's size.
#[instrument(skip(pairs, template), fields(pair_count = pairs.len()))]
pub fn render_sheet(
    pairs: &[VocabPair],
    geometry: &PageGeometry,
    template: &TemplateImage,
) -> Result<Document> {
    let layout = calculate_layout(pairs, geometry)?;
    render_layout(&layout, template)
}

/// Read, parse, render and write one vocabulary sheet.
///
/// The page size is taken from the template; everything else comes from
/// `style`.
#[instrument(skip_all)]
pub fn generate_sheet<S: PdfSink + ?Sized>(
    source: &VocabSource,
    template: &TemplateImage,
    style: &SheetStyle,
    sink: &mut S,
) -> Result<SheetReport> {
    let parsed = source.parse()?;

    let (page_width, page_height) = template.page_size();
    let geometry = PageGeometry::new(style, page_width, page_height);
    debug!("Using geometry {:?}", geometry);

    let mut doc = render_sheet(&parsed.pairs, &geometry, template)?;
    let pages = doc.get_pages().len();
    sink.write_pdf(&mut doc)?;

    let report = SheetReport {
        pairs: parsed.pairs.len(),
        pages,
        skipped: parsed.skipped,
    };
    info!(
        "Generated {} pages from {} pairs ({} lines skipped)",
        report.pages,
        report.pairs,
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    const SAMPLE: &str = "Hund;dog\nKatze;cat\n\nfalschzeile\nMaus;mouse";

    fn template() -> TemplateImage {
        TemplateImage::from_image(DynamicImage::new_rgb8(1240, 1754))
    }

    #[test]
    fn test_sample_renders_one_page_in_order() {
        let parsed = parse_vocab(SAMPLE);
        let geometry = PageGeometry::new(&SheetStyle::default(), 1240.0, 1754.0);
        let doc = render_sheet(&parsed.pairs, &geometry, &template()).unwrap();

        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(
            doc.page_strings(pages[&1]).unwrap(),
            vec!["Hund", "dog", "Katze", "cat", "Maus", "mouse"]
        );
    }

    #[test]
    fn test_generate_sheet_reports_counts() {
        let mut buf = Vec::new();
        let report = generate_sheet(
            &VocabSource::Bytes(SAMPLE.as_bytes().to_vec()),
            &template(),
            &SheetStyle::default(),
            &mut buf,
        )
        .unwrap();

        assert_eq!(report.pairs, 3);
        assert_eq!(report.pages, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_number, 4);
        assert!(buf.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_empty_input_still_writes_a_document() {
        let mut buf = Vec::new();
        let report = generate_sheet(
            &VocabSource::Bytes(Vec::new()),
            &template(),
            &SheetStyle::default(),
            &mut buf,
        )
        .unwrap();

        assert_eq!(report.pages, 0);
        let reloaded = Document::load_mem(&buf).unwrap();
        assert!(reloaded.get_pages().is_empty());
    }
}
