//! Page geometry and pagination for vocabulary sheets

use crate::Result;
use crate::error::SheetError;
use crate::style::{Color, SheetStyle};
use crate::vocab::VocabPair;
use tracing::{debug, trace, warn};

/// Fixed page layout for one run
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub capacity: usize,
    pub top_margin: f32,
    pub row_spacing: f32,
    pub left_column_x: f32,
    pub right_column_x: f32,
    pub font_name: String,
    pub font_size: f32,
    pub text_color: Color,
}

impl PageGeometry {
    /// Derive the geometry for a page of the given size.
    ///
    /// The translation column starts `column_gap` points right of the
    /// page center.
    pub fn new(style: &SheetStyle, page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            capacity: style.capacity,
            top_margin: style.top_margin,
            row_spacing: style.row_spacing,
            left_column_x: style.left_margin,
            right_column_x: page_width / 2.0 + style.column_gap,
            font_name: style.font_name.clone(),
            font_size: style.font_size,
            text_color: style.text_color,
        }
    }

    /// Baseline of row `row` on any page
    pub fn row_y(&self, row: usize) -> f32 {
        self.page_height - self.top_margin - row as f32 * self.row_spacing
    }

    /// Whether every row of a full page lands on the page
    pub fn fits_page(&self) -> bool {
        self.capacity == 0 || self.row_y(self.capacity - 1) >= 0.0
    }

    /// Reject geometries that cannot be paginated
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(SheetError::InvalidGeometry(
                "Capacity must be at least one pair per page".to_string(),
            ));
        }

        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(SheetError::InvalidGeometry(format!(
                "Page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }

        if !(self.font_size > 0.0) {
            return Err(SheetError::InvalidGeometry(format!(
                "Font size must be positive, got {}",
                self.font_size
            )));
        }

        Ok(())
    }
}

/// A pair placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    /// Row index within the page
    pub index: usize,
    pub term: String,
    pub translation: String,
    /// Baseline y position
    pub y: f32,
}

/// The rows of one output page
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub rows: Vec<PlacedRow>,
}

/// Calculated layout for a whole sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<PagePlan>,
}

impl SheetLayout {
    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of placed pairs across all pages
    pub fn pair_count(&self) -> usize {
        self.pages.iter().map(|p| p.rows.len()).sum()
    }
}

/// Calculate the layout for a list of pairs.
///
/// Pairs are split into consecutive chunks of `capacity`; an empty list
/// produces a layout without pages.
pub fn calculate_layout(pairs: &[VocabPair], geometry: &PageGeometry) -> Result<SheetLayout> {
    geometry.validate()?;

    if !geometry.fits_page() {
        warn!(
            "Row {} would be drawn at y = {} which is below the page",
            geometry.capacity - 1,
            geometry.row_y(geometry.capacity - 1)
        );
    }

    debug!(
        "Calculating layout for {} pairs, {} per page",
        pairs.len(),
        geometry.capacity
    );

    let pages: Vec<PagePlan> = pairs
        .chunks(geometry.capacity)
        .map(|chunk| PagePlan {
            rows: chunk
                .iter()
                .enumerate()
                .map(|(j, pair)| PlacedRow {
                    index: j,
                    term: pair.term.clone(),
                    translation: pair.translation.clone(),
                    y: geometry.row_y(j),
                })
                .collect(),
        })
        .collect();

    trace!("Layout calculated: {} pages", pages.len());

    Ok(SheetLayout {
        geometry: geometry.clone(),
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: usize) -> Vec<VocabPair> {
        (0..n)
            .map(|i| VocabPair::new(format!("Wort {i}"), format!("word {i}")))
            .collect()
    }

    fn geometry(capacity: usize) -> PageGeometry {
        PageGeometry::new(&SheetStyle::default().with_capacity(capacity), 1000.0, 1500.0)
    }

    #[test]
    fn test_right_column_from_page_center() {
        let g = PageGeometry::new(&SheetStyle::default(), 1240.0, 1754.0);
        assert_eq!(g.left_column_x, 115.0);
        assert_eq!(g.right_column_x, 640.0);
    }

    #[test]
    fn test_row_y_formula() {
        let g = geometry(24);
        assert_eq!(g.row_y(0), 1500.0 - 183.0);
        assert_eq!(g.row_y(3), 1500.0 - 183.0 - 3.0 * 56.0);
    }

    #[test]
    fn test_page_counts() {
        for (n, c, expected) in [(0, 24, 0), (1, 24, 1), (24, 24, 1), (25, 24, 2), (7, 3, 3)] {
            let layout = calculate_layout(&pairs(n), &geometry(c)).unwrap();
            assert_eq!(layout.page_count(), expected, "n = {n}, c = {c}");
            assert_eq!(layout.pair_count(), n);
        }
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let layout = calculate_layout(&pairs(7), &geometry(3)).unwrap();
        let sizes: Vec<usize> = layout.pages.iter().map(|p| p.rows.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);

        let layout = calculate_layout(&pairs(6), &geometry(3)).unwrap();
        assert_eq!(layout.pages.last().unwrap().rows.len(), 3);
    }

    #[test]
    fn test_row_positions_independent_of_page() {
        let g = geometry(3);
        let layout = calculate_layout(&pairs(7), &g).unwrap();
        for page in &layout.pages {
            for row in &page.rows {
                assert_eq!(row.y, g.row_y(row.index));
            }
        }
        assert_eq!(layout.pages[2].rows[0].term, "Wort 6");
        assert_eq!(layout.pages[2].rows[0].y, layout.pages[0].rows[0].y);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = calculate_layout(&pairs(1), &geometry(0)).unwrap_err();
        assert!(matches!(err, SheetError::InvalidGeometry(_)));
    }

    #[test]
    fn test_non_positive_font_size_rejected() {
        let style = SheetStyle::default().with_font_size(0.0);
        let g = PageGeometry::new(&style, 100.0, 100.0);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_overflowing_geometry_is_laid_out_anyway() {
        let g = PageGeometry::new(&SheetStyle::default(), 200.0, 300.0);
        assert!(!g.fits_page());

        let layout = calculate_layout(&pairs(24), &g).unwrap();
        assert_eq!(layout.page_count(), 1);
        assert!(layout.pages[0].rows[23].y < 0.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let g = geometry(5);
        let input = pairs(12);
        assert_eq!(
            calculate_layout(&input, &g).unwrap(),
            calculate_layout(&input, &g).unwrap()
        );
    }
}
