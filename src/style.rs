//! Styling for vocabulary sheets

use crate::constants::*;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Layout settings that do not depend on the page size.
///
/// Combined with the template dimensions these produce a
/// [`PageGeometry`](crate::layout::PageGeometry).
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    /// Pairs per page
    pub capacity: usize,
    /// Distance from the top edge to the first row
    pub top_margin: f32,
    /// Vertical distance between rows
    pub row_spacing: f32,
    /// x position of the term column
    pub left_margin: f32,
    /// Offset from the page center to the translation column
    pub column_gap: f32,
    pub font_name: String,
    pub font_size: f32,
    pub text_color: Color,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            top_margin: DEFAULT_TOP_MARGIN,
            row_spacing: DEFAULT_ROW_SPACING,
            left_margin: DEFAULT_LEFT_MARGIN,
            column_gap: DEFAULT_COLUMN_GAP,
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: Color::black(),
        }
    }
}

impl SheetStyle {
    /// Set the number of pairs per page
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the top margin
    pub fn with_top_margin(mut self, top_margin: f32) -> Self {
        self.top_margin = top_margin;
        self
    }

    /// Set the row spacing
    pub fn with_row_spacing(mut self, row_spacing: f32) -> Self {
        self.row_spacing = row_spacing;
        self
    }

    /// Set the font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_matches_constants() {
        let style = SheetStyle::default();
        assert_eq!(style.capacity, 24);
        assert_eq!(style.top_margin, 183.0);
        assert_eq!(style.row_spacing, 56.0);
        assert_eq!(style.left_margin, 115.0);
        assert_eq!(style.column_gap, 20.0);
        assert_eq!(style.font_name, "Helvetica");
        assert_eq!(style.font_size, 25.0);
        assert_eq!(style.text_color, Color::black());
    }

    #[test]
    fn test_builder_overrides_single_fields() {
        let style = SheetStyle::default()
            .with_capacity(3)
            .with_top_margin(10.0)
            .with_row_spacing(20.0)
            .with_font_size(12.0);

        assert_eq!(style.capacity, 3);
        assert_eq!(style.top_margin, 10.0);
        assert_eq!(style.row_spacing, 20.0);
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.left_margin, DEFAULT_LEFT_MARGIN);
    }

    #[test]
    fn test_color_is_clamped() {
        let color = Color::rgb(1.5, -0.2, 0.5);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.5));
    }
}
