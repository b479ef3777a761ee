//! Layout constants and default file names

/// Number of vocabulary pairs per page
pub const DEFAULT_CAPACITY: usize = 24;

/// Distance from the top edge of the page to the baseline of the first row
pub const DEFAULT_TOP_MARGIN: f32 = 183.0;

/// Vertical distance between rows
pub const DEFAULT_ROW_SPACING: f32 = 56.0;

/// x position of the term column
pub const DEFAULT_LEFT_MARGIN: f32 = 115.0;

/// Offset from the page center to the translation column
pub const DEFAULT_COLUMN_GAP: f32 = 20.0;

/// Standard Type1 font used for both columns
pub const DEFAULT_FONT_NAME: &str = "Helvetica";

/// Font size in points
pub const DEFAULT_FONT_SIZE: f32 = 25.0;

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Field delimiter in vocabulary files
pub const FIELD_DELIMITER: char = ';';

/// Resource name of the template image XObject
pub const BACKGROUND_RESOURCE: &str = "Bg";

/// Resource name of the text font
pub const FONT_RESOURCE: &str = "F1";

/// Template read by the CLI when no path is given
pub const DEFAULT_CLI_TEMPLATE: &str = "two_column_template_page-0001.jpg";

/// Vocabulary list read by the CLI when no path is given
pub const DEFAULT_CLI_VOCAB: &str = "egp1_vokabeln-semikolon.txt";

/// Output written by the CLI when no path is given
pub const DEFAULT_CLI_OUTPUT: &str = "vocab_output.pdf";

/// Template used by the web form
pub const DEFAULT_WEB_TEMPLATE: &str = "background.jpg";

/// File name pre-filled in the web form
pub const DEFAULT_WEB_FILENAME: &str = "Episode_1";
