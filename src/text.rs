//! Text encoding and width estimation for the standard Type1 fonts

use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;
use tracing::trace;

/// WinAnsiEncoding code points 0x80..=0x9F (0 marks an undefined slot)
const WIN_ANSI_HIGH: [char; 32] = [
    '\u{20ac}', '\0', '\u{201a}', '\u{0192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02c6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\0', '\u{017d}', '\0', '\0',
    '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02dc}', '\u{2122}', '\u{0161}', '\u{203a}', '\u{0153}', '\0', '\u{017e}', '\u{0178}',
];

/// Byte written for characters the encoding cannot represent
const REPLACEMENT: u8 = b'?';

/// Encode text for a `Tj` operand with a WinAnsiEncoding font.
///
/// Characters outside the encoding are replaced with `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut replaced = 0;

    for ch in text.chars() {
        let code = ch as u32;
        let byte = match code {
            0x20..=0x7e | 0xa0..=0xff => Some(code as u8),
            _ => WIN_ANSI_HIGH
                .iter()
                .position(|&c| c != '\0' && c == ch)
                .map(|pos| 0x80 + pos as u8),
        };

        match byte {
            Some(b) => bytes.push(b),
            None => {
                replaced += 1;
                bytes.push(REPLACEMENT);
            }
        }
    }

    if replaced > 0 {
        trace!("Replaced {} characters outside WinAnsiEncoding", replaced);
    }
    bytes
}

/// Decode WinAnsiEncoding bytes back into text
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9f => match WIN_ANSI_HIGH[(b - 0x80) as usize] {
                '\0' => char::from(REPLACEMENT),
                c => c,
            },
            _ => char::from(b),
        })
        .collect()
}

/// Estimate text width based on character count and font size
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    let char_count = text.chars().count() as f32;
    char_count * font_size * DEFAULT_CHAR_WIDTH_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_win_ansi("dog (n.)"), b"dog (n.)".to_vec());
    }

    #[test]
    fn test_german_letters_use_latin1_slots() {
        assert_eq!(encode_win_ansi("Bär"), vec![b'B', 0xe4, b'r']);
        assert_eq!(encode_win_ansi("Straße"), vec![b'S', b't', b'r', b'a', 0xdf, b'e']);
        assert_eq!(encode_win_ansi("Ü"), vec![0xdc]);
    }

    #[test]
    fn test_typographic_characters_use_high_slots() {
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("„x“"), vec![0x84, b'x', 0x93]);
        assert_eq!(encode_win_ansi("–"), vec![0x96]);
    }

    #[test]
    fn test_unmappable_characters_are_replaced() {
        assert_eq!(encode_win_ansi("\u{4f60}a"), vec![b'?', b'a']);
        assert_eq!(encode_win_ansi("a\tb"), vec![b'a', b'?', b'b']);
    }

    #[test]
    fn test_decode_reverses_encode() {
        let text = "Käse – cheese €";
        assert_eq!(decode_win_ansi(&encode_win_ansi(text)), text);
    }

    #[test]
    fn test_estimate_uses_char_count() {
        // 3 chars * 10.0 * 0.5
        assert_eq!(estimate_text_width("äöü", 10.0), 15.0);
    }
}
