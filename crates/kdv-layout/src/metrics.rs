// SPDX-License-Identifier: MIT
//
// Text width measurement.
//
// The layout engine never talks to a font file or a PDF library directly;
// it measures through this trait. The shipped implementation carries the
// standard Helvetica AFM advance widths (1/1000 em units), which is exactly
// what the documents are later encoded with.

/// Measures the rendered width of a string at a given font size, in points.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Width metrics for the built-in Helvetica font.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl TextMeasurer for HelveticaMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let millis: u32 = text.chars().map(advance_width).sum();
        millis as f32 / 1000.0 * font_size
    }
}

/// Helvetica advance width of a character in 1/1000 em.
///
/// Covers WinAnsi Latin including the German umlauts and sharp s. Unknown
/// characters fall back to the digit width (556), which slightly
/// over-estimates and therefore wraps early rather than overflowing.
fn advance_width(ch: char) -> u32 {
    match ch {
        ' ' | ',' | '.' | '/' | ':' | ';' | '!' | '·' => 278,
        '\'' => 191,
        '"' => 355,
        '(' | ')' | '-' | '`' => 333,
        '*' => 389,
        '[' | ']' | '\\' => 278,
        '{' | '}' => 334,
        '|' => 260,
        '^' => 469,
        '_' | '#' | '$' | '?' => 556,
        '%' => 889,
        '&' => 667,
        '+' | '=' | '<' | '>' | '~' => 584,
        '@' => 1015,
        '0'..='9' => 556,

        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' | 'Ä' => 667,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' | 'Ü' => 722,
        'F' | 'T' | 'Z' => 611,
        'G' | 'O' | 'Q' | 'Ö' => 778,
        'I' => 278,
        'J' => 500,
        'L' => 556,
        'M' => 833,
        'W' => 944,

        'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' | 'ä' | 'ö' | 'ü' => 556,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'f' | 't' => 278,
        'i' | 'j' | 'l' => 222,
        'm' => 833,
        'r' => 333,
        'w' => 722,
        'ß' => 611,

        '–' => 556,
        '—' => 1000,

        _ => 556,
    }
}
