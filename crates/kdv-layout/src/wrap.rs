// SPDX-License-Identifier: MIT
//
// Greedy word wrap against a text measurer.

use crate::metrics::TextMeasurer;

/// Break `text` into lines no wider than `max_width` points.
///
/// All whitespace runs (including newlines) collapse to single spaces before
/// wrapping, so a paragraph is treated as one flow of words. Words are
/// accumulated greedily; a word that alone exceeds `max_width` is still
/// emitted on its own line — overflow is preferred over hyphenation, so no
/// word is ever split or dropped. Empty or whitespace-only input produces an
/// empty vec.
pub fn wrap(
    text: &str,
    max_width: f32,
    font_size: f32,
    measurer: &impl TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let tentative = format!("{current} {word}");
        if measurer.text_width(&tentative, font_size) <= max_width {
            current = tentative;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Split `text` into paragraphs at blank-line boundaries (two or more
/// consecutive newlines). Single newlines stay inside their paragraph and
/// are later collapsed by [`wrap`].
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake measurer: every character is one point wide per point of font
    /// size divided by ten, so widths are easy to reason about in tests.
    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn text_width(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size / 10.0
        }
    }

    #[test]
    fn empty_input_produces_no_lines() {
        assert!(wrap("", 100.0, 10.0, &FixedWidth).is_empty());
        assert!(wrap("   \n\t ", 100.0, 10.0, &FixedWidth).is_empty());
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap("ein kurzer Satz", 100.0, 10.0, &FixedWidth);
        assert_eq!(lines, vec!["ein kurzer Satz"]);
    }

    #[test]
    fn lines_respect_max_width() {
        // 20 chars max per line at size 10.
        let lines = wrap(
            "aaaa bbbb cccc dddd eeee ffff gggg",
            20.0,
            10.0,
            &FixedWidth,
        );
        for line in &lines {
            assert!(line.chars().count() <= 20, "line too wide: {line:?}");
        }
        assert!(lines.len() > 1);
    }

    #[test]
    fn no_words_dropped_or_duplicated() {
        let input = "Die  Entscheidung \n reifte   über viele Jahre\n\nund wurde nie revidiert";
        let lines = wrap(input, 18.0, 10.0, &FixedWidth);
        let rejoined = lines.join(" ");
        let normalized: Vec<&str> = input.split_whitespace().collect();
        assert_eq!(rejoined.split_whitespace().collect::<Vec<_>>(), normalized);
    }

    #[test]
    fn overlong_word_emitted_unbroken() {
        let lines = wrap("kurz Donaudampfschifffahrtsgesellschaft kurz", 10.0, 10.0, &FixedWidth);
        assert!(lines.contains(&"Donaudampfschifffahrtsgesellschaft".to_string()));
        // The word is intact even though it exceeds the width.
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn paragraphs_split_on_blank_lines_only() {
        let paragraphs = split_paragraphs("erster Absatz\nnoch erste\n\nzweiter Absatz\n\n\n\ndritter");
        assert_eq!(
            paragraphs,
            vec!["erster Absatz\nnoch erste", "zweiter Absatz", "dritter"]
        );
    }

    #[test]
    fn whitespace_only_text_has_no_paragraphs() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n  \n").is_empty());
    }
}
