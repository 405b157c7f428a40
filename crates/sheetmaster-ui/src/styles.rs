//! Ayu color theme and styling functions for `sm` output.
//!
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Only structure gets color: category labels, function names and string
//! literals inside a formula, and check results. Everything else is plain.

use owo_colors::OwoColorize;
use sheetmaster_catalog::{Category, InputKind};

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

const CATEGORY_LOOKUP: (u8, u8, u8) = (0x59, 0xc2, 0xff); // blue
const CATEGORY_LOGIC: (u8, u8, u8) = (0xd2, 0xa6, 0xff); // purple
const CATEGORY_MATH: (u8, u8, u8) = (0xff, 0x8f, 0x40); // orange
const CATEGORY_TEXT: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // green
const CATEGORY_DATE: (u8, u8, u8) = (0xe6, 0xb4, 0x50); // gold

pub const ICON_PASS: &str = "\u{2713}";
pub const ICON_FAIL: &str = "\u{2716}";
pub const ICON_BULLET: &str = "\u{2022}";

pub const SEPARATOR_LIGHT: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// A section header: uppercase, accent, bold.
pub fn render_header(s: &str) -> String {
    color_bold_str(&s.to_uppercase(), ACCENT)
}

pub fn render_separator() -> String {
    render_muted(SEPARATOR_LIGHT)
}

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

// ---------------------------------------------------------------------------
// Catalog rendering
// ---------------------------------------------------------------------------

fn category_color(category: Category) -> (u8, u8, u8) {
    match category {
        Category::Lookup => CATEGORY_LOOKUP,
        Category::Logic => CATEGORY_LOGIC,
        Category::Math => CATEGORY_MATH,
        Category::Text => CATEGORY_TEXT,
        Category::Date => CATEGORY_DATE,
    }
}

/// Renders a category label in its own color.
pub fn render_category(category: Category) -> String {
    color_str(category.as_str(), category_color(category))
}

/// Renders an input kind tag, e.g. `[range]`.
pub fn render_input_kind(kind: InputKind) -> String {
    render_muted(&format!("[{}]", kind))
}

/// A classified slice of a formula string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A function name directly followed by `(`.
    Function(&'a str),
    /// A double-quoted literal, quotes included.
    Literal(&'a str),
    Plain(&'a str),
}

/// Split a formula into function names, string literals and the rest.
///
/// An unterminated literal runs to the end of the input.
pub fn formula_segments(formula: &str) -> Vec<Segment<'_>> {
    let bytes = formula.as_bytes();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'"' {
            let end = formula[i + 1..]
                .find('"')
                .map(|off| i + off + 2)
                .unwrap_or(bytes.len());
            push_plain(&mut segments, &formula[plain_start..i]);
            segments.push(Segment::Literal(&formula[i..end]));
            i = end;
            plain_start = i;
        } else if is_name_byte(bytes[i]) && (i == 0 || !is_name_byte(bytes[i - 1])) {
            let end = bytes[i..]
                .iter()
                .position(|b| !is_name_byte(*b))
                .map(|off| i + off)
                .unwrap_or(bytes.len());
            if bytes.get(end) == Some(&b'(') && bytes[i].is_ascii_alphabetic() {
                push_plain(&mut segments, &formula[plain_start..i]);
                segments.push(Segment::Function(&formula[i..end]));
                plain_start = end;
            }
            i = end;
        } else {
            i += 1;
        }
    }
    push_plain(&mut segments, &formula[plain_start..]);
    segments
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

fn push_plain<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Plain(text));
    }
}

/// Renders a generated formula with function names and literals colored.
pub fn render_formula(formula: &str) -> String {
    if !supports_color() {
        return formula.to_string();
    }
    formula_segments(formula)
        .into_iter()
        .map(|segment| match segment {
            Segment::Function(name) => color_bold_str(name, ACCENT),
            Segment::Literal(lit) => color_str(lit, PASS),
            Segment::Plain(text) => text.to_string(),
        })
        .collect()
}

/// Shorten `s` to at most `max` characters, ending with an ellipsis when
/// cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}\u{2026}", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segments_simple_call() {
        assert_eq!(
            formula_segments("=VLOOKUP(A2, B:C, 2, FALSE)"),
            vec![
                Segment::Plain("="),
                Segment::Function("VLOOKUP"),
                Segment::Plain("(A2, B:C, 2, FALSE)"),
            ]
        );
    }

    #[test]
    fn segments_nested_and_literals() {
        assert_eq!(
            formula_segments("=LEFT(A2, FIND(\" \", A2) - 1)"),
            vec![
                Segment::Plain("="),
                Segment::Function("LEFT"),
                Segment::Plain("(A2, "),
                Segment::Function("FIND"),
                Segment::Plain("("),
                Segment::Literal("\" \""),
                Segment::Plain(", A2) - 1)"),
            ]
        );
    }

    #[test]
    fn segments_parens_inside_literal_are_not_calls() {
        let segs = formula_segments("=REGEXEXTRACT(A2, \"^(?:www\\.)?([^/]+)\")");
        assert_eq!(segs[1], Segment::Function("REGEXEXTRACT"));
        assert_eq!(segs[3], Segment::Literal("\"^(?:www\\.)?([^/]+)\""));
        assert_eq!(segs.len(), 5);
    }

    #[test]
    fn segments_unterminated_literal() {
        assert_eq!(
            formula_segments("=IF(\"x"),
            vec![Segment::Plain("="), Segment::Function("IF"), Segment::Plain("("), Segment::Literal("\"x")]
        );
    }

    #[test]
    fn cell_refs_are_not_functions() {
        assert_eq!(formula_segments("A2"), vec![Segment::Plain("A2")]);
    }

    #[test]
    fn rendered_formula_keeps_text() {
        let out = render_formula("=SUM(B2:B9)");
        assert!(out.contains("SUM"));
        assert!(out.contains("B2:B9"));
    }

    #[test]
    fn category_label_contains_name() {
        for category in Category::ALL {
            assert!(render_category(category).contains(category.as_str()));
        }
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd\u{2026}");
    }
}
