//! Syntax highlighting adapter around syntect.
//!
//! Best-effort by contract: every entry point falls back to plain text when
//! the syntax is unknown or highlighting fails, so the code pane stays
//! readable even without coloring.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};
use std::sync::OnceLock;
use syntect::{
    easy::HighlightLines,
    highlighting::{
        Color as SyntectColor, FontStyle, ScopeSelectors, StyleModifier, Theme, ThemeItem,
        ThemeSettings,
    },
    parsing::SyntaxSet,
    util::LinesWithEndings,
};

pub struct Highlighter {
    inner: HighlightLines<'static>,
}

fn syntax_set() -> &'static SyntaxSet {
    static SET: OnceLock<SyntaxSet> = OnceLock::new();
    SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Token colors matching the product page: emerald for language tokens,
/// mindaro for everything else, muted gray comments.
fn create_page_theme() -> Theme {
    let emerald = SyntectColor { r: 93, g: 211, b: 158, a: 255 }; // #5DD39E
    let mindaro = SyntectColor { r: 188, g: 231, b: 132, a: 255 }; // #BCE784
    let comment = SyntectColor { r: 102, g: 102, b: 102, a: 255 }; // #666666

    fn scope(s: &str) -> ScopeSelectors {
        s.parse().unwrap_or_default()
    }

    fn style(fg: SyntectColor) -> StyleModifier {
        StyleModifier {
            foreground: Some(fg),
            background: None,
            font_style: None,
        }
    }

    fn style_bold(fg: SyntectColor) -> StyleModifier {
        StyleModifier {
            foreground: Some(fg),
            background: None,
            font_style: Some(FontStyle::BOLD),
        }
    }

    fn style_italic(fg: SyntectColor) -> StyleModifier {
        StyleModifier {
            foreground: Some(fg),
            background: None,
            font_style: Some(FontStyle::ITALIC),
        }
    }

    Theme {
        name: Some("Sloptimize".to_string()),
        author: None,
        settings: ThemeSettings {
            foreground: Some(mindaro),
            background: None,
            ..Default::default()
        },
        scopes: vec![
            ThemeItem { scope: scope("comment"), style: style_italic(comment) },
            ThemeItem { scope: scope("string"), style: style(emerald) },
            ThemeItem { scope: scope("constant.numeric"), style: style(emerald) },
            ThemeItem { scope: scope("constant.language"), style: style(emerald) },
            ThemeItem { scope: scope("keyword"), style: style_bold(emerald) },
            ThemeItem { scope: scope("storage"), style: style_bold(emerald) },
            ThemeItem { scope: scope("entity.name.function"), style: style(emerald) },
            ThemeItem { scope: scope("support.function"), style: style(emerald) },
            ThemeItem { scope: scope("meta.function-call"), style: style(emerald) },
            ThemeItem { scope: scope("entity.name.type"), style: style(emerald) },
            ThemeItem { scope: scope("entity.name.class"), style: style(emerald) },
            ThemeItem { scope: scope("support.type"), style: style(emerald) },
            ThemeItem { scope: scope("support.class"), style: style(emerald) },
            ThemeItem { scope: scope("meta.annotation"), style: style(emerald) },
            ThemeItem { scope: scope("punctuation.definition.decorator"), style: style(emerald) },
            ThemeItem { scope: scope("variable"), style: style(mindaro) },
            ThemeItem { scope: scope("variable.parameter"), style: style_italic(mindaro) },
            ThemeItem { scope: scope("keyword.operator"), style: style(mindaro) },
            ThemeItem { scope: scope("punctuation"), style: style(mindaro) },
            ThemeItem {
                scope: scope("string.quoted.docstring"),
                style: style_italic(emerald),
            },
        ],
    }
}

fn theme() -> &'static Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME.get_or_init(create_page_theme)
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Push `fg` toward white (or black on light panes) until it clears a minimum
/// contrast ratio against `bg`. Non-RGB colors pass through untouched.
fn readable_on(fg: Color, bg: Color) -> Color {
    let (Color::Rgb(fr, fg_g, fb), Color::Rgb(br, bg_g, bb)) = (fg, bg) else {
        return fg;
    };

    let lf = luminance(fr, fg_g, fb);
    let lb = luminance(br, bg_g, bb);
    let (hi, lo) = if lf >= lb { (lf, lb) } else { (lb, lf) };
    let contrast = (hi + 0.05) / (lo + 0.05);

    let target = 6.5;
    if contrast >= target {
        return fg;
    }

    let toward = if lb < 0.5 { 255u8 } else { 0u8 };
    let alpha = ((target - contrast) / target).clamp(0.0, 1.0);
    let mix = |c: u8| -> u8 {
        let c = c as f32;
        let t = toward as f32;
        (c + (t - c) * alpha).round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(mix(fr), mix(fg_g), mix(fb))
}

/// Build a highlighter for the given extension, or `None` when syntect has no
/// grammar for it.
pub fn new_highlighter(ext: &str) -> Option<Highlighter> {
    let syntax = syntax_set().find_syntax_by_extension(ext)?;
    Some(Highlighter {
        inner: HighlightLines::new(syntax, theme()),
    })
}

impl Highlighter {
    /// Highlight a whole block of code, one output line per input line.
    /// Highlight state carries across lines, so multi-line constructs like
    /// docstrings color correctly.
    pub fn highlight_block(&mut self, text: &str, bg: Color) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        for raw in LinesWithEndings::from(text) {
            let line = raw.trim_end_matches(['\n', '\r']);
            out.push(self.highlight_line(line, bg));
        }
        if out.is_empty() {
            out.push(Line::raw(""));
        }
        out
    }

    pub fn highlight_line(&mut self, line: &str, bg: Color) -> Line<'static> {
        let ranges = self
            .inner
            .highlight_line(line, syntax_set())
            .unwrap_or_default();
        if ranges.is_empty() {
            return Line::from(Span::styled(line.to_string(), Style::default().bg(bg)));
        }

        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .map(|(style, text)| {
                let fg = readable_on(
                    Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b),
                    bg,
                );
                Span::styled(text.to_string(), Style::default().fg(fg).bg(bg))
            })
            .collect();
        Line::from(spans)
    }

    /// Highlight one diff code line with its edit marker re-attached in
    /// front. The marker is styled by the caller; only the code after it goes
    /// through syntect.
    pub fn highlight_marked_line(
        &mut self,
        marker: &str,
        code: &str,
        marker_style: Style,
        bg: Color,
    ) -> Line<'static> {
        let mut spans = Vec::new();
        if !marker.is_empty() {
            spans.push(Span::styled(marker.to_string(), marker_style.bg(bg)));
        }

        let ranges = self
            .inner
            .highlight_line(code, syntax_set())
            .unwrap_or_default();
        if ranges.is_empty() {
            spans.push(Span::styled(code.to_string(), Style::default().bg(bg)));
            return Line::from(spans);
        }

        for (style, text) in ranges {
            let fg = readable_on(
                Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b),
                bg,
            );
            spans.push(Span::styled(
                text.to_string(),
                Style::default().fg(fg).bg(bg),
            ));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_yields_no_highlighter() {
        assert!(new_highlighter("definitely-not-a-language").is_none());
        assert!(new_highlighter("py").is_some());
    }

    #[test]
    fn highlight_block_keeps_line_count() {
        let mut hl = new_highlighter("py").unwrap();
        let bg = Color::Rgb(23, 17, 24);
        let text = "import sys\n\nclass Worker:\n    pass\n";
        let lines = hl.highlight_block(text, bg);
        assert_eq!(lines.len(), text.lines().count());
    }

    #[test]
    fn highlight_block_of_empty_text_yields_one_blank_line() {
        let mut hl = new_highlighter("py").unwrap();
        let lines = hl.highlight_block("", Color::Rgb(23, 17, 24));
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn marked_line_leads_with_the_marker() {
        let mut hl = new_highlighter("py").unwrap();
        let line = hl.highlight_marked_line(
            "+",
            "import sys",
            Style::default(),
            Color::Rgb(23, 17, 24),
        );
        assert_eq!(line.spans[0].content.as_ref(), "+");
        let rest: String = line.spans[1..].iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rest, "import sys");
    }

    #[test]
    fn readable_on_lifts_dim_colors_on_dark_backgrounds() {
        let bg = Color::Rgb(23, 17, 24);
        let dim = Color::Rgb(30, 30, 30);
        let Color::Rgb(r, g, b) = readable_on(dim, bg) else {
            panic!("expected rgb");
        };
        let before = luminance(30, 30, 30);
        let after = luminance(r, g, b);
        assert!(after > before);
    }

    #[test]
    fn readable_on_passes_through_non_rgb() {
        assert_eq!(readable_on(Color::Reset, Color::Rgb(0, 0, 0)), Color::Reset);
    }
}
