//! Diff pane rendering - per-line style hooks mapped to palette tints, edit
//! markers re-attached in the gutter, code highlighted after the marker.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{display_width, gutter_span, gutter_width, render_scrollbar};
use crate::highlight::new_highlighter;
use crate::sample;
use crate::viewer::{ExampleView, StyleHook, render_view};
use crate::{App, PaneKey};

/// Render the Diff tab into `area`.
pub fn render_diff_tab(app: &mut App, f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.palette.border).bg(app.palette.bg))
        .title(format!(" {} ", sample::FILE_NAME))
        .title_style(Style::default().fg(app.palette.accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let key = PaneKey {
        view: ExampleView::Diff,
        width: inner.width,
    };
    if !app.pane_cache.matches(key) {
        let lines = build_diff_lines(app, inner.width as usize);
        app.pane_cache.store(key, lines);
    }

    let total = app.pane_cache.lines.len();
    let viewport = inner.height as usize;
    app.code_viewport_h = inner.height;
    app.max_scroll = total.saturating_sub(viewport) as u16;
    if app.scroll > app.max_scroll {
        app.scroll = app.max_scroll;
    }

    let para = Paragraph::new(app.pane_cache.lines.clone()).scroll((app.scroll, 0));
    f.render_widget(para, inner);

    render_scrollbar(f, area, total, viewport, app.scroll as usize);
}

fn build_diff_lines(app: &App, content_w: usize) -> Vec<Line<'static>> {
    let fragments = render_view(ExampleView::Diff, &app.sources);
    let total = fragments.len();
    let num_w = gutter_width(total, app.line_numbers);

    let mut highlighter = app
        .syntax_highlight
        .then(|| new_highlighter(sample::LANG_EXT))
        .flatten();

    let mut out = Vec::with_capacity(total);
    for (i, frag) in fragments.iter().enumerate() {
        let (marker, bg, marker_fg) = match frag.hook {
            StyleHook::Added => ("+", app.palette.diff_add_bg, app.palette.diff_add_fg),
            StyleHook::Removed => ("-", app.palette.diff_del_bg, app.palette.diff_del_fg),
            StyleHook::None => ("", app.palette.bg, app.palette.fg),
        };

        let mut line = match highlighter.as_mut() {
            Some(hl) => hl.highlight_marked_line(
                marker,
                &frag.text,
                Style::default().fg(marker_fg).add_modifier(Modifier::BOLD),
                bg,
            ),
            None => {
                let fg = match frag.hook {
                    StyleHook::Added => app.palette.diff_add_fg,
                    StyleHook::Removed => app.palette.diff_del_fg,
                    StyleHook::None => app.palette.fg,
                };
                Line::from(Span::styled(
                    format!("{}{}", marker, frag.text),
                    Style::default().fg(fg).bg(bg),
                ))
            }
        };

        // Extend the tint to the pane's right edge.
        if frag.hook != StyleHook::None {
            let used = num_w + marker.len() + display_width(&frag.text);
            let fill = content_w.saturating_sub(used);
            if fill > 0 {
                line.spans
                    .push(Span::styled(" ".repeat(fill), Style::default().bg(bg)));
            }
        }

        if app.line_numbers {
            line.spans
                .insert(0, gutter_span(i + 1, total, app.palette.line_num, bg));
        }

        out.push(line);
    }
    out
}
