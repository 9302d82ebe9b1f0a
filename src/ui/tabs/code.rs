//! Original/Optimized pane rendering - one untagged block of source text,
//! syntax highlighted as a whole.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{gutter_span, render_scrollbar};
use crate::highlight::new_highlighter;
use crate::sample;
use crate::viewer::render_view;
use crate::{App, PaneKey};

/// Render the Original or Optimized tab into `area`.
pub fn render_code_tab(app: &mut App, f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.palette.border).bg(app.palette.bg))
        .title(format!(" {} ", sample::FILE_NAME))
        .title_style(Style::default().fg(app.palette.accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let key = PaneKey {
        view: app.state.active(),
        width: inner.width,
    };
    if !app.pane_cache.matches(key) {
        let lines = build_code_lines(app);
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

fn build_code_lines(app: &App) -> Vec<Line<'static>> {
    let view = app.state.active();
    let fragments = render_view(view, &app.sources);
    let bg = app.palette.bg;

    // Plain views always produce exactly one untagged block.
    let text = fragments
        .first()
        .map(|frag| frag.text.as_str())
        .unwrap_or("");

    let mut lines = match app
        .syntax_highlight
        .then(|| new_highlighter(sample::LANG_EXT))
        .flatten()
    {
        Some(mut hl) => hl.highlight_block(text, bg),
        None => plain_lines(text, app),
    };

    if app.line_numbers {
        let total = lines.len();
        for (i, line) in lines.iter_mut().enumerate() {
            line.spans
                .insert(0, gutter_span(i + 1, total, app.palette.line_num, bg));
        }
    }

    lines
}

fn plain_lines(text: &str, app: &App) -> Vec<Line<'static>> {
    let style = Style::default().fg(app.palette.fg).bg(app.palette.bg);
    let mut out: Vec<Line<'static>> = text
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if out.is_empty() {
        out.push(Line::raw(""));
    }
    out
}
