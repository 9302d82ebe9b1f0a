//! Tab rendering modules

mod code;
mod diff;

pub use code::render_code_tab;
pub use diff::render_diff_tab;

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_width::UnicodeWidthChar;

pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|ch| {
            if ch == '\t' {
                4
            } else {
                UnicodeWidthChar::width(ch).unwrap_or(0)
            }
        })
        .sum()
}

/// Gutter width for `total` lines: digit count plus the trailing space.
pub(crate) fn gutter_width(total: usize, enabled: bool) -> usize {
    if !enabled {
        return 0;
    }
    total.max(1).ilog10() as usize + 2
}

pub(crate) fn gutter_span(n: usize, total: usize, fg: Color, bg: Color) -> Span<'static> {
    let digits = total.max(1).ilog10() as usize + 1;
    Span::styled(
        format!("{:>digits$} ", n),
        Style::default().fg(fg).bg(bg),
    )
}

/// Vertical scrollbar on the pane's right edge; omitted when everything fits.
pub(crate) fn render_scrollbar(
    f: &mut Frame,
    area: Rect,
    total: usize,
    viewport: usize,
    position: usize,
) {
    if total <= viewport {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▴"))
        .end_symbol(Some("▾"))
        .track_symbol(Some("│"))
        .thumb_symbol("█");
    let max_scroll = total.saturating_sub(viewport).max(1);
    let mut state = ScrollbarState::new(max_scroll).position(position);
    f.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_expands_tabs_and_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("\ta"), 5);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn gutter_width_tracks_digit_count() {
        assert_eq!(gutter_width(9, true), 2);
        assert_eq!(gutter_width(10, true), 3);
        assert_eq!(gutter_width(100, true), 4);
        assert_eq!(gutter_width(100, false), 0);
    }
}
