//! Core viewer logic: which example view is active, how annotated diff text
//! is classified line by line, and how a view projects to style-tagged
//! fragments for the presentation layer.

/// The three variants of the sample program a viewer can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExampleView {
    Original,
    Diff,
    Optimized,
}

impl ExampleView {
    pub fn label(self) -> &'static str {
        match self {
            ExampleView::Original => "Original",
            ExampleView::Diff => "Diff",
            ExampleView::Optimized => "Optimized",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExampleView::Original => "the code as submitted",
            ExampleView::Diff => "what sloptimize changed",
            ExampleView::Optimized => "the cleaned-up result",
        }
    }
}

pub const VIEW_ORDER: [ExampleView; 3] = [
    ExampleView::Original,
    ExampleView::Diff,
    ExampleView::Optimized,
];

/// Edit kind of a single annotated diff line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffLineKind {
    Context,
    Added,
    Removed,
}

impl DiffLineKind {
    /// Marker as it appears in the annotated source text. Context lines carry
    /// no marker of their own.
    pub fn marker(self) -> &'static str {
        match self {
            DiffLineKind::Context => "",
            DiffLineKind::Added => "+",
            DiffLineKind::Removed => "-",
        }
    }
}

/// One line of annotated diff text with its marker stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub text: String,
}

/// Classify pre-annotated diff text line by line.
///
/// Only the first character of each line is consulted: `+` is an addition,
/// `-` a removal, anything else (including an empty line) is context and kept
/// untouched. Output length always equals the `'\n'`-separated segment count
/// of the input, trailing empty segment included.
pub fn classify_diff(text: &str) -> Vec<DiffLine> {
    text.split('\n')
        .map(|line| {
            if let Some(rest) = line.strip_prefix('+') {
                DiffLine {
                    kind: DiffLineKind::Added,
                    text: rest.to_string(),
                }
            } else if let Some(rest) = line.strip_prefix('-') {
                DiffLine {
                    kind: DiffLineKind::Removed,
                    text: rest.to_string(),
                }
            } else {
                DiffLine {
                    kind: DiffLineKind::Context,
                    text: line.to_string(),
                }
            }
        })
        .collect()
}

/// The three raw source texts backing a viewer, supplied once at startup.
#[derive(Clone, Debug)]
pub struct ExampleSources {
    pub original: String,
    pub diff: String,
    pub optimized: String,
}

impl ExampleSources {
    pub fn source(&self, view: ExampleView) -> &str {
        match view {
            ExampleView::Original => &self.original,
            ExampleView::Diff => &self.diff,
            ExampleView::Optimized => &self.optimized,
        }
    }
}

/// Which view is currently shown. Starts on Original; changed only through
/// [`ViewerState::select_view`].
#[derive(Clone, Debug)]
pub struct ViewerState {
    active: ExampleView,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            active: ExampleView::Original,
        }
    }

    pub fn active(&self) -> ExampleView {
        self.active
    }

    /// Switch to `view`. Always legal; selecting the already-active view
    /// leaves the state unchanged but still counts as a view change for the
    /// caller's re-render purposes.
    pub fn select_view(&mut self, view: ExampleView) {
        self.active = view;
    }
}

/// Style tag the presentation layer maps to colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleHook {
    None,
    Added,
    Removed,
}

/// An ordered piece of display text. The diff view produces one fragment per
/// classified line; the other views produce a single untagged block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeFragment {
    pub text: String,
    pub hook: StyleHook,
}

/// Project the active view onto display fragments. Pure: the sources are
/// never mutated and identical inputs yield identical output.
pub fn render_view(view: ExampleView, sources: &ExampleSources) -> Vec<CodeFragment> {
    match view {
        ExampleView::Diff => classify_diff(&sources.diff)
            .into_iter()
            .map(|line| CodeFragment {
                hook: match line.kind {
                    DiffLineKind::Added => StyleHook::Added,
                    DiffLineKind::Removed => StyleHook::Removed,
                    DiffLineKind::Context => StyleHook::None,
                },
                text: line.text,
            })
            .collect(),
        ExampleView::Original | ExampleView::Optimized => vec![CodeFragment {
            text: sources.source(view).to_string(),
            hook: StyleHook::None,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> ExampleSources {
        ExampleSources {
            original: "a = 1\nb = 2".to_string(),
            diff: "+b = 2\n a = 1\n-c = 3\n".to_string(),
            optimized: "b = 2\na = 1".to_string(),
        }
    }

    #[test]
    fn classify_marks_added_removed_and_context() {
        let lines = classify_diff("+foo\n-bar\n baz\n");
        assert_eq!(
            lines,
            vec![
                DiffLine {
                    kind: DiffLineKind::Added,
                    text: "foo".to_string()
                },
                DiffLine {
                    kind: DiffLineKind::Removed,
                    text: "bar".to_string()
                },
                DiffLine {
                    kind: DiffLineKind::Context,
                    text: " baz".to_string()
                },
                DiffLine {
                    kind: DiffLineKind::Context,
                    text: String::new()
                },
            ]
        );
    }

    #[test]
    fn classify_without_markers_is_all_context() {
        let lines = classify_diff("line1\nline2");
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.kind == DiffLineKind::Context));
        assert_eq!(lines[0].text, "line1");
        assert_eq!(lines[1].text, "line2");
    }

    #[test]
    fn classify_empty_text_is_a_single_empty_context_line() {
        let lines = classify_diff("");
        assert_eq!(
            lines,
            vec![DiffLine {
                kind: DiffLineKind::Context,
                text: String::new()
            }]
        );
    }

    #[test]
    fn classify_bare_markers_strip_to_empty_text() {
        let lines = classify_diff("+\n-");
        assert_eq!(lines[0].kind, DiffLineKind::Added);
        assert_eq!(lines[0].text, "");
        assert_eq!(lines[1].kind, DiffLineKind::Removed);
        assert_eq!(lines[1].text, "");
    }

    #[test]
    fn classify_preserves_line_count() {
        for text in [
            "",
            "\n",
            "+a",
            "+a\n",
            " ctx\n+add\n-del",
            "\n\n\n",
            "no markers at all\nstill none",
        ] {
            assert_eq!(classify_diff(text).len(), text.split('\n').count());
        }
    }

    #[test]
    fn classify_round_trips_with_markers_restored() {
        let text = "+from typing import Any\n import sys\n-import time\n\n unchanged\n";
        let rebuilt = classify_diff(text)
            .iter()
            .map(|l| format!("{}{}", l.kind.marker(), l.text))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn select_view_is_idempotent() {
        let mut state = ViewerState::new();
        assert_eq!(state.active(), ExampleView::Original);
        state.select_view(ExampleView::Diff);
        assert_eq!(state.active(), ExampleView::Diff);
        state.select_view(ExampleView::Diff);
        assert_eq!(state.active(), ExampleView::Diff);
    }

    #[test]
    fn render_diff_view_tags_each_line() {
        let fragments = render_view(ExampleView::Diff, &sources());
        assert_eq!(fragments.len(), 4);
        assert_eq!(fragments[0].hook, StyleHook::Added);
        assert_eq!(fragments[0].text, "b = 2");
        assert_eq!(fragments[1].hook, StyleHook::None);
        assert_eq!(fragments[1].text, " a = 1");
        assert_eq!(fragments[2].hook, StyleHook::Removed);
        assert_eq!(fragments[2].text, "c = 3");
        assert_eq!(fragments[3].hook, StyleHook::None);
        assert_eq!(fragments[3].text, "");
    }

    #[test]
    fn render_plain_views_emit_one_untagged_block() {
        let srcs = sources();
        for view in [ExampleView::Original, ExampleView::Optimized] {
            let fragments = render_view(view, &srcs);
            assert_eq!(fragments.len(), 1);
            assert_eq!(fragments[0].hook, StyleHook::None);
            assert_eq!(fragments[0].text, srcs.source(view));
        }
    }

    #[test]
    fn render_is_deterministic() {
        let srcs = sources();
        for view in VIEW_ORDER {
            assert_eq!(render_view(view, &srcs), render_view(view, &srcs));
        }
    }

    #[test]
    fn render_does_not_mutate_sources() {
        let srcs = sources();
        let before = srcs.clone();
        let _ = render_view(ExampleView::Diff, &srcs);
        assert_eq!(srcs.diff, before.diff);
        assert_eq!(srcs.original, before.original);
        assert_eq!(srcs.optimized, before.optimized);
    }
}
