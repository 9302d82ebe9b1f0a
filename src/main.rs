use arboard::Clipboard;
use base64::{Engine as _, engine::general_purpose};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
    },
    execute,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
    time::{Duration, Instant},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

mod events;
mod highlight;
mod sample;
mod ui;
mod viewer;

use events::KeyEventResult;
use viewer::{ExampleSources, ExampleView, VIEW_ORDER, ViewerState};

mod theme {
    use ratatui::style::Color;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum Theme {
        Sloptimize,
        Terminal,
        Dracula,
    }

    impl Theme {
        pub fn label(self) -> &'static str {
            match self {
                Theme::Sloptimize => "Sloptimize",
                Theme::Terminal => "Terminal",
                Theme::Dracula => "Dracula",
            }
        }
    }

    #[derive(Clone, Copy, Debug)]
    pub struct Palette {
        pub bg: Color,
        pub panel_bg: Color,
        pub fg: Color,
        pub accent: Color,
        pub muted: Color,
        pub border: Color,
        pub btn_fg: Color,
        pub line_num: Color,
        pub diff_add_bg: Color,
        pub diff_del_bg: Color,
        pub diff_add_fg: Color,
        pub diff_del_fg: Color,
    }

    fn tint(base: Color, overlay: Color, alpha: f32) -> Color {
        let (br, bg, bb) = match base {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => return base,
        };
        let (or, og, ob) = match overlay {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => return base,
        };

        let mix = |b: u8, o: u8| -> u8 {
            let b = b as f32;
            let o = o as f32;
            let v = b + (o - b) * alpha;
            v.round().clamp(0.0, 255.0) as u8
        };

        Color::Rgb(mix(br, or), mix(bg, og), mix(bb, ob))
    }

    pub fn palette(theme: Theme) -> Palette {
        match theme {
            Theme::Sloptimize => {
                // The product page palette: licorice, raisin black, midnight
                // green, mindaro, emerald. Diff tints at the page's 10%.
                let bg = Color::Rgb(23, 17, 24);
                let fg = Color::Rgb(188, 231, 132);
                let accent = Color::Rgb(93, 211, 158);
                let diff_add_tint = Color::Rgb(93, 211, 158);
                let diff_del_tint = Color::Rgb(255, 107, 107);

                Palette {
                    bg,
                    panel_bg: Color::Rgb(33, 33, 48),
                    fg,
                    accent,
                    muted: Color::Rgb(115, 138, 88),
                    border: Color::Rgb(29, 78, 94),
                    btn_fg: Color::Rgb(23, 17, 24),
                    line_num: Color::Rgb(102, 102, 102),
                    diff_add_bg: tint(bg, diff_add_tint, 0.10),
                    diff_del_bg: tint(bg, diff_del_tint, 0.10),
                    diff_add_fg: diff_add_tint,
                    diff_del_fg: diff_del_tint,
                }
            }
            Theme::Terminal => {
                let bg = Color::Rgb(22, 22, 22);
                let diff_add_tint = Color::Rgb(86, 182, 194);
                let diff_del_tint = Color::Rgb(224, 108, 117);

                Palette {
                    bg,
                    panel_bg: Color::Rgb(38, 38, 38),
                    fg: Color::Rgb(212, 212, 212),
                    accent: Color::Rgb(97, 175, 239),
                    muted: Color::Rgb(92, 99, 112),
                    border: Color::Rgb(68, 68, 68),
                    btn_fg: Color::Rgb(22, 22, 22),
                    line_num: Color::Rgb(88, 91, 112),
                    diff_add_bg: tint(bg, diff_add_tint, 0.20),
                    diff_del_bg: tint(bg, diff_del_tint, 0.20),
                    diff_add_fg: diff_add_tint,
                    diff_del_fg: diff_del_tint,
                }
            }
            Theme::Dracula => {
                let bg = Color::Rgb(40, 42, 54);
                let diff_add_tint = Color::Rgb(80, 250, 123);
                let diff_del_tint = Color::Rgb(255, 85, 85);

                Palette {
                    bg,
                    panel_bg: Color::Rgb(68, 71, 90),
                    fg: Color::Rgb(248, 248, 242),
                    accent: Color::Rgb(189, 147, 249),
                    muted: Color::Rgb(98, 114, 164),
                    border: Color::Rgb(98, 114, 164),
                    btn_fg: Color::Rgb(40, 42, 54),
                    line_num: Color::Rgb(98, 114, 164),
                    diff_add_bg: tint(bg, diff_add_tint, 0.15),
                    diff_del_bg: tint(bg, diff_del_tint, 0.15),
                    diff_add_fg: diff_add_tint,
                    diff_del_fg: diff_del_tint,
                }
            }
        }
    }
}

const THEME_ORDER: [theme::Theme; 3] = [
    theme::Theme::Sloptimize,
    theme::Theme::Terminal,
    theme::Theme::Dracula,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AppAction {
    SelectView(ExampleView),
    CopyCode,
    CopyInstallCommand,
    CycleTheme,
}

#[derive(Clone)]
pub(crate) struct ClickZone {
    pub(crate) rect: Rect,
    pub(crate) action: AppAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PaneKey {
    pub(crate) view: ExampleView,
    pub(crate) width: u16,
}

/// Cache of the fully built pane lines; avoids re-running syntect on every
/// frame. Invalidated on theme or display-toggle changes; view switches and
/// resizes are covered by the key.
#[derive(Default)]
pub(crate) struct PaneCache {
    key: Option<PaneKey>,
    pub(crate) lines: Vec<Line<'static>>,
}

impl PaneCache {
    pub(crate) fn invalidate(&mut self) {
        self.key = None;
        self.lines.clear();
    }

    pub(crate) fn matches(&self, key: PaneKey) -> bool {
        self.key == Some(key)
    }

    pub(crate) fn store(&mut self, key: PaneKey, lines: Vec<Line<'static>>) {
        self.key = Some(key);
        self.lines = lines;
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedUiSettings {
    #[serde(default)]
    theme: Option<theme::Theme>,
    #[serde(default)]
    syntax_highlight: Option<bool>,
    #[serde(default)]
    line_numbers: Option<bool>,
}

pub(crate) struct App {
    pub(crate) sources: ExampleSources,
    pub(crate) state: ViewerState,

    pub(crate) scroll: u16,
    pub(crate) max_scroll: u16,
    pub(crate) code_viewport_h: u16,
    pub(crate) should_quit: bool,

    pub(crate) theme: theme::Theme,
    pub(crate) palette: theme::Palette,
    pub(crate) syntax_highlight: bool,
    pub(crate) line_numbers: bool,

    pub(crate) zones: Vec<ClickZone>,
    pub(crate) pane_cache: PaneCache,

    pub(crate) status_message: Option<(String, Instant)>,
    pub(crate) status_ttl: Duration,
    pub(crate) pending_clipboard: Option<String>,
    pub(crate) ui_settings_path: Option<PathBuf>,
}

impl App {
    fn new(sources: ExampleSources) -> Self {
        let theme = theme::Theme::Sloptimize;
        Self {
            sources,
            state: ViewerState::new(),
            scroll: 0,
            max_scroll: 0,
            code_viewport_h: 0,
            should_quit: false,
            theme,
            palette: theme::palette(theme),
            syntax_highlight: true,
            line_numbers: false,
            zones: Vec::new(),
            pane_cache: PaneCache::default(),
            status_message: None,
            status_ttl: Duration::from_secs(2),
            pending_clipboard: None,
            ui_settings_path: ui_settings_file_path(),
        }
    }

    pub(crate) fn select_view(&mut self, view: ExampleView) {
        self.state.select_view(view);
        self.scroll = 0;
    }

    pub(crate) fn select_next_view(&mut self) {
        let i = VIEW_ORDER
            .iter()
            .position(|v| *v == self.state.active())
            .unwrap_or(0);
        self.select_view(VIEW_ORDER[(i + 1) % VIEW_ORDER.len()]);
    }

    pub(crate) fn select_prev_view(&mut self) {
        let i = VIEW_ORDER
            .iter()
            .position(|v| *v == self.state.active())
            .unwrap_or(0);
        self.select_view(VIEW_ORDER[(i + VIEW_ORDER.len() - 1) % VIEW_ORDER.len()]);
    }

    pub(crate) fn apply_action(&mut self, action: AppAction) {
        match action {
            AppAction::SelectView(view) => self.select_view(view),
            AppAction::CopyCode => self.copy_active_view(),
            AppAction::CopyInstallCommand => self.copy_install_command(),
            AppAction::CycleTheme => self.cycle_theme(),
        }
    }

    pub(crate) fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub(crate) fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll);
    }

    pub(crate) fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.code_viewport_h.max(1));
    }

    pub(crate) fn page_down(&mut self) {
        self.scroll = self
            .scroll
            .saturating_add(self.code_viewport_h.max(1))
            .min(self.max_scroll);
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
    }

    fn set_theme(&mut self, theme: theme::Theme) {
        self.theme = theme;
        self.palette = theme::palette(theme);
        self.pane_cache.invalidate();
    }

    pub(crate) fn cycle_theme(&mut self) {
        let i = THEME_ORDER
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        let next = THEME_ORDER[(i + 1) % THEME_ORDER.len()];
        self.set_theme(next);
        self.set_status(format!("Theme: {}", next.label()));
    }

    pub(crate) fn toggle_syntax_highlight(&mut self) {
        self.syntax_highlight = !self.syntax_highlight;
        self.pane_cache.invalidate();
        if self.syntax_highlight && highlight::new_highlighter(sample::LANG_EXT).is_none() {
            self.set_status(format!("No syntax definition for .{}", sample::LANG_EXT));
        } else if self.syntax_highlight {
            self.set_status("Syntax highlighting on");
        } else {
            self.set_status("Syntax highlighting off");
        }
    }

    pub(crate) fn toggle_line_numbers(&mut self) {
        self.line_numbers = !self.line_numbers;
        self.pane_cache.invalidate();
        self.set_status(if self.line_numbers {
            "Line numbers on"
        } else {
            "Line numbers off"
        });
    }

    pub(crate) fn copy_active_view(&mut self) {
        let text = self.sources.source(self.state.active()).to_string();
        self.pending_clipboard = Some(text);
    }

    pub(crate) fn copy_install_command(&mut self) {
        self.pending_clipboard = Some(sample::INSTALL_COMMAND.to_string());
    }

    pub(crate) fn take_pending_clipboard(&mut self) -> Option<String> {
        self.pending_clipboard.take()
    }

    fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    fn maybe_expire_status(&mut self) -> bool {
        let should_clear = self
            .status_message
            .as_ref()
            .is_some_and(|(_, t)| t.elapsed() >= self.status_ttl);
        if should_clear {
            self.status_message = None;
        }
        should_clear
    }

    fn load_persisted_ui_settings(&mut self) {
        let Some(path) = self.ui_settings_path.clone() else {
            return;
        };

        let Some(data) = fs::read_to_string(&path).ok() else {
            return;
        };

        let settings: PersistedUiSettings = match serde_json::from_str(&data) {
            Ok(s) => s,
            Err(_) => return,
        };

        if let Some(theme) = settings.theme {
            self.set_theme(theme);
        }
        if let Some(syntax) = settings.syntax_highlight {
            self.syntax_highlight = syntax;
        }
        if let Some(numbers) = settings.line_numbers {
            self.line_numbers = numbers;
        }
    }

    fn save_persisted_ui_settings(&self) {
        let Some(path) = self.ui_settings_path.clone() else {
            return;
        };

        let settings = PersistedUiSettings {
            theme: Some(self.theme),
            syntax_highlight: Some(self.syntax_highlight),
            line_numbers: Some(self.line_numbers),
        };

        let content = match serde_json::to_string(&settings) {
            Ok(s) => s,
            Err(_) => return,
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let tmp = path.with_extension("tmp");
        if fs::write(&tmp, content).is_err() || fs::rename(&tmp, &path).is_err() {
            let _ = fs::remove_file(&tmp);
        }
    }
}

fn draw_ui(f: &mut Frame, app: &mut App) -> Vec<ClickZone> {
    let mut zones = Vec::new();
    let area = f.area();

    f.render_widget(Block::default().bg(app.palette.bg), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let top_bar = main_layout[0];
    let content_area = main_layout[1];
    let footer_area = main_layout[2];

    let top_block = Block::default().borders(Borders::BOTTOM).border_style(
        Style::default()
            .fg(app.palette.border)
            .bg(app.palette.bg),
    );
    f.render_widget(top_block, top_bar);

    let tabs_y = top_bar.y;
    let mut tab_x = top_bar.x + 1;
    for view in VIEW_ORDER {
        let label = format!(" {} ", view.label());
        let width = label.len() as u16;
        let is_active = app.state.active() == view;
        let style = if is_active {
            Style::default()
                .bg(app.palette.accent)
                .fg(app.palette.btn_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(app.palette.panel_bg).fg(app.palette.fg)
        };
        f.render_widget(
            Paragraph::new(label).style(style),
            Rect::new(tab_x, tabs_y, width, 1),
        );
        zones.push(ClickZone {
            rect: Rect::new(tab_x, tabs_y, width, 1),
            action: AppAction::SelectView(view),
        });
        tab_x += width + 1;
    }

    let brand = "sloptimize";
    let brand_w = brand.len() as u16;
    if top_bar.width > brand_w + 2 {
        f.render_widget(
            Paragraph::new(brand).style(
                Style::default()
                    .fg(app.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Rect::new(top_bar.x + top_bar.width - brand_w - 2, tabs_y, brand_w, 1),
        );
    }

    let second_row_y = top_bar.y + 1;
    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", sample::FILE_NAME),
            Style::default().fg(app.palette.accent),
        ),
        Span::styled(
            format!(" {}", app.state.active().description()),
            Style::default().fg(app.palette.muted),
        ),
    ]);
    f.render_widget(
        Paragraph::new(header),
        Rect::new(top_bar.x + 1, second_row_y, top_bar.width.saturating_sub(2), 1),
    );

    match app.state.active() {
        ExampleView::Diff => ui::tabs::render_diff_tab(app, f, content_area),
        ExampleView::Original | ExampleView::Optimized => {
            ui::tabs::render_code_tab(app, f, content_area)
        }
    }

    let footer_block = Block::default().borders(Borders::TOP).border_style(
        Style::default()
            .fg(app.palette.border)
            .bg(app.palette.bg),
    );
    f.render_widget(footer_block, footer_area);

    let btn_y = footer_area.y + 1;
    let mut btn_x = footer_area.x + 2;
    let buttons: [(&str, AppAction); 3] = [
        (" y Copy code ", AppAction::CopyCode),
        (" i Copy install ", AppAction::CopyInstallCommand),
        (" t Theme ", AppAction::CycleTheme),
    ];
    for (label, action) in buttons {
        let width = label.len() as u16;
        if btn_x + width >= footer_area.x + footer_area.width {
            break;
        }
        f.render_widget(
            Paragraph::new(label).style(
                Style::default()
                    .bg(app.palette.panel_bg)
                    .fg(app.palette.fg),
            ),
            Rect::new(btn_x, btn_y, width, 1),
        );
        zones.push(ClickZone {
            rect: Rect::new(btn_x, btn_y, width, 1),
            action,
        });
        btn_x += width + 1;
    }

    let used = btn_x.saturating_sub(footer_area.x);
    let available = footer_area.width.saturating_sub(used).saturating_sub(2);
    if available > 0 {
        if let Some((msg, _)) = &app.status_message {
            let w = (msg.len() as u16).min(available);
            f.render_widget(
                Paragraph::new(msg.as_str()).style(Style::default().fg(app.palette.accent)),
                Rect::new(btn_x + 1, btn_y, w, 1),
            );
        } else {
            let hint = "1/2/3 views  Tab next  j/k scroll  s syntax  n numbers  q quit";
            let w = (hint.len() as u16).min(available);
            f.render_widget(
                Paragraph::new(hint).style(Style::default().fg(app.palette.muted)),
                Rect::new(btn_x + 1, btn_y, w, 1),
            );
        }
    }

    zones
}

fn is_ssh_session() -> bool {
    env::var_os("SSH_CONNECTION").is_some() || env::var_os("SSH_TTY").is_some()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

fn in_tmux() -> bool {
    env::var_os("TMUX").is_some()
        || env::var_os("TERM").is_some_and(|t| t.to_string_lossy().starts_with("tmux"))
}

fn tmux_passthrough(seq: &str) -> String {
    let escaped = seq.replace('\x1b', "\x1b\x1b");
    format!("\x1bPtmux;{}\x1b\\", escaped)
}

fn emit_osc52<W: Write>(w: &mut W, text: &str) -> io::Result<()> {
    let seq = osc52_sequence(text);
    let out = if in_tmux() {
        tmux_passthrough(&seq)
    } else {
        seq
    };
    execute!(w, Print(out))?;
    w.flush()
}

fn try_set_system_clipboard(text: &str) -> Result<(), String> {
    let mut cb = Clipboard::new().map_err(|e| e.to_string())?;
    cb.set_text(text.to_string()).map_err(|e| e.to_string())
}

fn ui_settings_file_path() -> Option<PathBuf> {
    let home = env::home_dir()?;
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join(".config"));
    Some(base.join("slopview").join("ui.json"))
}

#[tokio::main]
async fn main() -> io::Result<()> {
    if let Some(arg) = env::args().nth(1) {
        if arg == "--version" || arg == "-V" {
            println!("slopview {}", VERSION);
            return Ok(());
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(sample::sources());
    app.load_persisted_ui_settings();
    if app.syntax_highlight && highlight::new_highlighter(sample::LANG_EXT).is_none() {
        app.set_status(format!("No syntax definition for .{}", sample::LANG_EXT));
    }

    let mut event_stream = EventStream::new();

    loop {
        app.maybe_expire_status();

        let mut zones = Vec::new();
        terminal.draw(|f| {
            zones = draw_ui(f, &mut app);
        })?;
        app.zones = zones;

        let tick = tokio::time::sleep(Duration::from_millis(100));
        tokio::pin!(tick);

        tokio::select! {
            Some(event_result) = event_stream.next() => {
                if let Ok(event) = event_result {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if let KeyEventResult::Quit = events::handle_key_event(&mut app, key) {
                                app.should_quit = true;
                            }
                        }
                        Event::Mouse(mouse) => events::handle_mouse_event(&mut app, mouse),
                        _ => {}
                    }
                }
            }
            _ = &mut tick => {}
        }

        if let Some(text) = app.take_pending_clipboard() {
            let osc52_result = emit_osc52(&mut io::stdout(), &text);

            let is_ssh = is_ssh_session();
            let mut system_result = Ok(());
            if !is_ssh {
                system_result = try_set_system_clipboard(&text);
            }

            match (osc52_result, system_result) {
                (Ok(_), Ok(_)) => {
                    if is_ssh {
                        app.set_status(if in_tmux() {
                            "Copied (OSC52/tmux)"
                        } else {
                            "Copied (OSC52)"
                        });
                    } else {
                        app.set_status("Copied");
                    }
                }
                (Ok(_), Err(e)) => {
                    app.set_status(format!("Copied (OSC52); clipboard error: {}", e));
                }
                (Err(e), Ok(_)) => {
                    app.set_status(format!("Clipboard set; OSC52 error: {}", e));
                }
                (Err(e1), Err(e2)) => {
                    app.set_status(format!("Copy failed: {}; {}", e1, e2));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.save_persisted_ui_settings();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ui_settings_survive_a_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ui.json");

        let mut app = App::new(sample::sources());
        app.ui_settings_path = Some(path.clone());
        app.set_theme(theme::Theme::Dracula);
        app.syntax_highlight = false;
        app.line_numbers = true;
        app.save_persisted_ui_settings();

        let mut restored = App::new(sample::sources());
        restored.ui_settings_path = Some(path);
        restored.load_persisted_ui_settings();

        assert_eq!(restored.theme, theme::Theme::Dracula);
        assert!(!restored.syntax_highlight);
        assert!(restored.line_numbers);
    }

    #[test]
    fn unreadable_settings_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ui.json");
        fs::write(&path, "not json").unwrap();

        let mut app = App::new(sample::sources());
        app.ui_settings_path = Some(path);
        app.load_persisted_ui_settings();

        assert_eq!(app.theme, theme::Theme::Sloptimize);
        assert!(app.syntax_highlight);
    }

    #[test]
    fn cycle_theme_walks_the_order_and_wraps() {
        let mut app = App::new(sample::sources());
        assert_eq!(app.theme, THEME_ORDER[0]);
        for expected in THEME_ORDER.iter().cycle().skip(1).take(THEME_ORDER.len()) {
            app.cycle_theme();
            assert_eq!(app.theme, *expected);
        }
        assert_eq!(app.theme, THEME_ORDER[0]);
    }

    #[test]
    fn select_view_resets_scroll() {
        let mut app = App::new(sample::sources());
        app.max_scroll = 40;
        app.scroll_down(10);
        assert_eq!(app.scroll, 10);
        app.apply_action(AppAction::SelectView(ExampleView::Diff));
        assert_eq!(app.scroll, 0);
        assert_eq!(app.state.active(), ExampleView::Diff);
    }

    #[test]
    fn scrolling_is_clamped_to_content() {
        let mut app = App::new(sample::sources());
        app.max_scroll = 5;
        app.scroll_down(100);
        assert_eq!(app.scroll, 5);
        app.scroll_up(100);
        assert_eq!(app.scroll, 0);
        app.code_viewport_h = 3;
        app.page_down();
        assert_eq!(app.scroll, 3);
        app.scroll_to_bottom();
        assert_eq!(app.scroll, 5);
        app.scroll_to_top();
        assert_eq!(app.scroll, 0);
    }
}
