use crate::catalog::{Catalog, HomeView};
use crate::command::{self, Command};
use crate::config::{self, SettingsThemeStore, ThemeStore};
use crate::lyrics::LyricSheet;
use crate::model::{Session, Theme};
use crate::playback::{NowPlaying, PlaybackView, format_time};
use crate::schedule;
use crate::shell::{NavShell, page_title};
use crate::ui::{self, FrameLayout};
use anyhow::Result;
use crossterm::cursor::Show;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Rect;
use std::io::stdout;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const IDLE_REDRAW: Duration = Duration::from_millis(250);
const MAX_POLL: Duration = Duration::from_millis(33);
const SEEK_STEP: i64 = 5;
const VOLUME_STEP: i16 = 5;

#[derive(Debug, Clone, Default)]
pub struct AppStartupOptions {
    pub theme: Option<Theme>,
    pub frame_rate: Option<u16>,
    pub start_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Home,
    Player,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Sidebar => Self::Home,
            Self::Home => Self::Player,
            Self::Player => Self::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Command,
    Search,
}

pub struct App {
    pub shell: NavShell,
    pub home: HomeView,
    pub playback: PlaybackView,
    pub lyrics: LyricSheet,
    pub focus: Focus,
    pub input: InputMode,
    pub command_buffer: String,
    pub status: String,
    pub dirty: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: &Session, theme_store: Box<dyn ThemeStore>) -> Self {
        Self {
            shell: NavShell::new(&session.start_path, theme_store),
            home: HomeView::new(Catalog::demo()),
            playback: PlaybackView::mount(NowPlaying::default(), session.frame_interval()),
            lyrics: LyricSheet::default(),
            focus: Focus::default(),
            input: InputMode::default(),
            command_buffer: String::new(),
            status: String::from("Ready"),
            dirty: true,
            should_quit: false,
        }
    }

    pub fn unmount(self) {
        self.playback.unmount();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.dirty = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input {
            InputMode::Command => self.handle_command_key(key, now),
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal if self.shell.menu.open => self.handle_menu_key(key),
            InputMode::Normal => self.handle_normal_key(key, now),
        }
        self.dirty = true;
    }

    fn handle_command_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.input = InputMode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let raw = std::mem::take(&mut self.command_buffer);
                self.input = InputMode::Normal;
                self.run_command(&raw, now);
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(ch) => self.command_buffer.push(ch),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input = InputMode::Normal,
            KeyCode::Backspace => self.shell.pop_search(),
            KeyCode::Char(ch) => self.shell.push_search(ch),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') => self.shell.toggle_menu(),
            KeyCode::Down => self.shell.menu_next(),
            KeyCode::Up => self.shell.menu_prev(),
            KeyCode::Enter => {
                if let Some(activation) = self.shell.activate_menu() {
                    let action = activation.action;
                    if activation.navigated {
                        self.report_navigation();
                    } else if action.href().is_some() {
                        self.set_status(format!("Already on {}", self.shell.current_path()));
                    } else {
                        self.set_status(format!("{} is not available", action.label()));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Char(':') => self.input = InputMode::Command,
            KeyCode::Char('/') => self.input = InputMode::Search,
            KeyCode::Char(' ') => self.toggle_play(now),
            KeyCode::Char('+') | KeyCode::Char('=') => self.nudge_volume(VOLUME_STEP),
            KeyCode::Char('-') => self.nudge_volume(-VOLUME_STEP),
            KeyCode::Char('m') => self.toggle_mute(),
            KeyCode::Char('l') => self.toggle_like(),
            KeyCode::Char('y') => self.toggle_lyrics(),
            KeyCode::Char('f') => self.toggle_fullscreen(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('p') => self.shell.toggle_menu(),
            KeyCode::Char('<') => self.history_back(),
            KeyCode::Char('>') => self.history_forward(),
            KeyCode::Char(']') => self.home.next_tab(),
            KeyCode::Char('[') => self.home.prev_tab(),
            KeyCode::Char('S') => self.set_status("Shuffle is not available in this preview"),
            KeyCode::Char('R') => self.set_status("Repeat is not available in this preview"),
            KeyCode::Char('P') => self.set_status("No previous track"),
            KeyCode::Char('N') => self.set_status("No next track"),
            KeyCode::Char('Q') => self.set_status("Queue is empty"),
            KeyCode::Esc if self.playback.toggles().fullscreen => self.toggle_fullscreen(),
            KeyCode::Up => match self.focus {
                Focus::Sidebar => self.shell.select_prev(),
                Focus::Home => self.home.select_prev_card(),
                Focus::Player => self.nudge_volume(VOLUME_STEP),
            },
            KeyCode::Down => match self.focus {
                Focus::Sidebar => self.shell.select_next(),
                Focus::Home => self.home.select_next_card(),
                Focus::Player => self.nudge_volume(-VOLUME_STEP),
            },
            KeyCode::Left => match self.focus {
                Focus::Home => self.home.select_prev_card(),
                Focus::Player => self.playback.seek_by(-SEEK_STEP),
                Focus::Sidebar => {}
            },
            KeyCode::Right => match self.focus {
                Focus::Home => self.home.select_next_card(),
                Focus::Player => self.playback.seek_by(SEEK_STEP),
                Focus::Sidebar => {}
            },
            KeyCode::Enter => match self.focus {
                Focus::Sidebar => {
                    if self.shell.activate_selected().is_some() {
                        self.report_navigation();
                    }
                }
                Focus::Home => {
                    if let Some(item) = self.home.selected_item() {
                        let message = format!("{} by {} (preview only)", item.title, item.artist);
                        self.set_status(message);
                    }
                }
                Focus::Player => self.toggle_play(now),
            },
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &FrameLayout) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
                if point_in_rect(x, y, layout.progress) =>
            {
                let ratio = ratio_in_rect(x, layout.progress);
                let duration = self.playback.transport().duration_seconds();
                self.playback
                    .scrub((ratio * f64::from(duration)).round() as u32);
                self.dirty = true;
            }
            MouseEventKind::ScrollDown if point_in_rect(x, y, layout.sidebar) => {
                self.shell.select_next();
                self.dirty = true;
            }
            MouseEventKind::ScrollUp if point_in_rect(x, y, layout.sidebar) => {
                self.shell.select_prev();
                self.dirty = true;
            }
            MouseEventKind::ScrollDown if point_in_rect(x, y, layout.home) => {
                self.home.select_next_card();
                self.dirty = true;
            }
            MouseEventKind::ScrollUp if point_in_rect(x, y, layout.home) => {
                self.home.select_prev_card();
                self.dirty = true;
            }
            _ => {}
        }
    }

    pub fn run_command(&mut self, raw: &str, now: Instant) {
        let command = match command::parse(raw) {
            Ok(command) => command,
            Err(err) => {
                self.set_status(err.to_string());
                return;
            }
        };

        match command {
            Command::Help => self.set_status(command::HELP),
            Command::Play => {
                self.playback.play(now);
                self.set_status("Playing");
            }
            Command::Pause => {
                self.playback.pause();
                self.set_status("Paused");
            }
            Command::Seek(seconds) => {
                self.playback.seek(seconds);
                let elapsed = self.playback.transport().elapsed_seconds();
                self.set_status(format!("Seek to {}", format_time(elapsed)));
            }
            Command::Volume(level) => {
                self.playback.set_volume(level);
                self.set_status(format!("Volume: {level}%"));
            }
            Command::Mute => self.toggle_mute(),
            Command::Like => self.toggle_like(),
            Command::Lyrics => self.toggle_lyrics(),
            Command::Fullscreen => self.toggle_fullscreen(),
            Command::Go(path) => {
                if self.shell.navigate(&path) {
                    self.report_navigation();
                } else {
                    self.set_status(format!("Already on {}", self.shell.current_path()));
                }
            }
            Command::Back => self.history_back(),
            Command::Forward => self.history_forward(),
            Command::Theme(None) => self.toggle_theme(),
            Command::Theme(Some(theme)) => self.apply_theme(theme),
            Command::Tab(tab) => {
                self.home.set_tab(tab);
                self.set_status(format!("Tab: {}", tab.label()));
            }
            Command::Search(text) => {
                self.shell.clear_search();
                text.chars().for_each(|ch| self.shell.push_search(ch));
                self.set_status(format!("Search: {text}"));
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn toggle_play(&mut self, now: Instant) {
        self.playback.toggle_play(now);
        if self.playback.transport().is_playing() {
            self.set_status("Playing");
        } else {
            self.set_status("Paused");
        }
    }

    fn nudge_volume(&mut self, delta: i16) {
        self.playback.nudge_volume(delta);
        let volume = self.playback.volume();
        self.set_status(format!("Volume: {}%", volume.level()));
    }

    fn toggle_mute(&mut self) {
        self.playback.toggle_mute();
        if self.playback.volume().is_muted() {
            self.set_status("Muted");
        } else {
            self.set_status("Unmuted");
        }
    }

    fn toggle_like(&mut self) {
        self.playback.toggle_like();
        let title = self.playback.now_playing().title.clone();
        if self.playback.toggles().liked {
            self.set_status(format!("Liked {title}"));
        } else {
            self.set_status(format!("Removed {title} from liked songs"));
        }
    }

    fn toggle_lyrics(&mut self) {
        self.playback.toggle_lyrics();
        if self.playback.toggles().lyrics_visible {
            self.set_status("Lyrics shown");
        } else {
            self.set_status("Lyrics hidden");
        }
    }

    fn toggle_fullscreen(&mut self) {
        self.playback.toggle_fullscreen();
        self.dirty = true;
    }

    fn toggle_theme(&mut self) {
        self.apply_theme(self.shell.theme().toggled());
    }

    fn apply_theme(&mut self, theme: Theme) {
        match self.shell.set_theme(theme) {
            Ok(theme) => self.set_status(format!("Theme: {}", theme.label())),
            Err(err) => self.set_status(format!("theme error: {err:#}")),
        }
    }

    fn history_back(&mut self) {
        if self.shell.navigator.back() {
            self.report_navigation();
        } else {
            self.set_status("Nothing to go back to");
        }
    }

    fn history_forward(&mut self) {
        if self.shell.navigator.forward() {
            self.report_navigation();
        } else {
            self.set_status("Nothing to go forward to");
        }
    }

    fn report_navigation(&mut self) {
        let title = page_title(self.shell.current_path());
        self.set_status(format!("Opened {title}"));
    }
}

pub fn run() -> Result<()> {
    run_with_startup(AppStartupOptions::default())
}

pub fn prepare_startup(options: AppStartupOptions) -> Result<(Session, SettingsThemeStore)> {
    let settings = config::load_settings()?;
    let mut session = Session::from_settings(&settings);
    if let Some(frame_rate) = options.frame_rate {
        session.frame_rate = frame_rate;
    }
    if let Some(path) = options.start_path {
        session.start_path = path;
    }

    // The store only ever sees what was on disk so command-line overrides stay one-shot.
    let mut theme_store = SettingsThemeStore::new(settings);
    if let Some(theme) = options.theme
        && theme != theme_store.theme()
        && let Err(err) = theme_store.set_theme(theme)
    {
        warn!("theme preference not saved: {err:#}");
    }
    Ok((session, theme_store))
}

pub fn run_with_startup(options: AppStartupOptions) -> Result<()> {
    let (session, theme_store) = prepare_startup(options)?;
    info!(
        frame_rate = session.frame_rate,
        start_path = %session.start_path,
        "starting"
    );
    let mut app = App::new(&session, Box::new(theme_store));

    let (restore, mut terminal) = guarded(restore_terminal, || {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
        terminal.clear()?;
        Ok(terminal)
    })?;

    let mut layout = FrameLayout::default();
    let mut last_draw = Instant::now();

    let result: Result<()> = loop {
        let now = Instant::now();
        if app.playback.pump(now).changed() {
            app.dirty = true;
        }

        if app.dirty || last_draw.elapsed() > IDLE_REDRAW {
            if let Err(err) = terminal.draw(|frame| layout = ui::draw(frame, &app)) {
                break Err(err.into());
            }
            app.playback
                .attach_surface(layout.waveform_geometry(), Instant::now());
            app.dirty = false;
            last_draw = Instant::now();
        }

        if app.should_quit {
            break Ok(());
        }

        let timeout = schedule::earliest_due(
            &[app.playback.ticker(), app.playback.redraw_task()],
            Instant::now(),
        )
        .unwrap_or(MAX_POLL)
        .min(MAX_POLL);

        match event::poll(timeout) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => break Err(err.into()),
        }

        match event::read() {
            Ok(Event::Key(key)) => app.handle_key(key, Instant::now()),
            Ok(Event::Mouse(mouse)) => app.handle_mouse(mouse, &layout),
            Ok(Event::Resize(_, _)) => app.dirty = true,
            Ok(_) => {}
            Err(err) => break Err(err.into()),
        }
    };

    drop(terminal);
    drop(restore);
    app.unmount();
    info!("stopped");
    result
}

struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

// The guard exists before setup runs, so a half-finished setup is still undone.
fn guarded<F: FnOnce(), T>(
    restore: F,
    setup: impl FnOnce() -> Result<T>,
) -> Result<(RestoreGuard<F>, T)> {
    let guard = RestoreGuard {
        restore: Some(restore),
    };
    let value = setup()?;
    Ok((guard, value))
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!("failed to leave raw mode: {err}");
    }
    if let Err(err) = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!("failed to restore terminal screen: {err}");
    }
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

fn ratio_in_rect(x: u16, rect: Rect) -> f64 {
    if rect.width <= 1 {
        return 0.0;
    }
    let offset = x.saturating_sub(rect.x).min(rect.width - 1);
    f64::from(offset) / f64::from(rect.width - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryThemeStore;
    use crate::catalog::HomeTab;
    use crossterm::event::KeyEventState;
    use std::cell::Cell;

    fn app() -> App {
        App::new(
            &Session::default(),
            Box::new(MemoryThemeStore::new(Theme::Dark)),
        )
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
            now,
        );
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn space_toggles_playback_and_ticker() {
        let start = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char(' '), start);
        assert!(app.playback.transport().is_playing());
        assert!(app.playback.is_ticking());
        assert_eq!(app.status, "Playing");

        press(&mut app, KeyCode::Char(' '), start);
        assert!(!app.playback.is_ticking());
        assert_eq!(app.status, "Paused");
    }

    #[test]
    fn pause_lands_before_the_next_tick() {
        let start = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char(' '), start);
        app.playback.pump(start + Duration::from_secs(1));
        press(&mut app, KeyCode::Char(' '), start + Duration::from_millis(1_999));
        app.playback.pump(start + Duration::from_secs(2));
        assert_eq!(app.playback.transport().elapsed_seconds(), 1);
    }

    #[test]
    fn command_mode_runs_seek() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char(':'), now);
        assert_eq!(app.input, InputMode::Command);
        for ch in "seek 1:30".chars() {
            press(&mut app, KeyCode::Char(ch), now);
        }
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.input, InputMode::Normal);
        assert_eq!(app.playback.transport().elapsed_seconds(), 90);
        assert_eq!(app.status, "Seek to 1:30");
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut app = app();
        app.run_command("wat", Instant::now());
        assert!(app.status.contains("unknown command"));
    }

    #[test]
    fn volume_commands_follow_mute_rules() {
        let now = Instant::now();
        let mut app = app();
        app.run_command("vol 0", now);
        assert!(app.playback.volume().is_muted());
        app.run_command("vol 40", now);
        assert!(!app.playback.volume().is_muted());
        press(&mut app, KeyCode::Char('m'), now);
        assert_eq!(app.status, "Muted");
        assert_eq!(app.playback.volume().level(), 40);
    }

    #[test]
    fn search_mode_edits_search_text() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('/'), now);
        for ch in "adele".chars() {
            press(&mut app, KeyCode::Char(ch), now);
        }
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.shell.search(), "adele");
        assert_eq!(app.input, InputMode::Normal);
        assert!(!app.playback.toggles().liked);
    }

    #[test]
    fn sidebar_enter_navigates_and_history_returns() {
        let now = Instant::now();
        let mut app = app();
        app.focus = Focus::Sidebar;
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.shell.current_path(), "/discover");
        assert_eq!(app.status, "Opened Discover");

        press(&mut app, KeyCode::Char('<'), now);
        assert_eq!(app.shell.current_path(), "/");
        press(&mut app, KeyCode::Char('>'), now);
        assert_eq!(app.shell.current_path(), "/discover");
    }

    #[test]
    fn profile_menu_captures_arrow_keys() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('p'), now);
        assert!(app.shell.menu.open);
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.status, "Subscription is not available");
        assert_eq!(app.home.selected_card(), 0);
    }

    #[test]
    fn profile_menu_reports_current_page() {
        let now = Instant::now();
        let mut app = App::new(
            &Session {
                start_path: String::from("/profile"),
                ..Session::default()
            },
            Box::new(MemoryThemeStore::new(Theme::Dark)),
        );
        press(&mut app, KeyCode::Char('p'), now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.status, "Already on /profile");
        assert!(!app.shell.navigator.can_go_back());

        press(&mut app, KeyCode::Char('p'), now);
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.status, "Opened Settings");
    }

    #[test]
    fn failed_setup_still_restores() {
        let restored = Cell::new(0);
        let result: Result<(RestoreGuard<_>, ())> = guarded(
            || restored.set(restored.get() + 1),
            || Err(anyhow::anyhow!("no terminal")),
        );
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn restore_runs_once_when_guard_drops() {
        let restored = Cell::new(0);
        let (guard, value) =
            guarded(|| restored.set(restored.get() + 1), || Ok(7)).expect("setup");
        assert_eq!(value, 7);
        assert_eq!(restored.get(), 0);
        drop(guard);
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn tabs_switch_with_brackets_and_commands() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char(']'), now);
        assert_eq!(app.home.active_tab(), HomeTab::Trending);
        app.run_command("tab new-releases", now);
        assert_eq!(app.home.active_tab(), HomeTab::NewReleases);
    }

    #[test]
    fn theme_key_flips_theme() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'), Instant::now());
        assert_eq!(app.shell.theme(), Theme::Light);
        assert_eq!(app.status, "Theme: light");
    }

    #[test]
    fn clicking_progress_bar_scrubs_and_pauses() {
        let now = Instant::now();
        let mut app = app();
        app.playback.play(now);
        let layout = FrameLayout {
            progress: Rect::new(10, 20, 101, 1),
            ..FrameLayout::default()
        };
        app.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 60, 20),
            &layout,
        );
        assert!(!app.playback.transport().is_playing());
        assert_eq!(app.playback.transport().elapsed_seconds(), 109);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app();
        app.input = InputMode::Command;
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn unwired_transport_buttons_only_report() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('S'), now);
        assert!(app.status.contains("Shuffle"));
        assert!(!app.playback.transport().is_playing());
    }
}
