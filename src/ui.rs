use crate::app::{App, Focus, InputMode};
use crate::catalog::HomeTab;
use crate::model::{CatalogItem, FeaturedPlaylist, Theme};
use crate::playback::{PlaybackView, VolumeIcon, format_time};
use crate::shell::{APP_NAME, HOME_PATH, ProfileAction, SidebarSection, page_title};
use crate::waveform::{WaveformFrame, WaveformGeometry};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};

const SIDEBAR_WIDTH: u16 = 26;
const PLAYER_HEIGHT: u16 = 6;
const BAR_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const GREETING: &str = "Good afternoon";
const SEARCH_PLACEHOLDER: &str = "Search for songs, artists, or albums...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameLayout {
    pub sidebar: Rect,
    pub home: Rect,
    pub progress: Rect,
    pub waveform: Option<Rect>,
}

impl FrameLayout {
    pub fn waveform_geometry(&self) -> Option<WaveformGeometry> {
        self.waveform
            .and_then(|area| WaveformGeometry::for_cells(area.width, area.height))
    }
}

#[derive(Clone, Copy)]
struct ThemePalette {
    bg: Color,
    panel_bg: Color,
    panel_alt_bg: Color,
    border: Color,
    text: Color,
    muted: Color,
    accent: Color,
    alert: Color,
    selected_bg: Color,
    popup_bg: Color,
    popup_selected_bg: Color,
}

fn palette(theme: Theme) -> ThemePalette {
    match theme {
        Theme::Dark => ThemePalette {
            bg: Color::Rgb(9, 9, 11),
            panel_bg: Color::Rgb(18, 18, 22),
            panel_alt_bg: Color::Rgb(26, 26, 32),
            border: Color::Rgb(63, 63, 70),
            text: Color::Rgb(244, 244, 245),
            muted: Color::Rgb(161, 161, 170),
            accent: Color::Rgb(34, 197, 94),
            alert: Color::Rgb(249, 174, 88),
            selected_bg: Color::Rgb(39, 39, 42),
            popup_bg: Color::Rgb(24, 24, 27),
            popup_selected_bg: Color::Rgb(52, 52, 58),
        },
        Theme::Light => ThemePalette {
            bg: Color::Rgb(250, 250, 250),
            panel_bg: Color::Rgb(255, 255, 255),
            panel_alt_bg: Color::Rgb(244, 244, 245),
            border: Color::Rgb(212, 212, 216),
            text: Color::Rgb(9, 9, 11),
            muted: Color::Rgb(113, 113, 122),
            accent: Color::Rgb(22, 163, 74),
            alert: Color::Rgb(194, 65, 12),
            selected_bg: Color::Rgb(228, 228, 231),
            popup_bg: Color::Rgb(255, 255, 255),
            popup_selected_bg: Color::Rgb(220, 252, 231),
        },
    }
}

pub fn draw(frame: &mut Frame, app: &App) -> FrameLayout {
    let colors = palette(app.shell.theme());
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg)),
        frame.area(),
    );

    if app.playback.toggles().fullscreen {
        return draw_fullscreen(frame, app, &colors);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(frame.area());

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(PLAYER_HEIGHT),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    draw_sidebar(frame, app, columns[0], &colors);
    draw_top_bar(frame, app, main[0], &colors);
    if app.shell.current_path() == HOME_PATH {
        draw_home(frame, app, main[1], &colors);
    } else {
        draw_missing_page(frame, app, main[1], &colors);
    }
    let progress = draw_player_bar(frame, app, main[2], &colors);
    draw_status_line(frame, app, main[3], &colors);

    if app.shell.menu.open {
        draw_profile_menu(frame, app, &colors);
    }

    FrameLayout {
        sidebar: columns[0],
        home: main[1],
        progress,
        waveform: None,
    }
}

fn panel_block(title: &str, bg: Color, text: Color, border: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(text).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg))
}

fn focus_border(app: &App, focus: Focus, colors: &ThemePalette) -> Color {
    if app.focus == focus {
        colors.accent
    } else {
        colors.border
    }
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect, colors: &ThemePalette) {
    let mut items = Vec::with_capacity(app.shell.sidebar.len() + 2);
    let mut display_selected = 0;
    let mut previous = None;

    for (idx, entry) in app.shell.sidebar.iter().enumerate() {
        if previous != Some(entry.section) {
            let heading = match entry.section {
                SidebarSection::Routes => None,
                SidebarSection::Library => Some("Your Library"),
                SidebarSection::Playlists => Some("Your Playlists"),
            };
            if let Some(heading) = heading {
                items.push(ListItem::new(Line::from(Span::styled(
                    heading,
                    Style::default()
                        .fg(colors.muted)
                        .add_modifier(Modifier::BOLD),
                ))));
            }
            previous = Some(entry.section);
        }

        if idx == app.shell.selected_sidebar() {
            display_selected = items.len();
        }

        let active = app.shell.is_entry_active(idx);
        let marker = if active { "> " } else { "  " };
        let style = if active {
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(colors.accent)),
            Span::styled(entry.label.as_str(), style),
        ])));
    }

    let mut state = ListState::default();
    if app.focus == Focus::Sidebar {
        state.select(Some(display_selected));
    }

    let list = List::new(items)
        .block(panel_block(
            &format!("♫ {APP_NAME}"),
            colors.panel_bg,
            colors.text,
            focus_border(app, Focus::Sidebar, colors),
        ))
        .highlight_style(
            Style::default()
                .bg(colors.selected_bg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_top_bar(frame: &mut Frame, app: &App, area: Rect, colors: &ThemePalette) {
    frame.render_widget(
        panel_block(
            &page_title(app.shell.current_path()),
            colors.panel_bg,
            colors.text,
            colors.border,
        ),
        area,
    );
    let inner = area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(inner);

    let nav_style = |enabled: bool| {
        if enabled {
            Style::default().fg(colors.text)
        } else {
            Style::default().fg(colors.muted)
        }
    };
    let searching = app.input == InputMode::Search;
    let search = if app.shell.search().is_empty() && !searching {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(colors.muted))
    } else {
        Span::styled(
            format!("{}{}", app.shell.search(), if searching { "_" } else { "" }),
            Style::default().fg(colors.text),
        )
    };
    let left = Paragraph::new(Line::from(vec![
        Span::styled("‹ ", nav_style(app.shell.navigator.can_go_back())),
        Span::styled("›", nav_style(app.shell.navigator.can_go_forward())),
        Span::styled("   Search: ", Style::default().fg(colors.accent)),
        search,
    ]));
    frame.render_widget(left, chunks[0]);

    let theme_label = match app.shell.theme() {
        Theme::Dark => "☀ Light",
        Theme::Light => "☾ Dark",
    };
    let right = Paragraph::new(Line::from(vec![
        Span::styled(theme_label, Style::default().fg(colors.alert)),
        Span::styled("  |  ", Style::default().fg(colors.muted)),
        Span::styled("Alerts", Style::default().fg(colors.muted)),
        Span::styled("  |  ", Style::default().fg(colors.muted)),
        Span::styled(
            "[JD] ▾",
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect, colors: &ThemePalette) {
    frame.render_widget(
        panel_block(
            GREETING,
            colors.panel_bg,
            colors.text,
            focus_border(app, Focus::Home, colors),
        ),
        area,
    );
    let inner = area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });

    let tab = app.home.active_tab();
    let secondary = tab.secondary_heading();
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(if secondary.is_some() { 4 } else { 0 }),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_featured(frame, &app.home.catalog.featured, sections[0]);

    let titles: Vec<Line> = HomeTab::ALL
        .iter()
        .map(|tab| Line::from(tab.label()))
        .collect();
    let selected_tab = HomeTab::ALL
        .iter()
        .position(|candidate| *candidate == tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected_tab)
        .style(Style::default().fg(colors.muted))
        .highlight_style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled(" | ", Style::default().fg(colors.muted)));
    frame.render_widget(tabs, sections[1]);

    let selected = (app.focus == Focus::Home).then_some(app.home.selected_card());
    draw_shelf(
        frame,
        tab.heading(),
        &app.home.visible_items(),
        selected,
        sections[2],
        colors,
    );

    if let Some(heading) = secondary {
        let items: Vec<&CatalogItem> = app.home.catalog.made_for_you().iter().collect();
        draw_shelf(frame, heading, &items, None, sections[3], colors);
    }

    let based_on: Vec<&CatalogItem> = app.home.catalog.new_release_shelf().iter().collect();
    draw_shelf(
        frame,
        "Based on your listening",
        &based_on,
        None,
        sections[4],
        colors,
    );
}

fn draw_featured(frame: &mut Frame, playlists: &[FeaturedPlaylist], area: Rect) {
    if playlists.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, playlists.len() as u32); playlists.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (playlist, cell) in playlists.iter().zip(cells.iter()) {
        let (r, g, b) = playlist.gradient.from;
        let (tr, tg, tb) = playlist.gradient.to;
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                playlist.description.as_str(),
                Style::default().fg(Color::Rgb(255, 255, 255)),
            )),
            Line::from(Span::styled(
                "▶ Play",
                Style::default().fg(Color::Rgb(tr, tg, tb)),
            )),
        ])
        .block(panel_block(
            &playlist.title,
            Color::Rgb(r / 3, g / 3, b / 3),
            Color::Rgb(255, 255, 255),
            Color::Rgb(r, g, b),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(card, *cell);
    }
}

fn draw_shelf(
    frame: &mut Frame,
    heading: &str,
    items: &[&CatalogItem],
    selected: Option<usize>,
    area: Rect,
    colors: &ThemePalette,
) {
    if area.height == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                heading,
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   See all", Style::default().fg(colors.muted)),
        ])),
        rows[0],
    );

    if items.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, items.len() as u32); items.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[1]);

    for (idx, (item, cell)) in items.iter().zip(cells.iter()).enumerate() {
        let is_selected = selected == Some(idx);
        let (bg, border) = if is_selected {
            (colors.selected_bg, colors.accent)
        } else {
            (colors.panel_alt_bg, colors.border)
        };
        let card = Paragraph::new(Line::from(Span::styled(
            item.artist.as_str(),
            Style::default().fg(colors.muted),
        )))
        .block(panel_block(&item.title, bg, colors.text, border));
        frame.render_widget(card, *cell);
    }
}

fn draw_missing_page(frame: &mut Frame, app: &App, area: Rect, colors: &ThemePalette) {
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(colors.alert)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This page could not be found.",
            Style::default().fg(colors.muted),
        )),
    ])
    .alignment(Alignment::Center)
    .block(panel_block(
        app.shell.current_path(),
        colors.panel_bg,
        colors.text,
        focus_border(app, Focus::Home, colors),
    ));
    frame.render_widget(body, area);
}

fn draw_player_bar(frame: &mut Frame, app: &App, area: Rect, colors: &ThemePalette) -> Rect {
    frame.render_widget(
        panel_block(
            "Now Playing",
            colors.panel_alt_bg,
            colors.text,
            focus_border(app, Focus::Player, colors),
        ),
        area,
    );
    let inner = area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .split(inner);

    frame.render_widget(now_playing_lines(&app.playback, colors), columns[0]);
    let progress = draw_transport(frame, &app.playback, columns[1], colors);
    frame.render_widget(
        Paragraph::new(extra_controls(&app.playback, colors)).alignment(Alignment::Right),
        columns[2],
    );
    progress
}

fn now_playing_lines<'a>(playback: &'a PlaybackView, colors: &ThemePalette) -> Paragraph<'a> {
    let now = playback.now_playing();
    let heart = if playback.toggles().liked { "♥" } else { "♡" };
    let heart_color = if playback.toggles().liked {
        colors.accent
    } else {
        colors.muted
    };
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                now.title.as_str(),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(heart, Style::default().fg(heart_color)),
        ]),
        Line::from(Span::styled(
            now.artist.as_str(),
            Style::default().fg(colors.muted),
        )),
    ])
}

fn draw_transport(
    frame: &mut Frame,
    playback: &PlaybackView,
    area: Rect,
    colors: &ThemePalette,
) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let transport = playback.transport();
    let play_label = if transport.is_playing() {
        " ❚❚ Pause "
    } else {
        " ▶ Play "
    };
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("⤮  ", Style::default().fg(colors.muted)),
        Span::styled("|◀  ", Style::default().fg(colors.muted)),
        Span::styled(
            play_label,
            Style::default()
                .fg(colors.bg)
                .bg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ▶|", Style::default().fg(colors.muted)),
        Span::styled("  ⟲", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(controls, rows[0]);

    let bar_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(4),
            Constraint::Length(7),
        ])
        .split(rows[1]);

    frame.render_widget(
        Paragraph::new(format_time(transport.elapsed_seconds()))
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Right),
        bar_row[0],
    );
    let bar_area = bar_row[1].inner(Margin {
        vertical: 0,
        horizontal: 1,
    });
    frame.render_widget(
        Paragraph::new(slider_line(
            transport.progress_ratio(),
            usize::from(bar_area.width),
            colors,
        )),
        bar_area,
    );
    frame.render_widget(
        Paragraph::new(format_time(transport.duration_seconds()))
            .style(Style::default().fg(colors.muted)),
        bar_row[2],
    );
    bar_area
}

fn extra_controls<'a>(playback: &PlaybackView, colors: &ThemePalette) -> Vec<Line<'a>> {
    let toggles = playback.toggles();
    let volume = playback.volume();
    let lyrics_color = if toggles.lyrics_visible {
        colors.accent
    } else {
        colors.muted
    };
    let volume_icon = match volume.icon() {
        VolumeIcon::Muted => "🔇",
        VolumeIcon::Audible => "🔊",
    };
    let shown_level = volume.effective();

    vec![
        Line::from(vec![
            Span::styled("Lyrics", Style::default().fg(lyrics_color)),
            Span::styled("  Queue", Style::default().fg(colors.muted)),
            Span::styled("  ⛶", Style::default().fg(colors.muted)),
        ]),
        Line::from(vec![
            Span::styled(format!("{volume_icon} "), Style::default().fg(colors.text)),
            Span::styled(
                progress_bar(f64::from(shown_level) / 100.0, 10),
                Style::default().fg(colors.accent),
            ),
            Span::styled(
                format!(" {shown_level:>3}%"),
                Style::default().fg(colors.muted),
            ),
        ]),
    ]
}

fn slider_line<'a>(ratio: f64, width: usize, colors: &ThemePalette) -> Line<'a> {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let filled = filled.min(width);
    Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(colors.accent)),
        Span::styled(
            "─".repeat(width.saturating_sub(filled)),
            Style::default().fg(colors.border),
        ),
    ])
}

fn progress_bar(ratio: f64, width: usize) -> String {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.push_str(&"#".repeat(filled));
    bar.push_str(&"-".repeat(width.saturating_sub(filled)));
    bar.push(']');
    bar
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect, colors: &ThemePalette) {
    let line = match app.input {
        InputMode::Command => Line::from(vec![
            Span::styled(":", Style::default().fg(colors.accent)),
            Span::styled(
                format!("{}_", app.command_buffer),
                Style::default().fg(colors.text),
            ),
        ]),
        InputMode::Search => Line::from(Span::styled(
            "Typing search, Enter or Esc to finish",
            Style::default().fg(colors.muted),
        )),
        InputMode::Normal => Line::from(vec![
            Span::styled(
                "Space play, Tab focus, [ ] tabs, < > history, t theme, p profile, / search, : command, q quit",
                Style::default().fg(colors.muted),
            ),
            Span::styled("  |  ", Style::default().fg(colors.muted)),
            Span::styled(app.status.as_str(), Style::default().fg(colors.text)),
        ]),
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors.panel_bg)),
        area,
    );
}

fn draw_profile_menu(frame: &mut Frame, app: &App, colors: &ThemePalette) {
    let area = frame.area();
    let width = 24.min(area.width);
    let height = (ProfileAction::ALL.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 3.min(area.height.saturating_sub(height)),
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = ProfileAction::ALL
        .iter()
        .map(|action| {
            ListItem::new(Span::styled(
                action.label(),
                Style::default().fg(colors.text),
            ))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(app.shell.menu.selected.min(ProfileAction::ALL.len() - 1)));

    let list = List::new(items)
        .block(panel_block(
            "Account",
            colors.popup_bg,
            colors.text,
            colors.border,
        ))
        .highlight_style(
            Style::default()
                .bg(colors.popup_selected_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("-> ");
    frame.render_stateful_widget(list, popup, &mut state);
}

fn draw_fullscreen(frame: &mut Frame, app: &App, colors: &ThemePalette) -> FrameLayout {
    let playback = &app.playback;
    let lyrics_height = if playback.toggles().lyrics_visible {
        app.lyrics.lines.len() as u16 + 2
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(lyrics_height),
            Constraint::Length(PLAYER_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        now_playing_lines(playback, colors)
            .alignment(Alignment::Center)
            .block(panel_block(
                "Now Playing",
                colors.panel_bg,
                colors.text,
                colors.border,
            )),
        rows[0],
    );

    let wave_block = panel_block("Visualizer", colors.panel_bg, colors.text, colors.border);
    let wave_inner = wave_block.inner(rows[1]);
    frame.render_widget(wave_block, rows[1]);
    frame.render_widget(
        Paragraph::new(waveform_lines(playback.waveform(), wave_inner.height, colors)),
        wave_inner,
    );

    if lyrics_height > 0 {
        let lines: Vec<Line> = app
            .lyrics
            .lines
            .iter()
            .map(|line| {
                let style = if line.highlighted {
                    Style::default()
                        .fg(colors.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.muted)
                };
                Line::from(Span::styled(line.text.as_str(), style))
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(panel_block(
                    &app.lyrics.title,
                    colors.panel_alt_bg,
                    colors.text,
                    colors.border,
                )),
            rows[2],
        );
    }

    let progress = draw_player_bar(frame, app, rows[3], colors);
    draw_status_line(frame, app, rows[4], colors);

    FrameLayout {
        sidebar: Rect::default(),
        home: Rect::default(),
        progress,
        waveform: Some(wave_inner),
    }
}

fn waveform_lines<'a>(frame: &WaveformFrame, rows: u16, colors: &ThemePalette) -> Vec<Line<'a>> {
    let levels: Vec<(usize, f64)> = frame
        .ratios()
        .zip(frame.bars.iter())
        .map(|(ratio, bar)| ((ratio * f64::from(rows) * 8.0).round() as usize, bar.intensity))
        .collect();

    (0..rows)
        .map(|row| {
            let from_bottom = usize::from(rows - 1 - row);
            let spans: Vec<Span> = levels
                .iter()
                .map(|&(eighths, intensity)| {
                    let fill = eighths.saturating_sub(from_bottom * 8).min(8);
                    Span::styled(
                        BAR_GLYPHS[fill].to_string(),
                        Style::default().fg(blend(colors.panel_bg, colors.accent, intensity)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn blend(base: Color, top: Color, alpha: f64) -> Color {
    match (base, top) {
        (Color::Rgb(br, bg, bb), Color::Rgb(tr, tg, tb)) => {
            let alpha = alpha.clamp(0.0, 1.0);
            let mix = |b: u8, t: u8| {
                (f64::from(b) + (f64::from(t) - f64::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(br, tr), mix(bg, tg), mix(bb, tb))
        }
        _ => top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryThemeStore;
    use crate::model::Session;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn app() -> App {
        App::new(
            &Session::default(),
            Box::new(MemoryThemeStore::new(Theme::Dark)),
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn home_layout_exposes_progress_and_no_waveform() {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).expect("terminal");
        let app = app();
        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| layout = draw(frame, &app))
            .expect("draw");

        assert!(layout.progress.width > 0);
        assert_eq!(layout.waveform_geometry(), None);
        let text = buffer_text(&terminal);
        assert!(text.contains("Melodify"));
        assert!(text.contains("Recently Played"));
        assert!(text.contains("0:00"));
        assert!(text.contains("3:37"));
    }

    #[test]
    fn fullscreen_layout_provides_waveform_surface() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        let mut app = app();
        app.playback.toggle_fullscreen();
        app.playback.toggle_lyrics();
        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| layout = draw(frame, &app))
            .expect("draw");

        let geometry = layout.waveform_geometry().expect("surface");
        assert_eq!(geometry.bar_count(), 98);
        assert!(buffer_text(&terminal).contains("withdrawals"));

        app.playback.attach_surface(Some(geometry), Instant::now());
        assert_eq!(app.playback.waveform().len(), 98);
    }

    #[test]
    fn other_routes_render_not_found() {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).expect("terminal");
        let mut app = app();
        app.shell.navigate("/radio");
        terminal.draw(|frame| {
            draw(frame, &app);
        })
        .expect("draw");
        assert!(buffer_text(&terminal).contains("could not be found"));
    }

    #[test]
    fn waveform_rows_fill_from_the_bottom() {
        let colors = palette(Theme::Dark);
        let frame = WaveformFrame {
            bars: vec![crate::waveform::WaveformBar {
                height: 12.0,
                intensity: 1.0,
            }],
            canvas_height: 16.0,
        };
        let lines = waveform_lines(&frame, 2, &colors);
        assert_eq!(lines[0].spans[0].content, "▄");
        assert_eq!(lines[1].spans[0].content, "█");
    }

    #[test]
    fn blend_interpolates_rgb() {
        assert_eq!(
            blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5),
            Color::Rgb(100, 50, 25)
        );
        assert_eq!(blend(Color::Reset, Color::Red, 0.3), Color::Red);
    }
}
