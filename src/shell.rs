use crate::config::ThemeStore;
use crate::model::Theme;
use crate::placeholder::{PlaceholderOptions, user_avatar};
use anyhow::Result;
use tracing::{debug, warn};

pub const APP_NAME: &str = "Melodify";
pub const HOME_PATH: &str = "/";

const MAIN_ROUTES: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Discover", "/discover"),
    ("Search", "/search"),
    ("Radio", "/radio"),
];

const LIBRARY_LINKS: &[(&str, &str)] = &[
    ("Your Library", "/library"),
    ("Profile", "/profile"),
    ("Settings", "/settings"),
];

pub const SIDEBAR_PLAYLISTS: &[&str] = &[
    "Chill Vibes",
    "Workout Mix",
    "Study Focus",
    "Party Hits",
    "Road Trip",
    "Morning Coffee",
    "Evening Wind Down",
    "Weekend Mood",
    "Throwback Classics",
    "New Discoveries",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSection {
    Routes,
    Library,
    Playlists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub section: SidebarSection,
    pub label: String,
    pub href: String,
}

pub fn sidebar_entries() -> Vec<SidebarEntry> {
    let routes = MAIN_ROUTES.iter().map(|(label, href)| SidebarEntry {
        section: SidebarSection::Routes,
        label: label.to_string(),
        href: href.to_string(),
    });
    let library = LIBRARY_LINKS.iter().map(|(label, href)| SidebarEntry {
        section: SidebarSection::Library,
        label: label.to_string(),
        href: href.to_string(),
    });
    let playlists = SIDEBAR_PLAYLISTS
        .iter()
        .enumerate()
        .map(|(idx, name)| SidebarEntry {
            section: SidebarSection::Playlists,
            label: name.to_string(),
            href: format!("/playlist/{idx}"),
        });
    routes.chain(library).chain(playlists).collect()
}

pub fn is_active(href: &str, current: &str) -> bool {
    href == current
}

pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::from(HOME_PATH);
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

pub fn page_title(path: &str) -> String {
    if let Some((label, _)) = MAIN_ROUTES
        .iter()
        .chain(LIBRARY_LINKS)
        .find(|(_, href)| *href == path)
    {
        return label.to_string();
    }

    path.strip_prefix("/playlist/")
        .and_then(|idx| idx.parse::<usize>().ok())
        .and_then(|idx| SIDEBAR_PLAYLISTS.get(idx))
        .map(|name| name.to_string())
        .unwrap_or_else(|| path.to_string())
}

#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<String>,
    cursor: usize,
}

impl Navigator {
    pub fn new(start: &str) -> Self {
        Self {
            history: vec![normalize_path(start)],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.history[self.cursor]
    }

    pub fn navigate(&mut self, raw: &str) -> bool {
        let path = normalize_path(raw);
        if path == self.current() {
            return false;
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(path);
        self.cursor = self.history.len() - 1;
        debug!(path = self.current(), "navigated");
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    Profile,
    Settings,
    Subscription,
    SignOut,
}

impl ProfileAction {
    pub const ALL: [ProfileAction; 4] = [
        Self::Profile,
        Self::Settings,
        Self::Subscription,
        Self::SignOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Subscription => "Subscription",
            Self::SignOut => "Sign out",
        }
    }

    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Profile => Some("/profile"),
            Self::Settings => Some("/settings"),
            Self::Subscription | Self::SignOut => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuActivation {
    pub action: ProfileAction,
    pub navigated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileMenu {
    pub open: bool,
    pub selected: usize,
}

pub struct NavShell {
    pub navigator: Navigator,
    pub sidebar: Vec<SidebarEntry>,
    selected_sidebar: usize,
    search: String,
    pub menu: ProfileMenu,
    pub avatar_url: String,
    theme_store: Box<dyn ThemeStore>,
}

impl NavShell {
    pub fn new(start_path: &str, theme_store: Box<dyn ThemeStore>) -> Self {
        let navigator = Navigator::new(start_path);
        let sidebar = sidebar_entries();
        let selected_sidebar = sidebar
            .iter()
            .position(|entry| is_active(&entry.href, navigator.current()))
            .unwrap_or(0);
        Self {
            navigator,
            sidebar,
            selected_sidebar,
            search: String::new(),
            menu: ProfileMenu::default(),
            avatar_url: user_avatar(PlaceholderOptions::text("JD").sized(32, 32)),
            theme_store,
        }
    }

    pub fn current_path(&self) -> &str {
        self.navigator.current()
    }

    pub fn selected_sidebar(&self) -> usize {
        self.selected_sidebar
    }

    pub fn is_entry_active(&self, idx: usize) -> bool {
        self.sidebar
            .get(idx)
            .is_some_and(|entry| is_active(&entry.href, self.current_path()))
    }

    pub fn select_next(&mut self) {
        if self.sidebar.is_empty() {
            return;
        }
        self.selected_sidebar = (self.selected_sidebar + 1).min(self.sidebar.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected_sidebar = self.selected_sidebar.saturating_sub(1);
    }

    pub fn activate_selected(&mut self) -> Option<String> {
        let href = self.sidebar.get(self.selected_sidebar)?.href.clone();
        self.navigator.navigate(&href).then_some(href)
    }

    pub fn navigate(&mut self, path: &str) -> bool {
        self.navigator.navigate(path)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn push_search(&mut self, ch: char) {
        self.search.push(ch);
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn theme(&self) -> Theme {
        self.theme_store.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme> {
        if let Err(err) = self.theme_store.set_theme(theme) {
            warn!("theme preference not saved: {err:#}");
            return Err(err);
        }
        debug!(theme = theme.label(), "theme changed");
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme().toggled())
    }

    pub fn toggle_menu(&mut self) {
        self.menu.open = !self.menu.open;
        self.menu.selected = 0;
    }

    pub fn menu_next(&mut self) {
        self.menu.selected = (self.menu.selected + 1).min(ProfileAction::ALL.len() - 1);
    }

    pub fn menu_prev(&mut self) {
        self.menu.selected = self.menu.selected.saturating_sub(1);
    }

    pub fn activate_menu(&mut self) -> Option<MenuActivation> {
        if !self.menu.open {
            return None;
        }
        let action = ProfileAction::ALL.get(self.menu.selected).copied()?;
        self.menu.open = false;
        let navigated = action
            .href()
            .is_some_and(|href| self.navigator.navigate(href));
        Some(MenuActivation { action, navigated })
    }
}
