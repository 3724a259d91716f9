use crate::model::{CatalogItem, FeaturedPlaylist, Gradient};
use crate::placeholder::{PlaceholderOptions, album_cover, playlist_cover};

pub const SHELF_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    ForYou,
    Trending,
    NewReleases,
}

impl HomeTab {
    pub const ALL: [HomeTab; 3] = [Self::ForYou, Self::Trending, Self::NewReleases];

    pub fn label(self) -> &'static str {
        match self {
            Self::ForYou => "For You",
            Self::Trending => "Trending",
            Self::NewReleases => "New Releases",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::ForYou => "Recently Played",
            Self::Trending => "Trending Now",
            Self::NewReleases => "New Albums & Singles",
        }
    }

    pub fn secondary_heading(self) -> Option<&'static str> {
        match self {
            Self::ForYou => Some("Made For You"),
            Self::Trending | Self::NewReleases => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::ForYou => "for-you",
            Self::Trending => "trending",
            Self::NewReleases => "new-releases",
        }
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.slug().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn next(self) -> Self {
        match self {
            Self::ForYou => Self::Trending,
            Self::Trending => Self::NewReleases,
            Self::NewReleases => Self::ForYou,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::ForYou => Self::NewReleases,
            Self::Trending => Self::ForYou,
            Self::NewReleases => Self::Trending,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub featured: Vec<FeaturedPlaylist>,
    pub recently_played: Vec<CatalogItem>,
    pub new_releases: Vec<CatalogItem>,
}

impl Catalog {
    pub fn demo() -> Self {
        let featured = [
            (
                "Today's Top Hits",
                "The hottest tracks right now",
                "Top Hits",
                ((244, 63, 94), (67, 56, 202)),
            ),
            (
                "Discover Weekly",
                "Your weekly mixtape of fresh music",
                "Discover",
                ((16, 185, 129), (8, 145, 178)),
            ),
            (
                "Chill Vibes",
                "Relax and unwind with these smooth tracks",
                "Chill",
                ((251, 191, 36), (234, 88, 12)),
            ),
            (
                "Workout Motivation",
                "Energy-boosting tracks for your workout",
                "Workout",
                ((220, 38, 38), (147, 51, 234)),
            ),
        ]
        .into_iter()
        .zip(1..)
        .map(
            |((title, description, cover_text, (from, to)), id)| FeaturedPlaylist {
                id,
                title: title.to_string(),
                description: description.to_string(),
                cover_url: playlist_cover(PlaceholderOptions::text(cover_text).sized(200, 200)),
                gradient: Gradient { from, to },
            },
        )
        .collect();

        let recently_played = album_items(&[
            ("Blinding Lights", "The Weeknd", "Blinding Lights"),
            ("As It Was", "Harry Styles", "As It Was"),
            ("Heat Waves", "Glass Animals", "Heat Waves"),
            ("Stay", "The Kid LAROI, Justin Bieber", "Stay"),
            ("Easy On Me", "Adele", "Easy On Me"),
            ("Bad Habits", "Ed Sheeran", "Bad Habits"),
        ]);

        let new_releases = album_items(&[
            ("Midnights", "Taylor Swift", "Midnights"),
            ("Un Verano Sin Ti", "Bad Bunny", "Un Verano Sin Ti"),
            ("Harry's House", "Harry Styles", "Harry's House"),
            ("Renaissance", "Beyoncé", "Renaissance"),
            ("Mr. Morale & The Big Steppers", "Kendrick Lamar", "Mr. Morale"),
            ("Honestly, Nevermind", "Drake", "Honestly, Nevermind"),
        ]);

        Self {
            featured,
            recently_played,
            new_releases,
        }
    }

    pub fn tab_items(&self, tab: HomeTab) -> Vec<&CatalogItem> {
        match tab {
            HomeTab::ForYou => self.recently_played.iter().collect(),
            HomeTab::Trending => self
                .recently_played
                .iter()
                .take(SHELF_LEN)
                .rev()
                .collect(),
            HomeTab::NewReleases => self.new_releases.iter().collect(),
        }
    }

    pub fn made_for_you(&self) -> &[CatalogItem] {
        &self.recently_played[..self.recently_played.len().min(SHELF_LEN)]
    }

    pub fn new_release_shelf(&self) -> &[CatalogItem] {
        &self.new_releases[..self.new_releases.len().min(SHELF_LEN)]
    }
}

fn album_items(rows: &[(&str, &str, &str)]) -> Vec<CatalogItem> {
    rows.iter()
        .zip(1..)
        .map(|(&(title, artist, cover_text), id)| CatalogItem {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            cover_url: album_cover(PlaceholderOptions::text(cover_text).sized(150, 150)),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub catalog: Catalog,
    active_tab: HomeTab,
    selected_card: usize,
}

impl HomeView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_tab: HomeTab::default(),
            selected_card: 0,
        }
    }

    pub fn active_tab(&self) -> HomeTab {
        self.active_tab
    }

    pub fn selected_card(&self) -> usize {
        self.selected_card
    }

    pub fn set_tab(&mut self, tab: HomeTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.selected_card = 0;
        }
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_tab(self.active_tab.prev());
    }

    pub fn visible_items(&self) -> Vec<&CatalogItem> {
        self.catalog.tab_items(self.active_tab)
    }

    pub fn select_next_card(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        self.selected_card = (self.selected_card + 1).min(len - 1);
    }

    pub fn select_prev_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.visible_items().get(self.selected_card).copied()
    }
}
