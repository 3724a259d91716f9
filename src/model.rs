use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: (u8, u8, u8),
    pub to: (u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedPlaylist {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub cover_url: String,
    pub gradient: Gradient,
}

impl FeaturedPlaylist {
    pub fn href(&self) -> String {
        format!("/playlist/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u16,
}

fn default_frame_rate() -> u16 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            frame_rate: default_frame_rate(),
        }
    }
}

// Startup values for one run; never written back to the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub frame_rate: u16,
    pub start_path: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Session {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            frame_rate: settings.frame_rate,
            start_path: String::from("/"),
        }
    }

    pub fn frame_interval(&self) -> std::time::Duration {
        let fps = u64::from(self.frame_rate.clamp(1, 240));
        std::time::Duration::from_micros(1_000_000 / fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_between_light_and_dark() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::parse(" LIGHT "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"light"}"#).expect("parse");
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.frame_rate, 60);
    }

    #[test]
    fn stale_start_path_key_is_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"theme":"dark","frame_rate":30,"start_path":"/radio"}"#)
                .expect("parse");
        assert_eq!(settings.frame_rate, 30);
        assert_eq!(Session::from_settings(&settings).start_path, "/");
    }

    #[test]
    fn frame_interval_is_clamped() {
        let session = Session {
            frame_rate: 0,
            ..Session::default()
        };
        assert_eq!(session.frame_interval(), std::time::Duration::from_secs(1));
        assert_eq!(
            Session::default().frame_interval(),
            std::time::Duration::from_micros(16_666)
        );
    }
}
