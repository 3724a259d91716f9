use crate::model::{Settings, Theme};
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "melodify";
const SETTINGS_FILE: &str = "settings.json";
const LOG_FILE: &str = "melodify.log";
pub const CONFIG_DIR_ENV: &str = "MELODIFY_CONFIG_DIR";

pub fn config_root() -> Result<PathBuf> {
    if let Ok(override_dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(override_dir));
    }

    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .context("neither HOME nor USERPROFILE is set")?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR))
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(config_root()?.join(SETTINGS_FILE))
}

pub fn log_path() -> Result<PathBuf> {
    Ok(config_root()?.join(LOG_FILE))
}

pub fn ensure_config_dir() -> Result<PathBuf> {
    let root = config_root()?;
    fs::create_dir_all(&root).with_context(|| format!("failed to create {}", root.display()))?;
    Ok(root)
}

pub fn load_settings() -> Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse settings file {}", path.display()))?;
    Ok(settings)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    ensure_config_dir()?;
    let path = settings_path()?;
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub trait ThemeStore {
    fn theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Theme,
}

impl MemoryThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }
}

#[derive(Debug)]
pub struct SettingsThemeStore {
    settings: Settings,
}

impl SettingsThemeStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl ThemeStore for SettingsThemeStore {
    fn theme(&self) -> Theme {
        self.settings.theme
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let updated = Settings {
            theme,
            ..self.settings.clone()
        };
        save_settings(&updated).context("failed to persist theme preference")?;
        self.settings = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_round_trip_and_theme_store_persists() {
        let dir = tempdir().expect("tempdir");
        unsafe {
            env::set_var(CONFIG_DIR_ENV, dir.path().to_string_lossy().as_ref());
        }

        assert_eq!(load_settings().expect("defaults"), Settings::default());

        let settings = Settings {
            frame_rate: 30,
            ..Settings::default()
        };
        save_settings(&settings).expect("save");
        let loaded = load_settings().expect("load");
        assert_eq!(loaded.frame_rate, 30);

        let mut store = SettingsThemeStore::new(loaded);
        store.set_theme(Theme::Light).expect("set theme");
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(load_settings().expect("reload").theme, Theme::Light);

        fs::write(settings_path().expect("path"), "{not json").expect("write");
        let err = load_settings().expect_err("corrupt file");
        assert!(format!("{err:#}").contains("failed to parse settings file"));
    }

    #[test]
    fn memory_store_never_touches_disk() {
        let mut store = MemoryThemeStore::new(Theme::Dark);
        store.set_theme(Theme::Light).expect("set");
        assert_eq!(store.theme(), Theme::Light);
    }
}
