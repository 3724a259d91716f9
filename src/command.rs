use crate::catalog::HomeTab;
use crate::model::Theme;

pub const HELP: &str = "Commands: play | pause | seek <m:ss> | vol <0-100> | mute | like | lyrics | fullscreen | go <path> | back | forward | theme [light|dark] | tab <for-you|trending|new-releases> | search <text> | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Play,
    Pause,
    Seek(u32),
    Volume(u8),
    Mute,
    Like,
    Lyrics,
    Fullscreen,
    Go(String),
    Back,
    Forward,
    Theme(Option<Theme>),
    Tab(HomeTab),
    Search(String),
    Quit,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("no command")]
    Empty,

    #[error("unknown command `{0}`, use :help")]
    Unknown(String),

    #[error("usage: {0}")]
    MissingArgument(&'static str),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("invalid time `{0}`, expected m:ss or seconds")]
    InvalidTime(String),

    #[error("volume {0} is out of range 0-100")]
    VolumeOutOfRange(u32),

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("unknown tab `{0}`")]
    UnknownTab(String),
}

pub fn parse(raw: &str) -> Result<Command, CommandError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(CommandError::Empty);
    }

    let mut split = input.splitn(2, char::is_whitespace);
    let command = split.next().unwrap_or_default();
    let rest = split.next().unwrap_or("").trim();

    match command.to_ascii_lowercase().as_str() {
        "help" => Ok(Command::Help),
        "play" => Ok(Command::Play),
        "pause" => Ok(Command::Pause),
        "seek" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("seek <m:ss>"));
            }
            parse_time(rest).map(Command::Seek)
        }
        "vol" | "volume" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("vol <0-100>"));
            }
            let level: u32 = rest
                .parse()
                .map_err(|_| CommandError::InvalidNumber(rest.to_string()))?;
            u8::try_from(level)
                .ok()
                .filter(|level| *level <= 100)
                .map(Command::Volume)
                .ok_or(CommandError::VolumeOutOfRange(level))
        }
        "mute" => Ok(Command::Mute),
        "like" => Ok(Command::Like),
        "lyrics" => Ok(Command::Lyrics),
        "fullscreen" | "fs" => Ok(Command::Fullscreen),
        "go" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("go <path>"));
            }
            Ok(Command::Go(rest.to_string()))
        }
        "back" => Ok(Command::Back),
        "forward" => Ok(Command::Forward),
        "theme" => {
            if rest.is_empty() {
                return Ok(Command::Theme(None));
            }
            Theme::parse(rest)
                .map(|theme| Command::Theme(Some(theme)))
                .ok_or_else(|| CommandError::UnknownTheme(rest.to_string()))
        }
        "tab" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument(
                    "tab <for-you|trending|new-releases>",
                ));
            }
            HomeTab::from_slug(rest)
                .map(Command::Tab)
                .ok_or_else(|| CommandError::UnknownTab(rest.to_string()))
        }
        "search" => Ok(Command::Search(rest.to_string())),
        "quit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

pub fn parse_time(raw: &str) -> Result<u32, CommandError> {
    let invalid = || CommandError::InvalidTime(raw.to_string());
    match raw.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
            let seconds: u32 = seconds.trim().parse().map_err(|_| invalid())?;
            if seconds >= 60 {
                return Err(invalid());
            }
            minutes
                .checked_mul(60)
                .and_then(|total| total.checked_add(seconds))
                .ok_or_else(invalid)
        }
        None => raw.trim().parse().map_err(|_| invalid()),
    }
}
