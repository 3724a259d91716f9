pub mod app;
pub mod catalog;
pub mod command;
pub mod config;
pub mod logging;
pub mod lyrics;
pub mod model;
pub mod placeholder;
pub mod playback;
pub mod schedule;
pub mod shell;
pub mod ui;
pub mod waveform;
