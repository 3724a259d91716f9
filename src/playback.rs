use crate::placeholder::{PlaceholderOptions, album_cover};
use crate::schedule::PeriodicTask;
use crate::waveform::{self, WaveformFrame, WaveformGeometry};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_DURATION_SECONDS: u32 = 217;
pub const DEFAULT_VOLUME: u8 = 70;
pub const MAX_VOLUME: u8 = 100;
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Advanced,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportState {
    is_playing: bool,
    elapsed_seconds: u32,
    duration_seconds: u32,
}

impl TransportState {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            is_playing: false,
            elapsed_seconds: 0,
            duration_seconds: duration_seconds.max(1),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.elapsed_seconds) / f64::from(self.duration_seconds)
    }

    fn seek(&mut self, seconds: u32) {
        self.elapsed_seconds = seconds.min(self.duration_seconds);
    }

    fn stop_and_rewind(&mut self) {
        self.is_playing = false;
        self.elapsed_seconds = 0;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing {
            return TickOutcome::Idle;
        }
        if self.elapsed_seconds >= self.duration_seconds {
            self.stop_and_rewind();
            return TickOutcome::Finished;
        }

        self.elapsed_seconds += 1;
        if self.elapsed_seconds >= self.duration_seconds {
            self.stop_and_rewind();
            return TickOutcome::Finished;
        }
        TickOutcome::Advanced
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Audible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeState {
    level: u8,
    muted: bool,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            level: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

impl VolumeState {
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(MAX_VOLUME);
        self.muted = self.level == 0;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn effective(&self) -> u8 {
        if self.muted { 0 } else { self.level }
    }

    pub fn icon(&self) -> VolumeIcon {
        if self.muted || self.level == 0 {
            VolumeIcon::Muted
        } else {
            VolumeIcon::Audible
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiToggles {
    pub liked: bool,
    pub lyrics_visible: bool,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub cover_url: String,
}

impl Default for NowPlaying {
    fn default() -> Self {
        Self {
            title: String::from("Blinding Lights"),
            artist: String::from("The Weeknd"),
            cover_url: album_cover(PlaceholderOptions::text("Blinding Lights").sized(56, 56)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpOutcome {
    pub tick: Option<TickOutcome>,
    pub redrawn: bool,
}

impl PumpOutcome {
    pub fn changed(&self) -> bool {
        self.redrawn || matches!(self.tick, Some(TickOutcome::Advanced | TickOutcome::Finished))
    }
}

#[derive(Debug)]
pub struct PlaybackView {
    now_playing: NowPlaying,
    transport: TransportState,
    volume: VolumeState,
    toggles: UiToggles,
    frame_interval: Duration,
    surface: Option<WaveformGeometry>,
    waveform: WaveformFrame,
    rng: SmallRng,
    ticker: Option<PeriodicTask>,
    redraw: Option<PeriodicTask>,
}

impl PlaybackView {
    pub fn mount(now_playing: NowPlaying, frame_interval: Duration) -> Self {
        debug!(title = %now_playing.title, "playback view mounted");
        Self {
            now_playing,
            transport: TransportState::new(DEFAULT_DURATION_SECONDS),
            volume: VolumeState::default(),
            toggles: UiToggles::default(),
            frame_interval,
            surface: None,
            waveform: WaveformFrame::default(),
            rng: SmallRng::from_os_rng(),
            ticker: None,
            redraw: None,
        }
    }

    pub fn with_duration(mut self, duration_seconds: u32) -> Self {
        self.transport = TransportState::new(duration_seconds);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    pub fn volume(&self) -> VolumeState {
        self.volume
    }

    pub fn toggles(&self) -> UiToggles {
        self.toggles
    }

    pub fn waveform(&self) -> &WaveformFrame {
        &self.waveform
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn is_redrawing(&self) -> bool {
        self.redraw.is_some()
    }

    pub fn ticker(&self) -> Option<&PeriodicTask> {
        self.ticker.as_ref()
    }

    pub fn redraw_task(&self) -> Option<&PeriodicTask> {
        self.redraw.as_ref()
    }

    pub fn play(&mut self, now: Instant) {
        if self.transport.is_playing {
            return;
        }
        self.transport.is_playing = true;
        self.ticker = Some(PeriodicTask::start("progress", TICK_PERIOD, now));
        debug!(elapsed = self.transport.elapsed_seconds, "playback started");
        self.render_frame();
    }

    pub fn pause(&mut self) {
        if !self.transport.is_playing {
            return;
        }
        self.transport.is_playing = false;
        self.ticker = None;
        debug!(elapsed = self.transport.elapsed_seconds, "playback paused");
        self.render_frame();
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.transport.is_playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    pub fn seek(&mut self, seconds: u32) {
        self.transport.seek(seconds);
        debug!(elapsed = self.transport.elapsed_seconds, "seek");
    }

    pub fn scrub(&mut self, seconds: u32) {
        self.pause();
        self.seek(seconds);
    }

    pub fn seek_by(&mut self, delta: i64) {
        let target = i64::from(self.transport.elapsed_seconds).saturating_add(delta);
        self.seek(target.clamp(0, i64::from(u32::MAX)) as u32);
    }

    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        debug!(level = self.volume.level, muted = self.volume.muted, "volume set");
    }

    pub fn nudge_volume(&mut self, delta: i16) {
        let target = i16::from(self.volume.level)
            .saturating_add(delta)
            .clamp(0, i16::from(MAX_VOLUME));
        self.set_volume(target as u8);
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        debug!(muted = self.volume.muted, "mute toggled");
    }

    pub fn toggle_like(&mut self) {
        self.toggles.liked = !self.toggles.liked;
    }

    pub fn toggle_lyrics(&mut self) {
        self.toggles.lyrics_visible = !self.toggles.lyrics_visible;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.toggles.fullscreen = !self.toggles.fullscreen;
    }

    pub fn attach_surface(&mut self, surface: Option<WaveformGeometry>, now: Instant) {
        let Some(geometry) = surface else {
            if self.redraw.take().is_some() {
                debug!("waveform surface detached");
            }
            self.surface = None;
            self.waveform = WaveformFrame::default();
            return;
        };

        let changed = self.surface != Some(geometry);
        self.surface = Some(geometry);
        if self.redraw.is_none() {
            self.redraw = Some(PeriodicTask::start("waveform", self.frame_interval, now));
            debug!(bars = geometry.bar_count(), "waveform surface attached");
            self.render_frame();
        } else if changed {
            self.render_frame();
        }
    }

    pub fn pump(&mut self, now: Instant) -> PumpOutcome {
        let mut outcome = PumpOutcome::default();

        if let Some(ticker) = self.ticker.as_mut()
            && ticker.poll(now)
        {
            let tick = self.transport.tick();
            if tick != TickOutcome::Advanced {
                self.ticker = None;
                debug!(?tick, "progress ticker stopped");
                self.render_frame();
            }
            outcome.tick = Some(tick);
        }

        if let Some(redraw) = self.redraw.as_mut()
            && redraw.poll(now)
        {
            self.render_frame();
            outcome.redrawn = true;
        }

        outcome
    }

    pub fn unmount(mut self) {
        self.ticker = None;
        self.redraw = None;
        debug!(elapsed = self.transport.elapsed_seconds, "playback view unmounted");
    }

    fn render_frame(&mut self) {
        let Some(geometry) = self.surface else {
            return;
        };
        self.waveform = if self.transport.is_playing {
            waveform::playing_frame(geometry, &mut self.rng)
        } else {
            waveform::idle_frame(geometry)
        };
    }
}

pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
