#![no_main]

use libfuzzer_sys::fuzz_target;
use melodify::playback::{DEFAULT_FRAME_INTERVAL, NowPlaying, PlaybackView};
use melodify::waveform::WaveformGeometry;
use std::time::{Duration, Instant};

fuzz_target!(|data: &[u8]| {
    let start = Instant::now();
    let duration = u32::from(data.first().copied().unwrap_or(1)).max(1);
    let mut view = PlaybackView::mount(NowPlaying::default(), DEFAULT_FRAME_INTERVAL)
        .with_duration(duration)
        .with_seed(u64::from(data.len() as u32));
    let mut now = start;

    for byte in data {
        match byte % 10 {
            0 => view.toggle_play(now),
            1 => view.seek(u32::from(*byte) * 3),
            2 => view.scrub(u32::from(*byte)),
            3 => view.seek_by(i64::from(*byte as i8)),
            4 => view.nudge_volume(i16::from(*byte as i8)),
            5 => view.toggle_mute(),
            6 => view.attach_surface(WaveformGeometry::for_cells(u16::from(*byte), 3), now),
            7 => view.attach_surface(None, now),
            _ => {
                now += Duration::from_millis(u64::from(*byte) * 10);
                view.pump(now);
            }
        }

        let transport = view.transport();
        assert!(transport.elapsed_seconds() <= transport.duration_seconds());
        assert!(view.volume().level() <= 100);
        assert_eq!(view.is_ticking(), transport.is_playing());
        assert!(view.waveform().ratios().all(|ratio| (0.0..=1.0).contains(&ratio)));
    }

    view.unmount();
});
