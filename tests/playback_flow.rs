use melodify::playback::{
    DEFAULT_FRAME_INTERVAL, NowPlaying, PlaybackView, TickOutcome, format_time,
};
use melodify::schedule;
use melodify::waveform::WaveformGeometry;
use std::time::{Duration, Instant};

fn view(duration: u32) -> PlaybackView {
    PlaybackView::mount(NowPlaying::default(), DEFAULT_FRAME_INTERVAL)
        .with_duration(duration)
        .with_seed(7)
}

#[test]
fn track_plays_to_the_end_and_rewinds() {
    let start = Instant::now();
    let mut view = view(3);
    view.play(start);

    let mut outcomes = Vec::new();
    for second in 1..=3 {
        let outcome = view.pump(start + Duration::from_secs(second));
        outcomes.push(outcome.tick);
    }

    assert_eq!(
        outcomes,
        vec![
            Some(TickOutcome::Advanced),
            Some(TickOutcome::Advanced),
            Some(TickOutcome::Finished)
        ]
    );
    assert!(!view.transport().is_playing());
    assert_eq!(view.transport().elapsed_seconds(), 0);
    assert!(!view.is_ticking());

    let later = view.pump(start + Duration::from_secs(10));
    assert_eq!(later.tick, None);
}

#[test]
fn stalled_loop_does_not_replay_missed_ticks() {
    let start = Instant::now();
    let mut view = view(217);
    view.play(start);

    view.pump(start + Duration::from_secs(30));
    assert_eq!(view.transport().elapsed_seconds(), 1);
    view.pump(start + Duration::from_secs(31));
    assert_eq!(view.transport().elapsed_seconds(), 2);
}

#[test]
fn pausing_and_resuming_restarts_the_tick_period() {
    let start = Instant::now();
    let mut view = view(217);
    view.play(start);
    view.pump(start + Duration::from_secs(1));

    view.pause();
    view.pump(start + Duration::from_secs(2));
    assert_eq!(view.transport().elapsed_seconds(), 1);

    let resumed = start + Duration::from_millis(2_500);
    view.play(resumed);
    view.pump(start + Duration::from_secs(3));
    assert_eq!(view.transport().elapsed_seconds(), 1);
    view.pump(resumed + Duration::from_secs(1));
    assert_eq!(view.transport().elapsed_seconds(), 2);
    assert_eq!(format_time(view.transport().elapsed_seconds()), "0:02");
}

#[test]
fn waveform_redraws_only_while_a_surface_is_attached() {
    let start = Instant::now();
    let mut view = view(217);
    let geometry = WaveformGeometry::for_cells(40, 5);

    assert!(!view.pump(start + Duration::from_secs(1)).redrawn);

    view.attach_surface(geometry, start);
    assert!(view.is_redrawing());
    assert_eq!(view.waveform().len(), 40);

    let next = start + DEFAULT_FRAME_INTERVAL;
    assert!(view.pump(next).redrawn);

    view.attach_surface(None, next);
    assert!(!view.is_redrawing());
    assert!(view.waveform().is_empty());
    assert!(!view.pump(next + Duration::from_secs(1)).redrawn);
}

#[test]
fn idle_waveform_stays_low_and_playing_waveform_moves() {
    let start = Instant::now();
    let mut view = view(217);
    view.attach_surface(WaveformGeometry::for_cells(24, 4), start);

    let idle: Vec<f64> = view.waveform().ratios().collect();
    assert!(idle.iter().all(|ratio| *ratio <= 0.35));

    view.play(start);
    let playing: Vec<f64> = view.waveform().ratios().collect();
    assert_eq!(playing.len(), 24);
    assert!(playing.iter().all(|ratio| (0.0..=1.0).contains(ratio)));
    assert_ne!(idle, playing);
}

#[test]
fn event_loop_wakes_for_the_nearest_task() {
    let start = Instant::now();
    let mut view = view(217);
    assert_eq!(
        schedule::earliest_due(&[view.ticker(), view.redraw_task()], start),
        None
    );

    view.play(start);
    view.attach_surface(WaveformGeometry::for_cells(10, 2), start);
    let wait = schedule::earliest_due(&[view.ticker(), view.redraw_task()], start)
        .expect("tasks scheduled");
    assert_eq!(wait, DEFAULT_FRAME_INTERVAL);

    view.unmount();
}
