use rand::Rng;
use rand::rngs::SmallRng;

const FLOOR_RATIO: f64 = 0.2;
const PLAYING_SPAN: f64 = 0.8;
const IDLE_AMPLITUDE: f64 = 0.1;
const IDLE_FREQUENCY: f64 = 0.2;
const EDGE_FALLOFF: f64 = 0.8;
const IDLE_INTENSITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub bar_width: u32,
    pub bar_gap: u32,
}

impl WaveformGeometry {
    pub const CANVAS: Self = Self {
        canvas_width: 800,
        canvas_height: 200,
        bar_width: 2,
        bar_gap: 1,
    };

    // One bar per terminal column, eight vertical steps per row.
    pub fn for_cells(columns: u16, rows: u16) -> Option<Self> {
        if columns == 0 || rows == 0 {
            return None;
        }
        Some(Self {
            canvas_width: u32::from(columns),
            canvas_height: u32::from(rows) * 8,
            bar_width: 1,
            bar_gap: 0,
        })
    }

    pub fn bar_count(&self) -> usize {
        let stride = self.bar_width.saturating_add(self.bar_gap);
        if stride == 0 {
            return 0;
        }
        (self.canvas_width / stride) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformBar {
    pub height: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaveformFrame {
    pub bars: Vec<WaveformBar>,
    pub canvas_height: f64,
}

impl WaveformFrame {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn ratios(&self) -> impl Iterator<Item = f64> + '_ {
        let canvas = self.canvas_height;
        self.bars.iter().map(move |bar| {
            if canvas > 0.0 {
                (bar.height / canvas).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
    }
}

pub fn taper(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 1.0;
    }
    let half = count as f64 / 2.0;
    1.0 - ((index as f64 - half) / half).abs() * EDGE_FALLOFF
}

pub fn playing_frame(geometry: WaveformGeometry, rng: &mut SmallRng) -> WaveformFrame {
    let count = geometry.bar_count();
    let canvas = f64::from(geometry.canvas_height);
    let bars = (0..count)
        .map(|index| {
            let sample: f64 = rng.random_range(0.0..1.0);
            let height = (sample * canvas * PLAYING_SPAN * taper(index, count)
                + canvas * FLOOR_RATIO)
                .clamp(canvas * FLOOR_RATIO, canvas);
            let intensity = if canvas > 0.0 {
                0.3 + (height / canvas) * 0.7
            } else {
                0.3
            };
            WaveformBar { height, intensity }
        })
        .collect();

    WaveformFrame {
        bars,
        canvas_height: canvas,
    }
}

pub fn idle_frame(geometry: WaveformGeometry) -> WaveformFrame {
    let count = geometry.bar_count();
    let canvas = f64::from(geometry.canvas_height);
    let bars = (0..count)
        .map(|index| WaveformBar {
            height: canvas * FLOOR_RATIO
                + (index as f64 * IDLE_FREQUENCY).sin() * canvas * IDLE_AMPLITUDE
                    * taper(index, count),
            intensity: IDLE_INTENSITY,
        })
        .collect();

    WaveformFrame {
        bars,
        canvas_height: canvas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prop_assert;
    use rand::SeedableRng;

    #[test]
    fn bar_count_uses_stride() {
        assert_eq!(WaveformGeometry::CANVAS.bar_count(), 266);
        let cells = WaveformGeometry::for_cells(40, 3).expect("geometry");
        assert_eq!(cells.bar_count(), 40);
        assert_eq!(cells.canvas_height, 24);
    }

    #[test]
    fn zero_area_has_no_geometry() {
        assert!(WaveformGeometry::for_cells(0, 4).is_none());
        assert!(WaveformGeometry::for_cells(10, 0).is_none());
    }

    #[test]
    fn degenerate_stride_yields_no_bars() {
        let geometry = WaveformGeometry {
            canvas_width: 100,
            canvas_height: 10,
            bar_width: 0,
            bar_gap: 0,
        };
        assert_eq!(geometry.bar_count(), 0);
        assert!(idle_frame(geometry).is_empty());
    }

    #[test]
    fn taper_peaks_in_the_middle() {
        assert!((taper(5, 10) - 1.0).abs() < f64::EPSILON);
        assert!((taper(0, 10) - 0.2).abs() < 1e-9);
        assert!(taper(2, 10) < taper(4, 10));
    }

    #[test]
    fn idle_frame_is_reproducible() {
        let geometry = WaveformGeometry::CANVAS;
        assert_eq!(idle_frame(geometry), idle_frame(geometry));
        assert!(idle_frame(geometry).bars.iter().all(|bar| bar.intensity == 0.5));
    }

    #[test]
    fn idle_first_bar_sits_on_floor() {
        let frame = idle_frame(WaveformGeometry::CANVAS);
        assert!((frame.bars[0].height - 40.0).abs() < 1e-9);
    }

    #[test]
    fn playing_frames_vary_between_ticks() {
        let mut rng = SmallRng::seed_from_u64(7);
        let first = playing_frame(WaveformGeometry::CANVAS, &mut rng);
        let second = playing_frame(WaveformGeometry::CANVAS, &mut rng);
        assert_eq!(first.len(), 266);
        assert_ne!(first, second);
    }

    proptest::proptest! {
        #[test]
        fn playing_bars_stay_within_bounds(seed in 0u64..10_000, width in 1u16..200, rows in 1u16..12) {
            let geometry = WaveformGeometry::for_cells(width, rows).expect("geometry");
            let mut rng = SmallRng::seed_from_u64(seed);
            let frame = playing_frame(geometry, &mut rng);
            let canvas = f64::from(geometry.canvas_height);
            prop_assert!(frame.len() == usize::from(width));
            for bar in &frame.bars {
                prop_assert!(bar.height >= canvas * 0.2 - 1e-9);
                prop_assert!(bar.height <= canvas + 1e-9);
                prop_assert!(bar.intensity >= 0.3 && bar.intensity <= 1.0 + 1e-9);
            }
        }
    }
}
