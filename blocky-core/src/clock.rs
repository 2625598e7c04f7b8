/// Frame timing fed by the platform clock
use std::fmt;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,

    /// Seconds since the previous tick.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots from monotonic seconds.
///
/// The platform supplies the timestamp (`performance.now()` in the browser,
/// `Instant` natively) so the core never touches a system clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: f64,
    last: f64,
    frame_index: u64,
}

impl FrameClock {
    pub fn new(start_seconds: f64) -> Self {
        Self {
            start: start_seconds,
            last: start_seconds,
            frame_index: 0,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self, now_seconds: f64) -> FrameTime {
        let dt = (now_seconds - self.last).max(0.0);
        self.last = now_seconds;

        let ft = FrameTime {
            elapsed: (now_seconds - self.start) as f32,
            dt: dt as f32,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

/// What a frame drew and how long it took.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameStats {
    pub shapes: usize,
    pub primitives: usize,
    pub duration_ms: f64,
}

impl FrameStats {
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Unguarded: a zero-length frame reports an infinite rate.
    pub fn fps(&self) -> f64 {
        1000.0 / self.duration_ms
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ms: {} fps: {:.1}",
            self.duration_ms.floor(),
            self.fps()
        )
    }
}
