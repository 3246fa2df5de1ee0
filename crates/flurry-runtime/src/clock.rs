//! Frame clock with fixed-timestep accumulator and FPS accounting

use crate::system::RuntimeSystem;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Timing parameters for the frame clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    /// Nominal wall-clock interval between ticks, in milliseconds
    pub interval_ms: u64,
    /// Simulation step handed to every tick, in seconds
    pub fixed_dt: f64,
    /// How often the observed FPS is reported, in milliseconds
    pub fps_window_ms: u64,
    /// Upper bound on wall time consumed per frame, in seconds
    pub max_catch_up: f64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            interval_ms: 16,
            fixed_dt: 0.016,
            fps_window_ms: 1000,
            max_catch_up: 0.25,
        }
    }
}

/// Counts frames against wall time and yields an FPS figure once per window.
///
/// Purely diagnostic: nothing here feeds back into simulation timing.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    frames: u32,
    elapsed: Duration,
    latest: Option<f64>,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            frames: 0,
            elapsed: Duration::ZERO,
            latest: None,
        }
    }

    /// Record a single frame that took `elapsed` wall time
    pub fn record_frame(&mut self, elapsed: Duration) -> Option<f64> {
        self.record_frames(1, elapsed)
    }

    /// Record `frames` frames over `elapsed` wall time.
    ///
    /// Returns the observed rate once the window is full, then starts a new window.
    pub fn record_frames(&mut self, frames: u32, elapsed: Duration) -> Option<f64> {
        self.frames += frames;
        self.elapsed += elapsed;

        if self.elapsed < self.window || self.elapsed.is_zero() {
            return None;
        }

        let fps = self.frames as f64 / self.elapsed.as_secs_f64();
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        self.latest = Some(fps);
        log::debug!("[clock] observed {fps:.1} fps");
        Some(fps)
    }

    /// The most recent reported figure, if a window has completed
    pub fn latest(&self) -> Option<f64> {
        self.latest
    }

    /// Frames counted in the current, unfinished window
    pub fn pending_frames(&self) -> u32 {
        self.frames
    }
}

/// Outcome of driving one host frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// Fixed ticks executed during this frame
    pub ticks: u32,
    /// Present when an FPS window completed during this frame
    pub fps: Option<f64>,
}

/// Drives `RuntimeSystem::fixed_update` at a steady cadence.
///
/// Every tick receives the same `fixed_dt` no matter how much wall time
/// actually passed, so simulation results do not depend on the host's frame rate.
pub struct FrameClock {
    /// Step handed to every tick
    fixed_dt: f64,
    /// Nominal interval between ticks
    interval: Duration,
    /// Longest wall-time slice consumed in one frame
    max_catch_up: f64,
    /// Wall time not yet converted into ticks, in seconds
    accumulator: f64,
    /// Instant of the previous frame; `None` until primed
    last_instant: Option<Instant>,
    running: bool,
    total_ticks: u64,
    fps: FpsCounter,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(ClockSettings::default())
    }
}

impl FrameClock {
    pub fn new(settings: ClockSettings) -> Self {
        Self {
            fixed_dt: settings.fixed_dt,
            interval: Duration::from_millis(settings.interval_ms),
            max_catch_up: settings.max_catch_up,
            accumulator: 0.0,
            last_instant: None,
            running: true,
            total_ticks: 0,
            fps: FpsCounter::new(Duration::from_millis(settings.fps_window_ms)),
        }
    }

    /// Step handed to every tick, in seconds
    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resume ticking. The next frame re-primes the clock so a long stop
    /// does not turn into a burst of catch-up ticks.
    pub fn start(&mut self) {
        if !self.running {
            log::debug!("[clock] started");
        }
        self.running = true;
        self.last_instant = None;
        self.accumulator = 0.0;
    }

    /// Stop ticking immediately. There is no in-flight work to wind down.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("[clock] stopped");
        }
        self.running = false;
    }

    /// Total ticks executed since construction
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    /// Convert the wall time since the previous frame into whole due ticks.
    /// The first call only primes the clock.
    pub fn advance(&mut self, now: Instant) -> u32 {
        self.advance_inner(now).0
    }

    fn advance_inner(&mut self, now: Instant) -> (u32, Duration) {
        if !self.running {
            return (0, Duration::ZERO);
        }

        let Some(last) = self.last_instant.replace(now) else {
            return (0, Duration::ZERO);
        };

        let elapsed = now.saturating_duration_since(last);
        // Clamp to avoid spiral of death
        self.accumulator += elapsed.as_secs_f64().min(self.max_catch_up);

        let step = self.interval.as_secs_f64();
        if step <= 0.0 {
            self.accumulator = 0.0;
            return (1, elapsed);
        }

        let mut ticks = 0;
        while self.accumulator >= step {
            self.accumulator -= step;
            ticks += 1;
        }
        (ticks, elapsed)
    }

    /// Wall time left before the next tick falls due
    pub fn time_until_next_tick(&self) -> Duration {
        let remaining = self.interval.as_secs_f64() - self.accumulator;
        Duration::from_secs_f64(remaining.max(0.0))
    }

    /// Pace `system` against the wall clock: run every tick that fell due since
    /// the previous frame.
    pub fn drive<S: RuntimeSystem + ?Sized>(&mut self, system: &mut S, now: Instant) -> FrameReport {
        self.drive_at_most(system, now, u32::MAX)
    }

    /// Like [`drive`](Self::drive), but run no more than `max_ticks` this frame.
    /// Due ticks over the limit stay owed and run on later frames.
    pub fn drive_at_most<S: RuntimeSystem + ?Sized>(
        &mut self,
        system: &mut S,
        now: Instant,
        max_ticks: u32,
    ) -> FrameReport {
        let (due, elapsed) = self.advance_inner(now);
        let ticks = due.min(max_ticks);
        if due > ticks {
            self.accumulator += f64::from(due - ticks) * self.interval.as_secs_f64();
        }
        for _ in 0..ticks {
            system.fixed_update(self.fixed_dt);
        }
        self.total_ticks += u64::from(ticks);

        let fps = if elapsed.is_zero() && ticks == 0 {
            None
        } else {
            self.fps.record_frames(ticks, elapsed)
        };
        FrameReport { ticks, fps }
    }

    /// Run exactly one tick, as a host timer callback would. `now` only feeds
    /// the FPS figure.
    pub fn step<S: RuntimeSystem + ?Sized>(&mut self, system: &mut S, now: Instant) -> FrameReport {
        if !self.running {
            return FrameReport::default();
        }

        let elapsed = self
            .last_instant
            .replace(now)
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);

        system.fixed_update(self.fixed_dt);
        self.total_ticks += 1;

        FrameReport {
            ticks: 1,
            fps: self.fps.record_frame(elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        steps: Vec<f64>,
    }

    impl RuntimeSystem for Recorder {
        fn fixed_update(&mut self, dt: f64) {
            self.steps.push(dt);
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::default();
        assert!((clock.fixed_dt() - 0.016).abs() < 1e-12);
        assert_eq!(clock.interval(), Duration::from_millis(16));
        assert!(clock.is_running());
        assert_eq!(clock.total_ticks(), 0);
    }

    #[test]
    fn test_first_advance_primes() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(Instant::now()), 0);
    }

    #[test]
    fn test_accumulator_logic() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        clock.advance(t0);

        // 40ms covers two 16ms intervals with 8ms left over
        assert_eq!(clock.advance(t0 + Duration::from_millis(40)), 2);
        // 10 more ms crosses the next boundary
        assert_eq!(clock.advance(t0 + Duration::from_millis(50)), 1);
    }

    #[test]
    fn test_catch_up_is_clamped() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        clock.advance(t0);
        // A 5s stall yields at most 250ms worth of ticks
        let ticks = clock.advance(t0 + Duration::from_secs(5));
        assert_eq!(ticks, 15);
    }

    #[test]
    fn test_drive_uses_fixed_dt() {
        let mut clock = FrameClock::default();
        let mut system = Recorder::default();
        let t0 = Instant::now();

        clock.drive(&mut system, t0);
        let report = clock.drive(&mut system, t0 + Duration::from_millis(100));

        assert_eq!(report.ticks, 6);
        assert_eq!(system.steps.len(), 6);
        assert!(system.steps.iter().all(|&dt| dt == 0.016));
        assert_eq!(clock.total_ticks(), 6);
    }

    #[test]
    fn test_drive_at_most_keeps_owed_ticks() {
        let mut clock = FrameClock::default();
        let mut system = Recorder::default();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(100);

        clock.drive_at_most(&mut system, t0, 1);
        // 100ms owes six ticks; each frame pays one without more wall time passing
        for expected in 1..=6 {
            let report = clock.drive_at_most(&mut system, t1, 1);
            assert_eq!(report.ticks, 1);
            assert_eq!(clock.total_ticks(), expected);
            if expected < 6 {
                assert_eq!(clock.time_until_next_tick(), Duration::ZERO);
            }
        }
        assert_eq!(clock.drive_at_most(&mut system, t1, 1).ticks, 0);
        assert_eq!(system.steps.len(), 6);
    }

    #[test]
    fn test_stop_is_immediate() {
        let mut clock = FrameClock::default();
        let mut system = Recorder::default();
        let t0 = Instant::now();
        clock.drive(&mut system, t0);

        clock.stop();
        let report = clock.drive(&mut system, t0 + Duration::from_millis(100));
        assert_eq!(report.ticks, 0);
        assert_eq!(clock.step(&mut system, t0).ticks, 0);
        assert!(system.steps.is_empty());

        // Restart re-primes rather than replaying the stopped interval
        clock.start();
        assert_eq!(clock.advance(t0 + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_step_runs_exactly_one_tick() {
        let mut clock = FrameClock::default();
        let mut system = Recorder::default();
        let t0 = Instant::now();

        for i in 0..5 {
            let report = clock.step(&mut system, t0 + Duration::from_millis(i * 3));
            assert_eq!(report.ticks, 1);
        }
        assert_eq!(system.steps.len(), 5);
    }

    #[test]
    fn test_fps_reported_once_per_window() {
        let mut fps = FpsCounter::new(Duration::from_secs(1));
        let frame = Duration::from_millis(16);

        let mut reports = Vec::new();
        for _ in 0..130 {
            if let Some(v) = fps.record_frame(frame) {
                reports.push(v);
            }
        }

        // 63 frames fill the first window (1008ms), 63 more the second
        assert_eq!(reports.len(), 2);
        assert!((reports[0] - 63.0 / 1.008).abs() < 1e-9);
        assert_eq!(fps.pending_frames(), 4);
        assert_eq!(fps.latest(), Some(reports[1]));
    }

    #[test]
    fn test_fps_not_reported_before_window() {
        let mut fps = FpsCounter::new(Duration::from_secs(1));
        assert!(fps.record_frames(30, Duration::from_millis(500)).is_none());
        assert!(fps.latest().is_none());
        let v = fps.record_frames(30, Duration::from_millis(500)).unwrap();
        assert!((v - 60.0).abs() < 1e-9);
        assert_eq!(fps.pending_frames(), 0);
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: ClockSettings = toml::from_str("interval_ms = 33\nfixed_dt = 0.033").unwrap();
        assert_eq!(settings.interval_ms, 33);
        assert!((settings.fixed_dt - 0.033).abs() < 1e-12);
        assert_eq!(settings.fps_window_ms, 1000);
    }
}
