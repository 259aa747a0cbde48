/// Animation driver: a continuously advancing horizontal offset that fakes
/// an infinitely scrolling strip.
///
/// Small explicit state machine with three states:
/// - `Idle`: nothing to animate (grid mode, empty strip, or no valid width)
/// - `Running`: offset advancing linearly over time, wrapping after one pass
/// - `Paused`: offset frozen exactly where it was (pointer hover)
///
/// All transitions go through the declared entry points below; nothing else
/// may touch the offset. A filter or view-mode change hard-resets the driver
/// before the next tick, so a stale in-flight offset can never be applied to
/// a rebuilt sequence.
use std::time::Instant;

/// Target apparent scroll speed in logical pixels per second.
pub const SCROLL_SPEED: f32 = 100.0;

/// Floor on the loop duration so a short filtered strip does not flash by.
pub const MIN_LOOP_SECS: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    state: DriverState,
    /// Strip translation, 0 down to `-unit_width`; always non-positive
    offset: f32,
    /// Wrap distance: the width of one un-repeated pass
    unit_width: f32,
    /// Effective speed in px/s, fixed at reset time
    rate: f32,
    /// Baseline of the previous tick; `None` right after reset/pause/resume
    /// so the next tick only records a baseline instead of jumping
    last_tick: Option<Instant>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self {
            state: DriverState::Idle,
            offset: 0.0,
            unit_width: 0.0,
            rate: 0.0,
            last_tick: None,
        }
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Current strip translation (non-positive, magnitude < unit width).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Same offset expressed as a positive scroll position for a horizontal
    /// scrollable whose content moves left as the offset grows.
    pub fn scroll_x(&self) -> f32 {
        -self.offset
    }

    /// Effective speed in pixels per second. Constant between resets, so
    /// pausing and resuming never changes the apparent scroll speed.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Hard reset for a new wrap distance: offset back to the start, then
    /// `Running` if the width is usable, `Idle` otherwise.
    ///
    /// The loop duration scales with the strip width, floored so small
    /// filtered subsets still scroll at a readable pace.
    pub fn reset(&mut self, unit_width: f32) {
        self.offset = 0.0;
        self.last_tick = None;

        if unit_width.is_finite() && unit_width > 0.0 {
            let duration = (unit_width / SCROLL_SPEED).max(MIN_LOOP_SECS);
            self.unit_width = unit_width;
            self.rate = unit_width / duration;
            self.state = DriverState::Running;
        } else {
            // Layout not measurable yet (or nothing to show): stay idle
            // rather than animating a nonsensical distance.
            self.unit_width = 0.0;
            self.rate = 0.0;
            self.state = DriverState::Idle;
        }
    }

    /// Back to `Idle` with the offset at its initial value.
    pub fn stop(&mut self) {
        self.state = DriverState::Idle;
        self.offset = 0.0;
        self.unit_width = 0.0;
        self.rate = 0.0;
        self.last_tick = None;
    }

    /// Freeze the offset exactly where it is. Only meaningful while running.
    pub fn pause(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Paused;
            self.last_tick = None;
        }
    }

    /// Resume from a pause at the same rate, with no snap and no catch-up:
    /// the first tick after resuming only records a new time baseline.
    pub fn resume(&mut self) {
        if self.state == DriverState::Paused {
            self.state = DriverState::Running;
            self.last_tick = None;
        }
    }

    /// Advance the offset for the given instant and return it.
    ///
    /// Wraps by exactly one unit width when a full pass has been traveled;
    /// the repeated sequence guarantees the content at the wrapped offset is
    /// identical, so the jump is invisible.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if self.state != DriverState::Running {
            return self.offset;
        }

        if let Some(last) = self.last_tick {
            let dt = now.saturating_duration_since(last).as_secs_f32();
            self.offset -= self.rate * dt;
            while self.offset <= -self.unit_width {
                self.offset += self.unit_width;
            }
        }
        self.last_tick = Some(now);

        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Unit width chosen so the computed duration is above the floor and the
    /// rate comes out at exactly SCROLL_SPEED.
    const WIDE: f32 = 1600.0;

    #[test]
    fn test_reset_enters_running_from_zero() {
        let mut driver = AnimationDriver::new();
        driver.reset(WIDE);

        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.offset(), 0.0);
        assert_eq!(driver.rate(), SCROLL_SPEED);
    }

    #[test]
    fn test_duration_floor_slows_short_strips() {
        let mut driver = AnimationDriver::new();
        driver.reset(100.0);

        // 100 px at 100 px/s would take 1 s; the 8 s floor applies instead.
        assert_eq!(driver.rate(), 100.0 / MIN_LOOP_SECS);
    }

    #[test]
    fn test_tick_advances_linearly() {
        let mut driver = AnimationDriver::new();
        driver.reset(WIDE);

        let t0 = Instant::now();
        driver.tick(t0);
        let offset = driver.tick(t0 + Duration::from_secs(1));

        assert!((offset + SCROLL_SPEED).abs() < 0.01);
    }

    #[test]
    fn test_wrap_after_one_unit_width() {
        let mut driver = AnimationDriver::new();
        driver.reset(WIDE);

        let t0 = Instant::now();
        driver.tick(t0);
        // 17 s of travel at 100 px/s = 1700 px; one 1600 px wrap leaves -100.
        let offset = driver.tick(t0 + Duration::from_secs(17));

        assert!((offset + 100.0).abs() < 0.01);
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn test_pause_freezes_offset_without_snapping() {
        let mut driver = AnimationDriver::new();
        driver.reset(WIDE);

        let t0 = Instant::now();
        driver.tick(t0);
        let before = driver.tick(t0 + Duration::from_secs(2));

        driver.pause();
        assert_eq!(driver.state(), DriverState::Paused);

        // Time keeps passing while paused; the offset must not.
        let frozen = driver.tick(t0 + Duration::from_secs(30));
        assert_eq!(frozen, before);
    }

    #[test]
    fn test_resume_keeps_the_same_rate() {
        let mut driver = AnimationDriver::new();
        driver.reset(WIDE);

        let t0 = Instant::now();
        driver.tick(t0);
        let a = driver.tick(t0 + Duration::from_secs(1));
        let b = driver.tick(t0 + Duration::from_secs(2));
        let rate_before = a - b;

        driver.pause();
        driver.resume();
        assert_eq!(driver.state(), DriverState::Running);

        // First tick after resume only re-baselines; no catch-up jump.
        let c = driver.tick(t0 + Duration::from_secs(10));
        assert_eq!(c, b);

        let d = driver.tick(t0 + Duration::from_secs(11));
        let rate_after = c - d;
        assert!((rate_before - rate_after).abs() < 0.01);
    }

    #[test]
    fn test_reset_discards_in_flight_offset() {
        let mut driver = AnimationDriver::new();
        driver.reset(WIDE);

        let t0 = Instant::now();
        driver.tick(t0);
        driver.tick(t0 + Duration::from_secs(3));
        assert!(driver.offset() < 0.0);

        driver.reset(800.0);

        assert_eq!(driver.offset(), 0.0);
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.rate(), SCROLL_SPEED);
    }

    #[test]
    fn test_unusable_width_stays_idle() {
        for width in [0.0, -120.0, f32::NAN, f32::INFINITY] {
            let mut driver = AnimationDriver::new();
            driver.reset(width);

            assert_eq!(driver.state(), DriverState::Idle, "width {width}");

            let t0 = Instant::now();
            driver.tick(t0);
            assert_eq!(driver.tick(t0 + Duration::from_secs(5)), 0.0);
        }
    }

    #[test]
    fn test_stop_returns_to_initial_value() {
        let mut driver = AnimationDriver::new();
        driver.reset(WIDE);

        let t0 = Instant::now();
        driver.tick(t0);
        driver.tick(t0 + Duration::from_secs(4));

        driver.stop();

        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(driver.offset(), 0.0);
    }

    #[test]
    fn test_pause_is_only_meaningful_while_running() {
        let mut driver = AnimationDriver::new();
        driver.pause();
        assert_eq!(driver.state(), DriverState::Idle);

        driver.resume();
        assert_eq!(driver.state(), DriverState::Idle);
    }
}
