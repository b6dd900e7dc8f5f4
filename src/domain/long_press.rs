//! Press-and-hold detection.

use std::time::Duration;

use super::timer::OneShotTimer;

/// Acknowledgment shown when a long press is detected.
pub const LONG_PRESS_MESSAGE: &str =
    "🎉 You discovered the long-press secret! Background color changed!";

/// Default hold time before a press counts as long.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(1000);

/// Arms on pointer-down, disarms on pointer-up.
#[derive(Debug, Clone)]
pub struct LongPressDetector {
    hold: Duration,
    timer: OneShotTimer,
}

impl LongPressDetector {
    /// Creates a detector that fires after holding for `hold`.
    #[must_use]
    pub const fn new(hold: Duration) -> Self {
        Self {
            hold,
            timer: OneShotTimer::new(),
        }
    }

    /// Required hold time.
    #[must_use]
    pub const fn hold(&self) -> Duration {
        self.hold
    }

    /// Returns whether a press is being held.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Pointer went down at `now`.
    pub fn press(&mut self, now: Duration) {
        self.timer.arm(now, self.hold);
    }

    /// Pointer went up at `now`.
    ///
    /// Returns `true` if the hold deadline had already passed without being
    /// polled; the long press then fires exactly once here.
    pub fn release(&mut self, now: Duration) -> bool {
        if self.timer.poll(now) {
            return true;
        }
        self.timer.cancel();
        false
    }

    /// Returns `true` once when the hold deadline passes.
    pub fn poll(&mut self, now: Duration) -> bool {
        self.timer.poll(now)
    }
}

impl Default for LongPressDetector {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_PRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_short_press_never_fires() {
        let mut detector = LongPressDetector::default();
        detector.press(ms(0));
        assert!(!detector.release(ms(400)));
        assert!(!detector.poll(ms(5000)));
    }

    #[test]
    fn test_hold_fires_once() {
        let mut detector = LongPressDetector::default();
        detector.press(ms(0));

        assert!(!detector.poll(ms(999)));
        assert!(detector.poll(ms(1000)));
        assert!(!detector.poll(ms(1500)));
        assert!(!detector.release(ms(1600)));
    }

    #[test]
    fn test_release_losing_race_fires_once() {
        let mut detector = LongPressDetector::default();
        detector.press(ms(0));

        assert!(detector.release(ms(1200)));
        assert!(!detector.poll(ms(2000)));
        assert!(!detector.is_pressed());
    }

    #[test]
    fn test_second_press_restarts_hold() {
        let mut detector = LongPressDetector::new(ms(500));
        detector.press(ms(0));
        detector.press(ms(400));

        assert!(!detector.poll(ms(600)));
        assert!(detector.poll(ms(900)));
    }
}
