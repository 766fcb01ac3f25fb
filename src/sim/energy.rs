//! Energy drift monitor
//!
//! Tracks how far the total mechanical energy has wandered from the value
//! captured at construction. Purely advisory: nothing in the step reads it.
//!
//! State machine per observed frame:
//! - energy equal to the baseline: back to `Idle`
//! - energy differs: `Idle -> Counting(1) -> ... -> Counting(n - 1)`, and the
//!   n-th consecutive drifting frame emits a report and resets to `Idle`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Streak progress toward the next report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StreakState {
    #[default]
    Idle,
    /// Number of consecutive drifting frames seen so far
    Counting(u32),
}

/// One diagnostic line's worth of data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    /// `(current - baseline) / baseline` for the reporting frame
    pub relative_error: f64,
    /// Largest relative error seen so far (never below 0)
    pub max_error: f64,
    /// Smallest relative error seen so far (never above 0)
    pub min_error: f64,
    pub current: f64,
    pub baseline: f64,
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.relative_error, self.max_error, self.min_error
        )
    }
}

/// Running energy-drift statistics for one simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyMonitor {
    baseline: f64,
    threshold: u32,
    state: StreakState,
    max_error: f64,
    min_error: f64,
    emitted: u64,
    last_report: Option<EnergyReport>,
}

impl EnergyMonitor {
    /// `threshold` is clamped to at least 1
    pub fn new(baseline: f64, threshold: u32) -> Self {
        Self {
            baseline,
            threshold: threshold.max(1),
            state: StreakState::Idle,
            max_error: 0.0,
            min_error: 0.0,
            emitted: 0,
            last_report: None,
        }
    }

    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    #[inline]
    pub fn state(&self) -> StreakState {
        self.state
    }

    #[inline]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    #[inline]
    pub fn min_error(&self) -> f64 {
        self.min_error
    }

    /// Reports produced so far
    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn last_report(&self) -> Option<&EnergyReport> {
        self.last_report.as_ref()
    }

    /// Relative drift of `current` from the baseline
    ///
    /// A zero baseline has no meaningful ratio; the absolute difference is
    /// returned instead.
    pub fn relative_error(&self, current: f64) -> f64 {
        let diff = current - self.baseline;
        if self.baseline == 0.0 {
            diff
        } else {
            diff / self.baseline
        }
    }

    /// Feed one frame's total energy; returns a report on the frame that
    /// completes a streak
    pub fn observe(&mut self, current: f64) -> Option<EnergyReport> {
        let error = self.relative_error(current);
        if error > self.max_error {
            self.max_error = error;
        }
        if error < self.min_error {
            self.min_error = error;
        }

        if current == self.baseline {
            self.state = StreakState::Idle;
            return None;
        }

        let streak = match self.state {
            StreakState::Idle => 1,
            StreakState::Counting(n) => n + 1,
        };

        if streak < self.threshold {
            self.state = StreakState::Counting(streak);
            return None;
        }

        self.state = StreakState::Idle;
        let report = EnergyReport {
            relative_error: error,
            max_error: self.max_error,
            min_error: self.min_error,
            current,
            baseline: self.baseline,
        };
        self.emitted += 1;
        self.last_report = Some(report);
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_on_fifth_drifting_frame() {
        let mut monitor = EnergyMonitor::new(100.0, 5);
        for i in 1..5 {
            assert!(monitor.observe(100.0 + i as f64).is_none());
            assert_eq!(monitor.state(), StreakState::Counting(i));
        }
        let report = monitor.observe(105.0).expect("fifth frame reports");
        assert!((report.relative_error - 0.05).abs() < 1e-12);
        assert!((report.max_error - 0.05).abs() < 1e-12);
        assert_eq!(report.min_error, 0.0);
        assert_eq!(monitor.state(), StreakState::Idle);
        assert_eq!(monitor.emitted(), 1);
    }

    #[test]
    fn test_matching_frame_breaks_streak() {
        let mut monitor = EnergyMonitor::new(50.0, 5);
        for _ in 0..4 {
            assert!(monitor.observe(49.0).is_none());
        }
        assert!(monitor.observe(50.0).is_none());
        assert_eq!(monitor.state(), StreakState::Idle);
        for _ in 0..4 {
            assert!(monitor.observe(49.0).is_none());
        }
        assert!(monitor.observe(49.0).is_some());
        assert_eq!(monitor.emitted(), 1);
    }

    #[test]
    fn test_running_extremes() {
        let mut monitor = EnergyMonitor::new(10.0, 100);
        monitor.observe(11.0);
        monitor.observe(8.0);
        monitor.observe(10.5);
        assert!((monitor.max_error() - 0.1).abs() < 1e-12);
        assert!((monitor.min_error() + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_baseline_uses_absolute_error() {
        let monitor = EnergyMonitor::new(0.0, 5);
        assert_eq!(monitor.relative_error(2.5), 2.5);
        assert!(monitor.relative_error(-1.0).is_finite());
    }

    #[test]
    fn test_report_line_format() {
        let report = EnergyReport {
            relative_error: -0.25,
            max_error: 0.5,
            min_error: -0.25,
            current: 3.0,
            baseline: 4.0,
        };
        assert_eq!(report.to_string(), "-0.25, 0.5, -0.25");
    }

    #[test]
    fn test_threshold_of_one_reports_every_drifting_frame() {
        let mut monitor = EnergyMonitor::new(1.0, 0);
        assert!(monitor.observe(2.0).is_some());
        assert!(monitor.observe(2.0).is_some());
        assert!(monitor.observe(1.0).is_none());
        assert_eq!(monitor.emitted(), 2);
    }
}
