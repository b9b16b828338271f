/// Minimum time between two FPS reports.
pub const FPS_REPORT_INTERVAL_MS: f64 = 1000.0;

/// Session-level timing counters and rolling frame-rate report.
#[derive(Debug, Clone, PartialEq)]
pub struct FpsMeter {
    last_frame: f64,
    last_update_fps: f64,
    number_millisecond: f64,
    number_frame: u64,
    frames_since_last_update: u32,
}

impl FpsMeter {
    /// Fresh counters with `now` as the baseline.
    pub fn new(now: f64) -> Self {
        Self {
            last_frame: now,
            last_update_fps: now,
            number_millisecond: 0.0,
            number_frame: 0,
            frames_since_last_update: 0,
        }
    }

    /// Moves the baseline to `now` without touching the totals.
    ///
    /// Used on resume so that time spent paused is neither counted nor
    /// reported as a slow frame.
    pub fn rebase(&mut self, now: f64) {
        self.last_frame = now;
        self.last_update_fps = now;
        self.frames_since_last_update = 0;
    }

    /// Counts one frame. Returns the number of frames since the previous
    /// report once at least [`FPS_REPORT_INTERVAL_MS`] has elapsed.
    pub fn record_frame(&mut self, timestamp: f64) -> Option<u32> {
        self.number_frame += 1;
        self.frames_since_last_update += 1;
        self.number_millisecond += timestamp - self.last_frame;
        self.last_frame = timestamp;

        if self.last_frame - self.last_update_fps >= FPS_REPORT_INTERVAL_MS {
            let fps = self.frames_since_last_update;
            self.last_update_fps = self.last_frame;
            self.frames_since_last_update = 0;
            return Some(fps);
        }
        None
    }

    #[inline]
    pub fn number_frame(&self) -> u64 {
        self.number_frame
    }

    #[inline]
    pub fn number_millisecond(&self) -> f64 {
        self.number_millisecond
    }

    #[inline]
    pub fn frames_since_last_update(&self) -> u32 {
        self.frames_since_last_update
    }

    #[inline]
    pub fn last_frame(&self) -> f64 {
        self.last_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_before_one_second() {
        let mut m = FpsMeter::new(0.0);
        for i in 1..=59 {
            assert_eq!(m.record_frame(i as f64 * 16.0), None);
        }
        assert_eq!(m.frames_since_last_update(), 59);
    }

    #[test]
    fn reports_at_boundary_and_resets_counter() {
        let mut m = FpsMeter::new(0.0);
        for i in 1..=3 {
            assert_eq!(m.record_frame(i as f64 * 300.0), None);
        }
        // 1200ms elapsed on the fourth frame
        assert_eq!(m.record_frame(1200.0), Some(4));
        assert_eq!(m.frames_since_last_update(), 0);
        assert_eq!(m.record_frame(1300.0), None);
        assert_eq!(m.frames_since_last_update(), 1);
    }

    #[test]
    fn exactly_one_second_reports() {
        let mut m = FpsMeter::new(0.0);
        assert_eq!(m.record_frame(1000.0), Some(1));
    }

    #[test]
    fn rebase_excludes_paused_time() {
        let mut m = FpsMeter::new(0.0);
        m.record_frame(100.0);
        m.rebase(10_000.0);
        assert_eq!(m.record_frame(10_016.0), None);
        assert_eq!(m.number_millisecond(), 116.0);
        assert_eq!(m.number_frame(), 2);
    }
}
