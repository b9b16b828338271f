/// Cumulative counters carried from one engine to its replacement.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct StatsSeed {
    pub number_frame: u64,
    pub number_millisecond: f64,
}

/// Frame and time counters kept by an engine.
///
/// `number_*` counters start from the seed given at set up and therefore
/// survive engine replacement. `engine_number_*` counters always start at
/// zero for a fresh engine.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SystemStats {
    pub number_frame: u64,
    pub number_millisecond: f64,
    pub engine_number_frame: u64,
    pub engine_number_millisecond: f64,
    last_frame_timestamp: Option<f64>,
}

impl SystemStats {
    pub fn seeded(seed: StatsSeed) -> Self {
        Self {
            number_frame: seed.number_frame,
            number_millisecond: seed.number_millisecond,
            ..Self::default()
        }
    }

    /// Counters a replacement engine should continue from.
    #[inline]
    pub fn seed(&self) -> StatsSeed {
        StatsSeed {
            number_frame: self.number_frame,
            number_millisecond: self.number_millisecond,
        }
    }

    #[inline]
    pub fn last_frame_timestamp(&self) -> Option<f64> {
        self.last_frame_timestamp
    }

    /// Forgets the previous frame timestamp.
    ///
    /// Called when the loop (re)starts so that time spent stopped is not
    /// added to the millisecond counters.
    #[inline]
    pub fn rebase(&mut self) {
        self.last_frame_timestamp = None;
    }

    /// Counts one drawn frame at `timestamp`.
    pub fn record_frame(&mut self, timestamp: f64) {
        self.number_frame += 1;
        self.engine_number_frame += 1;

        if let Some(last) = self.last_frame_timestamp {
            let interval = (timestamp - last).max(0.0);
            self.number_millisecond += interval;
            self.engine_number_millisecond += interval;
        }

        self.last_frame_timestamp = Some(timestamp);
    }
}
