use chrono::{Local, NaiveDateTime, TimeDelta};

/// How far back an SDE/SDR query reaches when `start_time` is omitted.
pub const DEFAULT_LOOKBACK: TimeDelta = TimeDelta::hours(24);

/// How far ahead an SDE/SDR query reaches when `end_time` is omitted. Rows are written with
/// a wall clock three hours ahead of the server's, so "now" alone would cut off the newest rows.
pub const DEFAULT_LOOKAHEAD: TimeDelta = TimeDelta::hours(3);

/// Inclusive `[start, end]` range over the zone-less timestamps stored in the measurement tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Fills each missing bound independently from `now`.
    pub fn resolve(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            start: start.unwrap_or(now - DEFAULT_LOOKBACK),
            end: end.unwrap_or(now + DEFAULT_LOOKAHEAD),
        }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Server wall-clock time, matching how the data store records timestamps.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
