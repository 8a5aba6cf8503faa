use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Stopwatch with a log of marks.
///
/// Durations come from a monotonic clock; the wall-clock start and end are
/// kept only for display.
#[derive(Debug, Clone)]
pub struct Timer {
    started_at: DateTime<Local>,
    stopped_at: Option<DateTime<Local>>,
    marks: Vec<Instant>,
}

impl Timer {
    /// Start a timer; the start is recorded as mark 0
    pub fn start() -> Self {
        Timer {
            started_at: Local::now(),
            stopped_at: None,
            marks: vec![Instant::now()],
        }
    }

    /// Record a mark and return its index
    pub fn mark(&mut self) -> usize {
        self.marks.push(Instant::now());
        self.marks.len() - 1
    }

    /// Record the end time along with a final mark
    pub fn stop(&mut self) {
        self.stopped_at = Some(Local::now());
        self.mark();
    }

    pub fn restart(&mut self) {
        *self = Timer::start();
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    pub fn marks(&self) -> usize {
        self.marks.len()
    }

    /// Time between marks `i` and `j`, or zero if the pair is not `i < j`
    pub fn duration_between(&self, i: usize, j: usize) -> Duration {
        if i < j && j < self.marks.len() {
            self.marks[j] - self.marks[i]
        } else {
            Duration::ZERO
        }
    }

    /// Time between the most recent mark and the one before it
    pub fn last_lap(&self) -> Duration {
        let n = self.marks.len();
        if n >= 2 {
            self.duration_between(n - 2, n - 1)
        } else {
            Duration::ZERO
        }
    }

    /// Time from start to the last mark
    pub fn elapsed(&self) -> Duration {
        self.duration_between(0, self.marks.len() - 1)
    }

    /// Mean gap between consecutive marks, ignoring the final (stop) mark
    pub fn average_per_process(&self) -> Duration {
        let n = self.marks.len();
        if n <= 2 {
            return Duration::ZERO;
        }
        let laps = (n - 2) as u32;
        self.duration_between(0, n - 2) / laps
    }

    pub fn start_text(&self) -> String {
        format_clock(&self.started_at)
    }

    /// End time, or the current time while the timer is still running
    pub fn end_text(&self) -> String {
        match &self.stopped_at {
            Some(end) => format_clock(end),
            None => format_clock(&Local::now()),
        }
    }
}

/// Format a duration as `HH:MM:SS:mmm`
pub fn format_duration(d: Duration) -> String {
    let total_ms = d.as_millis();
    let ms = total_ms % 1000;
    let secs = total_ms / 1000;
    format!("{:02}:{:02}:{:02}:{:03}", secs / 3600, (secs / 60) % 60, secs % 60, ms)
}

fn format_clock(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S:%3f").to_string()
}
