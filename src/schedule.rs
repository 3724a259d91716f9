use std::time::{Duration, Instant};

// Holding the value means the task is scheduled; dropping it cancels it.
#[derive(Debug)]
pub struct PeriodicTask {
    name: &'static str,
    period: Duration,
    next_due: Instant,
    fired: u64,
}

impl PeriodicTask {
    pub fn start(name: &'static str, period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        tracing::trace!(task = name, period_ms = period.as_millis() as u64, "task started");
        Self {
            name,
            period,
            next_due: now + period,
            fired: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    // Fires at most once per call. Periods missed while the loop was stalled are
    // dropped rather than replayed in a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        self.fired = self.fired.saturating_add(1);
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        tracing::trace!(task = self.name, fired = self.fired, "task cancelled");
    }
}

pub fn earliest_due(tasks: &[Option<&PeriodicTask>], now: Instant) -> Option<Duration> {
    tasks
        .iter()
        .flatten()
        .map(|task| task.time_until_due(now))
        .min()
}
