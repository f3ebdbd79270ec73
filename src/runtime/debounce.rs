use std::time::{Duration, Instant};

/// Default pause between the last keystroke and the search.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Single-deadline debouncer. Each `arm` supersedes the pending deadline;
/// `poll` fires at most once per armed deadline.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re-)arm the deadline at `now + delay`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per armed deadline, once it has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.deadline = None;
        true
    }

    /// How long the event loop may sleep before the deadline is due.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(now).min(default_timeout),
            None => default_timeout,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// Sequence guard for overlapping async work. The holder of the latest
/// ticket wins; anything that settles with an older ticket must be
/// discarded by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generation {
    current: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.current = self.current.saturating_add(1);
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{Debouncer, Generation};
    use std::time::{Duration, Instant};

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn unarmed_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.is_armed());
        assert!(!debouncer.poll(Instant::now()));
    }

    #[test]
    fn fires_once_after_the_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.arm(start);

        assert!(!debouncer.poll(start + Duration::from_millis(50)));
        assert!(debouncer.poll(start + Duration::from_millis(150)));
        // Consumed; does not fire again until re-armed.
        assert!(!debouncer.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn rearming_supersedes_the_pending_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.arm(start);
        debouncer.arm(start + Duration::from_millis(80));

        // The first deadline (start + 100ms) must not fire.
        assert!(!debouncer.poll(start + Duration::from_millis(120)));
        assert!(debouncer.poll(start + Duration::from_millis(180)));
    }

    #[test]
    fn cancel_discards_the_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.arm(start);
        debouncer.cancel();
        assert!(!debouncer.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn poll_timeout_caps_the_event_loop_sleep() {
        let start = Instant::now();
        let default_timeout = Duration::from_secs(1);
        let mut debouncer = Debouncer::new(DELAY);

        assert_eq!(debouncer.poll_timeout(start, default_timeout), default_timeout);

        debouncer.arm(start);
        assert_eq!(
            debouncer.poll_timeout(start + Duration::from_millis(40), default_timeout),
            Duration::from_millis(60)
        );
        assert_eq!(
            debouncer.poll_timeout(start + Duration::from_millis(200), default_timeout),
            Duration::ZERO
        );
    }

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut generation = Generation::new();
        let first = generation.issue();
        assert!(generation.is_current(first));

        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
