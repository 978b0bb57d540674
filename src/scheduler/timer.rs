//! Send and faucet timers.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::ScheduleConfig;

/// Which actions are due on this iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Due {
    pub send: bool,
    pub faucet: bool,
}

/// Last-fire instants of the two actions.
///
/// The send timer starts at construction, so the first transfer happens one
/// full interval after startup. The faucet timer starts unset: the first
/// iteration always requests funds.
#[derive(Debug, Clone)]
pub struct TimerState {
    send_interval: Duration,
    faucet_interval: Duration,
    last_send: Instant,
    last_faucet: Option<Instant>,
}

impl TimerState {
    pub fn new(now: Instant, schedule: &ScheduleConfig) -> Self {
        Self {
            send_interval: schedule.send_interval(),
            faucet_interval: schedule.faucet_interval(),
            last_send: now,
            last_faucet: None,
        }
    }

    /// Evaluate both timers against the same clock reading.
    pub fn due(&self, now: Instant) -> Due {
        Due {
            send: now.saturating_duration_since(self.last_send) >= self.send_interval,
            faucet: match self.last_faucet {
                None => true,
                Some(last) => now.saturating_duration_since(last) >= self.faucet_interval,
            },
        }
    }

    pub fn mark_sent(&mut self, now: Instant) {
        self.last_send = now;
    }

    pub fn mark_faucet(&mut self, now: Instant) {
        self.last_faucet = Some(now);
    }

    pub fn last_send(&self) -> Instant {
        self.last_send
    }

    pub fn last_faucet(&self) -> Option<Instant> {
        self.last_faucet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_first_iteration_requests_faucet_only() {
        let start = Instant::now();
        let timers = TimerState::new(start, &ScheduleConfig::default());

        assert_eq!(timers.due(start), Due { send: false, faucet: true });
        assert_eq!(timers.last_faucet(), None);
    }

    #[test]
    fn test_send_interval_boundary() {
        let start = Instant::now();
        let mut timers = TimerState::new(start, &ScheduleConfig::default());
        timers.mark_faucet(start);

        assert!(!timers.due(start + Duration::from_millis(9_999)).send);
        assert!(timers.due(start + secs(10)).send);
    }

    #[test]
    fn test_timers_measure_from_their_own_last_fire() {
        let start = Instant::now();
        let mut timers = TimerState::new(start, &ScheduleConfig::default());
        timers.mark_faucet(start);

        // Sending at 10s and 20s must not move the faucet timer.
        timers.mark_sent(start + secs(10));
        timers.mark_sent(start + secs(20));
        assert_eq!(timers.due(start + secs(25)), Due::default());

        assert!(!timers.due(start + secs(309)).faucet);
        assert!(timers.due(start + secs(310)).faucet);

        // A late faucet fire resets relative to when it actually ran.
        timers.mark_faucet(start + secs(315));
        assert_eq!(timers.last_faucet(), Some(start + secs(315)));
        assert!(!timers.due(start + secs(620)).faucet);
        assert!(timers.due(start + secs(625)).faucet);
    }

    #[test]
    fn test_both_due_together() {
        let start = Instant::now();
        let mut timers = TimerState::new(start, &ScheduleConfig::default());
        timers.mark_faucet(start);

        assert_eq!(
            timers.due(start + secs(310)),
            Due { send: true, faucet: true }
        );
    }
}
