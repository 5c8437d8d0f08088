//! Busy-wait policy
//!
//! Every wait on a hardware flag goes through [`WaitPolicy::wait_until`].
//! [`WaitPolicy::Forever`] spins until the flag changes, even if it never does.

/// The condition did not become true within the allowed number of polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timeout;

/// How long to busy-wait on a hardware condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitPolicy {
    /// Poll until the condition holds, however long that takes
    #[default]
    Forever,
    /// Poll at most this many times, then give up
    ///
    /// `Polls(0)` times out without evaluating the condition.
    Polls(u32),
}

impl WaitPolicy {
    /// Busy-wait until `ready` returns true
    ///
    /// Returns the number of polls it took (at least 1 on success).
    pub fn wait_until<F>(self, mut ready: F) -> Result<u32, Timeout>
    where
        F: FnMut() -> bool,
    {
        match self {
            WaitPolicy::Forever => {
                let mut polls: u32 = 0;
                loop {
                    polls = polls.saturating_add(1);
                    if ready() {
                        return Ok(polls);
                    }
                    core::hint::spin_loop();
                }
            }
            WaitPolicy::Polls(max) => {
                for polls in 1..=max {
                    if ready() {
                        return Ok(polls);
                    }
                    core::hint::spin_loop();
                }
                Err(Timeout)
            }
        }
    }

    /// Check if this policy can give up
    pub fn is_bounded(&self) -> bool {
        matches!(self, WaitPolicy::Polls(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forever_waits_for_condition() {
        let mut remaining = 1000;
        let polls = WaitPolicy::Forever.wait_until(|| {
            remaining -= 1;
            remaining == 0
        });
        assert_eq!(polls, Ok(1000));
    }

    #[test]
    fn test_bounded_success() {
        let mut calls = 0;
        let polls = WaitPolicy::Polls(10).wait_until(|| {
            calls += 1;
            calls == 3
        });
        assert_eq!(polls, Ok(3));
    }

    #[test]
    fn test_bounded_timeout() {
        let mut calls = 0;
        let result = WaitPolicy::Polls(10).wait_until(|| {
            calls += 1;
            false
        });
        assert_eq!(result, Err(Timeout));
        assert_eq!(calls, 10);
    }

    #[test]
    fn test_ready_on_last_poll() {
        let mut calls = 0;
        let result = WaitPolicy::Polls(5).wait_until(|| {
            calls += 1;
            calls == 5
        });
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn test_zero_polls() {
        let mut called = false;
        let result = WaitPolicy::Polls(0).wait_until(|| {
            called = true;
            true
        });
        assert_eq!(result, Err(Timeout));
        assert!(!called);
    }

    #[test]
    fn test_default_is_forever() {
        assert_eq!(WaitPolicy::default(), WaitPolicy::Forever);
        assert!(!WaitPolicy::Forever.is_bounded());
        assert!(WaitPolicy::Polls(1).is_bounded());
    }
}
