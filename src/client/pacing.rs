use std::time::Duration;

use governor::{
    Quota, RateLimiter,
    clock::{Clock, DefaultClock},
    state::{InMemoryState, direct::NotKeyed},
};
use log::debug;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Blocks callers so that requests through one client are spaced at least
/// `interval` apart. A zero interval disables pacing.
pub struct RequestGate {
    limiter: Option<DirectRateLimiter>,
    clock: DefaultClock,
}

impl RequestGate {
    pub fn new(interval: Duration) -> Self {
        let clock = DefaultClock::default();
        let limiter =
            Quota::with_period(interval).map(|quota| RateLimiter::direct_with_clock(quota, &clock));
        Self { limiter, clock }
    }

    /// Wait until the next request may be sent
    pub fn wait(&self) {
        let Some(limiter) = &self.limiter else {
            return;
        };

        while let Err(not_until) = limiter.check() {
            let delay = not_until.wait_time_from(self.clock.now());
            debug!("Request gate closed, waiting {}ms", delay.as_millis());
            std::thread::sleep(delay);
        }
    }
}
