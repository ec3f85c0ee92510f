use std::time::Duration;

use rand::Rng;

use crate::args::TesterArgs;
use crate::error::ValidationError;

/// Uniform think time between two iterations of the same user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime {
    min: Duration,
    max: Duration,
}

impl WaitTime {
    /// # Errors
    ///
    /// Returns an error when `min` is greater than `max`.
    pub fn between(min: Duration, max: Duration) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::WaitMinGreaterThanMax);
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> Duration {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Duration {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min_us = u64::try_from(self.min.as_micros()).unwrap_or(u64::MAX);
        let max_us = u64::try_from(self.max.as_micros()).unwrap_or(u64::MAX);
        Duration::from_micros(rng.gen_range(min_us..=max_us))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RunSettings {
    pub users: usize,
    pub spawn_rate: u64,
    pub run_time: Duration,
    pub wait: WaitTime,
}

impl RunSettings {
    /// # Errors
    ///
    /// Returns an error when the wait range is inverted.
    pub fn from_args(args: &TesterArgs) -> Result<Self, ValidationError> {
        Ok(Self {
            users: args.users.get(),
            spawn_rate: args.spawn_rate.get(),
            run_time: args.run_time,
            wait: WaitTime::between(args.wait_min, args.wait_max)?,
        })
    }
}
