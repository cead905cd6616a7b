use crate::core::Clock;
use crate::utils::error::Result;
use crate::utils::validation::validate_time_of_day;
use chrono::{Local, NaiveTime};

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_time(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn parse(value: &str) -> Result<Self> {
        parse_time_of_day(value).map(Self)
    }
}

impl Clock for FixedClock {
    fn current_time(&self) -> NaiveTime {
        self.0
    }
}

pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    validate_time_of_day("time", value)
}
