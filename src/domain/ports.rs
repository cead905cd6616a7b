use crate::domain::model::MenuItem;
use crate::utils::error::Result;
use chrono::NaiveTime;

/// Source of the current time of day.
pub trait Clock {
    fn current_time(&self) -> NaiveTime;
}

impl<F> Clock for F
where
    F: Fn() -> NaiveTime,
{
    fn current_time(&self) -> NaiveTime {
        self()
    }
}

/// Everything needed to set up a restaurant.
pub trait ConfigProvider {
    fn restaurant_name(&self) -> &str;
    fn location(&self) -> &str;
    fn opening_time(&self) -> Result<NaiveTime>;
    fn closing_time(&self) -> Result<NaiveTime>;
    fn menu_items(&self) -> Vec<MenuItem>;
}
