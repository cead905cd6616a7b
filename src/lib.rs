pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::{
    clock::{FixedClock, SystemClock},
    restaurant::Restaurant,
    Clock, ConfigProvider, MenuItem, OrderSummary,
};
pub use utils::error::{RestaurantError, Result};
