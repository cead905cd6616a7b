pub mod clock;
pub mod restaurant;

pub use crate::domain::model::{MenuItem, OrderSummary};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::Result;
