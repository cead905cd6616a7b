use crate::core::clock::SystemClock;
use crate::core::{Clock, ConfigProvider, MenuItem, OrderSummary};
use crate::utils::error::{RestaurantError, Result};
use chrono::NaiveTime;
use std::fmt;

/// A single restaurant: fixed identity and hours, mutable menu.
///
/// Opening hours are inclusive on both ends. Menu item names are unique and
/// the menu keeps insertion order.
#[derive(Debug, Clone)]
pub struct Restaurant<C: Clock = SystemClock> {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<MenuItem>,
    clock: C,
}

impl Restaurant<SystemClock> {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self::with_clock(name, location, opening_time, closing_time, SystemClock)
    }
}

impl<C: Clock> Restaurant<C> {
    pub fn with_clock(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        clock: C,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
            clock,
        }
    }

    /// Builds the restaurant and seeds its menu from `config`.
    pub fn from_config<P: ConfigProvider>(config: &P, clock: C) -> Result<Self> {
        let mut restaurant = Self::with_clock(
            config.restaurant_name(),
            config.location(),
            config.opening_time()?,
            config.closing_time()?,
            clock,
        );

        for item in config.menu_items() {
            restaurant.add_to_menu(item.name, item.price)?;
        }

        tracing::debug!(
            "Loaded '{}' with {} menu items",
            restaurant.name,
            restaurant.menu.len()
        );
        Ok(restaurant)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    pub fn current_time(&self) -> NaiveTime {
        self.clock.current_time()
    }

    pub fn is_open(&self) -> bool {
        self.is_open_at(self.current_time())
    }

    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.opening_time <= time && time <= self.closing_time
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name == name)
    }

    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) -> Result<()> {
        let name = name.into();
        if self.find_item(&name).is_some() {
            tracing::warn!("Refusing to add duplicate menu item '{}'", name);
            return Err(RestaurantError::DuplicateItem { name });
        }

        tracing::debug!("Adding '{}' ({}) to the menu of '{}'", name, price, self.name);
        self.menu.push(MenuItem::new(name, price));
        Ok(())
    }

    pub fn remove_from_menu(&mut self, name: &str) -> Result<MenuItem> {
        let Some(index) = self.menu.iter().position(|item| item.name == name) else {
            tracing::warn!("Cannot remove '{}': not on the menu of '{}'", name, self.name);
            return Err(RestaurantError::item_not_found(name));
        };

        tracing::debug!("Removing '{}' from the menu of '{}'", name, self.name);
        Ok(self.menu.remove(index))
    }

    /// Sums the prices of `items`. Repeated names are counted each time; an
    /// unknown name fails the whole call. The total saturates at `u64::MAX`.
    pub fn total_amount<S: AsRef<str>>(&self, items: &[S]) -> Result<u64> {
        items.iter().try_fold(0u64, |total, name| {
            let item = self.lookup(name.as_ref())?;
            Ok(total.saturating_add(u64::from(item.price)))
        })
    }

    pub fn order_summary<S: AsRef<str>>(&self, items: &[S]) -> Result<OrderSummary> {
        let items = items
            .iter()
            .map(|name| self.lookup(name.as_ref()).cloned())
            .collect::<Result<Vec<_>>>()?;
        let total = items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(u64::from(item.price)));

        Ok(OrderSummary { items, total })
    }

    fn lookup(&self, name: &str) -> Result<&MenuItem> {
        self.find_item(name).ok_or_else(|| {
            tracing::warn!("'{}' is not on the menu of '{}'", name, self.name);
            RestaurantError::item_not_found(name)
        })
    }
}

impl<C: Clock> fmt::Display for Restaurant<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Opening time: {}", self.opening_time)?;
        writeln!(f, "Closing time: {}", self.closing_time)?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n  {}", item)?;
        }
        Ok(())
    }
}
