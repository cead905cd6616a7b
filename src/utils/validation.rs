use crate::utils::error::{RestaurantError, Result};
use chrono::NaiveTime;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RestaurantError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Parses `HH:MM:SS` or `HH:MM`.
pub fn validate_time_of_day(field_name: &str, value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| {
            RestaurantError::invalid_value(
                field_name,
                value,
                format!("Invalid time of day, expected HH:MM or HH:MM:SS: {}", e),
            )
        })
}

pub fn validate_operating_hours(
    field_name: &str,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
) -> Result<()> {
    if opening_time >= closing_time {
        return Err(RestaurantError::invalid_value(
            field_name,
            format!("{}-{}", opening_time, closing_time),
            "Opening time must be before closing time",
        ));
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(RestaurantError::invalid_value(
                field_name,
                name,
                "Duplicate menu item name",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("restaurant.name", "Amelie's cafe").is_ok());
        assert!(validate_non_empty_string("restaurant.name", "").is_err());
        assert!(validate_non_empty_string("restaurant.name", "   ").is_err());
    }

    #[test]
    fn test_validate_time_of_day() {
        let with_seconds = validate_time_of_day("opening_time", "10:30:00").unwrap();
        let without_seconds = validate_time_of_day("opening_time", "10:30").unwrap();
        assert_eq!(with_seconds, without_seconds);
        assert_eq!(with_seconds, NaiveTime::from_hms_opt(10, 30, 0).unwrap());

        assert!(validate_time_of_day("opening_time", "25:00").is_err());
        assert!(validate_time_of_day("opening_time", "half past ten").is_err());
        assert!(validate_time_of_day("opening_time", "").is_err());
    }

    #[test]
    fn test_validate_operating_hours() {
        let opening = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        assert!(validate_operating_hours("hours", opening, closing).is_ok());
        assert!(validate_operating_hours("hours", closing, opening).is_err());
        assert!(validate_operating_hours("hours", opening, opening).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("menu", ["Sweet corn soup", "Vegetable lasagne"]).is_ok());
        assert!(validate_unique_names("menu", ["Sweet corn soup", "Sweet corn soup"]).is_err());
        assert!(validate_unique_names("menu", std::iter::empty::<&str>()).is_ok());
    }
}
