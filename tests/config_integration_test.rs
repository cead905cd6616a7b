use anyhow::Result;
use restaurant_menu::utils::validation::Validate;
use restaurant_menu::{FixedClock, Restaurant, RestaurantError, TomlConfig};
use tempfile::TempDir;

const CONFIG: &str = r#"
[restaurant]
name = "Amelie's cafe"
location = "Chennai"
opening_time = "10:30:00"
closing_time = "22:00:00"

[[menu]]
name = "Sweet corn soup"
price = 120

[[menu]]
name = "Vegetable lasagne"
price = 280
"#;

#[test]
fn restaurant_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("restaurant.toml");
    std::fs::write(&config_path, CONFIG)?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let restaurant = Restaurant::from_config(&config, FixedClock::parse("13:00")?)?;

    assert_eq!(restaurant.name(), "Amelie's cafe");
    assert_eq!(restaurant.location(), "Chennai");
    assert!(restaurant.is_open());
    assert_eq!(restaurant.menu().len(), 2);
    assert_eq!(restaurant.menu()[0].name, "Sweet corn soup");
    assert_eq!(
        restaurant.total_amount(&["Sweet corn soup", "Vegetable lasagne"])?,
        400
    );
    Ok(())
}

#[test]
fn order_summary_serializes_to_json() -> Result<()> {
    let config = TomlConfig::from_toml_str(CONFIG)?;
    let restaurant = Restaurant::from_config(&config, FixedClock::parse("01:00")?)?;
    assert!(!restaurant.is_open());

    let summary = restaurant.order_summary(&["Vegetable lasagne"])?;
    let json = serde_json::to_value(&summary)?;

    assert_eq!(
        json,
        serde_json::json!({
            "items": [{ "name": "Vegetable lasagne", "price": 280 }],
            "total": 280
        })
    );
    Ok(())
}

#[test]
fn duplicate_seed_items_are_rejected() -> Result<()> {
    let duplicated = CONFIG.replace("Vegetable lasagne", "Sweet corn soup");
    let config = TomlConfig::from_toml_str(&duplicated)?;

    assert!(config.validate().is_err());
    let err = Restaurant::from_config(&config, FixedClock::parse("13:00")?).unwrap_err();
    assert!(matches!(err, RestaurantError::DuplicateItem { .. }));
    Ok(())
}

#[test]
fn unparseable_hours_fail_restaurant_setup() -> Result<()> {
    let broken = CONFIG.replace("\"10:30:00\"", "\"ten thirty\"");
    let config = TomlConfig::from_toml_str(&broken)?;

    let err = Restaurant::from_config(&config, FixedClock::parse("13:00")?).unwrap_err();
    assert!(matches!(
        err,
        RestaurantError::InvalidConfigValueError { ref field, .. } if field == "restaurant.opening_time"
    ));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}
