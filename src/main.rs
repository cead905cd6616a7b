use chrono::NaiveTime;
use clap::Parser;
use restaurant_menu::config::{LogFormat, OutputFormat};
use restaurant_menu::utils::{logger, validation::Validate};
use restaurant_menu::{
    CliConfig, Clock, MenuItem, OrderSummary, Restaurant, Result, SystemClock, TomlConfig,
};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    location: &'a str,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    checked_at: NaiveTime,
    is_open: bool,
    menu: &'a [MenuItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<OrderSummary>,
}

fn main() {
    let args = CliConfig::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if args.json_logs || config.log_format() == LogFormat::Json {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = run(&args, &config) {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &CliConfig, config: &TomlConfig) -> Result<()> {
    config.validate()?;
    tracing::info!("✅ Configuration loaded from {}", args.config);

    match args.at {
        Some(clock) => report(args, &Restaurant::from_config(config, clock)?),
        None => report(args, &Restaurant::from_config(config, SystemClock)?),
    }
}

fn report<C: Clock>(args: &CliConfig, restaurant: &Restaurant<C>) -> Result<()> {
    let order = if args.order.is_empty() {
        None
    } else {
        Some(restaurant.order_summary(args.order.as_slice())?)
    };

    let checked_at = restaurant.current_time();
    let is_open = restaurant.is_open_at(checked_at);

    match args.format {
        OutputFormat::Text => {
            println!("{}", restaurant);
            println!();
            println!(
                "{} at {}",
                if is_open { "Open" } else { "Closed" },
                checked_at.format("%H:%M:%S")
            );
            if let Some(order) = order {
                println!();
                println!("Order:");
                for item in &order.items {
                    println!("  {}", item);
                }
                println!("Total: {}", order.total);
            }
        }
        OutputFormat::Json => {
            let report = Report {
                name: restaurant.name(),
                location: restaurant.location(),
                opening_time: restaurant.opening_time(),
                closing_time: restaurant.closing_time(),
                checked_at,
                is_open,
                menu: restaurant.menu(),
                order,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
