use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use order_fixtures::fixture::{generate_fixtures, FixtureConfig};
use order_fixtures::order::{StatusVocabulary, DEFAULT_STATUSES};

#[derive(Parser)]
#[clap(author, version, about = "Generates customer and order test data as CSV files", long_about = None)]
struct Cli {
    /// Number of customers
    #[clap(long, default_value_t = 10)]
    pub(crate) customers: u32,
    /// Minimum number of orders per customer
    #[clap(long = "minOrders", default_value_t = 5)]
    pub(crate) min_orders: u32,
    /// Maximum number of orders per customer
    #[clap(long = "maxOrders", default_value_t = 10)]
    pub(crate) max_orders: u32,
    /// Comma-separated list of order statuses
    #[clap(long, default_value = DEFAULT_STATUSES)]
    pub(crate) statuses: String,
    /// Assign statuses randomly instead of cycling through the list
    #[clap(long = "randomStatus", default_value = "true", parse(try_from_str))]
    pub(crate) random_status: bool,
    /// Seed for the random generator, for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
    /// Directory the CSV files are written to
    #[clap(long, default_value = ".")]
    pub(crate) output_dir: PathBuf,
}

impl From<Cli> for FixtureConfig {
    fn from(cli: Cli) -> Self {
        FixtureConfig {
            customers: cli.customers,
            min_orders: cli.min_orders,
            max_orders: cli.max_orders,
            statuses: StatusVocabulary::parse(&cli.statuses),
            random_status: cli.random_status,
            output_dir: cli.output_dir,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = FixtureConfig::from(cli);

    let report = generate_fixtures(&config, &mut rng, Local::now().date_naive())?;
    if report.is_ok() {
        info!("Saved customer and order data to {}", config.output_dir.display());
        println!("Customer master data and order data were saved as CSV files.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = FixtureConfig::from(Cli::parse_from(["order-fixtures-cli"]));
        assert_eq!(config, FixtureConfig::default());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "order-fixtures-cli",
            "--customers",
            "3",
            "--minOrders",
            "1",
            "--maxOrders",
            "1",
            "--statuses",
            "A,B",
            "--randomStatus",
            "false",
            "--seed",
            "7",
        ]);
        assert_eq!(cli.seed, Some(7));
        let config = FixtureConfig::from(cli);
        assert_eq!(config.customers, 3);
        assert_eq!(config.min_orders, 1);
        assert_eq!(config.max_orders, 1);
        assert_eq!(config.statuses, StatusVocabulary::parse("A,B"));
        assert!(!config.random_status);
    }

    #[test]
    fn test_cli_rejects_malformed_numbers() {
        assert!(Cli::try_parse_from(["order-fixtures-cli", "--customers", "many"]).is_err());
        assert!(Cli::try_parse_from(["order-fixtures-cli", "--minOrders", "-1"]).is_err());
        assert!(Cli::try_parse_from(["order-fixtures-cli", "--randomStatus", "maybe"]).is_err());
    }
}
