use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{error, info};
use rand::Rng;

use crate::customer::{generate_customers, Customer};
use crate::error::FixtureError;
use crate::order::{generate_orders, Order, OrderOptions, StatusVocabulary};
use crate::table::{to_rows, write_rows, Tabular};

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const ORDERS_FILE: &str = "orders.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub customers: u32,
    pub min_orders: u32,
    pub max_orders: u32,
    pub statuses: StatusVocabulary,
    pub random_status: bool,
    /// Directory both CSV files are written to
    pub output_dir: PathBuf,
}

/// The outcome of writing one CSV file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Number of data rows, header excluded
    pub result: Result<usize, FixtureError>,
}

#[derive(Debug)]
pub struct FixtureReport {
    pub customers: FileOutcome,
    pub orders: FileOutcome,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        let orders = OrderOptions::default();
        FixtureConfig {
            customers: 10,
            min_orders: orders.min_orders,
            max_orders: orders.max_orders,
            statuses: orders.statuses,
            random_status: orders.random_status,
            output_dir: PathBuf::from("."),
        }
    }
}

impl FixtureConfig {
    #[must_use]
    pub fn order_options(&self) -> OrderOptions {
        OrderOptions {
            min_orders: self.min_orders,
            max_orders: self.max_orders,
            statuses: self.statuses.clone(),
            random_status: self.random_status,
        }
    }
}

impl FileOutcome {
    fn write<T: Tabular>(path: PathBuf, records: &[T]) -> Self {
        let result = write_rows(&path, &to_rows(records)).map(|()| records.len());
        match &result {
            Ok(rows) => info!("Wrote {} rows to {}", rows, path.display()),
            Err(e) => error!("Error writing {}: {:?}", path.display(), e),
        }
        FileOutcome { path, result }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl FixtureReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.customers.is_ok() && self.orders.is_ok()
    }
}

/// Writes `customers` and `orders` with their headers into `dir`. The orders file is
/// written even when the customers file fails.
#[must_use]
pub fn write_fixtures(dir: &Path, customers: &[Customer], orders: &[Order]) -> FixtureReport {
    let customers = FileOutcome::write(dir.join(CUSTOMERS_FILE), customers);
    let orders = FileOutcome::write(dir.join(ORDERS_FILE), orders);
    FixtureReport { customers, orders }
}

/// Generates customers and their orders dated relative to `today`, then writes both CSV
/// files into `config.output_dir`. Write failures are recorded per file in the returned
/// report rather than returned as an error.
///
/// # Errors
/// Errors when the order count range in `config` is invalid, before any file is written
pub fn generate_fixtures<R: Rng>(
    config: &FixtureConfig,
    rng: &mut R,
    today: NaiveDate,
) -> Result<FixtureReport, FixtureError> {
    let options = config.order_options();
    options.validate()?;

    let customers = generate_customers(rng, config.customers);
    let orders = generate_orders(rng, &customers, &options, today)?;

    Ok(write_fixtures(&config.output_dir, &customers, &orders))
}
