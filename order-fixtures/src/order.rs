use std::fmt;

use chrono::{Duration, NaiveDate};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::error::FixtureError;
use crate::table::Tabular;

pub const PRODUCTS: [&str; 4] = ["Product A", "Product B", "Product C", "Product D"];
pub const DEFAULT_STATUSES: &str = "Pending,Processing,Shipped,Delivered";
pub const MAX_QUANTITY: u8 = 9;
/// Order dates fall within this many days, today included
pub const DATE_WINDOW_DAYS: i64 = 365;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: u32,
    pub customer_id: u32,
    pub product_name: String,
    pub quantity: u8,
    pub order_date: NaiveDate,
    pub status: String,
}

/// The ordered, non-empty list of statuses an order may take
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusVocabulary(Vec<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderOptions {
    pub min_orders: u32,
    pub max_orders: u32,
    pub statuses: StatusVocabulary,
    /// Pick statuses at random instead of cycling through the vocabulary
    pub random_status: bool,
}

impl Tabular for Order {
    const HEADER: &'static [&'static str] = &[
        "order_id",
        "customer_id",
        "product_name",
        "quantity",
        "order_date",
        "status",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.customer_id.to_string(),
            self.product_name.clone(),
            self.quantity.to_string(),
            self.order_date.format(DATE_FORMAT).to_string(),
            self.status.clone(),
        ]
    }
}

impl StatusVocabulary {
    /// # Errors
    /// Errors when `statuses` is empty
    pub fn new(statuses: Vec<String>) -> Result<Self, FixtureError> {
        if statuses.is_empty() {
            Err(FixtureError::EmptyStatuses)
        } else {
            Ok(StatusVocabulary(statuses))
        }
    }

    /// Splits a comma separated list. Entries are kept verbatim; an empty list gives the
    /// default vocabulary.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let list = if list.is_empty() {
            DEFAULT_STATUSES
        } else {
            list
        };
        StatusVocabulary(list.split(',').map(String::from).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, kept alongside `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The status at `index`, wrapping around the end of the vocabulary
    #[must_use]
    pub fn cycle(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        // the vocabulary is never empty, so `choose` always yields a status
        self.0.choose(rng).map_or("", String::as_str)
    }

    #[must_use]
    pub fn contains(&self, status: &str) -> bool {
        self.0.iter().any(|s| s == status)
    }
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        StatusVocabulary::parse(DEFAULT_STATUSES)
    }
}

impl TryFrom<Vec<String>> for StatusVocabulary {
    type Error = FixtureError;
    fn try_from(statuses: Vec<String>) -> Result<Self, Self::Error> {
        StatusVocabulary::new(statuses)
    }
}

impl fmt::Display for StatusVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl Default for OrderOptions {
    fn default() -> Self {
        OrderOptions {
            min_orders: 5,
            max_orders: 10,
            statuses: StatusVocabulary::default(),
            random_status: true,
        }
    }
}

impl OrderOptions {
    /// # Errors
    /// Errors when `max_orders` is lower than `min_orders`
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.max_orders < self.min_orders {
            Err(FixtureError::InvalidOrderRange {
                min: self.min_orders,
                max: self.max_orders,
            })
        } else {
            Ok(())
        }
    }
}

/// Generates between `min_orders` and `max_orders` orders for every customer, in customer
/// order. Order ids start at 1 and run across all customers.
///
/// When statuses are not random, the status of each order is picked by its position in the
/// whole run, not its position among the customer's own orders: with two customers of one
/// order each and the vocabulary `A,B`, the statuses are `A` then `B`.
///
/// # Errors
/// Errors when `options` holds an invalid order count range
pub fn generate_orders<R: Rng>(
    rng: &mut R,
    customers: &[Customer],
    options: &OrderOptions,
    today: NaiveDate,
) -> Result<Vec<Order>, FixtureError> {
    options.validate()?;

    let mut orders = Vec::new();
    let mut order_id: u32 = 1;
    // orders emitted so far across every customer, used for status cycling
    let mut running_index: usize = 0;

    for customer in customers {
        let num_orders = rng.gen_range(options.min_orders..=options.max_orders);
        for _ in 0..num_orders {
            let status = if options.random_status {
                options.statuses.choose(rng)
            } else {
                options.statuses.cycle(running_index)
            };
            let days_ago = rng.gen_range(0..DATE_WINDOW_DAYS);

            orders.push(Order {
                id: order_id,
                customer_id: customer.id,
                product_name: PRODUCTS.choose(rng).map_or("", |p| *p).to_string(),
                quantity: rng.gen_range(1..=MAX_QUANTITY),
                order_date: today - Duration::days(days_ago),
                status: status.to_string(),
            });
            order_id += 1;
            running_index += 1;
        }
    }

    debug!(
        "Generated {} orders for {} customers",
        orders.len(),
        customers.len()
    );
    Ok(orders)
}
