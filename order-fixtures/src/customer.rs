use log::debug;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::table::Tabular;

pub const NAME_LEN: usize = 10;
pub const EMAIL_LOCAL_LEN: usize = 5;
pub const EMAIL_DOMAIN: &str = "@example.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    pub id: u32,
    #[serde(rename = "customer_name")]
    pub name: String,
    pub email: String,
}

impl Customer {
    #[must_use]
    pub fn new(id: u32, name: String, email: String) -> Self {
        Customer { id, name, email }
    }

    /// A customer with the given `id` and a random name and email address
    pub fn random<R: Rng>(id: u32, rng: &mut R) -> Self {
        let name = random_string(rng, NAME_LEN);
        let email = format!("{}{}", random_string(rng, EMAIL_LOCAL_LEN), EMAIL_DOMAIN);
        Customer::new(id, name, email)
    }
}

impl Tabular for Customer {
    const HEADER: &'static [&'static str] = &["customer_id", "customer_name", "email"];

    fn to_row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.email.clone()]
    }
}

/// `len` random ASCII alphanumeric characters
pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    std::iter::repeat_with(|| char::from(rng.sample(Alphanumeric)))
        .take(len)
        .collect()
}

/// Generates `count` customers with the ids `1..=count`, in order.
pub fn generate_customers<R: Rng>(rng: &mut R, count: u32) -> Vec<Customer> {
    let customers: Vec<Customer> = (1..=count).map(|id| Customer::random(id, rng)).collect();
    debug!("Generated {} customers", customers.len());
    customers
}
