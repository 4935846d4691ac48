use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Maximum orders per customer ({max}) is lower than the minimum ({min})")]
    InvalidOrderRange { min: u32, max: u32 },
    #[error("The status vocabulary must contain at least one status")]
    EmptyStatuses,
}
