use std::path::Path;

use csv::WriterBuilder;

use crate::error::FixtureError;

/// A record that can be laid out as one row of a CSV table.
pub trait Tabular {
    /// Column names, in the order [`Tabular::to_row`] emits the fields
    const HEADER: &'static [&'static str];

    fn to_row(&self) -> Vec<String>;
}

/// Builds the header row for `T` followed by one row per record.
#[must_use]
pub fn to_rows<'a, T, I>(records: I) -> Vec<Vec<String>>
where
    T: Tabular + 'a,
    I: IntoIterator<Item = &'a T>,
{
    std::iter::once(T::HEADER.iter().map(ToString::to_string).collect())
        .chain(records.into_iter().map(T::to_row))
        .collect()
}

/// Creates (or truncates) the file at `path` and writes every row as one CSV record.
/// The file is flushed before returning and closed when the writer is dropped, on both
/// the success and the error path.
///
/// # Errors
/// Errors when the file cannot be created, or a record cannot be written or flushed
pub fn write_rows<P, I, R>(path: P, rows: I) -> Result<(), FixtureError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
