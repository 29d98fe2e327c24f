//! CSV export of filtered lists.
//!
//! Each exportable entity declares a fixed header row and maps itself to one
//! flat row of display strings. Output is RFC 4180: comma separated, CRLF
//! line endings, fields quoted when they contain a comma, quote or newline.

use std::borrow::Cow;

use chrono::NaiveDate;

/// A record that can be written as one CSV row.
pub trait CsvRecord {
    /// Human-readable column headers, in output order.
    const HEADERS: &'static [&'static str];

    /// The record's fields, one per header.
    fn csv_row(&self) -> Vec<String>;
}

/// Quote a field if it needs quoting.
#[must_use]
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field.as_ref()));
    }
    out.push_str("\r\n");
}

/// Serialise records to CSV: one header row plus one row per record.
pub fn to_csv<'a, T, I>(records: I) -> String
where
    T: CsvRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    write_row(&mut out, T::HEADERS);
    for record in records {
        write_row(&mut out, &record.csv_row());
    }
    out
}

/// Download file name for an export, e.g. `customers-2026-03-01.csv`.
#[must_use]
pub fn export_filename(entity: &str, date: NaiveDate) -> String {
    format!("{entity}-{}.csv", date.format("%Y-%m-%d"))
}

/// Format an optional date column.
#[must_use]
pub fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
