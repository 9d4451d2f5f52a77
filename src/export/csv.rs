//! CSV Export functionality
//!
//! Exports raw expense rows to CSV. Fields are written as-is: a comma or
//! newline inside a free-form field is not quoted and will shift columns.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::ExpenseRecord;

/// Header row of the raw expense export
pub const EXPENSE_HEADER: [&str; 4] = ["Date", "Amount", "Payment Method", "Category"];

/// A CSV writer that never quotes and terminates rows with `\n`
pub fn unquoted_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Export expense records to CSV, one row per record
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> ExpenseResult<()> {
    let mut wtr = unquoted_writer(writer);

    wtr.write_record(EXPENSE_HEADER)?;
    for record in records {
        wtr.write_record([
            record.date.as_str(),
            record.amount.to_string().as_str(),
            record.payment_method.as_str(),
            record.category.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export expense records to a CSV string
pub fn expenses_csv_string(records: &[ExpenseRecord]) -> ExpenseResult<String> {
    let mut buf = Vec::new();
    export_expenses_csv(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
