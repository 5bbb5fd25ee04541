//! Exports the expenses as a CSV download.

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{Error, expense::Expense, expense::ExpenseStoreState};

const CSV_HEADER: [&str; 5] = ["Month", "Category", "Biller", "Amount", "Currency"];

/// The file name suggested to the browser for the download.
pub const EXPORT_FILE_NAME: &str = "expensage_export.csv";

/// Write `expenses` as CSV text, one row per expense in list order.
///
/// Fields are never quoted and rows are separated by `\n` with no trailing
/// newline. Amounts use the shortest decimal form that round trips, e.g. `500`
/// or `12.5`.
///
/// # Errors
///
/// Returns an [Error::CsvError] if the CSV writer fails.
pub fn expenses_to_csv(expenses: &[Expense]) -> Result<String, Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;

    for expense in expenses {
        let amount = expense.amount.to_string();

        writer
            .write_record([
                expense.month.as_str(),
                expense.category.as_ref(),
                expense.biller.as_str(),
                amount.as_str(),
                expense.currency.code(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))?;

    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}

fn csv_error(error: csv::Error) -> Error {
    Error::CsvError(error.to_string())
}

/// A route handler that downloads every expense as a CSV file.
pub async fn export_expenses_endpoint(
    State(state): State<ExpenseStoreState>,
) -> Result<Response, Error> {
    let text = {
        let store = state
            .expenses
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        expenses_to_csv(store.expenses())
            .inspect_err(|error| tracing::error!("could not export expenses: {error}"))?
    };

    Ok((
        [
            (CONTENT_TYPE, "text/csv;charset=utf-8".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        text,
    )
        .into_response())
}
