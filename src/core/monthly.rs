use super::Tracker;
use crate::errors::{AppError, AppResult};
use crate::sheets::{Record, Workbook, Worksheet};
use crate::utils::date::parse_date;
use chrono::Datelike;
use rust_decimal::Decimal;

/// Display lines for the matched expenses plus their total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyExpenses {
    pub lines: Vec<String>,
    pub total: Decimal,
}

impl<W: Workbook> Tracker<W> {
    /// Scan the whole expense worksheet and keep the rows dated in
    /// `month`/`year`, in sheet order.
    ///
    /// Rows with an unreadable date are skipped and logged. A matching row
    /// with an unreadable amount is still listed but adds nothing to the
    /// total; a row that would push the total out of range is skipped. A
    /// failed read of the worksheet yields an empty result instead of an
    /// error; only an out-of-range month is rejected.
    pub fn monthly_expenses(&self, month: u32, year: i32) -> AppResult<MonthlyExpenses> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(month));
        }

        let records = match self.workbook.get_all_records(Worksheet::Expenses) {
            Ok(r) => r,
            Err(e) => {
                log::error!("could not read expenses: {}", e);
                return Ok(MonthlyExpenses::default());
            }
        };

        let mut out = MonthlyExpenses::default();
        for record in &records {
            let date_cell = record.get("date");
            if date_cell.is_empty() {
                continue;
            }
            let Some(date) = parse_date(date_cell) else {
                log::warn!("skipping row with invalid date format: {}", date_cell);
                continue;
            };
            if date.month() != month || date.year() != year {
                continue;
            }

            let amount = record_amount(record).unwrap_or_else(|| {
                log::warn!(
                    "row dated {} has invalid amount {}, counting it as zero",
                    date_cell,
                    record.get("amount")
                );
                Decimal::ZERO
            });
            let Some(total) = out.total.checked_add(amount) else {
                log::warn!(
                    "skipping row dated {}: amount {} overflows the monthly total",
                    date_cell,
                    amount
                );
                continue;
            };

            out.lines.push(summary_line(record));
            out.total = total;
        }

        Ok(out)
    }
}

/// Missing or empty amount counts as zero; anything else must be numeric.
fn record_amount(record: &Record) -> Option<Decimal> {
    let cell = record.get("amount").trim();
    if cell.is_empty() {
        return Some(Decimal::ZERO);
    }
    cell.parse().ok()
}

fn summary_line(record: &Record) -> String {
    format!(
        "Amount: {}, Category: {}, Description: {}",
        record.get("amount"),
        record.get("category"),
        record.get("description")
    )
}
