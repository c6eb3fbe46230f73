//! The budget log: an append-only list of full budget snapshots where the
//! most recent row is the authoritative budget.

use super::{Workbook, Worksheet};
use crate::errors::{AppError, AppResult};
use crate::models::{BudgetSnapshot, Category};
use crate::utils::date::parse_date;
use rust_decimal::Decimal;

pub fn append_snapshot<W: Workbook + ?Sized>(wb: &mut W, snapshot: &BudgetSnapshot) -> AppResult<()> {
    wb.append_row(Worksheet::BudgetLog, &snapshot.to_row())
}

/// The most recently appended snapshot, or `None` when the log has no data
/// rows yet. A last row that cannot be read as four balances is an error.
pub fn latest_snapshot<W: Workbook + ?Sized>(wb: &W) -> AppResult<Option<BudgetSnapshot>> {
    let records = wb.get_all_records(Worksheet::BudgetLog)?;
    let Some(last) = records.last() else {
        return Ok(None);
    };

    let date_cell = last.get("date");
    let date = parse_date(date_cell).ok_or_else(|| AppError::InvalidDate(date_cell.to_string()))?;

    let mut balances = [Decimal::ZERO; 4];
    for (slot, category) in balances.iter_mut().zip(Category::TRACKED) {
        let cell = last.get(category.as_str());
        *slot = cell
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidAmount(format!("{}={:?}", category, cell)))?;
    }

    Ok(Some(BudgetSnapshot { date, balances }))
}
