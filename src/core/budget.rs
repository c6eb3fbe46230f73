use super::Tracker;
use crate::errors::AppResult;
use crate::models::{BudgetSnapshot, BudgetUpdate};
use crate::sheets::{Workbook, budget_log};
use crate::utils::date;

impl<W: Workbook> Tracker<W> {
    /// Re-read the budget log and adopt its last row as budget state.
    ///
    /// Returns the adopted snapshot, or `None` when the log is empty (state
    /// untouched). Errors also leave the state untouched.
    pub fn sync_budgets(&mut self) -> AppResult<Option<BudgetSnapshot>> {
        let latest = budget_log::latest_snapshot(&self.workbook)?;
        if let Some(snapshot) = &latest {
            self.budgets.restore(snapshot);
        }
        Ok(latest)
    }

    /// `Category: $amount` lines for the four tracked categories.
    ///
    /// Not read-only: a readable budget log overwrites the in-memory state
    /// first. When the log is empty or unreadable the current state is
    /// shown as is.
    pub fn budget_summary(&mut self) -> Vec<String> {
        if let Err(e) = self.sync_budgets() {
            log::error!("could not read budget log, showing cached budget: {}", e);
        }
        self.budgets.summary_lines()
    }

    /// Overwrite the supplied categories and log the resulting budget.
    ///
    /// The in-memory state is updated even when the log append fails; the
    /// error is still returned so the caller can report it.
    pub fn update_budget(&mut self, update: &BudgetUpdate) -> AppResult<()> {
        self.budgets.apply(update);
        let snapshot = self.budgets.snapshot(date::today());
        budget_log::append_snapshot(&mut self.workbook, &snapshot)
    }
}
