//! Business logic: the tracker owns the workbook and the budget state and
//! exposes the expense, fuel, monthly and budget operations.

pub mod budget;
pub mod expense;
pub mod fuel;
pub mod monthly;

use crate::models::BudgetState;
use crate::sheets::Workbook;

pub use monthly::MonthlyExpenses;

/// Single owner of the budget state and single writer of the budget log.
/// Every mutating operation takes `&mut self`.
pub struct Tracker<W: Workbook> {
    workbook: W,
    budgets: BudgetState,
}

impl<W: Workbook> Tracker<W> {
    /// Start with `defaults` as budget state; it stays in effect until the
    /// budget log is read or an operation changes it.
    pub fn new(workbook: W, defaults: BudgetState) -> Self {
        Self {
            workbook,
            budgets: defaults,
        }
    }

    pub fn budgets(&self) -> &BudgetState {
        &self.budgets
    }

    pub fn workbook(&self) -> &W {
        &self.workbook
    }

    pub fn workbook_mut(&mut self) -> &mut W {
        &mut self.workbook
    }
}
