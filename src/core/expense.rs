use super::Tracker;
use crate::errors::AppResult;
use crate::models::Expense;
use crate::sheets::{Workbook, Worksheet, budget_log};
use crate::utils::date;

impl<W: Workbook> Tracker<W> {
    /// Record an expense.
    ///
    /// The debit is computed up front so an out-of-range balance is
    /// rejected before anything is written. The expense row is appended
    /// next; if that fails nothing else happens. For a tracked category the
    /// debit is then applied and a full snapshot dated today is appended to
    /// the budget log. The two appends are not atomic: when the log append
    /// fails the debit is kept.
    pub fn add_expense(&mut self, expense: &Expense) -> AppResult<()> {
        let mut debited = self.budgets.clone();
        let tracked = debited.debit(expense.category, expense.amount)?;

        self.workbook
            .append_row(Worksheet::Expenses, &expense.to_row())?;

        if tracked {
            self.budgets = debited;
            let snapshot = self.budgets.snapshot(date::today());
            budget_log::append_snapshot(&mut self.workbook, &snapshot)?;
            log::debug!(
                "{} budget now {:?}",
                expense.category,
                self.budgets.get(expense.category)
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Tracker;
    use crate::errors::AppError;
    use crate::models::{BudgetState, Category, Expense};
    use crate::sheets::{MemoryWorkbook, Worksheet};
    use crate::utils::date;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn tracker() -> Tracker<MemoryWorkbook> {
        Tracker::new(
            MemoryWorkbook::with_headers(),
            BudgetState::from_balances([d("1500"), d("1000"), d("1000"), d("300")]),
        )
    }

    fn expense(amount: &str, category: Category) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            d(amount),
            category,
            "lunch",
        )
    }

    fn today() -> String {
        date::today().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn tracked_expense_logs_full_snapshot() {
        let mut t = tracker();
        t.add_expense(&expense("200", Category::Food)).unwrap();

        let wb = t.workbook();
        assert_eq!(
            wb.data_rows(Worksheet::Expenses),
            &[vec!["2024-05-10", "200", "Food", "lunch"]]
        );
        assert_eq!(
            wb.data_rows(Worksheet::BudgetLog),
            &[vec![today(), "1300".into(), "1000".into(), "1000".into(), "300".into()]]
        );
        assert_eq!(t.budgets().get(Category::Food), Some(d("1300")));
    }

    #[test]
    fn untracked_expense_leaves_budget_alone() {
        let mut t = tracker();
        let before = t.budgets().clone();
        t.add_expense(&expense("75.25", Category::Other)).unwrap();

        assert_eq!(t.workbook().data_rows(Worksheet::Expenses).len(), 1);
        assert!(t.workbook().data_rows(Worksheet::BudgetLog).is_empty());
        assert_eq!(t.budgets(), &before);
    }

    #[test]
    fn consecutive_expenses_accumulate() {
        let mut t = tracker();
        t.add_expense(&expense("100", Category::Travel)).unwrap();
        t.add_expense(&expense("0.50", Category::Travel)).unwrap();

        let log = t.workbook().data_rows(Worksheet::BudgetLog);
        assert_eq!(log.len(), 2);
        assert_eq!(log[1][3], "899.50");
    }

    #[test]
    fn failed_expense_append_does_not_touch_budget() {
        let mut t = tracker();
        t.workbook_mut().fail_appends(Worksheet::Expenses, true);
        let before = t.budgets().clone();

        let err = t.add_expense(&expense("200", Category::Food)).unwrap_err();
        assert!(matches!(err, AppError::Sheet(_)));
        assert_eq!(t.budgets(), &before);
        assert!(t.workbook().data_rows(Worksheet::BudgetLog).is_empty());
    }

    #[test]
    fn failed_log_append_keeps_in_memory_debit() {
        let mut t = tracker();
        t.workbook_mut().fail_appends(Worksheet::BudgetLog, true);

        assert!(t.add_expense(&expense("200", Category::Food)).is_err());
        assert_eq!(t.workbook().data_rows(Worksheet::Expenses).len(), 1);
        assert_eq!(t.budgets().get(Category::Food), Some(d("1300")));
    }

    #[test]
    fn out_of_range_debit_writes_nothing() {
        let mut t = tracker();
        let before = t.budgets().clone();
        let huge = Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            -Decimal::MAX,
            Category::Food,
            "refund",
        );

        let err = t.add_expense(&huge).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
        assert!(t.workbook().data_rows(Worksheet::Expenses).is_empty());
        assert!(t.workbook().data_rows(Worksheet::BudgetLog).is_empty());
        assert_eq!(t.budgets(), &before);
    }

    #[test]
    fn huge_untracked_expense_is_still_recorded() {
        let mut t = tracker();
        let huge = Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            -Decimal::MAX,
            Category::Other,
            "refund",
        );

        t.add_expense(&huge).unwrap();
        assert_eq!(t.workbook().data_rows(Worksheet::Expenses).len(), 1);
        assert!(t.workbook().data_rows(Worksheet::BudgetLog).is_empty());
    }
}
