//! Budget state and budget-log snapshots.
//!
//! `BudgetState` is the in-memory balance per tracked category. It is owned
//! by the tracker and only changes through its operations. A
//! `BudgetSnapshot` is one full row of the budget log.

use super::category::Category;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::format_money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetState {
    balances: BTreeMap<Category, Decimal>,
}

impl BudgetState {
    /// Build a state from one balance per tracked category, in
    /// `Category::TRACKED` order.
    pub fn from_balances(balances: [Decimal; 4]) -> Self {
        Self {
            balances: Category::TRACKED.into_iter().zip(balances).collect(),
        }
    }

    /// Remaining balance for a tracked category; `None` for untracked ones.
    pub fn get(&self, category: Category) -> Option<Decimal> {
        self.balances.get(&category).copied()
    }

    /// Subtract `amount` from a tracked category. Untracked categories are
    /// ignored and `false` is returned. A result outside the decimal range
    /// is rejected and leaves the balance unchanged.
    pub fn debit(&mut self, category: Category, amount: Decimal) -> AppResult<bool> {
        if !category.is_tracked() {
            return Ok(false);
        }
        let balance = self.balances.entry(category).or_default();
        *balance = balance.checked_sub(amount).ok_or_else(|| {
            AppError::InvalidAmount(format!("{} is out of range for the {} budget", amount, category))
        })?;
        Ok(true)
    }

    /// Overwrite the categories present in `update`.
    pub fn apply(&mut self, update: &BudgetUpdate) {
        for (category, value) in update.values() {
            self.balances.insert(category, value);
        }
    }

    /// Replace every balance with the values of a logged snapshot.
    pub fn restore(&mut self, snapshot: &BudgetSnapshot) {
        *self = Self::from_balances(snapshot.balances);
    }

    pub fn balances(&self) -> [Decimal; 4] {
        Category::TRACKED.map(|c| self.balances.get(&c).copied().unwrap_or_default())
    }

    pub fn snapshot(&self, date: NaiveDate) -> BudgetSnapshot {
        BudgetSnapshot {
            date,
            balances: self.balances(),
        }
    }

    /// `Category: $amount` lines in budget-log column order.
    pub fn summary_lines(&self) -> Vec<String> {
        Category::TRACKED
            .into_iter()
            .zip(self.balances())
            .map(|(c, amount)| format!("{}: {}", c, format_money(amount)))
            .collect()
    }
}

/// One row of the budget log: a date and the four tracked balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSnapshot {
    pub date: NaiveDate,
    pub balances: [Decimal; 4],
}

impl BudgetSnapshot {
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(5);
        row.push(self.date.format("%Y-%m-%d").to_string());
        row.extend(self.balances.iter().map(Decimal::to_string));
        row
    }
}

/// New budget values coming from the edit form. Absent fields keep
/// whatever the state already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetUpdate {
    pub food: Option<Decimal>,
    pub clothing: Option<Decimal>,
    pub travel: Option<Decimal>,
    pub meeting: Option<Decimal>,
}

impl BudgetUpdate {
    pub fn is_empty(&self) -> bool {
        self.values().next().is_none()
    }

    /// Supplied values, tagged with their category.
    pub fn values(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::TRACKED
            .into_iter()
            .zip([self.food, self.clothing, self.travel, self.meeting])
            .filter_map(|(c, v)| v.map(|v| (c, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn defaults() -> BudgetState {
        BudgetState::from_balances([d("1500"), d("1000"), d("1000"), d("300")])
    }

    #[test]
    fn debit_only_touches_tracked_categories() {
        let mut state = defaults();
        assert!(state.debit(Category::Food, d("200")).unwrap());
        assert!(!state.debit(Category::Other, d("50")).unwrap());
        assert_eq!(state.balances(), [d("1300"), d("1000"), d("1000"), d("300")]);
        assert_eq!(state.get(Category::Other), None);
    }

    #[test]
    fn partial_update_keeps_missing_categories() {
        let mut state = defaults();
        state.apply(&BudgetUpdate {
            travel: Some(d("950")),
            ..Default::default()
        });
        assert_eq!(state.balances(), [d("1500"), d("1000"), d("950"), d("300")]);
    }

    #[test]
    fn summary_lines_use_two_decimals() {
        let mut state = defaults();
        state.debit(Category::Meeting, d("0.125")).unwrap();
        assert_eq!(
            state.summary_lines(),
            vec![
                "Food: $1500.00",
                "Clothing: $1000.00",
                "Travel: $1000.00",
                "Meeting: $299.88",
            ]
        );
    }

    #[test]
    fn snapshot_row_has_date_then_balances() {
        let snap = defaults().snapshot(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(snap.to_row(), vec!["2024-05-10", "1500", "1000", "1000", "300"]);
    }

    #[test]
    fn empty_update_reports_empty() {
        assert!(BudgetUpdate::default().is_empty());
        let update = BudgetUpdate {
            clothing: Some(d("2")),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn overflowing_debit_is_rejected_and_balance_kept() {
        let mut state = defaults();
        let err = state.debit(Category::Food, -Decimal::MAX).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
        assert_eq!(state.get(Category::Food), Some(d("1500")));
    }
}
