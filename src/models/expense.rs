use super::category::Category;
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,     // ⇔ Expenses!A (TEXT "YYYY-MM-DD")
    pub amount: Decimal,     // ⇔ Expenses!B
    pub category: Category,  // ⇔ Expenses!C
    pub description: String, // ⇔ Expenses!D
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Cells in worksheet column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date_str(),
            self.amount.to_string(),
            self.category.as_str().to_string(),
            self.description.clone(),
        ]
    }
}
