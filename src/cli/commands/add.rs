use crate::cli::commands::open_synced_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Expense};
use crate::ui::messages::{error, success};
use crate::utils::{date, parse_amount};

/// Add an expense and, for a tracked category, debit its budget.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        amount,
        category,
        description,
    } = cmd
    {
        // Input is validated before anything is written.
        let expense = Expense::new(
            date::require_date(date)?,
            parse_amount(amount)?,
            parse_category(category)?,
            description.as_str(),
        );

        let mut tracker = open_synced_tracker(cfg)?;

        match tracker.add_expense(&expense) {
            Ok(()) => success("Expense added successfully!"),
            Err(e) => {
                log::error!("an error occurred while adding the expense: {}", e);
                error("Failed to add expense.");
                return Err(AppError::OperationFailed("add expense"));
            }
        }
    }

    Ok(())
}

pub fn parse_category(s: &str) -> AppResult<Category> {
    Category::from_input(s).ok_or_else(|| {
        AppError::InvalidCategory(format!(
            "'{}'. Use one of: Food, Clothing, Meeting, Travel, Other",
            s
        ))
    })
}
