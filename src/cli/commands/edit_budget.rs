use crate::cli::commands::open_synced_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::BudgetUpdate;
use crate::ui::messages::{error, success, warning};
use crate::utils::parse_amount;
use rust_decimal::Decimal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::EditBudget {
        food,
        clothing,
        travel,
        meeting,
    } = cmd
    {
        let update = BudgetUpdate {
            food: optional_amount(food)?,
            clothing: optional_amount(clothing)?,
            travel: optional_amount(travel)?,
            meeting: optional_amount(meeting)?,
        };

        if update.is_empty() {
            warning("Nothing to update: pass at least one of --food, --clothing, --travel, --meeting.");
            return Ok(());
        }

        let mut tracker = open_synced_tracker(cfg)?;

        match tracker.update_budget(&update) {
            Ok(()) => success("Budget updated successfully!"),
            Err(e) => {
                log::error!("an error occurred while updating the budget log: {}", e);
                error("Failed to save the updated budget.");
                return Err(AppError::OperationFailed("update budget"));
            }
        }
    }

    Ok(())
}

/// Empty text means "keep the current value".
fn optional_amount(value: &Option<String>) -> AppResult<Option<Decimal>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_amount(v).map(Some),
    }
}
