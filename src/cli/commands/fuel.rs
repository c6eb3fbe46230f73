use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::FuelEntry;
use crate::ui::messages::{error, success};
use crate::utils::{date, parse_amount};

/// Add a fuel purchase.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fuel {
        date,
        litres,
        price,
        place,
    } = cmd
    {
        let entry = FuelEntry::new(
            date::require_date(date)?,
            parse_amount(litres)?,
            parse_amount(price)?,
            place.as_str(),
        );

        let mut tracker = open_tracker(cfg)?;

        match tracker.add_fuel_entry(&entry) {
            Ok(()) => success("Fuel entry added successfully!"),
            Err(e) => {
                log::error!("an error occurred while adding fuel details: {}", e);
                error("Failed to add fuel entry.");
                return Err(AppError::OperationFailed("add fuel entry"));
            }
        }
    }

    Ok(())
}
