use super::Tracker;
use crate::errors::AppResult;
use crate::models::FuelEntry;
use crate::sheets::{Workbook, Worksheet};

impl<W: Workbook> Tracker<W> {
    /// Append one fuel purchase. No derived state.
    pub fn add_fuel_entry(&mut self, entry: &FuelEntry) -> AppResult<()> {
        self.workbook.append_row(Worksheet::Fuel, &entry.to_row())
    }
}
