pub mod add;
pub mod budget;
pub mod config;
pub mod edit_budget;
pub mod fuel;
pub mod init;
pub mod month;
pub mod shell;

use crate::config::Config;
use crate::core::Tracker;
use crate::errors::AppResult;
use crate::sheets::{SqliteWorkbook, Workbook};

/// Open the configured workbook with default budgets; headers are written
/// if the workbook is new.
pub fn open_tracker(cfg: &Config) -> AppResult<Tracker<SqliteWorkbook>> {
    let mut workbook = SqliteWorkbook::open(&cfg.database)?;
    workbook.ensure_headers()?;
    Ok(Tracker::new(workbook, cfg.budgets.to_state()))
}

/// Like `open_tracker`, then adopt the last budget-log row. A failed read
/// is logged and the configured defaults stay in effect.
pub fn open_synced_tracker(cfg: &Config) -> AppResult<Tracker<SqliteWorkbook>> {
    let mut tracker = open_tracker(cfg)?;
    if let Err(e) = tracker.sync_budgets() {
        log::error!("could not read budget log, using defaults: {}", e);
    }
    Ok(tracker)
}
