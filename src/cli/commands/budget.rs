use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Show the budget summary (re-synchronises from the budget log).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cfg)?;
    let lines = tracker.budget_summary();

    header("Budget Summary");
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
