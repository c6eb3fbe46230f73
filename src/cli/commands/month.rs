use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::MonthlyExpenses;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::format_money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month, year } = cmd {
        let tracker = open_tracker(cfg)?;
        let expenses = tracker.monthly_expenses(*month, *year)?;

        header(format!("Expenses {:04}-{:02}", year, month));
        println!("{}", render(&expenses));
    }
    Ok(())
}

/// One line per expense, a blank line, then the total.
pub fn render(expenses: &MonthlyExpenses) -> String {
    format!(
        "{}\n\nTotal: {}",
        expenses.lines.join("\n"),
        format_money(expenses.total)
    )
}
