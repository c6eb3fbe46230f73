use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sheets::{SqliteWorkbook, Workbook};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the workbook file with its four worksheets
///  - the header row of every worksheet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Workbook    : {}", db_path));

    let mut workbook = SqliteWorkbook::open(&db_path)?;
    workbook.ensure_headers()?;

    success(format!("Workbook initialized at {}", db_path));
    Ok(())
}
