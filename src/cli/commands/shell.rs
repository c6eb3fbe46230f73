//! Interactive menu offering the five actions on one long-lived tracker.
//! Budget state is synced once on start and then carried across actions.

use crate::cli::commands::{add::parse_category, month, open_synced_tracker};
use crate::config::Config;
use crate::core::Tracker;
use crate::errors::{AppError, AppResult};
use crate::models::{BudgetUpdate, Category, Expense, FuelEntry};
use crate::sheets::Workbook;
use crate::utils::{date, format_money, parse_amount};
use chrono::Datelike;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

const MENU: &str = "\n1) Add Expense\n2) View Monthly Expenses\n3) Petrol Details\n4) Budget\n5) Edit Budget\nq) Quit";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = open_synced_tracker(cfg)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut tracker, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive the menu until `q` or end of input.
pub fn run<W, R, O>(tracker: &mut Tracker<W>, input: &mut R, out: &mut O) -> AppResult<()>
where
    W: Workbook,
    R: BufRead,
    O: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "> ")? else {
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "1" => add_expense(tracker, input, out),
            "2" => view_month(tracker, input, out),
            "3" => add_fuel(tracker, input, out),
            "4" => show_budget(tracker, out),
            "5" => edit_budget(tracker, input, out),
            "q" | "Q" | "quit" | "exit" => return Ok(()),
            "" => Ok(()),
            other => {
                writeln!(out, "Unknown choice '{}'", other)?;
                Ok(())
            }
        };

        // Bad input only aborts the current form.
        match outcome {
            Ok(()) => {}
            Err(e) if e.is_validation() => writeln!(out, "Invalid input: {}", e)?,
            Err(e) => return Err(e),
        }
    }
}

/// Print `label`, read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, O: Write>(input: &mut R, out: &mut O, label: &str) -> AppResult<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn field<R: BufRead, O: Write>(input: &mut R, out: &mut O, label: &str) -> AppResult<String> {
    Ok(prompt(input, out, label)?.unwrap_or_default())
}

/// Date field; empty input means today.
fn date_field<R: BufRead, O: Write>(input: &mut R, out: &mut O) -> AppResult<chrono::NaiveDate> {
    let raw = field(input, out, "Date (YYYY-MM-DD, empty = today): ")?;
    if raw.is_empty() {
        return Ok(date::today());
    }
    date::require_date(&raw)
}

fn add_expense<W: Workbook, R: BufRead, O: Write>(
    tracker: &mut Tracker<W>,
    input: &mut R,
    out: &mut O,
) -> AppResult<()> {
    let date = date_field(input, out)?;
    let amount = parse_amount(&field(input, out, "Amount: ")?)?;
    let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let category = parse_category(&field(input, out, &format!("Category ({}): ", names.join("/")))?)?;
    let description = field(input, out, "Description: ")?;

    match tracker.add_expense(&Expense::new(date, amount, category, description)) {
        Ok(()) => writeln!(out, "Expense added successfully!")?,
        Err(e) => {
            log::error!("an error occurred while adding the expense: {}", e);
            writeln!(out, "Failed to add expense.")?;
        }
    }
    Ok(())
}

fn view_month<W: Workbook, R: BufRead, O: Write>(
    tracker: &Tracker<W>,
    input: &mut R,
    out: &mut O,
) -> AppResult<()> {
    let today = date::today();
    let month_raw = field(input, out, &format!("Month (1-12, empty = {}): ", today.month()))?;
    let year_raw = field(input, out, &format!("Year (empty = {}): ", today.year()))?;

    let month = if month_raw.is_empty() {
        today.month()
    } else {
        month_raw
            .parse()
            .map_err(|_| AppError::InvalidNumber(month_raw.clone()))?
    };
    let year = if year_raw.is_empty() {
        today.year()
    } else {
        year_raw
            .parse()
            .map_err(|_| AppError::InvalidNumber(year_raw.clone()))?
    };

    let expenses = tracker.monthly_expenses(month, year)?;
    writeln!(out, "{}", month::render(&expenses))?;
    Ok(())
}

fn add_fuel<W: Workbook, R: BufRead, O: Write>(
    tracker: &mut Tracker<W>,
    input: &mut R,
    out: &mut O,
) -> AppResult<()> {
    let date = date_field(input, out)?;
    let litres = parse_amount(&field(input, out, "Litres: ")?)?;
    let price = parse_amount(&field(input, out, "Price: ")?)?;
    let place = field(input, out, "Place: ")?;

    match tracker.add_fuel_entry(&FuelEntry::new(date, litres, price, place)) {
        Ok(()) => writeln!(out, "Fuel entry added successfully!")?,
        Err(e) => {
            log::error!("an error occurred while adding fuel details: {}", e);
            writeln!(out, "Failed to add fuel entry.")?;
        }
    }
    Ok(())
}

fn show_budget<W: Workbook, O: Write>(tracker: &mut Tracker<W>, out: &mut O) -> AppResult<()> {
    for line in tracker.budget_summary() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn edit_budget<W: Workbook, R: BufRead, O: Write>(
    tracker: &mut Tracker<W>,
    input: &mut R,
    out: &mut O,
) -> AppResult<()> {
    let mut values: [Option<Decimal>; 4] = [None; 4];
    for (slot, category) in values.iter_mut().zip(Category::TRACKED) {
        let current = tracker.budgets().get(category).unwrap_or_default();
        let raw = field(
            input,
            out,
            &format!("{} budget (current: {}): ", category, format_money(current)),
        )?;
        if !raw.is_empty() {
            *slot = Some(parse_amount(&raw)?);
        }
    }

    let [food, clothing, travel, meeting] = values;
    let update = BudgetUpdate {
        food,
        clothing,
        travel,
        meeting,
    };

    match tracker.update_budget(&update) {
        Ok(()) => writeln!(out, "Budget updated successfully!")?,
        Err(e) => {
            log::error!("an error occurred while updating the budget log: {}", e);
            writeln!(out, "Budget changed for this session but could not be saved.")?;
        }
    }
    Ok(())
}
