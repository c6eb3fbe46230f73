//! Worksheet-based storage.
//!
//! A workbook holds four worksheets addressed by position. Each worksheet
//! is an ordered list of rows of text cells; the first row is the header.
//! Rows are only ever appended.

pub mod budget_log;
pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;
use std::collections::HashMap;

pub use memory::MemoryWorkbook;
pub use sqlite::SqliteWorkbook;

pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Worksheet {
    Expenses,
    Fuel,
    Budget,
    BudgetLog,
}

impl Worksheet {
    pub const ALL: [Worksheet; 4] = [
        Worksheet::Expenses,
        Worksheet::Fuel,
        Worksheet::Budget,
        Worksheet::BudgetLog,
    ];

    /// Zero-based position inside the workbook.
    pub fn index(&self) -> i64 {
        match self {
            Worksheet::Expenses => 0,
            Worksheet::Fuel => 1,
            Worksheet::Budget => 2,
            Worksheet::BudgetLog => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Worksheet::Expenses => "Expenses",
            Worksheet::Fuel => "Fuel",
            Worksheet::Budget => "Budget",
            Worksheet::BudgetLog => "Budget Log",
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Worksheet::Expenses => &["date", "amount", "category", "description"],
            Worksheet::Fuel => &["date", "litres", "price", "place"],
            Worksheet::Budget => &["category", "amount"],
            Worksheet::BudgetLog => &["date", "Food", "Clothing", "Travel", "Meeting"],
        }
    }
}

/// A data row keyed by the worksheet header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), row.get(i).cloned().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Cell value for `key`, or `""` when the column is missing.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Storage collaborator: append rows, read rows back in append order.
pub trait Workbook {
    fn append_row(&mut self, sheet: Worksheet, row: &[String]) -> AppResult<()>;

    /// Every row of the worksheet, header included.
    fn get_all_values(&self, sheet: Worksheet) -> AppResult<Vec<Row>>;

    /// Data rows zipped with the header row.
    fn get_all_records(&self, sheet: Worksheet) -> AppResult<Vec<Record>> {
        let mut rows = self.get_all_values(sheet)?.into_iter();
        let Some(header) = rows.next() else {
            return Ok(Vec::new());
        };
        Ok(rows.map(|row| Record::from_row(&header, &row)).collect())
    }

    /// Write the header row of every worksheet that is still empty.
    fn ensure_headers(&mut self) -> AppResult<()> {
        for sheet in Worksheet::ALL {
            if self.get_all_values(sheet)?.is_empty() {
                let header: Row = sheet.header().iter().map(|h| h.to_string()).collect();
                self.append_row(sheet, &header)?;
            }
        }
        Ok(())
    }
}
