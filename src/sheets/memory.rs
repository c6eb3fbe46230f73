//! In-memory workbook. Used by tests and by embedders that want a
//! throwaway store; individual worksheets can be switched into a failing
//! mode to exercise remote-failure paths.

use super::{Row, Workbook, Worksheet};
use crate::errors::{AppError, AppResult};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    sheets: HashMap<Worksheet, Vec<Row>>,
    failing_appends: HashSet<Worksheet>,
    failing_reads: HashSet<Worksheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A workbook whose four worksheets already carry their header row.
    pub fn with_headers() -> Self {
        let mut wb = Self::new();
        for sheet in Worksheet::ALL {
            let header = sheet.header().iter().map(|h| h.to_string()).collect();
            wb.sheets.entry(sheet).or_default().push(header);
        }
        wb
    }

    /// Make every following append to `sheet` fail (or succeed again).
    pub fn fail_appends(&mut self, sheet: Worksheet, fail: bool) {
        if fail {
            self.failing_appends.insert(sheet);
        } else {
            self.failing_appends.remove(&sheet);
        }
    }

    /// Make every following read of `sheet` fail (or succeed again).
    pub fn fail_reads(&mut self, sheet: Worksheet, fail: bool) {
        if fail {
            self.failing_reads.insert(sheet);
        } else {
            self.failing_reads.remove(&sheet);
        }
    }

    /// Data rows only (header skipped).
    pub fn data_rows(&self, sheet: Worksheet) -> &[Row] {
        self.sheets
            .get(&sheet)
            .map(|rows| rows.get(1..).unwrap_or(&[]))
            .unwrap_or(&[])
    }
}

impl Workbook for MemoryWorkbook {
    fn append_row(&mut self, sheet: Worksheet, row: &[String]) -> AppResult<()> {
        if self.failing_appends.contains(&sheet) {
            return Err(AppError::Sheet(format!(
                "append to '{}' rejected",
                sheet.title()
            )));
        }
        self.sheets.entry(sheet).or_default().push(row.to_vec());
        Ok(())
    }

    fn get_all_values(&self, sheet: Worksheet) -> AppResult<Vec<Row>> {
        if self.failing_reads.contains(&sheet) {
            return Err(AppError::Sheet(format!(
                "read of '{}' rejected",
                sheet.title()
            )));
        }
        Ok(self.sheets.get(&sheet).cloned().unwrap_or_default())
    }
}
