//! SQLite-backed workbook (one file, four positional worksheets).

use super::{Row, Workbook, Worksheet};
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

const SCHEMA_VERSION: i64 = 1;

pub struct SqliteWorkbook {
    pub conn: Connection,
}

impl SqliteWorkbook {
    /// Open (or create) the workbook file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        migrate(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        migrate(&conn)?;
        Ok(Self { conn })
    }
}

/// Create the worksheet tables and register the four worksheets.
pub fn migrate(conn: &Connection) -> AppResult<()> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    log::debug!("migrating workbook schema from v{} to v{}", version, SCHEMA_VERSION);

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS worksheets (
            id     INTEGER PRIMARY KEY,
            title  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS rows (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            sheet  INTEGER NOT NULL REFERENCES worksheets(id),
            cells  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_rows_sheet ON rows(sheet, id);
        "#,
    )?;

    for sheet in Worksheet::ALL {
        conn.execute(
            "INSERT OR IGNORE INTO worksheets (id, title) VALUES (?1, ?2)",
            params![sheet.index(), sheet.title()],
        )?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}

fn check_sheet(conn: &Connection, sheet: Worksheet) -> AppResult<()> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM worksheets WHERE id = ?1",
            params![sheet.index()],
            |row| row.get(0),
        )
        .optional()?;
    found
        .map(|_| ())
        .ok_or_else(|| AppError::Sheet(format!("worksheet {} not found", sheet.index())))
}

impl Workbook for SqliteWorkbook {
    fn append_row(&mut self, sheet: Worksheet, row: &[String]) -> AppResult<()> {
        check_sheet(&self.conn, sheet)?;
        let cells = serde_json::to_string(row)?;
        let mut stmt = self
            .conn
            .prepare_cached("INSERT INTO rows (sheet, cells) VALUES (?1, ?2)")?;
        stmt.execute(params![sheet.index(), cells])?;
        Ok(())
    }

    fn get_all_values(&self, sheet: Worksheet) -> AppResult<Vec<Row>> {
        check_sheet(&self.conn, sheet)?;
        let mut stmt = self
            .conn
            .prepare_cached("SELECT cells FROM rows WHERE sheet = ?1 ORDER BY id")?;
        let raw = stmt.query_map(params![sheet.index()], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for cells in raw {
            out.push(serde_json::from_str::<Row>(&cells?)?);
        }
        Ok(out)
    }
}
