//! The rectangular tri-state observation table.
//!
//! A [`Table`] holds the sampled rows supplied by the data-acquisition side:
//! every cell is a [`Literal`] and every row has exactly `width` cells.
//! The solving pipeline only ever reads a table, so one table can be shared
//! across threads solving different target columns.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{pattern, Literal};

#[derive(Debug, Clone, Default)]
pub struct Table {
    width: usize,
    rows: Vec<Vec<Literal>>,
}

impl Table {
    /// Create an empty table with the given column count.
    pub fn new(width: usize) -> Self {
        Self { width, rows: Vec::new() }
    }

    /// Create a table from complete rows.
    ///
    /// The width is taken from the first row; every following row must
    /// match it.
    pub fn from_rows(rows: Vec<Vec<Literal>>) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.len());
        let mut table = Self::new(width);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row, rejecting a ragged one.
    pub fn push_row(&mut self, row: Vec<Literal>) -> Result<()> {
        if row.len() != self.width {
            return Err(Error::RaggedRow {
                row: self.rows.len(),
                got: row.len(),
                expected: self.width,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a row written as a pattern string, e.g. `"01-0"`.
    pub fn push_pattern(&mut self, s: &str) -> Result<()> {
        self.push_row(pattern(s)?)
    }

    /// Get the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get a single row.
    pub fn row(&self, index: usize) -> &[Literal] {
        &self.rows[index]
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Literal]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Get a single cell.
    pub fn get(&self, row: usize, col: usize) -> Literal {
        self.rows[row][col]
    }

    /// Check that a column index refers into this table.
    pub fn check_column(&self, index: usize) -> Result<()> {
        if index < self.width {
            Ok(())
        } else {
            Err(Error::ColumnOutOfRange {
                index,
                width: self.width,
            })
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
