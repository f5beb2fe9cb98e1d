//! Datasets
//!
//! This module implements the reference table used to fit encoders and scalers, and the
//! record submitted by a user for a single prediction.
use ndarray::ScalarOperand;
use num_traits::{FromPrimitive, NumAssignOps, NumCast};

use std::collections::HashSet;
use std::fmt;
use std::iter::Sum;

use crate::error::{Error, Result};

mod record;

pub use record::{RawValue, UserInput};

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Table
///
/// An ordered table of string cells with named columns, as read from the reference CSV file.
/// Cells are kept as text: whether a column is numeric or categorical is decided by the
/// [`Schema`](../schema/struct.Schema.html), not by the table.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    names: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from column names and row-major cells
    ///
    /// Every row has to contain exactly one cell per column and column names have to be unique.
    pub fn new<S: Into<String>>(names: Vec<S>, rows: Vec<Vec<String>>) -> Result<Self> {
        let names = names.into_iter().map(Into::into).collect::<Vec<String>>();

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }

        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != names.len())
        {
            return Err(Error::RaggedRow {
                row,
                expected: names.len(),
                found: cells.len(),
            });
        }

        Ok(Table { names, rows })
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Iterate over the cells of a single column, `None` if there is no such column
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Restrict the table to the given columns, in the given order
    ///
    /// Returns a new table and leaves `self` untouched. Fails on the first column that is not
    /// present.
    pub fn select<'a, I>(&self, names: I) -> Result<Table>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selected = Vec::new();
        let mut indices = Vec::new();
        for name in names {
            let idx = self
                .names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
            selected.push(name.to_string());
            indices.push(idx);
        }

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Table::new(selected, rows)
    }
}
