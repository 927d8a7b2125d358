// File: crates/tabplot-core/src/table.rs
// Summary: Column-named row storage with text/number cells and numeric coercion.

use std::collections::HashSet;

use crate::error::{ChartError, Result};

/// A single cell: a category label or a measurement.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    /// The cell as a category label.
    pub fn label(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => format!("{n}"),
        }
    }
}

/// Ordered rows under a fixed header.
///
/// Rows are immutable once pushed; the one exception is `coerce_numeric`,
/// which must run before a coerced field is used for aggregation or scaling.
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(ChartError::RowShape { got: row.len(), want: self.headers.len() });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column position of `field` in the header.
    pub fn column_index(&self, field: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == field)
            .ok_or_else(|| ChartError::MissingField(field.to_string()))
    }

    /// Category label at (`row`, `col`).
    pub fn label_at(&self, row: usize, col: usize) -> String {
        self.rows[row][col].label()
    }

    /// Numeric value at (`row`, `col`). A textual cell here means the field
    /// was never coerced, which is the coercion error by contract.
    pub fn number_at(&self, row: usize, col: usize) -> Result<f64> {
        match &self.rows[row][col] {
            Value::Number(n) => Ok(*n),
            Value::Text(s) => Err(ChartError::FieldCoercion {
                field: self.headers[col].clone(),
                value: s.clone(),
            }),
        }
    }

    /// Parse every textual cell of `field` into a number, in place.
    pub fn coerce_numeric(&mut self, field: &str) -> Result<()> {
        let col = self.column_index(field)?;
        for row in &mut self.rows {
            if let Value::Text(s) = &row[col] {
                let parsed = s.trim().parse::<f64>().map_err(|_| ChartError::FieldCoercion {
                    field: field.to_string(),
                    value: s.clone(),
                })?;
                row[col] = Value::Number(parsed);
            }
        }
        Ok(())
    }

    /// Distinct labels of `field` in first-seen order.
    pub fn distinct_labels(&self, field: &str) -> Result<Vec<String>> {
        let col = self.column_index(field)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for row in 0..self.rows.len() {
            let label = self.label_at(row, col);
            if seen.insert(label.clone()) {
                out.push(label);
            }
        }
        Ok(out)
    }

    /// `(min, max)` of a numeric field over all rows; `None` when the table
    /// has no rows.
    pub fn numeric_extent(&self, field: &str) -> Result<Option<(f64, f64)>> {
        let col = self.column_index(field)?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in 0..self.rows.len() {
            let v = self.number_at(row, col)?;
            min = min.min(v);
            max = max.max(v);
        }
        if self.rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some((min, max)))
        }
    }
}
