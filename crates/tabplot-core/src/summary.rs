// File: crates/tabplot-core/src/summary.rs
// Summary: Per-group five-number summaries with interpolated quartiles.

use crate::error::Result;
use crate::table::Table;

/// Distribution summary of one group.
/// Invariant: min <= q1 <= median <= q3 <= max.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summarize an ascending-sorted, non-empty slice. Groups are derived
    /// from non-empty row partitions, so an empty slice is a caller bug.
    pub fn from_sorted(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "summary over an empty group");
        Self {
            min: values[0],
            q1: quantile_sorted(values, 0.25),
            median: quantile_sorted(values, 0.5),
            q3: quantile_sorted(values, 0.75),
            max: values[values.len() - 1],
        }
    }
}

/// Quantile of an ascending-sorted, non-empty slice by linear interpolation
/// at rank `p * (n - 1)`.
pub fn quantile_sorted(values: &[f64], p: f64) -> f64 {
    let r = p * (values.len() - 1) as f64;
    let lo = r.floor() as usize;
    let hi = r.ceil() as usize;
    values[lo] + (r - lo as f64) * (values[hi] - values[lo])
}

/// Group rows by `key_field` and summarize `value_field` per group,
/// preserving first-seen key order.
pub fn summarize(
    table: &Table,
    key_field: &str,
    value_field: &str,
) -> Result<Vec<(String, FiveNumberSummary)>> {
    let key_col = table.column_index(key_field)?;
    let val_col = table.column_index(value_field)?;

    let mut keys: Vec<String> = Vec::new();
    let mut groups: Vec<Vec<f64>> = Vec::new();
    for row in 0..table.len() {
        let key = table.label_at(row, key_col);
        let v = table.number_at(row, val_col)?;
        match keys.iter().position(|k| *k == key) {
            Some(i) => groups[i].push(v),
            None => {
                keys.push(key);
                groups.push(vec![v]);
            }
        }
    }

    let mut out = Vec::with_capacity(keys.len());
    for (key, mut values) in keys.into_iter().zip(groups) {
        values.sort_by(f64::total_cmp);
        out.push((key, FiveNumberSummary::from_sorted(&values)));
    }
    Ok(out)
}
