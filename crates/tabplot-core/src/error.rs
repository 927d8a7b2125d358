// File: crates/tabplot-core/src/error.rs
// Summary: Typed error taxonomy for table access, scales, and chart building.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

/// Everything a chart build can fail with. All variants are raised
/// synchronously at the point of detection; a failed build emits no
/// primitives.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChartError {
    /// A categorical scale was constructed over zero categories.
    #[error("categorical scale needs at least one category")]
    EmptyDomain,

    /// A category lookup missed the scale's domain.
    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    /// A cell could not be read as a number where a number is required.
    #[error("field `{field}`: `{value}` is not numeric")]
    FieldCoercion { field: String, value: String },

    /// A field name is absent from the table header.
    #[error("no field named `{0}`")]
    MissingField(String),

    /// A pushed row does not match the table's column count.
    #[error("row has {got} values, expected {want}")]
    RowShape { got: usize, want: usize },
}
