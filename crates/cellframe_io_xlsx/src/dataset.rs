//! Tabular datasets: the [`TabularDataset`] seam, an in-memory table and the
//! Polars `DataFrame` adapter.

use std::io::Cursor;

use polars::prelude::{AnyValue, DataFrame, IpcReader, SerReader};

use crate::spec::{CellframeError, EnumCellValue, Result};

/// Ordered, named columns of values.
pub trait TabularDataset {
    /// Column names in declared order.
    fn column_names(&self) -> Vec<String>;

    /// Values of the column at zero-based `col_idx`, in row order.
    fn column_values(&self, col_idx: usize) -> Result<Vec<EnumCellValue>>;
}

////////////////////////////////////////////////////////////////////////////////
// #region DataTable

/// One named column of a [`SpecDataTable`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecDataColumn {
    pub name: String,
    pub values: Vec<EnumCellValue>,
}

/// Minimal column-ordered table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecDataTable {
    pub columns: Vec<SpecDataColumn>,
}

impl SpecDataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column.
    pub fn with_column<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumCellValue>,
    {
        self.columns.push(SpecDataColumn {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Length of the longest column.
    pub fn height(&self) -> usize {
        self.columns
            .iter()
            .map(|col| col.values.len())
            .max()
            .unwrap_or(0)
    }
}

impl TabularDataset for SpecDataTable {
    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|col| col.name.clone()).collect()
    }

    fn column_values(&self, col_idx: usize) -> Result<Vec<EnumCellValue>> {
        self.columns
            .get(col_idx)
            .map(|col| col.values.clone())
            .ok_or_else(|| derive_column_missing_error(col_idx, self.columns.len()))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PolarsDataFrame

impl TabularDataset for DataFrame {
    fn column_names(&self) -> Vec<String> {
        self.get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    fn column_values(&self, col_idx: usize) -> Result<Vec<EnumCellValue>> {
        let l_cols = self.get_columns();
        let col = l_cols
            .get(col_idx)
            .ok_or_else(|| derive_column_missing_error(col_idx, l_cols.len()))?;

        // Numeric nulls read as NaN, the way a float column carries gaps.
        let if_numeric = col.dtype().is_numeric();
        (0..self.height())
            .map(|n_idx_row| {
                col.get(n_idx_row)
                    .map(|value| match value {
                        AnyValue::Null if if_numeric => EnumCellValue::Number(f64::NAN),
                        _ => derive_cell_value_from_any_value(value),
                    })
                    .map_err(|err| {
                        CellframeError::Dataset(format!("Failed to access cell value: {err}"))
                    })
            })
            .collect()
    }
}

/// Read a Polars IPC payload into a `DataFrame`.
pub fn derive_dataframe_from_ipc_bytes(v_ipc_df: &[u8]) -> Result<DataFrame> {
    IpcReader::new(Cursor::new(v_ipc_df))
        .finish()
        .map_err(|err| {
            CellframeError::Dataset(format!("Failed to read IPC DataFrame bytes: {err}"))
        })
}

/// Map a Polars scalar onto a cell value; unsupported types render as text.
pub fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => EnumCellValue::Boolean(val),
        AnyValue::UInt8(val) => EnumCellValue::Integer(val as i64),
        AnyValue::UInt16(val) => EnumCellValue::Integer(val as i64),
        AnyValue::UInt32(val) => EnumCellValue::Integer(val as i64),
        AnyValue::UInt64(val) => {
            i64::try_from(val).map_or(EnumCellValue::Number(val as f64), EnumCellValue::Integer)
        }
        AnyValue::Int8(val) => EnumCellValue::Integer(val as i64),
        AnyValue::Int16(val) => EnumCellValue::Integer(val as i64),
        AnyValue::Int32(val) => EnumCellValue::Integer(val as i64),
        AnyValue::Int64(val) => EnumCellValue::Integer(val),
        AnyValue::Int128(val) => {
            i64::try_from(val).map_or(EnumCellValue::Number(val as f64), EnumCellValue::Integer)
        }
        AnyValue::Float32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float64(val) => EnumCellValue::Number(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}

fn derive_column_missing_error(col_idx: usize, width: usize) -> CellframeError {
    CellframeError::Dataset(format!(
        "column index {col_idx} out of range for dataset of width {width}"
    ))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
