//! Addressable grids: the [`CellGrid`] seam, the in-memory [`SheetGrid`] and
//! the `rust_xlsxwriter::Worksheet` adapter.

use std::collections::BTreeMap;

use rust_xlsxwriter::Worksheet;

use crate::spec::{EnumCellValue, Result, SpecCellStyle, SpecXlsxValuePolicy};
use crate::style::copy_cell_style;
use crate::util::{
    convert_col_idx_to_label, convert_nan_inf_to_str, parse_cell_address, validate_row_idx,
};
use crate::writer::{cast_col_num, cast_row_num, derive_xlsx_error_text, is_int_exact_in_f64};

static VALUE_NONE: EnumCellValue = EnumCellValue::None;

/// A 2-D labeled cell surface that accepts value writes.
///
/// Indices are 1-based (`(1, 1)` is `A1`).
pub trait CellGrid {
    /// Write `value` at column `col_idx`, row `row_idx`.
    fn write_value_at(&mut self, col_idx: usize, row_idx: usize, value: EnumCellValue)
    -> Result<()>;

    /// Write `value` at an A1-style address.
    fn write_value(&mut self, address: &str, value: EnumCellValue) -> Result<()> {
        let (col_idx, row_idx) = parse_cell_address(address)?;
        self.write_value_at(col_idx, row_idx, value)
    }
}

////////////////////////////////////////////////////////////////////////////////
// #region SheetGrid

/// One cell of a [`SheetGrid`]: its value and its style bundle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecCell {
    pub value: EnumCellValue,
    pub style: SpecCellStyle,
}

/// Sparse in-memory sheet keyed by `(row, col)` so iteration is row-major.
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    dict_cells: BTreeMap<(usize, usize), SpecCell>,
}

impl SheetGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.dict_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict_cells.is_empty()
    }

    /// Cell at 1-based `(col_idx, row_idx)`, if it was ever touched.
    pub fn cell_at(&self, col_idx: usize, row_idx: usize) -> Option<&SpecCell> {
        self.dict_cells.get(&(row_idx, col_idx))
    }

    /// Cell at an A1-style address, if it was ever touched.
    pub fn cell(&self, address: &str) -> Result<Option<&SpecCell>> {
        let (col_idx, row_idx) = parse_cell_address(address)?;
        Ok(self.cell_at(col_idx, row_idx))
    }

    /// Mutable cell at 1-based `(col_idx, row_idx)`, created blank on first access.
    pub fn cell_at_mut(&mut self, col_idx: usize, row_idx: usize) -> Result<&mut SpecCell> {
        convert_col_idx_to_label(col_idx)?;
        validate_row_idx(row_idx)?;
        Ok(self.dict_cells.entry((row_idx, col_idx)).or_default())
    }

    /// Mutable cell at an A1-style address, created blank on first access.
    pub fn cell_mut(&mut self, address: &str) -> Result<&mut SpecCell> {
        let (col_idx, row_idx) = parse_cell_address(address)?;
        self.cell_at_mut(col_idx, row_idx)
    }

    /// Value at 1-based `(col_idx, row_idx)`; untouched cells read as blank.
    pub fn value_at(&self, col_idx: usize, row_idx: usize) -> &EnumCellValue {
        self.cell_at(col_idx, row_idx)
            .map_or(&VALUE_NONE, |cell| &cell.value)
    }

    /// Value at an A1-style address; untouched cells read as blank.
    pub fn value(&self, address: &str) -> Result<&EnumCellValue> {
        let (col_idx, row_idx) = parse_cell_address(address)?;
        Ok(self.value_at(col_idx, row_idx))
    }

    /// Iterate materialized cells row-major as `((col_idx, row_idx), cell)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &SpecCell)> {
        self.dict_cells
            .iter()
            .map(|((row_idx, col_idx), cell)| ((*col_idx, *row_idx), cell))
    }

    /// Bounding box of materialized cells as `((col_min, row_min), (col_max, row_max))`.
    pub fn used_range(&self) -> Option<((usize, usize), (usize, usize))> {
        let mut it_keys = self.dict_cells.keys();
        let (row_first, col_first) = *it_keys.next()?;

        let mut bounds = ((col_first, row_first), (col_first, row_first));
        for (row_idx, col_idx) in it_keys {
            bounds.0.0 = usize::min(bounds.0.0, *col_idx);
            bounds.1.0 = usize::max(bounds.1.0, *col_idx);
            bounds.1.1 = usize::max(bounds.1.1, *row_idx);
        }
        Some(bounds)
    }

    /// Copy the style bundle at `address_src` onto `address_dst`.
    ///
    /// An untouched source cell contributes the default style.
    pub fn copy_cell_style_between(&mut self, address_src: &str, address_dst: &str) -> Result<()> {
        let cell_src = self.cell(address_src)?.cloned().unwrap_or_default();
        let cell_dst = self.cell_mut(address_dst)?;
        copy_cell_style(&cell_src, cell_dst);
        Ok(())
    }
}

impl CellGrid for SheetGrid {
    fn write_value_at(
        &mut self,
        col_idx: usize,
        row_idx: usize,
        value: EnumCellValue,
    ) -> Result<()> {
        self.cell_at_mut(col_idx, row_idx)?.value = value;
        Ok(())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WorksheetGrid

/// Direct placement onto an xlsx worksheet. Blank values leave the cell
/// untouched; non-finite numbers are written as default policy text, and
/// integers beyond 2^53 as decimal text.
impl CellGrid for Worksheet {
    fn write_value_at(
        &mut self,
        col_idx: usize,
        row_idx: usize,
        value: EnumCellValue,
    ) -> Result<()> {
        convert_col_idx_to_label(col_idx)?;
        validate_row_idx(row_idx)?;
        let n_row = cast_row_num(row_idx - 1)?;
        let n_col = cast_col_num(col_idx - 1)?;

        match value {
            EnumCellValue::None => return Ok(()),
            EnumCellValue::String(val) => {
                self.write_string(n_row, n_col, val)
                    .map_err(derive_xlsx_error_text)?;
            }
            EnumCellValue::Integer(val) if !is_int_exact_in_f64(val) => {
                log::warn!("integer {val} exceeds 2^53; written as text at col {col_idx} row {row_idx}");
                self.write_string(n_row, n_col, val.to_string())
                    .map_err(derive_xlsx_error_text)?;
            }
            EnumCellValue::Integer(val) => {
                self.write_number(n_row, n_col, val as f64)
                    .map_err(derive_xlsx_error_text)?;
            }
            EnumCellValue::Number(val) if !val.is_finite() => {
                let c_text = convert_nan_inf_to_str(val, &SpecXlsxValuePolicy::default())?;
                self.write_string(n_row, n_col, c_text)
                    .map_err(derive_xlsx_error_text)?;
            }
            EnumCellValue::Number(val) => {
                self.write_number(n_row, n_col, val)
                    .map_err(derive_xlsx_error_text)?;
            }
            EnumCellValue::Boolean(val) => {
                self.write_boolean(n_row, n_col, val)
                    .map_err(derive_xlsx_error_text)?;
            }
        }
        Ok(())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
