//! `cellframe_io_xlsx` v1:
//! Places tabular data onto spreadsheet grids and copies cell styles.
//!
//! Modules:
//! - `conf`    : limits and default presets
//! - `spec`    : values/options/styles/reports/errors
//! - `util`    : pure helper functions (labels, addresses, coercion)
//! - `grid`    : addressable grids (in-memory sheet, xlsx worksheet)
//! - `dataset` : tabular datasets (in-memory table, Polars DataFrame)
//! - `place`   : placement engine
//! - `style`   : style copier
//! - `writer`  : grid-to-worksheet rendering
pub mod conf;
pub mod dataset;
pub mod grid;
pub mod place;
pub mod spec;
pub mod style;
pub mod util;
pub mod writer;

pub use conf::{
    C_NUM_FORMAT_GENERAL, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, derive_default_cell_style,
    derive_header_cell_style,
};
pub use dataset::{
    SpecDataColumn, SpecDataTable, TabularDataset, derive_dataframe_from_ipc_bytes,
};
pub use grid::{CellGrid, SheetGrid, SpecCell};
pub use place::place_frame;
pub use spec::{
    CellframeError, EnumBorderLine, EnumCellValue, EnumFillPattern, EnumHorizontalAlign,
    EnumVerticalAlign, Result, SpecCellAlignment, SpecCellBorder, SpecCellBorderSide,
    SpecCellFill, SpecCellFont, SpecCellProtection, SpecCellStyle, SpecPlaceOptions,
    SpecPlaceReport, SpecXlsxValuePolicy,
};
pub use style::{StyledCell, copy_cell_style};
pub use util::{
    convert_col_idx_to_label, convert_col_label_to_idx, derive_cell_address, parse_cell_address,
};
pub use writer::{derive_rust_xlsx_format, write_grid_to_worksheet};
