//! Shared models: cell values, placement options, style bundle, reports and errors.

use std::collections::BTreeSet;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellValue

/// Cell value moved between a dataset and a grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EnumCellValue {
    /// Missing/blank value.
    #[default]
    None,
    /// Text value.
    String(String),
    /// Integer value (kept apart from floats so text rendering stays exact).
    Integer(i64),
    /// Floating-point value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for EnumCellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for EnumCellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PlaceOptions

/// Options controlling where and how a dataset lands on a grid.
///
/// Column/row indices are 1-based. An end bound of `0` means unbounded.
/// Label sets hold destination column labels (`"A"`, `"AB"`), not source
/// column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPlaceOptions {
    /// First destination column index.
    pub col_start: usize,
    /// Stop after the column whose index plus one equals this value.
    pub col_end: usize,
    /// First destination row index.
    pub row_start: usize,
    /// Stop a column after the row whose index plus one equals this value.
    pub row_end: usize,
    /// Destination labels whose values are written as text.
    pub cols_str: BTreeSet<String>,
    /// Destination labels whose values are written as floats.
    pub cols_float: BTreeSet<String>,
    /// Destination labels never written to.
    pub cols_skip: BTreeSet<String>,
    /// Write source column names as the first row of each column.
    pub if_headers: bool,
}

impl Default for SpecPlaceOptions {
    fn default() -> Self {
        Self {
            col_start: 1,
            col_end: 0,
            row_start: 1,
            row_end: 0,
            cols_str: BTreeSet::new(),
            cols_float: BTreeSet::new(),
            cols_skip: BTreeSet::new(),
            if_headers: false,
        }
    }
}

impl SpecPlaceOptions {
    /// Set `(col_start, col_end)`.
    pub fn with_col_range(mut self, col_start: usize, col_end: usize) -> Self {
        self.col_start = col_start;
        self.col_end = col_end;
        self
    }

    /// Set `(row_start, row_end)`.
    pub fn with_row_range(mut self, row_start: usize, row_end: usize) -> Self {
        self.row_start = row_start;
        self.row_end = row_end;
        self
    }

    /// Replace the text-coerced label set.
    pub fn with_cols_str<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cols_str = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the float-coerced label set.
    pub fn with_cols_float<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cols_float = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the skipped label set.
    pub fn with_cols_skip<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cols_skip = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle header row emission.
    pub fn with_headers(mut self, if_headers: bool) -> Self {
        self.if_headers = if_headers;
        self
    }
}

/// Text replacements used when non-finite numbers reach a worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxValuePolicy {
    /// Replacement text for NaN.
    pub nan_str: String,
    /// Replacement text for positive infinity.
    pub posinf_str: String,
    /// Replacement text for negative infinity.
    pub neginf_str: String,
}

impl Default for SpecXlsxValuePolicy {
    fn default() -> Self {
        Self {
            nan_str: "NaN".to_string(),
            posinf_str: "Inf".to_string(),
            neginf_str: "-Inf".to_string(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellStyle

/// Font attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCellFont {
    /// Font family name.
    pub name: String,
    /// Font size in points.
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    /// Font color as `#RRGGBB`; `None` is the theme default.
    pub color: Option<String>,
}

impl Default for SpecCellFont {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            color: None,
        }
    }
}

/// Border line styles, numbered as in the xlsxwriter border index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumBorderLine {
    #[default]
    None,
    Thin,
    Medium,
    Dashed,
    Dotted,
    Thick,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

/// One border edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellBorderSide {
    /// Line style.
    pub line: EnumBorderLine,
    /// Line color as `#RRGGBB`.
    pub color: Option<String>,
}

/// Border attributes for all four edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellBorder {
    pub top: SpecCellBorderSide,
    pub bottom: SpecCellBorderSide,
    pub left: SpecCellBorderSide,
    pub right: SpecCellBorderSide,
}

/// Fill pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumFillPattern {
    #[default]
    None,
    Solid,
    MediumGray,
    DarkGray,
    LightGray,
    Gray125,
    Gray0625,
}

/// Background fill attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFill {
    /// Fill pattern.
    pub pattern: EnumFillPattern,
    /// Pattern foreground color as `#RRGGBB`.
    pub fg_color: Option<String>,
    /// Pattern background color as `#RRGGBB`.
    pub bg_color: Option<String>,
}

/// Cell protection flags (effective only on protected sheets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecCellProtection {
    pub locked: bool,
    pub hidden: bool,
}

impl Default for SpecCellProtection {
    fn default() -> Self {
        Self {
            locked: true,
            hidden: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumHorizontalAlign {
    #[default]
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterAcross,
    Distributed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumVerticalAlign {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}

/// Alignment attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellAlignment {
    pub horizontal: EnumHorizontalAlign,
    pub vertical: EnumVerticalAlign,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    /// Indent level.
    pub indent: u8,
    /// Text rotation in degrees (-90..=90, or 270 for stacked).
    pub rotation: i16,
}

/// The six copyable visual attributes of a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCellStyle {
    pub font: SpecCellFont,
    pub border: SpecCellBorder,
    pub fill: SpecCellFill,
    /// Number format code.
    pub num_format: String,
    pub protection: SpecCellProtection,
    pub alignment: SpecCellAlignment,
}

impl Default for SpecCellStyle {
    fn default() -> Self {
        Self {
            font: SpecCellFont::default(),
            border: SpecCellBorder::default(),
            fill: SpecCellFill::default(),
            num_format: crate::conf::C_NUM_FORMAT_GENERAL.to_string(),
            protection: SpecCellProtection::default(),
            alignment: SpecCellAlignment::default(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-placement report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecPlaceReport {
    /// Data cells written (headers excluded).
    pub cnt_cells_written: usize,
    /// Header cells written.
    pub cnt_headers_written: usize,
    /// Destination labels that received a source column, in order.
    pub cols_written: Vec<String>,
    /// Destination labels passed over by the skip loop, in order.
    pub cols_skipped: Vec<String>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecPlaceReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Result alias using [`CellframeError`].
pub type Result<T> = std::result::Result<T, CellframeError>;

/// Errors raised while placing data or copying styles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CellframeError {
    /// A value under a float-coerced label could not be read as a number.
    #[error("Cannot coerce {value:?} to float at {address}")]
    Coercion {
        /// Destination address of the failed write.
        address: String,
        /// Offending value rendered as text.
        value: String,
    },

    /// Column/row index out of range or malformed address.
    #[error("Address resolution failed: {0}")]
    AddressResolution(String),

    /// Invalid placement options.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Dataset collaborator failure.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Worksheet write failure.
    #[error("xlsx write error: {0}")]
    Xlsx(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
