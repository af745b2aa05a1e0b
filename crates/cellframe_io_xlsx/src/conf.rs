//! Grid limits and default preset factories.

use crate::spec::{
    EnumBorderLine, EnumHorizontalAlign, EnumVerticalAlign, SpecCellAlignment, SpecCellBorder,
    SpecCellBorderSide, SpecCellFont, SpecCellStyle,
};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count (`XFD`).
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Alphabet size used by column labels.
pub const N_LEN_LABEL_ALPHABET: usize = 26;
/// Largest integer magnitude an xlsx number cell (f64) holds exactly (2^53).
pub const N_INT_EXACT_F64_MAX: u64 = 1 << 53;
/// Excel builtin "General" number format.
pub const C_NUM_FORMAT_GENERAL: &str = "General";

/// Build the style bundle an untouched Excel cell carries.
pub fn derive_default_cell_style() -> SpecCellStyle {
    SpecCellStyle::default()
}

/// Build a bordered header preset: bold, centered, thin box border.
pub fn derive_header_cell_style() -> SpecCellStyle {
    let side_thin = SpecCellBorderSide {
        line: EnumBorderLine::Thin,
        color: None,
    };

    SpecCellStyle {
        font: SpecCellFont {
            bold: true,
            ..Default::default()
        },
        border: SpecCellBorder {
            top: side_thin.clone(),
            bottom: side_thin.clone(),
            left: side_thin.clone(),
            right: side_thin,
        },
        alignment: SpecCellAlignment {
            horizontal: EnumHorizontalAlign::Center,
            vertical: EnumVerticalAlign::Center,
            ..Default::default()
        },
        ..Default::default()
    }
}
