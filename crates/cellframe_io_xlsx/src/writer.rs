//! Renders a [`SheetGrid`] onto a caller-owned `rust_xlsxwriter::Worksheet`.
//!
//! Workbook creation and saving stay with the caller.

use rust_xlsxwriter::{
    Format, FormatAlign, FormatBorder, FormatPattern, FormatUnderline, Worksheet, XlsxError,
};

use crate::conf::{C_NUM_FORMAT_GENERAL, N_INT_EXACT_F64_MAX};
use crate::grid::SheetGrid;
use crate::spec::{
    CellframeError, EnumBorderLine, EnumCellValue, EnumFillPattern, EnumHorizontalAlign,
    EnumVerticalAlign, Result, SpecCellStyle, SpecXlsxValuePolicy,
};
use crate::util::convert_nan_inf_to_str;

/// Write every materialized cell of `grid`, values and styles, to `worksheet`.
///
/// Returns the number of cells written.
pub fn write_grid_to_worksheet(
    grid: &SheetGrid,
    worksheet: &mut Worksheet,
    value_policy: &SpecXlsxValuePolicy,
) -> Result<usize> {
    let mut n_cells = 0usize;
    for ((col_idx, row_idx), cell) in grid.iter() {
        let format = derive_rust_xlsx_format(&cell.style);
        write_cell_with_format(
            worksheet,
            row_idx - 1,
            col_idx - 1,
            &cell.value,
            &format,
            value_policy,
        )?;
        n_cells += 1;
    }
    log::debug!("rendered {n_cells} cells onto worksheet");
    Ok(n_cells)
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
    value_policy: &SpecXlsxValuePolicy,
) -> Result<()> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;

    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(n_row, n_col, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(n_row, n_col, val, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Integer(val) if !is_int_exact_in_f64(*val) => {
            log::warn!("integer {val} exceeds 2^53; written as text at row {row_idx} col {col_idx}");
            worksheet
                .write_string_with_format(n_row, n_col, val.to_string(), format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Integer(val) => {
            worksheet
                .write_number_with_format(n_row, n_col, *val as f64, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) if !val.is_finite() => {
            let c_text = convert_nan_inf_to_str(*val, value_policy)?;
            worksheet
                .write_string_with_format(n_row, n_col, c_text, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number_with_format(n_row, n_col, *val, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Boolean(val) => {
            worksheet
                .write_boolean_with_format(n_row, n_col, *val, format)
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

/// Build the xlsxwriter format carrying all six attributes of `style`.
pub fn derive_rust_xlsx_format(style: &SpecCellStyle) -> Format {
    let mut format = Format::new()
        .set_font_name(style.font.name.as_str())
        .set_font_size(style.font.size);

    if style.font.bold {
        format = format.set_bold();
    }
    if style.font.italic {
        format = format.set_italic();
    }
    if style.font.underline {
        format = format.set_underline(FormatUnderline::Single);
    }
    if style.font.strikethrough {
        format = format.set_font_strikethrough();
    }
    if let Some(val) = &style.font.color {
        format = format.set_font_color(val.as_str());
    }

    let border = &style.border;
    format = format
        .set_border_top(derive_format_border(border.top.line))
        .set_border_bottom(derive_format_border(border.bottom.line))
        .set_border_left(derive_format_border(border.left.line))
        .set_border_right(derive_format_border(border.right.line));
    if let Some(val) = &border.top.color {
        format = format.set_border_top_color(val.as_str());
    }
    if let Some(val) = &border.bottom.color {
        format = format.set_border_bottom_color(val.as_str());
    }
    if let Some(val) = &border.left.color {
        format = format.set_border_left_color(val.as_str());
    }
    if let Some(val) = &border.right.color {
        format = format.set_border_right_color(val.as_str());
    }

    if style.fill.pattern != EnumFillPattern::None {
        format = format.set_pattern(derive_format_pattern(style.fill.pattern));
    }
    if let Some(val) = &style.fill.fg_color {
        format = format.set_foreground_color(val.as_str());
    }
    if let Some(val) = &style.fill.bg_color {
        format = format.set_background_color(val.as_str());
    }

    if style.num_format != C_NUM_FORMAT_GENERAL {
        format = format.set_num_format(style.num_format.as_str());
    }

    if !style.protection.locked {
        format = format.set_unlocked();
    }
    if style.protection.hidden {
        format = format.set_hidden();
    }

    let alignment = &style.alignment;
    if let Some(align) = derive_format_align_horizontal(alignment.horizontal) {
        format = format.set_align(align);
    }
    if let Some(align) = derive_format_align_vertical(alignment.vertical) {
        format = format.set_align(align);
    }
    if alignment.wrap_text {
        format = format.set_text_wrap();
    }
    if alignment.shrink_to_fit {
        format = format.set_shrink();
    }
    if alignment.indent > 0 {
        format = format.set_indent(alignment.indent);
    }
    if alignment.rotation != 0 {
        format = format.set_rotation(alignment.rotation);
    }

    format
}

fn derive_format_border(line: EnumBorderLine) -> FormatBorder {
    match line {
        EnumBorderLine::None => FormatBorder::None,
        EnumBorderLine::Thin => FormatBorder::Thin,
        EnumBorderLine::Medium => FormatBorder::Medium,
        EnumBorderLine::Dashed => FormatBorder::Dashed,
        EnumBorderLine::Dotted => FormatBorder::Dotted,
        EnumBorderLine::Thick => FormatBorder::Thick,
        EnumBorderLine::Double => FormatBorder::Double,
        EnumBorderLine::Hair => FormatBorder::Hair,
        EnumBorderLine::MediumDashed => FormatBorder::MediumDashed,
        EnumBorderLine::DashDot => FormatBorder::DashDot,
        EnumBorderLine::MediumDashDot => FormatBorder::MediumDashDot,
        EnumBorderLine::DashDotDot => FormatBorder::DashDotDot,
        EnumBorderLine::MediumDashDotDot => FormatBorder::MediumDashDotDot,
        EnumBorderLine::SlantDashDot => FormatBorder::SlantDashDot,
    }
}

fn derive_format_pattern(pattern: EnumFillPattern) -> FormatPattern {
    match pattern {
        EnumFillPattern::None => FormatPattern::None,
        EnumFillPattern::Solid => FormatPattern::Solid,
        EnumFillPattern::MediumGray => FormatPattern::MediumGray,
        EnumFillPattern::DarkGray => FormatPattern::DarkGray,
        EnumFillPattern::LightGray => FormatPattern::LightGray,
        EnumFillPattern::Gray125 => FormatPattern::Gray125,
        EnumFillPattern::Gray0625 => FormatPattern::Gray0625,
    }
}

fn derive_format_align_horizontal(align: EnumHorizontalAlign) -> Option<FormatAlign> {
    match align {
        EnumHorizontalAlign::General => None,
        EnumHorizontalAlign::Left => Some(FormatAlign::Left),
        EnumHorizontalAlign::Center => Some(FormatAlign::Center),
        EnumHorizontalAlign::Right => Some(FormatAlign::Right),
        EnumHorizontalAlign::Fill => Some(FormatAlign::Fill),
        EnumHorizontalAlign::Justify => Some(FormatAlign::Justify),
        EnumHorizontalAlign::CenterAcross => Some(FormatAlign::CenterAcross),
        EnumHorizontalAlign::Distributed => Some(FormatAlign::Distributed),
    }
}

// Bottom is the Excel default and is left implicit.
fn derive_format_align_vertical(align: EnumVerticalAlign) -> Option<FormatAlign> {
    match align {
        EnumVerticalAlign::Bottom => None,
        EnumVerticalAlign::Top => Some(FormatAlign::Top),
        EnumVerticalAlign::Center => Some(FormatAlign::VerticalCenter),
        EnumVerticalAlign::Justify => Some(FormatAlign::VerticalJustify),
        EnumVerticalAlign::Distributed => Some(FormatAlign::VerticalDistributed),
    }
}

/// Whether `val` survives the trip through an f64 number cell unchanged.
pub(crate) fn is_int_exact_in_f64(val: i64) -> bool {
    val.unsigned_abs() <= N_INT_EXACT_F64_MAX
}

pub(crate) fn cast_row_num(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| CellframeError::AddressResolution(format!("row index overflow: {value}")))
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16> {
    u16::try_from(value)
        .map_err(|_| CellframeError::AddressResolution(format!("column index overflow: {value}")))
}

pub(crate) fn derive_xlsx_error_text(err: XlsxError) -> CellframeError {
    CellframeError::Xlsx(err.to_string())
}
