//! Stateless helpers: column labels, cell addresses and value coercion.

use std::collections::BTreeSet;

use crate::conf::{N_LEN_LABEL_ALPHABET, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
use crate::spec::{CellframeError, EnumCellValue, Result, SpecPlaceOptions, SpecXlsxValuePolicy};

////////////////////////////////////////////////////////////////////////////////
// #region ColumnLabels

/// Convert a 1-based column index to its letter label (`1 -> "A"`, `27 -> "AA"`).
pub fn convert_col_idx_to_label(col_idx: usize) -> Result<String> {
    if col_idx == 0 || col_idx > N_NCOLS_EXCEL_MAX {
        return Err(CellframeError::AddressResolution(format!(
            "column index {col_idx} outside 1..={N_NCOLS_EXCEL_MAX}"
        )));
    }

    let mut l_chars = Vec::with_capacity(3);
    let mut n_rest = col_idx;
    while n_rest > 0 {
        n_rest -= 1;
        l_chars.push((b'A' + (n_rest % N_LEN_LABEL_ALPHABET) as u8) as char);
        n_rest /= N_LEN_LABEL_ALPHABET;
    }

    Ok(l_chars.into_iter().rev().collect())
}

/// Convert a letter label to its 1-based column index (`"A" -> 1`, `"XFD" -> 16384`).
///
/// Letters are matched case-insensitively.
pub fn convert_col_label_to_idx(label: &str) -> Result<usize> {
    if label.is_empty() {
        return Err(CellframeError::AddressResolution(
            "empty column label".to_string(),
        ));
    }

    let mut n_idx = 0usize;
    for chr in label.chars() {
        if !chr.is_ascii_alphabetic() {
            return Err(CellframeError::AddressResolution(format!(
                "invalid column label {label:?}"
            )));
        }
        let n_digit = (chr.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n_idx = n_idx * N_LEN_LABEL_ALPHABET + n_digit;
        if n_idx > N_NCOLS_EXCEL_MAX {
            return Err(CellframeError::AddressResolution(format!(
                "column label {label:?} beyond XFD"
            )));
        }
    }

    Ok(n_idx)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellAddresses

/// Validate a 1-based row index against the Excel row limit.
pub fn validate_row_idx(row_idx: usize) -> Result<()> {
    if row_idx == 0 || row_idx > N_NROWS_EXCEL_MAX {
        return Err(CellframeError::AddressResolution(format!(
            "row index {row_idx} outside 1..={N_NROWS_EXCEL_MAX}"
        )));
    }
    Ok(())
}

/// Build an A1-style address from 1-based column and row indices.
pub fn derive_cell_address(col_idx: usize, row_idx: usize) -> Result<String> {
    let c_label = convert_col_idx_to_label(col_idx)?;
    validate_row_idx(row_idx)?;
    Ok(format!("{c_label}{row_idx}"))
}

/// Parse an A1-style address (`$` markers allowed) into 1-based `(col, row)`.
pub fn parse_cell_address(address: &str) -> Result<(usize, usize)> {
    let c_address: String = address.trim().chars().filter(|chr| *chr != '$').collect();
    let n_pos_digits = c_address
        .find(|chr: char| chr.is_ascii_digit())
        .ok_or_else(|| {
            CellframeError::AddressResolution(format!("no row number in {address:?}"))
        })?;

    let (c_label, c_row) = c_address.split_at(n_pos_digits);
    let col_idx = convert_col_label_to_idx(c_label)?;
    let row_idx: usize = c_row.parse().map_err(|_| {
        CellframeError::AddressResolution(format!("invalid row number in {address:?}"))
    })?;
    validate_row_idx(row_idx)?;

    Ok((col_idx, row_idx))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Render a float the way a Python `str(float)` would (`20.0`, `nan`, `-inf`,
/// `1e+20`, `1e-05`).
///
/// Exponent form is used when the decimal exponent is below -4 or at least 16.
pub fn format_float_text(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. "1.5e-7".
    let c_sci = format!("{x:e}");
    if let Some((c_mantissa, c_exp)) = c_sci.split_once('e') {
        let n_exp: i32 = c_exp.parse().unwrap_or(0);
        if x != 0.0 && !(-4..16).contains(&n_exp) {
            let c_sign = if n_exp < 0 { '-' } else { '+' };
            return format!("{c_mantissa}e{c_sign}{:02}", n_exp.unsigned_abs());
        }
    }

    if x.fract() == 0.0 {
        return format!("{x:.1}");
    }
    x.to_string()
}

/// Render any cell value as text. Missing values render as empty text.
pub fn convert_cell_value_to_str(value: &EnumCellValue) -> String {
    match value {
        EnumCellValue::None => String::new(),
        EnumCellValue::String(s) => s.clone(),
        EnumCellValue::Integer(n) => n.to_string(),
        EnumCellValue::Number(n) => format_float_text(*n),
        EnumCellValue::Boolean(b) => if *b { "True" } else { "False" }.to_string(),
    }
}

/// Read a cell value as a float; `address` names the destination in errors.
pub fn convert_cell_value_to_f64(value: &EnumCellValue, address: &str) -> Result<f64> {
    let derive_err = || CellframeError::Coercion {
        address: address.to_string(),
        value: convert_cell_value_to_str(value),
    };

    match value {
        EnumCellValue::Number(n) => Ok(*n),
        EnumCellValue::Integer(n) => Ok(*n as f64),
        EnumCellValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        EnumCellValue::String(s) => parse_float_text(s).ok_or_else(derive_err),
        EnumCellValue::None => Err(derive_err()),
    }
}

/// Parse trimmed text as a float, accepting `_` between digits (`"1_000"`).
fn parse_float_text(text: &str) -> Option<f64> {
    let c_text = text.trim();
    if !c_text.contains('_') {
        return c_text.parse().ok();
    }

    let l_chars: Vec<char> = c_text.chars().collect();
    let mut c_digits = String::with_capacity(l_chars.len());
    for (n_pos, chr) in l_chars.iter().enumerate() {
        if *chr != '_' {
            c_digits.push(*chr);
            continue;
        }
        let if_prev_digit = n_pos > 0 && l_chars[n_pos - 1].is_ascii_digit();
        let if_next_digit = l_chars.get(n_pos + 1).is_some_and(char::is_ascii_digit);
        if !(if_prev_digit && if_next_digit) {
            return None;
        }
    }
    c_digits.parse().ok()
}

/// Apply the coercion selected by destination label `label`.
///
/// Text coercion wins over float coercion when a label sits in both sets.
pub fn convert_cell_value_for_label(
    value: &EnumCellValue,
    label: &str,
    address: &str,
    options: &SpecPlaceOptions,
) -> Result<EnumCellValue> {
    if options.cols_str.contains(label) {
        return Ok(EnumCellValue::String(convert_cell_value_to_str(value)));
    }
    if options.cols_float.contains(label) {
        return Ok(EnumCellValue::Number(convert_cell_value_to_f64(
            value, address,
        )?));
    }
    Ok(value.clone())
}

/// Convert `NaN`/`Inf` to policy string; return error for finite values.
pub fn convert_nan_inf_to_str(x: f64, value_policy: &SpecXlsxValuePolicy) -> Result<String> {
    if x.is_nan() {
        return Ok(value_policy.nan_str.clone());
    }
    if x.is_infinite() {
        return Ok(if x.is_sign_positive() {
            value_policy.posinf_str.clone()
        } else {
            value_policy.neginf_str.clone()
        });
    }
    Err(CellframeError::Xlsx(format!(
        "{x} is neither NaN nor Inf"
    )))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region OptionValidation

/// Validate start indices and every label in the label sets.
pub fn validate_place_options(options: &SpecPlaceOptions) -> Result<()> {
    if options.col_start == 0 {
        return Err(CellframeError::Configuration(
            "col_start must be >= 1.".to_string(),
        ));
    }
    if options.row_start == 0 {
        return Err(CellframeError::Configuration(
            "row_start must be >= 1.".to_string(),
        ));
    }

    validate_label_set("cols_str", &options.cols_str)?;
    validate_label_set("cols_float", &options.cols_float)?;
    validate_label_set("cols_skip", &options.cols_skip)?;
    Ok(())
}

fn validate_label_set(name: &str, labels: &BTreeSet<String>) -> Result<()> {
    for label in labels {
        let if_upper = !label.is_empty() && label.chars().all(|chr| chr.is_ascii_uppercase());
        if !if_upper || convert_col_label_to_idx(label).is_err() {
            return Err(CellframeError::Configuration(format!(
                "{name} holds {label:?}; expected an uppercase column label A..XFD."
            )));
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
