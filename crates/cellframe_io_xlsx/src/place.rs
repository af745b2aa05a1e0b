//! Placement engine: copies dataset columns onto a grid.

use crate::dataset::TabularDataset;
use crate::grid::CellGrid;
use crate::spec::{EnumCellValue, Result, SpecPlaceOptions, SpecPlaceReport};
use crate::util::{
    convert_cell_value_for_label, convert_col_idx_to_label, derive_cell_address,
    validate_place_options,
};

/// Place `dataset` onto `grid`, column after column.
///
/// Each source column lands on the next destination column whose label is
/// not in `cols_skip`. Coercion is chosen by that destination label, not by
/// the source column name. A column stops after the row whose index plus one
/// equals `row_end`; the run stops after the column whose index plus one
/// equals `col_end`. Bounds of `0` never match.
///
/// On error, cells written before the failure stay written.
pub fn place_frame<G, D>(
    grid: &mut G,
    dataset: &D,
    options: &SpecPlaceOptions,
) -> Result<SpecPlaceReport>
where
    G: CellGrid + ?Sized,
    D: TabularDataset + ?Sized,
{
    validate_place_options(options)?;

    let mut report = SpecPlaceReport::default();
    for c_label in options.cols_str.intersection(&options.cols_float) {
        report.warn(format!(
            "Label {c_label} is in both cols_str and cols_float; text coercion applies."
        ));
    }

    let l_colnames = dataset.column_names();
    log::debug!(
        "placing {} columns from col {} row {} (col_end={}, row_end={}, headers={})",
        l_colnames.len(),
        options.col_start,
        options.row_start,
        options.col_end,
        options.row_end,
        options.if_headers
    );

    let mut n_col = options.col_start;
    let mut n_height_first: Option<usize> = None;

    for (n_idx_src, c_colname) in l_colnames.iter().enumerate() {
        let mut c_label = convert_col_idx_to_label(n_col)?;
        while options.cols_skip.contains(&c_label) {
            log::trace!("skipping destination column {c_label}");
            report.cols_skipped.push(c_label);
            n_col += 1;
            c_label = convert_col_idx_to_label(n_col)?;
        }

        let l_values = dataset.column_values(n_idx_src)?;
        match n_height_first {
            None => n_height_first = Some(l_values.len()),
            Some(n_height) if n_height != l_values.len() => {
                log::warn!(
                    "column {c_colname:?} has {} values, first column has {n_height}",
                    l_values.len()
                );
                report.warn(format!(
                    "Ragged dataset: column {c_colname:?} has {} values, expected {n_height}.",
                    l_values.len()
                ));
            }
            Some(_) => {}
        }

        let mut n_row = options.row_start;
        if options.if_headers {
            grid.write_value_at(n_col, n_row, EnumCellValue::String(c_colname.clone()))?;
            report.cnt_headers_written += 1;
            n_row += 1;
        }

        for value in &l_values {
            let c_address = derive_cell_address(n_col, n_row)?;
            let value_out = convert_cell_value_for_label(value, &c_label, &c_address, options)?;
            grid.write_value_at(n_col, n_row, value_out)?;
            report.cnt_cells_written += 1;

            if n_row + 1 == options.row_end {
                break;
            }
            n_row += 1;
        }
        report.cols_written.push(c_label);

        if n_col + 1 == options.col_end {
            break;
        }
        n_col += 1;
    }

    log::debug!(
        "placed {} cells and {} headers across {} columns",
        report.cnt_cells_written,
        report.cnt_headers_written,
        report.cols_written.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::place_frame;
    use crate::dataset::SpecDataTable;
    use crate::grid::SheetGrid;
    use crate::spec::{CellframeError, EnumCellValue, SpecPlaceOptions};

    fn derive_table(n_cols: usize, n_rows: usize) -> SpecDataTable {
        (0..n_cols).fold(SpecDataTable::new(), |table, n_col| {
            table.with_column(
                format!("c{n_col}"),
                (0..n_rows).map(|n_row| (n_col * 100 + n_row) as i64),
            )
        })
    }

    #[test]
    fn place_frame_writes_every_cell_at_offset() {
        let table = derive_table(3, 4);
        let mut grid = SheetGrid::new();
        let options = SpecPlaceOptions::default().with_col_range(2, 0).with_row_range(5, 0);

        let report = place_frame(&mut grid, &table, &options).expect("place");

        assert_eq!(report.cnt_cells_written, 12);
        assert_eq!(grid.len(), 12);
        for n_col in 0..3 {
            for n_row in 0..4 {
                assert_eq!(
                    grid.value_at(2 + n_col, 5 + n_row),
                    &EnumCellValue::Integer((n_col * 100 + n_row) as i64)
                );
            }
        }
        assert_eq!(report.cols_written, vec!["B", "C", "D"]);
    }

    #[test]
    fn place_frame_worked_example() {
        let table = SpecDataTable::new()
            .with_column("Id", ["007", "042"])
            .with_column("Amount", [EnumCellValue::Number(10.5), EnumCellValue::Integer(20)]);
        let options = SpecPlaceOptions::default()
            .with_cols_str(["A"])
            .with_cols_float(["B"])
            .with_headers(true);
        let mut grid = SheetGrid::new();

        let report = place_frame(&mut grid, &table, &options).expect("place");

        assert_eq!(grid.value("A1").expect("A1"), &EnumCellValue::from("Id"));
        assert_eq!(grid.value("B1").expect("B1"), &EnumCellValue::from("Amount"));
        assert_eq!(grid.value("A2").expect("A2"), &EnumCellValue::from("007"));
        assert_eq!(grid.value("B2").expect("B2"), &EnumCellValue::Number(10.5));
        assert_eq!(grid.value("A3").expect("A3"), &EnumCellValue::from("042"));
        assert_eq!(grid.value("B3").expect("B3"), &EnumCellValue::Number(20.0));
        assert_eq!(report.cnt_headers_written, 2);
        assert_eq!(report.cnt_cells_written, 4);
    }

    #[test]
    fn place_frame_coercion_follows_destination_label() {
        let table = SpecDataTable::new()
            .with_column("first", [1i64])
            .with_column("second", [2i64]);
        let options = SpecPlaceOptions::default()
            .with_col_range(2, 0)
            .with_cols_str(["C"]);
        let mut grid = SheetGrid::new();

        place_frame(&mut grid, &table, &options).expect("place");

        assert_eq!(grid.value("B1").expect("B1"), &EnumCellValue::Integer(1));
        assert_eq!(grid.value("C1").expect("C1"), &EnumCellValue::from("2"));
    }

    #[test]
    fn place_frame_skips_labels_cumulatively() {
        let table = derive_table(3, 1);
        let options = SpecPlaceOptions::default().with_cols_skip(["A", "C", "D"]);
        let mut grid = SheetGrid::new();

        let report = place_frame(&mut grid, &table, &options).expect("place");

        assert_eq!(grid.value("B1").expect("B1"), &EnumCellValue::Integer(0));
        assert_eq!(grid.value("E1").expect("E1"), &EnumCellValue::Integer(100));
        assert_eq!(grid.value("F1").expect("F1"), &EnumCellValue::Integer(200));
        for c_address in ["A1", "C1", "D1"] {
            assert!(grid.cell(c_address).expect("addr").is_none());
        }
        assert_eq!(report.cols_skipped, vec!["A", "C", "D"]);
        assert_eq!(report.cols_written, vec!["B", "E", "F"]);
    }

    #[test]
    fn place_frame_zero_bounds_equal_unbounded() {
        let table = derive_table(4, 6);
        let mut grid_default = SheetGrid::new();
        let mut grid_zero = SheetGrid::new();

        place_frame(&mut grid_default, &table, &SpecPlaceOptions::default()).expect("default");
        place_frame(
            &mut grid_zero,
            &table,
            &SpecPlaceOptions::default().with_col_range(1, 0).with_row_range(1, 0),
        )
        .expect("zero");

        let l_default: Vec<_> = grid_default.iter().map(|(pos, c)| (pos, c.clone())).collect();
        let l_zero: Vec<_> = grid_zero.iter().map(|(pos, c)| (pos, c.clone())).collect();
        assert_eq!(l_default, l_zero);
    }

    #[test]
    fn place_frame_row_end_stops_each_column() {
        let table = derive_table(2, 10);
        let options = SpecPlaceOptions::default().with_row_range(3, 6);
        let mut grid = SheetGrid::new();

        let report = place_frame(&mut grid, &table, &options).expect("place");

        // rows 3, 4, 5 written; the write at row 5 meets row_end
        assert_eq!(report.cnt_cells_written, 6);
        assert_eq!(grid.value("A5").expect("A5"), &EnumCellValue::Integer(2));
        assert!(grid.cell("A6").expect("A6").is_none());
        assert_eq!(grid.value("B5").expect("B5"), &EnumCellValue::Integer(102));
    }

    #[test]
    fn place_frame_row_end_ignores_header_row() {
        let table = derive_table(1, 5);
        let options = SpecPlaceOptions::default()
            .with_row_range(1, 2)
            .with_headers(true);
        let mut grid = SheetGrid::new();

        let report = place_frame(&mut grid, &table, &options).expect("place");

        // header row is not checked; data rows start at 2 so row + 1 never equals row_end
        assert_eq!(report.cnt_headers_written, 1);
        assert_eq!(report.cnt_cells_written, 5);
        assert_eq!(grid.value("A6").expect("A6"), &EnumCellValue::Integer(4));
    }

    #[test]
    fn place_frame_col_end_stops_run() {
        let table = derive_table(5, 2);
        let options = SpecPlaceOptions::default().with_col_range(2, 4);
        let mut grid = SheetGrid::new();

        let report = place_frame(&mut grid, &table, &options).expect("place");

        assert_eq!(report.cols_written, vec!["B", "C"]);
        assert!(grid.cell("D1").expect("D1").is_none());
        assert_eq!(report.cnt_cells_written, 4);
    }

    #[test]
    fn place_frame_col_end_jumped_by_skip_never_matches() {
        let table = derive_table(3, 1);
        let options = SpecPlaceOptions::default()
            .with_col_range(1, 3)
            .with_cols_skip(["B"]);
        let mut grid = SheetGrid::new();

        let report = place_frame(&mut grid, &table, &options).expect("place");

        assert_eq!(report.cols_written, vec!["A", "C", "D"]);
    }

    #[test]
    fn place_frame_float_failure_keeps_prior_writes() {
        let table = SpecDataTable::new()
            .with_column("ok", [1i64, 2])
            .with_column("bad", ["1.5", "oops", "3"]);
        let options = SpecPlaceOptions::default().with_cols_float(["B"]);
        let mut grid = SheetGrid::new();

        let err = place_frame(&mut grid, &table, &options).expect_err("must fail");

        assert_eq!(
            err,
            CellframeError::Coercion {
                address: "B2".to_string(),
                value: "oops".to_string(),
            }
        );
        assert_eq!(grid.value("A2").expect("A2"), &EnumCellValue::Integer(2));
        assert_eq!(grid.value("B1").expect("B1"), &EnumCellValue::Number(1.5));
        assert!(grid.cell("B3").expect("B3").is_none());
    }

    #[test]
    fn place_frame_reports_configuration_and_address_errors() {
        let table = derive_table(2, 1);
        let mut grid = SheetGrid::new();

        assert!(matches!(
            place_frame(&mut grid, &table, &SpecPlaceOptions::default().with_col_range(0, 0)),
            Err(CellframeError::Configuration(_))
        ));
        assert!(matches!(
            place_frame(
                &mut grid,
                &table,
                &SpecPlaceOptions::default().with_col_range(16_384, 0)
            ),
            Err(CellframeError::AddressResolution(_))
        ));
        // first column landed on XFD before the second failed
        assert_eq!(grid.value("XFD1").expect("XFD1"), &EnumCellValue::Integer(0));
    }

    #[test]
    fn place_frame_warns_on_ragged_and_overlapping_labels() {
        let table = SpecDataTable::new()
            .with_column("a", [1i64, 2, 3])
            .with_column("b", [1i64]);
        let options = SpecPlaceOptions::default()
            .with_cols_str(["A"])
            .with_cols_float(["A"]);
        let mut grid = SheetGrid::new();

        let report = place_frame(&mut grid, &table, &options).expect("place");

        assert_eq!(report.warnings.len(), 2);
        assert_eq!(grid.value("A3").expect("A3"), &EnumCellValue::from("3"));
        assert_eq!(report.cnt_cells_written, 4);
    }
}
