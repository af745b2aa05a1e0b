use cellframe_io_xlsx::{
    CellGrid, EnumCellValue, SheetGrid, SpecPlaceOptions, SpecXlsxValuePolicy, copy_cell_style,
    derive_header_cell_style, place_frame, write_grid_to_worksheet,
};
use polars::prelude::{Column, DataFrame};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;

fn derive_loans_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("ClientId".into(), &[7i64, 42, 1001]),
        Column::new("Amount".into(), &["10.5", "20", "3e2"]),
        Column::new("Note".into(), &["a", "b", "c"]),
    ])
    .expect("frame")
}

#[test]
fn dataframe_lands_on_grid_with_coercion_and_skip() {
    let df = derive_loans_frame();
    let options = SpecPlaceOptions::default()
        .with_col_range(1, 0)
        .with_row_range(2, 0)
        .with_cols_str(["A"])
        .with_cols_float(["C"])
        .with_cols_skip(["B"])
        .with_headers(true);
    let mut grid = SheetGrid::new();

    let report = place_frame(&mut grid, &df, &options).expect("place");

    assert_eq!(grid.value("A2").expect("A2"), &EnumCellValue::from("ClientId"));
    assert_eq!(grid.value("A3").expect("A3"), &EnumCellValue::from("7"));
    assert_eq!(grid.value("A5").expect("A5"), &EnumCellValue::from("1001"));
    assert_eq!(grid.value("C2").expect("C2"), &EnumCellValue::from("Amount"));
    assert_eq!(grid.value("C4").expect("C4"), &EnumCellValue::Number(20.0));
    assert_eq!(grid.value("C5").expect("C5"), &EnumCellValue::Number(300.0));
    assert_eq!(grid.value("D3").expect("D3"), &EnumCellValue::from("a"));
    assert!(grid.cell("B3").expect("B3").is_none());
    assert_eq!(report.cols_written, vec!["A", "C", "D"]);
    assert_eq!(report.cnt_cells_written, 9);
}

#[test]
fn dataframe_lands_on_worksheet_and_grid_renders() {
    let df = derive_loans_frame();
    let options = SpecPlaceOptions::default().with_headers(true);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let report = place_frame(worksheet, &df, &options).expect("place on worksheet");
    assert_eq!(report.cnt_headers_written, 3);

    let mut grid = SheetGrid::new();
    place_frame(&mut grid, &df, &options).expect("place on grid");
    let mut style_header = derive_header_cell_style();
    for c_address in ["A1", "B1", "C1"] {
        copy_cell_style(&style_header, grid.cell_mut(c_address).expect("header cell"));
    }
    style_header.font.bold = false;
    assert!(grid.cell("B1").expect("B1").expect("exists").style.font.bold);

    grid.write_value("E1", EnumCellValue::Number(f64::NAN))
        .expect("nan cell");
    let worksheet_styled = workbook.add_worksheet();
    let n_cells =
        write_grid_to_worksheet(&grid, worksheet_styled, &SpecXlsxValuePolicy::default())
            .expect("render");
    assert_eq!(n_cells, grid.len());

    assert!(workbook.save_to_buffer().expect("save").starts_with(b"PK"));
}

#[test]
fn nullable_float_column_follows_label_coercion() {
    let df = DataFrame::new(vec![Column::new(
        "Amount".into(),
        &[Some(1.5f64), None, Some(3.0)],
    )])
    .expect("frame");

    let mut grid_float = SheetGrid::new();
    let options_float = SpecPlaceOptions::default().with_cols_float(["A"]);
    let report = place_frame(&mut grid_float, &df, &options_float).expect("float place");
    assert_eq!(report.cnt_cells_written, 3);
    assert_eq!(grid_float.value("A1").expect("A1"), &EnumCellValue::Number(1.5));
    assert!(matches!(
        grid_float.value("A2").expect("A2"),
        EnumCellValue::Number(val) if val.is_nan()
    ));
    assert_eq!(grid_float.value("A3").expect("A3"), &EnumCellValue::Number(3.0));

    let mut grid_str = SheetGrid::new();
    let options_str = SpecPlaceOptions::default().with_cols_str(["A"]);
    place_frame(&mut grid_str, &df, &options_str).expect("str place");
    assert_eq!(grid_str.value("A1").expect("A1"), &EnumCellValue::from("1.5"));
    assert_eq!(grid_str.value("A2").expect("A2"), &EnumCellValue::from("nan"));
    assert_eq!(grid_str.value("A3").expect("A3"), &EnumCellValue::from("3.0"));
}
