use hall_layout::{
    Column, Config, ForcedHeights, HallSpec, Interval, LayoutError, RowKind, build_rows,
    classify_and_segment, compute_layout, merge_intervals, radius_from_circumference,
    read_columns_file, read_forced_rows_file, render_svg, report_to_string,
};
use std::path::PathBuf;

const EPS: f64 = 1e-9;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn test_sample_config_and_data() {
    let root = workspace_root();
    let config = Config::load_from_file(root.join("config/default.toml")).unwrap();

    let columns = read_columns_file(config.input.columns.as_ref().unwrap()).unwrap();
    let forced = read_forced_rows_file(config.input.forced_rows.as_ref().unwrap()).unwrap();
    assert_eq!(columns.len(), 5);
    assert_eq!(forced.len(), 3);

    let summary = compute_layout(&config.hall_spec(forced), &columns).unwrap();

    assert_eq!(summary.rows.len(), 14);
    assert!((summary.bounds.y_max - 16.15).abs() < EPS);
    assert!((summary.row(3).unwrap().height - 0.66).abs() < 1e-9);
    assert!((summary.row(14).unwrap().height - 0.67).abs() < 1e-6);

    let custom: Vec<usize> = summary.intersected_rows().map(|r| r.index).collect();
    assert_eq!(custom, vec![3, 7, 11]);

    // C1 sits in row 2 but is ignored
    let row2 = summary.row(2).unwrap();
    assert_eq!(row2.kind, RowKind::Plain);
    assert_eq!(row2.ignored_labels, vec!["C1"]);

    let row3 = summary.row(3).unwrap();
    assert_eq!(row3.intervening_labels, vec!["C2", "C3"]);
    assert_eq!(row3.cut_intervals.len(), 2);
    assert_eq!(row3.usable_segments.len(), 3);
}

#[test]
fn test_sample_outputs_render() {
    let root = workspace_root();
    let config = Config::load_from_file(root.join("config/default.toml")).unwrap();
    let columns = read_columns_file(config.input.columns.as_ref().unwrap()).unwrap();
    let forced = read_forced_rows_file(config.input.forced_rows.as_ref().unwrap()).unwrap();
    let summary = compute_layout(&config.hall_spec(forced), &columns).unwrap();

    let report = report_to_string(&summary);
    assert_eq!(report.matches("\nRow ").count(), 14);
    assert!(report.contains(" => Columns: [C4]"));

    let mut buf = Vec::new();
    render_svg(&mut buf, &summary, &config.render).unwrap();
    let svg = String::from_utf8(buf).unwrap();
    // every column is drawn, ignored C1 included, plus two legend markers
    assert_eq!(svg.matches("<circle").count(), 5 + 2);
}

#[test]
fn test_example_rows() {
    let rows = build_rows(5.0, 2.0, &ForcedHeights::new()).unwrap();
    let triples: Vec<(usize, f64, f64)> = rows.iter().map(|r| (r.index, r.start, r.end)).collect();
    assert_eq!(triples, vec![(1, 0.0, 2.0), (2, 2.0, 4.0), (3, 4.0, 5.0)]);
}

#[test]
fn test_example_radius() {
    assert!((radius_from_circumference(2.0 * std::f64::consts::PI) - 1.0).abs() < EPS);
}

#[test]
fn test_example_single_column_segments() {
    let rows = build_rows(2.0, 2.0, &ForcedHeights::new()).unwrap();
    let columns = vec![Column::new("C", 5.0, 1.0, 2.0)];
    let seg = classify_and_segment(&rows, 10.0, &columns, &Default::default());
    assert_eq!(seg[0].cut_intervals, vec![Interval::new(3.0, 7.0)]);
    assert_eq!(
        seg[0].usable_segments,
        vec![Interval::new(0.0, 3.0), Interval::new(7.0, 10.0)]
    );
}

#[test]
fn test_example_overlapping_spans() {
    let merged = merge_intervals(&[Interval::new(2.0, 6.0), Interval::new(5.0, 8.0)]);
    assert_eq!(merged, vec![Interval::new(2.0, 8.0)]);
}

#[test]
fn test_example_invalid_forced_height() {
    let forced: ForcedHeights = [(2, -1.0)].into();
    let spec = HallSpec::new(10.0, 5.0, 2.0).with_forced_heights(forced);
    let err = compute_layout(&spec, &[]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
}
