use approx::assert_relative_eq;
use health_scatter::ChartError;
use health_scatter::api::{build_x_scale, build_y_scale};
use health_scatter::core::{Dimension, Margins, PlotArea, Record, RecordMeasures, Viewport};

fn plot_area() -> PlotArea {
    PlotArea::resolve(Viewport::new(900, 600), Margins::default()).expect("plot area")
}

fn record(state: &str, poverty: f64, healthcare: f64, obesity: f64) -> Record {
    Record::new(
        state,
        state,
        RecordMeasures {
            poverty,
            healthcare,
            obesity,
            ..RecordMeasures::default()
        },
    )
    .expect("valid record")
}

#[test]
fn poverty_domain_pads_min_and_max_by_twenty_percent() {
    let records = vec![record("A", 10.0, 5.0, 30.0), record("B", 20.0, 15.0, 25.0)];

    let scale = build_x_scale(&records, Dimension::Poverty, plot_area()).expect("scale");
    let (start, end) = scale.domain();
    assert_relative_eq!(start, 8.0, epsilon = 1e-12);
    assert_relative_eq!(end, 24.0, epsilon = 1e-12);
    assert_eq!(scale.range(), (0.0, 760.0));
}

#[test]
fn obesity_domain_uses_obesity_values() {
    let records = vec![record("A", 10.0, 5.0, 30.0), record("B", 20.0, 15.0, 25.0)];

    let scale = build_x_scale(&records, Dimension::Obesity, plot_area()).expect("scale");
    let (start, end) = scale.domain();
    assert_relative_eq!(start, 20.0, epsilon = 1e-12);
    assert_relative_eq!(end, 36.0, epsilon = 1e-12);
}

#[test]
fn x_scale_maps_domain_ends_onto_plot_width() {
    let records = vec![record("A", 10.0, 5.0, 30.0), record("B", 20.0, 15.0, 25.0)];
    let scale = build_x_scale(&records, Dimension::Poverty, plot_area()).expect("scale");

    assert_relative_eq!(scale.map(8.0).expect("map"), 0.0, epsilon = 1e-9);
    assert_relative_eq!(scale.map(24.0).expect("map"), 760.0, epsilon = 1e-9);
    assert_relative_eq!(scale.map(16.0).expect("map"), 380.0, epsilon = 1e-9);
}

#[test]
fn empty_records_are_rejected() {
    let err = build_x_scale(&[], Dimension::Poverty, plot_area()).expect_err("empty");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn all_zero_values_produce_degenerate_domain_error() {
    let records = vec![record("A", 0.0, 5.0, 30.0), record("B", 0.0, 15.0, 25.0)];

    let err = build_x_scale(&records, Dimension::Poverty, plot_area()).expect_err("degenerate");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn single_record_still_builds_a_domain() {
    let records = vec![record("A", 10.0, 5.0, 30.0)];

    let scale = build_x_scale(&records, Dimension::Poverty, plot_area()).expect("scale");
    let (start, end) = scale.domain();
    assert_relative_eq!(start, 8.0, epsilon = 1e-12);
    assert_relative_eq!(end, 12.0, epsilon = 1e-12);
}

#[test]
fn y_scale_runs_from_zero_to_max_healthcare_inverted() {
    let records = vec![record("A", 10.0, 5.0, 30.0), record("B", 20.0, 15.0, 25.0)];

    let scale = build_y_scale(&records, plot_area()).expect("y scale");
    assert_eq!(scale.domain(), (0.0, 15.0));
    assert_relative_eq!(scale.map(0.0).expect("map"), 470.0, epsilon = 1e-9);
    assert_relative_eq!(scale.map(15.0).expect("map"), 0.0, epsilon = 1e-9);
}
