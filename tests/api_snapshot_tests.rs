use health_scatter::api::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartConfig, ChartController, ChartSnapshot,
};
use health_scatter::core::Dimension;
use health_scatter::render::NullRenderer;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/states_sample.csv");

fn controller() -> ChartController<NullRenderer> {
    ChartController::from_csv_path(NullRenderer::default(), ChartConfig::default(), FIXTURE)
        .expect("controller from fixture")
}

#[test]
fn snapshot_reflects_initial_state() {
    let controller = controller();

    let snapshot = controller.snapshot();

    assert_eq!(snapshot.chosen_x_axis, Dimension::Poverty);
    assert_eq!(snapshot.marks.len(), 6);
    assert_eq!(snapshot.marks[0].abbr, "AL");
    assert!(!snapshot.animating);
    assert_eq!(snapshot.hovered_mark, None);
    assert_eq!(snapshot.x_domain, snapshot.axis_displayed_domain);
    for mark in &snapshot.marks {
        assert_eq!(mark.cx, mark.target_cx);
    }
}

#[test]
fn snapshot_mid_transition_shows_target_and_displayed_positions() {
    let mut controller = controller();
    controller.click_label(Dimension::Obesity).expect("to obesity");
    controller.advance(500.0);

    let snapshot = controller.snapshot();

    assert!(snapshot.animating);
    assert_eq!(snapshot.chosen_x_axis, Dimension::Obesity);
    assert_eq!(snapshot.tooltip.dimension, Dimension::Obesity);
    assert_ne!(snapshot.x_domain, snapshot.axis_displayed_domain);
    assert!(snapshot.marks.iter().any(|mark| mark.cx != mark.target_cx));
}

#[test]
fn json_contract_round_trips() {
    let controller = controller();

    let json = controller
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains("\"schema_version\": 1"));

    let restored = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, controller.snapshot());
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = controller().snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize bare snapshot");

    let restored = ChartSnapshot::from_json_compat_str(&json).expect("parse bare snapshot");

    assert_eq!(restored, snapshot);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = controller()
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract")
        .replace(
            &format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );

    assert!(ChartSnapshot::from_json_compat_str(&json).is_err());
}
