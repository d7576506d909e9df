use health_scatter::api::{ChartConfig, ChartController, build_x_scale};
use health_scatter::core::{Dataset, Dimension, LinearScale, Record, RecordMeasures};
use health_scatter::render::NullRenderer;
use proptest::prelude::*;

fn record(index: usize, poverty: f64, healthcare: f64, obesity: f64) -> Record {
    Record::new(
        format!("State {index}"),
        format!("S{index}"),
        RecordMeasures {
            poverty,
            healthcare,
            obesity,
            ..RecordMeasures::default()
        },
    )
    .expect("generated record")
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0.5f64..60.0, 0.5f64..40.0, 0.5f64..60.0), 1..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (poverty, healthcare, obesity))| {
                record(index, poverty, healthcare, obesity)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn x_domain_pads_observed_extent(records in records_strategy(), obesity in any::<bool>()) {
        let dimension = if obesity { Dimension::Obesity } else { Dimension::Poverty };
        let plot_area = ChartConfig::default().plot_area().expect("plot area");
        let min = records.iter().map(|r| r.value(dimension)).fold(f64::INFINITY, f64::min);
        let max = records.iter().map(|r| r.value(dimension)).fold(f64::NEG_INFINITY, f64::max);

        let scale = build_x_scale(&records, dimension, plot_area).expect("x scale");

        let (start, end) = scale.domain();
        prop_assert_eq!(start, min * 0.8);
        prop_assert_eq!(end, max * 1.2);
        prop_assert_eq!(scale.range(), (0.0, plot_area.width));
        for record in &records {
            let x = scale.map(record.value(dimension)).expect("map");
            prop_assert!(x >= 0.0 && x <= plot_area.width);
        }
    }

    #[test]
    fn map_then_invert_recovers_value(
        start in -1_000.0f64..1_000.0,
        span in 0.01f64..5_000.0,
        width in 10.0f64..4_000.0,
        fraction in 0.0f64..1.0
    ) {
        let scale = LinearScale::new(start, start + span, 0.0, width).expect("scale");
        let value = start + span * fraction;

        let pixel = scale.map(value).expect("map");
        let restored = scale.invert(pixel).expect("invert");

        prop_assert!((restored - value).abs() <= 1e-9 * span.max(1.0).max(value.abs()));
    }

    #[test]
    fn ticks_are_ascending_and_inside_domain(
        start in -1_000.0f64..1_000.0,
        span in 0.01f64..5_000.0,
        count in 1usize..30
    ) {
        let end = start + span;
        let scale = LinearScale::new(start, end, 0.0, 500.0).expect("scale");
        let step = scale.tick_step(count).expect("tick step");

        let ticks = scale.ticks(count);

        prop_assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let slack = step * 1e-6;
        prop_assert!(ticks[0] >= start - slack);
        prop_assert!(ticks[ticks.len() - 1] <= end + slack);
    }

    #[test]
    fn settled_marks_sit_on_target_scale(
        records in records_strategy(),
        first_step in 0.0f64..1_000.0
    ) {
        let dataset = Dataset::from_records(records).expect("dataset");
        let mut controller =
            ChartController::new(NullRenderer::default(), ChartConfig::default(), dataset)
                .expect("controller init");

        controller.click_label(Dimension::Obesity).expect("to obesity");
        controller.advance(first_step);
        controller.advance(1_000.0);

        prop_assert!(!controller.is_animating());
        let scale = controller.state().x_scale();
        for mark in controller.state().marks() {
            let record = controller.dataset().get(mark.index).expect("record");
            let expected = scale.map(record.obesity).expect("map");
            prop_assert!((mark.cx() - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }

    #[test]
    fn at_most_one_mark_is_hovered(
        records in records_strategy(),
        moves in prop::collection::vec((0.0f64..900.0, 0.0f64..600.0), 1..30)
    ) {
        let dataset = Dataset::from_records(records).expect("dataset");
        let mut controller =
            ChartController::new(NullRenderer::default(), ChartConfig::default(), dataset)
                .expect("controller init");

        for (x, y) in moves {
            controller.pointer_move(x, y);
            let frame = controller.build_render_frame().expect("frame");
            prop_assert!(frame.rects.len() <= 1);
            prop_assert_eq!(
                frame.rects.len(),
                usize::from(controller.state().hovered_mark().is_some())
            );
        }
    }
}
