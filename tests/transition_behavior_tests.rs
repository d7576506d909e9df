use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use health_scatter::api::{ChartConfig, ChartController};
use health_scatter::core::{Dataset, Dimension, Record, RecordMeasures};
use health_scatter::extensions::{ChartPlugin, PluginContext, PluginEvent};
use health_scatter::interaction::{Transition, ease_cubic_in_out};
use health_scatter::render::NullRenderer;

fn dataset() -> Dataset {
    let measures = |poverty, healthcare, obesity| RecordMeasures {
        poverty,
        healthcare,
        obesity,
        ..RecordMeasures::default()
    };
    Dataset::from_records(vec![
        Record::new("A", "AA", measures(10.0, 5.0, 30.0)).expect("record a"),
        Record::new("B", "BB", measures(20.0, 15.0, 25.0)).expect("record b"),
    ])
    .expect("dataset")
}

fn controller() -> ChartController<NullRenderer> {
    ChartController::new(NullRenderer::default(), ChartConfig::default(), dataset())
        .expect("controller init")
}

#[test]
fn marks_reach_new_scale_positions_after_full_duration() {
    let mut controller = controller();
    controller.click_label(Dimension::Obesity).expect("to obesity");
    assert!(controller.is_animating());

    controller.advance(1000.0);

    assert!(!controller.is_animating());
    let scale = controller.state().x_scale();
    for mark in controller.state().marks() {
        let record = controller.dataset().get(mark.index).expect("record");
        let expected = scale.map(record.obesity).expect("map");
        assert_relative_eq!(mark.cx(), expected, epsilon = 1e-9);
    }
}

#[test]
fn marks_are_between_old_and_new_positions_mid_transition() {
    let mut controller = controller();
    let before: Vec<f64> = controller.state().marks().iter().map(|mark| mark.cx()).collect();

    controller.click_label(Dimension::Obesity).expect("to obesity");
    controller.advance(500.0);

    for (mark, start) in controller.state().marks().iter().zip(before) {
        let target = mark.target_cx();
        let expected = start + (target - start) * ease_cubic_in_out(0.5);
        assert_relative_eq!(mark.cx(), expected, epsilon = 1e-9);
    }
}

#[test]
fn axis_displays_interpolated_domain_while_animating() {
    let mut controller = controller();
    controller.click_label(Dimension::Obesity).expect("to obesity");

    controller.advance(500.0);
    let (start, end) = controller.state().axis().displayed_scale().domain();
    assert_relative_eq!(start, 14.0, epsilon = 1e-9);
    assert_relative_eq!(end, 30.0, epsilon = 1e-9);

    controller.advance(500.0);
    let (start, end) = controller.state().axis().displayed_scale().domain();
    assert_relative_eq!(start, 20.0, epsilon = 1e-9);
    assert_relative_eq!(end, 36.0, epsilon = 1e-9);
}

#[test]
fn interrupting_click_restarts_from_displayed_position() {
    let mut controller = controller();
    controller.click_label(Dimension::Obesity).expect("to obesity");
    controller.advance(500.0);
    let displayed: Vec<f64> = controller.state().marks().iter().map(|mark| mark.cx()).collect();

    controller.click_label(Dimension::Poverty).expect("back to poverty");

    for (mark, position) in controller.state().marks().iter().zip(displayed) {
        assert_relative_eq!(mark.cx(), position, epsilon = 1e-9);
        assert!(mark.is_animating());
    }

    controller.advance(1000.0);
    let scale = controller.state().x_scale();
    for mark in controller.state().marks() {
        let record = controller.dataset().get(mark.index).expect("record");
        assert_relative_eq!(mark.cx(), scale.map(record.poverty).expect("map"), epsilon = 1e-9);
    }
}

#[test]
fn zero_duration_config_applies_instantly() {
    let config = ChartConfig::default().with_transition_duration_ms(0.0);
    let mut controller =
        ChartController::new(NullRenderer::default(), config, dataset()).expect("controller init");

    controller.click_label(Dimension::Obesity).expect("to obesity");

    assert!(!controller.is_animating());
}

#[test]
fn negative_or_non_finite_steps_are_ignored() {
    let mut controller = controller();
    controller.click_label(Dimension::Obesity).expect("to obesity");
    let before = controller.state().clone();

    controller.advance(-10.0);
    controller.advance(f64::NAN);

    assert_eq!(controller.state(), &before);
}

#[test]
fn settling_emits_one_event() {
    struct Counter(Rc<RefCell<usize>>);
    impl ChartPlugin for Counter {
        fn id(&self) -> &str {
            "counter"
        }
        fn on_event(&mut self, event: PluginEvent, _context: PluginContext) {
            if event == PluginEvent::TransitionsSettled {
                *self.0.borrow_mut() += 1;
            }
        }
    }

    let mut controller = controller();
    let settled = Rc::new(RefCell::new(0));
    controller
        .register_plugin(Box::new(Counter(settled.clone())))
        .expect("register");

    controller.click_label(Dimension::Obesity).expect("to obesity");
    controller.advance(400.0);
    controller.advance(700.0);
    controller.advance(100.0);

    assert_eq!(*settled.borrow(), 1);
}

#[test]
fn scalar_transition_retarget_uses_current_value() {
    let mut transition = Transition::settled(0.0);
    transition.retarget(100.0, 1000.0);
    transition.step(500.0);
    assert_relative_eq!(transition.current(), 50.0, epsilon = 1e-9);

    transition.retarget(0.0, 1000.0);
    assert_relative_eq!(transition.current(), 50.0, epsilon = 1e-9);
    transition.step(1000.0);
    assert_eq!(transition.current(), 0.0);
}
