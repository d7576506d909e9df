use health_scatter::core::{LinearScale, Margins, PlotArea, Viewport};

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original).expect("to pixel");
    let recovered = scale.invert(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn inverted_range_puts_larger_values_higher() {
    let scale = LinearScale::new(0.0, 20.0, 470.0, 0.0).expect("valid scale");

    assert_eq!(scale.map(0.0).expect("bottom"), 470.0);
    assert_eq!(scale.map(20.0).expect("top"), 0.0);
}

#[test]
fn zero_span_domain_is_rejected() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 10.0, 10.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 10.0).is_err());
}

#[test]
fn non_finite_value_is_rejected() {
    let scale = LinearScale::new(0.0, 1.0, 0.0, 100.0).expect("valid scale");

    assert!(scale.map(f64::INFINITY).is_err());
    assert!(scale.invert(f64::NAN).is_err());
}

#[test]
fn interpolate_blends_domains_and_clamps_progress() {
    let from = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("from");
    let to = LinearScale::new(10.0, 30.0, 0.0, 100.0).expect("to");

    assert_eq!(from.interpolate(to, 0.5).domain(), (5.0, 20.0));
    assert_eq!(from.interpolate(to, 2.0).domain(), (10.0, 30.0));
    assert_eq!(from.interpolate(to, -1.0).domain(), (0.0, 10.0));
}

#[test]
fn ticks_cover_domain_with_round_steps() {
    let scale = LinearScale::new(19.76, 43.08, 0.0, 760.0).expect("valid scale");

    let ticks = scale.ticks(10);
    assert_eq!(scale.tick_step(10), Some(2.0));
    assert_eq!(ticks.first().copied(), Some(20.0));
    assert_eq!(ticks.last().copied(), Some(42.0));
    assert!(ticks.windows(2).all(|pair| pair[1] > pair[0]));
}

#[test]
fn zero_tick_count_yields_no_ticks() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("valid scale");

    assert!(scale.ticks(0).is_empty());
    assert_eq!(scale.tick_step(0), None);
}

#[test]
fn plot_area_round_trips_surface_coordinates() {
    let area = PlotArea::resolve(Viewport::new(900, 600), Margins::default()).expect("area");

    let (x, y) = area.to_surface(12.0, 34.0);
    assert_eq!((x, y), (112.0, 74.0));
    assert_eq!(area.to_local(x, y), (12.0, 34.0));
}

#[test]
fn invalid_viewport_is_rejected() {
    assert!(PlotArea::resolve(Viewport::new(0, 600), Margins::default()).is_err());
}
