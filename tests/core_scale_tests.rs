use approx::assert_relative_eq;
use linechart_rs::core::{ChartRecord, LinearScale, Sample, fit_scales, normalize};
use linechart_rs::error::ChartError;

#[test]
fn position_maps_domain_linearly_onto_range() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 1000.0)).expect("valid scale");
    assert_eq!(scale.position(0.0), 0.0);
    assert_eq!(scale.position(10.0), 1000.0);
    assert_relative_eq!(scale.position(2.5), 250.0);
}

#[test]
fn inverted_range_draws_larger_values_higher() {
    let scale = LinearScale::new((0.0, 100.0), (400.0, 0.0)).expect("valid scale");
    assert_eq!(scale.position(0.0), 400.0);
    assert_eq!(scale.position(100.0), 0.0);
    assert_relative_eq!(scale.position(75.0), 100.0);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((5.0, 5.0), (0.0, 300.0)).expect("valid scale");
    let position = scale.position(5.0);
    assert!(position.is_finite());
    assert_eq!(position, 150.0);
    // Any probe value collapses to the same finite position.
    assert_eq!(scale.position(-1.0), 150.0);
    assert_eq!(scale.ticks(10), vec![5.0]);
}

#[test]
fn nice_rounds_the_domain_outward() {
    let scale = LinearScale::new((0.1, 9.7), (0.0, 100.0))
        .expect("valid scale")
        .nice(10);
    assert_eq!(scale.domain(), (0.0, 10.0));
}

#[test]
fn nice_keeps_an_already_nice_domain() {
    let scale = LinearScale::new((1.0, 3.0), (0.0, 100.0))
        .expect("valid scale")
        .nice(10);
    assert_eq!(scale.domain(), (1.0, 3.0));
}

#[test]
fn ticks_align_to_round_increments() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(10.0));
    assert_relative_eq!(ticks[3], 3.0);
}

#[test]
fn sub_unit_tick_steps_stay_exact() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks.len(), 11);
    // Reciprocal stepping avoids accumulating 0.1 rounding error.
    assert_eq!(ticks[3], 0.3);
    assert_eq!(ticks[7], 0.7);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
}

#[test]
fn fit_scales_uses_exact_x_extent_and_niced_y_extent() {
    let record = ChartRecord::from_samples(
        "T",
        vec![
            Sample::single(0.0, Some(1.0)),
            Sample::single(1.0, None),
            Sample::single(2.0, Some(3.0)),
        ],
    )
    .expect("valid record");
    let normalized = normalize(&record);

    let scales = fit_scales(&normalized, 1020.0, 420.0, 10).expect("fit");
    assert_eq!(scales.x.domain(), (0.0, 2.0));
    assert_eq!(scales.x.range(), (0.0, 1020.0));
    // [1, 3] is already aligned to 0.2 steps, so nicing leaves it alone.
    assert_eq!(scales.y.domain(), (1.0, 3.0));
    assert_eq!(scales.y.range(), (420.0, 0.0));
}

#[test]
fn fit_scales_spans_all_series_of_a_multi_record() {
    let record = ChartRecord::from_samples(
        "T",
        vec![
            Sample::multi(0.0, [Some(10.0), Some(-10.0)]),
            Sample::multi(4.0, [Some(20.0), Some(40.0)]),
        ],
    )
    .expect("valid record");
    let normalized = normalize(&record);

    let scales = fit_scales(&normalized, 1000.0, 400.0, 10).expect("fit");
    assert_eq!(scales.x.domain(), (0.0, 4.0));
    let (y_min, y_max) = scales.y.domain();
    assert!(y_min <= -10.0);
    assert!(y_max >= 40.0);
}

#[test]
fn fit_scales_rejects_empty_data() {
    let record = ChartRecord::from_samples("T", Vec::new()).expect("empty record");
    let normalized = normalize(&record);
    let result = fit_scales(&normalized, 1000.0, 400.0, 10);
    assert!(matches!(result, Err(ChartError::EmptyDomain)));
}

#[test]
fn all_equal_values_produce_finite_geometry_inputs() {
    let record = ChartRecord::from_samples(
        "T",
        vec![Sample::single(3.0, Some(7.0)), Sample::single(3.0, Some(7.0))],
    )
    .expect("valid record");
    let normalized = normalize(&record);

    let scales = fit_scales(&normalized, 1000.0, 400.0, 10).expect("fit");
    assert!(scales.x.position(3.0).is_finite());
    assert!(scales.y.position(7.0).is_finite());
}
