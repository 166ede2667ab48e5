use scatterplot_rs::core::{Scale, ScaleKind};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = Scale::linear(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn log_scale_maps_geometric_mean_to_range_midpoint() {
    let scale = Scale::log(250.0, 100_000.0, 0.0, 901.0).expect("valid scale");

    // 5000 is the geometric mean of the domain endpoints.
    let px = scale.value_to_pixel(5_000.0).expect("to pixel");
    assert!((px - 450.5).abs() <= 1e-9);

    let left = scale.value_to_pixel(250.0).expect("left");
    let right = scale.value_to_pixel(100_000.0).expect("right");
    assert!((left - 0.0).abs() <= 1e-9);
    assert!((right - 901.0).abs() <= 1e-9);
}

#[test]
fn sqrt_scale_matches_closed_form() {
    let scale = Scale::sqrt(0.0, 5.0e8, 0.0, 40.0).expect("valid scale");

    let px = scale.value_to_pixel(1.25e8).expect("to pixel");
    assert!((px - 20.0).abs() <= 1e-9);

    let zero = scale.value_to_pixel(0.0).expect("zero");
    assert!((zero - 0.0).abs() <= 1e-9);
}

#[test]
fn reversed_domain_inverts_the_axis() {
    let scale = Scale::linear(84.0, 10.0, 0.0, 311.0).expect("valid scale");

    let high = scale.value_to_pixel(84.0).expect("high");
    let low = scale.value_to_pixel(10.0).expect("low");

    assert!((high - 0.0).abs() <= 1e-9);
    assert!((low - 311.0).abs() <= 1e-9);

    // Larger values plot at smaller pixels.
    let px70 = scale.value_to_pixel(70.0).expect("70");
    let px40 = scale.value_to_pixel(40.0).expect("40");
    assert!(px70 < px40);
}

#[test]
fn log_scale_round_trip_within_tolerance() {
    let scale = Scale::log(250.0, 100_000.0, 0.0, 901.0).expect("valid scale");

    let original = 1234.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    assert!((recovered - original).abs() / original <= 1e-9);
}

#[test]
fn degenerate_domain_is_rejected() {
    assert!(Scale::linear(5.0, 5.0, 0.0, 100.0).is_err());
}

#[test]
fn log_scale_rejects_non_positive_domain() {
    assert!(Scale::log(0.0, 100.0, 0.0, 100.0).is_err());
    assert!(Scale::log(-10.0, 100.0, 0.0, 100.0).is_err());
}

#[test]
fn log_scale_rejects_non_positive_input() {
    let scale = Scale::log(1.0, 100.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.value_to_pixel(0.0).is_err());
    assert!(scale.value_to_pixel(-1.0).is_err());
}

#[test]
fn sqrt_scale_rejects_negative_domain_and_input() {
    assert!(Scale::sqrt(-1.0, 100.0, 0.0, 100.0).is_err());

    let scale = Scale::sqrt(0.0, 100.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.value_to_pixel(-0.5).is_err());
}

#[test]
fn non_finite_inputs_are_rejected() {
    assert!(Scale::linear(f64::NAN, 1.0, 0.0, 1.0).is_err());
    assert!(Scale::linear(0.0, 1.0, 0.0, f64::INFINITY).is_err());

    let scale = Scale::linear(0.0, 1.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.value_to_pixel(f64::NAN).is_err());
    assert!(scale.pixel_to_value(f64::INFINITY).is_err());
}

#[test]
fn scale_reports_its_configuration() {
    let scale = Scale::sqrt(0.0, 5.0e8, 0.0, 40.0).expect("valid scale");
    assert_eq!(scale.domain(), (0.0, 5.0e8));
    assert_eq!(scale.range(), (0.0, 40.0));
    assert_eq!(scale.kind(), ScaleKind::Sqrt);
    assert!(scale.contains(1.0e6));
    assert!(!scale.contains(6.0e8));
}

#[test]
fn contains_handles_reversed_domains() {
    let scale = Scale::linear(84.0, 10.0, 0.0, 311.0).expect("valid scale");
    assert!(scale.contains(50.0));
    assert!(!scale.contains(90.0));
    assert!(!scale.contains(5.0));
}
