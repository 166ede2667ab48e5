use scatterplot_rs::core::Scale;
use scatterplot_rs::render::{format_tick_value, linear_ticks, log_ticks};

#[test]
fn linear_ticks_step_at_a_nice_interval() {
    let scale = Scale::linear(84.0, 10.0, 0.0, 311.0).expect("valid scale");
    let ticks = linear_ticks(scale, 10).expect("ticks");

    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
    for tick in &ticks {
        assert!(tick.label.is_some());
    }

    // The domain is reversed, so the smallest value sits at the bottom.
    let bottom = ticks.first().expect("first tick");
    assert!((bottom.pixel - 311.0).abs() <= 1e-9);
}

#[test]
fn log_ticks_subdivide_each_decade() {
    let scale = Scale::log(250.0, 100_000.0, 0.0, 901.0).expect("valid scale");
    let ticks = log_ticks(scale).expect("ticks");

    // 300..900, 1000..9000, 10000..90000, 100000.
    assert_eq!(ticks.len(), 26);

    let labeled: Vec<f64> = ticks
        .iter()
        .filter(|tick| tick.label.is_some())
        .map(|tick| tick.value)
        .collect();
    assert_eq!(labeled, vec![1_000.0, 10_000.0, 100_000.0]);

    for pair in ticks.windows(2) {
        assert!(pair[0].value < pair[1].value);
        assert!(pair[0].pixel < pair[1].pixel);
    }
}

#[test]
fn log_ticks_exclude_values_outside_the_domain() {
    let scale = Scale::log(250.0, 100_000.0, 0.0, 901.0).expect("valid scale");
    let ticks = log_ticks(scale).expect("ticks");

    assert!(ticks.iter().all(|tick| tick.value >= 250.0));
    assert!(ticks.iter().all(|tick| tick.value <= 100_000.0));
}

#[test]
fn zero_tick_target_is_rejected() {
    let scale = Scale::linear(0.0, 10.0, 0.0, 100.0).expect("valid scale");
    assert!(linear_ticks(scale, 0).is_err());
}

#[test]
fn tick_labels_use_plain_decimal_form() {
    assert_eq!(format_tick_value(100_000.0), "100000");
    assert_eq!(format_tick_value(10.0), "10");
    assert_eq!(format_tick_value(2.5), "2.5");
    assert_eq!(format_tick_value(0.0), "0");
}
