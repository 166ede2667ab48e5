use scatterplot_rs::api::{ChartEngine, ChartEngineConfig, MarkUpdatePolicy};
use scatterplot_rs::core::{ChartLayout, Margins, Viewport};
use scatterplot_rs::data::dataset_from_json_str;
use scatterplot_rs::render::NullRenderer;

const TWO_NATIONS: &str = r#"[
  {"name":"A","region":"X","income":[800,1000],"lifeExpectancy":[65,70],"population":[900000,1000000]},
  {"name":"B","region":"Y","income":[3000,4000],"lifeExpectancy":[70,75],"population":[2000000,2500000]}
]"#;

#[test]
fn end_to_end_toggle_scenario() {
    let records = dataset_from_json_str(TWO_NATIONS).expect("parse");
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");

    engine.set_dataset(records).expect("set dataset");
    assert_eq!(engine.rendered_marks().len(), 2);

    engine.toggle_region("X", false).expect("toggle X off");
    assert!(!engine.rendered_marks().contains("A"));
    assert!(engine.rendered_marks().contains("B"));
    assert_eq!(engine.rendered_marks().len(), 1);

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_circle_count, 1);
}

#[test]
fn config_json_round_trip() {
    let config = ChartEngineConfig::new(
        ChartLayout::new(Viewport::new(800, 400), Margins::default()).expect("layout"),
    )
    .with_income_domain(100.0, 50_000.0)
    .with_max_mark_radius(25.0)
    .with_mark_update_policy(MarkUpdatePolicy::OneShot);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_json_defaults_apply_to_omitted_fields() {
    let parsed = ChartEngineConfig::from_json_str(
        r#"{"layout":{"viewport":{"width":960,"height":350},
            "margins":{"top":19.5,"right":19.5,"bottom":19.5,"left":39.5}}}"#,
    )
    .expect("parse");

    assert_eq!(parsed.income_domain, (250.0, 100_000.0));
    assert_eq!(parsed.life_expectancy_domain, (84.0, 10.0));
    assert_eq!(parsed.population_domain, (0.0, 5.0e8));
    assert_eq!(parsed.max_mark_radius, 40.0);
    assert!(parsed.filtering_enabled);
}

#[test]
fn built_scales_cover_the_canvas() {
    let config = ChartEngineConfig::default();
    let scales = config.build_scales().expect("scales");

    assert_eq!(scales.x.range(), (0.0, 901.0));
    assert_eq!(scales.y.range(), (0.0, 311.0));
    assert_eq!(scales.radius.range(), (0.0, 40.0));
}

#[test]
fn invalid_config_is_rejected_at_engine_init() {
    let config = ChartEngineConfig::default().with_max_mark_radius(0.0);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());

    let config = ChartEngineConfig::default().with_income_domain(0.0, 100_000.0);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn mark_positions_follow_the_scales() {
    let records = dataset_from_json_str(TWO_NATIONS).expect("parse");
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.set_dataset(records).expect("set dataset");

    let scales = engine.scales();
    let mark = engine.rendered_marks().get("A").expect("mark A");
    assert!((mark.x - scales.x.value_to_pixel(1_000.0).expect("x")).abs() <= 1e-9);
    assert!((mark.y - scales.y.value_to_pixel(70.0).expect("y")).abs() <= 1e-9);
    assert!((mark.radius - scales.radius.value_to_pixel(1_000_000.0).expect("r")).abs() <= 1e-9);
}
