use scatterplot_rs::api::{ChartEngine, ChartEngineConfig};
use scatterplot_rs::data::dataset_from_json_str;
use scatterplot_rs::render::{Color, SvgRenderer};

const SAMPLE: &str = r#"[
  {"name":"A","region":"X","income":[500,1000],"lifeExpectancy":[60,70],"population":[900000,1000000]},
  {"name":"B","region":"Y","income":[2000,4000],"lifeExpectancy":[65,75],"population":[2000000,2500000]}
]"#;

fn rendered_document() -> String {
    let records = dataset_from_json_str(SAMPLE).expect("parse");
    let mut engine =
        ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default()).expect("engine");
    engine.set_dataset(records).expect("set dataset");
    engine.render().expect("render");
    engine.into_renderer().into_document()
}

#[test]
fn document_has_the_canonical_frame_and_margin_translate() {
    let document = rendered_document();
    assert!(document.starts_with("<svg "));
    assert!(document.contains("width=\"960\" height=\"350\""));
    assert!(document.contains("<g transform=\"translate(39.5,19.5)\">"));
    assert!(document.trim_end().ends_with("</svg>"));
}

#[test]
fn one_circle_element_per_mark() {
    let document = rendered_document();
    assert_eq!(document.matches("<circle").count(), 2);
    assert!(document.contains("class=\"dot\""));
}

#[test]
fn toggled_off_region_drops_its_circles() {
    let records = dataset_from_json_str(SAMPLE).expect("parse");
    let mut engine =
        ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default()).expect("engine");
    engine.set_dataset(records).expect("set dataset");
    engine.toggle_region("X", false).expect("toggle");
    engine.render().expect("render");

    let document = engine.into_renderer().into_document();
    assert_eq!(document.matches("<circle").count(), 1);
}

#[test]
fn circle_fill_uses_the_palette_hex_color() {
    let document = rendered_document();
    // First palette slot goes to region X, seen first in dataset order.
    assert!(document.contains("fill=\"#1f77b4\""));
}

#[test]
fn axis_labels_are_emitted_as_text_elements() {
    let document = rendered_document();
    assert!(document.contains("<text"));
    assert!(document.contains(">1000<"));
    assert!(document.contains(">100000<"));
}

#[test]
fn empty_chart_still_renders_axes() {
    let mut engine =
        ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default()).expect("engine");
    engine.render().expect("render");

    let document = engine.into_renderer().into_document();
    assert!(document.contains("<line"));
    assert_eq!(document.matches("<circle").count(), 0);
}

#[test]
fn hex_color_round_trip_matches_the_palette_constant() {
    assert_eq!(Color::from_rgb8(0x1f, 0x77, 0xb4).to_hex_rgb(), "#1f77b4");
}
