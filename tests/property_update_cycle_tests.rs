use std::collections::BTreeSet;

use proptest::prelude::*;
use scatterplot_rs::api::{ChartEngine, ChartEngineConfig, InitialVisibility};
use scatterplot_rs::data::NationRecord;
use scatterplot_rs::render::NullRenderer;

const REGIONS: [&str; 4] = ["Africa", "America", "East Asia", "Europe"];

fn dataset(records_per_region: usize) -> Vec<NationRecord> {
    let mut records = Vec::new();
    for (region_index, region) in REGIONS.iter().enumerate() {
        for record_index in 0..records_per_region {
            let name = format!("{region}-{record_index}");
            records.push(
                NationRecord::new(
                    name,
                    *region,
                    vec![500.0 + 100.0 * (region_index * records_per_region + record_index) as f64],
                    vec![40.0 + record_index as f64],
                    vec![1.0e6 * (1.0 + record_index as f64)],
                )
                .expect("valid record"),
            );
        }
    }
    records
}

proptest! {
    #[test]
    fn marks_always_mirror_the_active_filter_set(
        toggles in proptest::collection::vec((0usize..REGIONS.len(), proptest::bool::ANY), 0..32),
        records_per_region in 1usize..5
    ) {
        let config = ChartEngineConfig::default()
            .with_initial_visibility(InitialVisibility::NoneVisible);
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_dataset(dataset(records_per_region)).expect("set dataset");

        let mut active: BTreeSet<&str> = BTreeSet::new();
        for (region_index, enabled) in toggles {
            let region = REGIONS[region_index];
            engine.toggle_region(region, enabled).expect("toggle");
            if enabled {
                active.insert(region);
            } else {
                active.remove(region);
            }

            // The mark set is exactly the records of active regions.
            let expected: BTreeSet<String> = engine
                .dataset()
                .iter()
                .filter(|record| active.contains(record.region.as_str()))
                .map(|record| record.name.clone())
                .collect();
            let rendered: BTreeSet<String> = engine
                .rendered_marks()
                .iter()
                .map(|(name, _)| name.to_owned())
                .collect();
            prop_assert_eq!(&rendered, &expected);

            // And no duplicate names ever appear.
            prop_assert_eq!(engine.rendered_marks().len(), expected.len());
            prop_assert_eq!(engine.view_state().len(), expected.len());
        }
    }

    #[test]
    fn render_is_always_valid_after_any_toggle_sequence(
        toggles in proptest::collection::vec((0usize..REGIONS.len(), proptest::bool::ANY), 0..16)
    ) {
        let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
            .expect("engine init");
        engine.set_dataset(dataset(3)).expect("set dataset");

        for (region_index, enabled) in toggles {
            engine.toggle_region(REGIONS[region_index], enabled).expect("toggle");
            engine.render().expect("render");
            prop_assert_eq!(
                engine.renderer().last_circle_count,
                engine.rendered_marks().len()
            );
        }
    }
}
