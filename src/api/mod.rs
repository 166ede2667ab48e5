mod engine;
mod engine_config;
mod filter;
mod projection;
mod reconcile;
mod snapshot;
mod view_state;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, InitialVisibility};
pub use filter::RegionFilter;
pub use projection::{MarkScales, paint_order, project_mark, project_marks};
pub use reconcile::{MarkEncoding, MarkSet, MarkUpdatePolicy, ReconcileOutcome};
pub use snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1, MarkSnapshot,
};
pub use view_state::ViewState;
