use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::engine::ChartEngine;
use super::reconcile::MarkEncoding;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// One rendered mark as captured by a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkSnapshot {
    pub name: String,
    pub encoding: MarkEncoding,
}

/// Serializable view of the engine's filter and mark state.
///
/// Intended for debugging and differential tests; it is not a persistence
/// format for the dataset itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub filtering_enabled: bool,
    pub active_regions: Vec<String>,
    pub view_names: Vec<String>,
    pub marks: Vec<MarkSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            filtering_enabled: self.config().filtering_enabled,
            active_regions: self
                .active_regions()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            view_names: self.view_state().names().map(str::to_owned).collect(),
            marks: self
                .rendered_marks()
                .iter()
                .map(|(name, encoding)| MarkSnapshot {
                    name: name.to_owned(),
                    encoding,
                })
                .collect(),
        }
    }
}
