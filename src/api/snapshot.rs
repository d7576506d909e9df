use serde::{Deserialize, Serialize};

use crate::core::{Dimension, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartController, TooltipBinding};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Position of one mark as displayed and as targeted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkSnapshot {
    pub abbr: String,
    pub cx: f64,
    pub target_cx: f64,
    pub cy: f64,
}

/// Deterministic view of chart state for regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub chosen_x_axis: Dimension,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub axis_displayed_domain: (f64, f64),
    pub tooltip: TooltipBinding,
    pub hovered_mark: Option<usize>,
    pub animating: bool,
    pub marks: Vec<MarkSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartController<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let state = &self.state;
        ChartSnapshot {
            viewport: self.config.viewport,
            chosen_x_axis: state.chosen_x_axis(),
            x_domain: state.x_scale().domain(),
            y_domain: state.y_scale().domain(),
            axis_displayed_domain: state.axis().displayed_scale().domain(),
            tooltip: state.tooltip(),
            hovered_mark: state.hovered_mark(),
            animating: state.is_animating(),
            marks: state
                .marks()
                .iter()
                .filter_map(|mark| {
                    let record = self.dataset.get(mark.index)?;
                    Some(MarkSnapshot {
                        abbr: record.abbr.clone(),
                        cx: mark.cx(),
                        target_cx: mark.target_cx(),
                        cy: mark.cy(),
                    })
                })
                .collect(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
