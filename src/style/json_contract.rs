use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::ChartDesign;

pub const CHART_DESIGN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDesignJsonContractV1 {
    pub schema_version: u32,
    pub design: ChartDesign,
}

impl ChartDesign {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDesignJsonContractV1 {
            schema_version: CHART_DESIGN_JSON_SCHEMA_V1,
            design: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize design contract v1: {e}"))
        })
    }

    /// Loads a design from either a versioned contract or a bare design object.
    ///
    /// Payloads carrying `schema_version` are read strictly as a contract. The
    /// loaded design is validated before it is returned.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse design json payload: {e}"))
        })?;

        let design = if value.get("schema_version").is_some() {
            let payload: ChartDesignJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidData(format!("failed to parse design contract v1: {e}"))
                })?;
            if payload.schema_version != CHART_DESIGN_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported design schema version: {}",
                    payload.schema_version
                )));
            }
            payload.design
        } else {
            debug!("design json has no schema version, reading bare design");
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse design json payload: {e}"))
            })?
        };

        design.validate()?;
        Ok(design)
    }
}
