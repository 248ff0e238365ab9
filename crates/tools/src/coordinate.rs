//! End-to-end care coordination tool.

use async_trait::async_trait;
use carcare_core::error::ToolError;
use carcare_core::tool::{Tool, ToolResult};
use carcare_tasks::CarCareCoordinator;
use std::sync::Arc;
use tracing::info;

pub struct CoordinateCarCareTool {
    coordinator: Arc<CarCareCoordinator>,
}

impl CoordinateCarCareTool {
    pub fn new(coordinator: Arc<CarCareCoordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for CoordinateCarCareTool {
    fn name(&self) -> &str {
        "coordinate_car_care"
    }

    fn description(&self) -> &str {
        "Coordinates overall car care: diagnoses problems or plans maintenance based on the query, then schedules an appointment."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The owner's request in their own words"
                },
                "make": {
                    "type": "string",
                    "description": "The car's make, e.g. Toyota"
                },
                "model": {
                    "type": "string",
                    "description": "The car's model, e.g. Corolla"
                },
                "year": {
                    "type": "integer",
                    "description": "The car's model year"
                },
                "mileage": {
                    "type": "integer",
                    "description": "The current mileage of the car"
                }
            },
            "required": ["query", "make", "model", "year", "mileage"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = arguments["query"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'query' argument".into()))?;
        let make = arguments["make"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'make' argument".into()))?;
        let model = arguments["model"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'model' argument".into()))?;
        let year = arguments["year"]
            .as_i64()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'year' argument".into()))?
            as i32;
        let mileage = arguments["mileage"]
            .as_u64()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'mileage' argument".into()))?
            as u32;

        info!(make, model, year, mileage, "Coordinating car care");
        let plan = self
            .coordinator
            .coordinate_car_care(query, make, model, year, mileage)
            .await?;
        Ok(ToolResult::ok(plan))
    }
}
