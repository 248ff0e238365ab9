//! Car details lookup tool.

use async_trait::async_trait;
use carcare_core::error::ToolError;
use carcare_core::tool::{Tool, ToolResult};
use carcare_tasks::CarCareCoordinator;
use std::sync::Arc;

pub struct RetrieveCarDetailsTool {
    coordinator: Arc<CarCareCoordinator>,
}

impl RetrieveCarDetailsTool {
    pub fn new(coordinator: Arc<CarCareCoordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for RetrieveCarDetailsTool {
    fn name(&self) -> &str {
        "retrieve_car_details"
    }

    fn description(&self) -> &str {
        "Retrieves the car's details and known common issues for a specific make, model, and year."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
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
                }
            },
            "required": ["make", "model", "year"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
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

        let details = self.coordinator.retrieve_car_details(make, model, year)?;
        Ok(ToolResult::ok(details))
    }
}
