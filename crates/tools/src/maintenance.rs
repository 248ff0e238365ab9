//! Maintenance planning tool.

use async_trait::async_trait;
use carcare_core::error::ToolError;
use carcare_core::tool::{Tool, ToolResult};
use carcare_tasks::CarCareCoordinator;
use std::sync::Arc;

pub struct PlanMaintenanceTool {
    coordinator: Arc<CarCareCoordinator>,
}

impl PlanMaintenanceTool {
    pub fn new(coordinator: Arc<CarCareCoordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for PlanMaintenanceTool {
    fn name(&self) -> &str {
        "plan_maintenance"
    }

    fn description(&self) -> &str {
        "Creates a maintenance plan for a specific car based on its make, model, year, and mileage."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "mileage": {
                    "type": "integer",
                    "description": "The current mileage of the car"
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
                }
            },
            "required": ["mileage", "make", "model", "year"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let mileage = arguments["mileage"]
            .as_u64()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'mileage' argument".into()))?
            as u32;
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

        let plan = self.coordinator.plan_maintenance(mileage, make, model, year)?;
        Ok(ToolResult::ok(plan.to_string()))
    }
}
