//! Comprehensive diagnosis tool.

use async_trait::async_trait;
use carcare_core::error::ToolError;
use carcare_core::tool::{Tool, ToolResult};
use carcare_tasks::CarCareCoordinator;
use std::sync::Arc;

pub struct ComprehensiveDiagnosisTool {
    coordinator: Arc<CarCareCoordinator>,
}

impl ComprehensiveDiagnosisTool {
    pub fn new(coordinator: Arc<CarCareCoordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for ComprehensiveDiagnosisTool {
    fn name(&self) -> &str {
        "comprehensive_diagnosis"
    }

    fn description(&self) -> &str {
        "Provides a comprehensive diagnosis for the given symptoms, including possible causes, estimated costs, and required parts."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "symptoms": {
                    "type": "string",
                    "description": "The symptoms the car is exhibiting"
                }
            },
            "required": ["symptoms"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let symptoms = arguments["symptoms"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'symptoms' argument".into()))?;

        let report = self.coordinator.comprehensive_diagnosis(symptoms).await?;
        Ok(ToolResult::ok(report.to_string()))
    }
}
