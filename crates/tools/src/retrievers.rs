//! Catalog retrieval tools.
//!
//! Six thin wrappers over the catalog set, one per collection. Each
//! returns the rendered snippet list so the LLM sees the same compact
//! form regardless of collection.

use async_trait::async_trait;
use carcare_catalog::CatalogSet;
use carcare_core::error::ToolError;
use carcare_core::tool::{Tool, ToolResult};
use std::sync::Arc;

fn require_str<'a>(arguments: &'a serde_json::Value, key: &str) -> Result<&'a str, ToolError> {
    arguments[key]
        .as_str()
        .ok_or_else(|| ToolError::InvalidArguments(format!("Missing '{key}' argument")))
}

fn query_schema(key: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            key: {
                "type": "string",
                "description": description
            }
        },
        "required": [key]
    })
}

pub struct RetrieveProblemsTool {
    catalogs: Arc<CatalogSet>,
}

impl RetrieveProblemsTool {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl Tool for RetrieveProblemsTool {
    fn name(&self) -> &str {
        "retrieve_problems"
    }

    fn description(&self) -> &str {
        "Searches the problem catalog to find relevant automotive problems for the query."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        query_schema("query", "Free-text description of the problem to look up")
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = require_str(&arguments, "query")?;
        let output = self.catalogs.retrieve_problems(query).await?;
        Ok(ToolResult::ok(output))
    }
}

pub struct RetrievePartsTool {
    catalogs: Arc<CatalogSet>,
}

impl RetrievePartsTool {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl Tool for RetrievePartsTool {
    fn name(&self) -> &str {
        "retrieve_parts"
    }

    fn description(&self) -> &str {
        "Searches the parts catalog to find relevant automotive parts for the query."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        query_schema("query", "Free-text description of the part to look up")
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = require_str(&arguments, "query")?;
        let output = self.catalogs.retrieve_parts(query).await?;
        Ok(ToolResult::ok(output))
    }
}

pub struct DiagnoseCarProblemTool {
    catalogs: Arc<CatalogSet>,
}

impl DiagnoseCarProblemTool {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl Tool for DiagnoseCarProblemTool {
    fn name(&self) -> &str {
        "diagnose_car_problem"
    }

    fn description(&self) -> &str {
        "Uses the diagnostics catalog to find potential causes for the given symptoms."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        query_schema("symptoms", "The symptoms the car is exhibiting")
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let symptoms = require_str(&arguments, "symptoms")?;
        let output = self.catalogs.diagnose_car_problem(symptoms).await?;
        Ok(ToolResult::ok(output))
    }
}

pub struct EstimateRepairCostTool {
    catalogs: Arc<CatalogSet>,
}

impl EstimateRepairCostTool {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl Tool for EstimateRepairCostTool {
    fn name(&self) -> &str {
        "estimate_repair_cost"
    }

    fn description(&self) -> &str {
        "Provides cost estimates for a given car problem or repair."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        query_schema("problem", "The problem or repair to estimate the cost of")
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let problem = require_str(&arguments, "problem")?;
        let output = self.catalogs.estimate_repair_cost(problem).await?;
        Ok(ToolResult::ok(output))
    }
}

pub struct MaintenanceScheduleTool {
    catalogs: Arc<CatalogSet>,
}

impl MaintenanceScheduleTool {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl Tool for MaintenanceScheduleTool {
    fn name(&self) -> &str {
        "get_maintenance_schedule"
    }

    fn description(&self) -> &str {
        "Retrieves the recommended maintenance schedule based on the car's mileage."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "mileage": {
                    "type": "integer",
                    "description": "The current mileage of the car"
                }
            },
            "required": ["mileage"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let mileage = arguments["mileage"]
            .as_u64()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'mileage' argument".into()))?
            as u32;
        let output = self.catalogs.get_maintenance_schedule(mileage).await?;
        Ok(ToolResult::ok(output))
    }
}

pub struct SearchCarModelsTool {
    catalogs: Arc<CatalogSet>,
}

impl SearchCarModelsTool {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl Tool for SearchCarModelsTool {
    fn name(&self) -> &str {
        "search_car_models"
    }

    fn description(&self) -> &str {
        "Searches the car-model catalog for models matching the query."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        query_schema("query", "Free-text description of the car model to look up")
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = require_str(&arguments, "query")?;
        let output = self.catalogs.search_car_models(query).await?;
        Ok(ToolResult::ok(output))
    }
}
