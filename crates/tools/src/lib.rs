//! Built-in tool implementations for the carcare agent.
//!
//! Tools give the LLM access to the catalog retrievers and the
//! coordinator's higher-level operations: diagnosis, maintenance
//! planning, calendar invites, and full care coordination.

pub mod car_details;
pub mod coordinate;
pub mod diagnosis;
pub mod invite;
pub mod maintenance;
pub mod retrievers;

use carcare_catalog::CatalogSet;
use carcare_core::tool::ToolRegistry;
use carcare_tasks::CarCareCoordinator;
use std::sync::Arc;

/// Create the default tool registry with all eleven built-in tools.
///
/// Every tool borrows the shared catalog set; the coordinator-backed
/// tools additionally share the coordinator.
pub fn default_registry(
    catalogs: Arc<CatalogSet>,
    coordinator: Arc<CarCareCoordinator>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(retrievers::RetrieveProblemsTool::new(
        catalogs.clone(),
    )));
    registry.register(Box::new(retrievers::RetrievePartsTool::new(
        catalogs.clone(),
    )));
    registry.register(Box::new(retrievers::DiagnoseCarProblemTool::new(
        catalogs.clone(),
    )));
    registry.register(Box::new(retrievers::EstimateRepairCostTool::new(
        catalogs.clone(),
    )));
    registry.register(Box::new(retrievers::MaintenanceScheduleTool::new(
        catalogs.clone(),
    )));
    registry.register(Box::new(retrievers::SearchCarModelsTool::new(catalogs)));
    registry.register(Box::new(car_details::RetrieveCarDetailsTool::new(
        coordinator.clone(),
    )));
    registry.register(Box::new(diagnosis::ComprehensiveDiagnosisTool::new(
        coordinator.clone(),
    )));
    registry.register(Box::new(maintenance::PlanMaintenanceTool::new(
        coordinator.clone(),
    )));
    registry.register(Box::new(invite::CreateCalendarInviteTool::new(
        coordinator.clone(),
    )));
    registry.register(Box::new(coordinate::CoordinateCarCareTool::new(
        coordinator,
    )));
    registry
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use carcare_catalog::HashEmbedder;

    pub async fn sample_catalogs() -> (tempfile::TempDir, Arc<CatalogSet>) {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            (
                "problems.json",
                r#"[{"problem": "Squealing brakes when stopping"}, {"problem": "Engine overheating in traffic"}]"#,
            ),
            (
                "parts.json",
                r#"[{"part": "Brake pad set", "price": 45}, {"part": "Radiator hose", "price": 20}]"#,
            ),
            (
                "diagnostics.json",
                r#"[{"symptom": "grinding noise when braking", "cause": "Worn brake pads"}, {"symptom": "white smoke from exhaust", "cause": "Coolant leak into cylinder"}]"#,
            ),
            (
                "cost_estimates.json",
                r#"[{"repair": "Brake pad replacement", "cost": "150-300 USD"}]"#,
            ),
            (
                "maintenance.json",
                r#"[{"mileage": 60000, "tasks": "Replace transmission fluid and inspect brakes"}]"#,
            ),
            (
                "cars_models.json",
                r#"[{"car_make": "Toyota", "car_model": "Corolla", "car_year": 2015, "common_issues": ["Brake wear", "Oil leak"], "estimated_time": "2 hours"}]"#,
            ),
        ];
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }

        let set = CatalogSet::build(dir.path(), Arc::new(HashEmbedder::new()), 5, 200)
            .await
            .unwrap();
        (dir, Arc::new(set))
    }

    pub async fn sample_coordinator() -> (tempfile::TempDir, Arc<CarCareCoordinator>) {
        let (dir, catalogs) = sample_catalogs().await;
        (dir, Arc::new(CarCareCoordinator::new(catalogs)))
    }
}
