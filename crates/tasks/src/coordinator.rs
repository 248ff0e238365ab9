//! The CarCareCoordinator — business logic over the catalog set.
//!
//! Composes retrievals and the car-model lookup into diagnosis reports,
//! maintenance plans, and calendar invites, and routes free-text queries
//! between the repair and routine-maintenance flows.

use crate::clock::{Clock, SystemClock};
use crate::diagnosis::DiagnosisReport;
use crate::invite::CalendarInvite;
use crate::maintenance::MaintenancePlan;
use carcare_catalog::{CatalogKind, CatalogSet};
use carcare_core::error::CatalogError;
use std::sync::Arc;
use tracing::debug;

pub struct CarCareCoordinator {
    catalogs: Arc<CatalogSet>,
    clock: Arc<dyn Clock>,
}

impl CarCareCoordinator {
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self {
            catalogs,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock (tests use a fixed instant).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Retrieve the car's details and common issues, if any.
    ///
    /// Mileage is fixed at 0 — the sentinel for "general info, not
    /// mileage-specific".
    pub fn retrieve_car_details(
        &self,
        make: &str,
        model: &str,
        year: i32,
    ) -> Result<String, CatalogError> {
        let car = self.catalogs.lookup_car_model(0, make, model, year)?;
        Ok(match car {
            // A matched record reports itself with the catalog's casing
            Some(car) => format!(
                "{} {} {} - Common Issues: {}",
                car.car_year,
                car.car_make,
                car.car_model,
                car.common_issues.join(", ")
            ),
            None => format!("{year} {make} {model} - No common issues found."),
        })
    }

    /// Build a comprehensive diagnosis from the symptom description.
    ///
    /// The likely cause feeds the cost-estimate and parts retrievals, so an
    /// empty diagnostics result degrades those lookups to "Unknown issue"
    /// rather than erroring.
    pub async fn comprehensive_diagnosis(
        &self,
        symptoms: &str,
    ) -> Result<DiagnosisReport, CatalogError> {
        let cause_docs = self.catalogs.search(CatalogKind::Diagnostics, symptoms).await?;
        let possible_causes = self.catalogs.snippets(&cause_docs);
        let likely_cause = possible_causes
            .first()
            .map(String::as_str)
            .unwrap_or("Unknown issue");

        let cost_docs = self
            .catalogs
            .search(CatalogKind::CostEstimates, likely_cause)
            .await?;
        let part_docs = self.catalogs.search(CatalogKind::Parts, likely_cause).await?;

        debug!(
            causes = possible_causes.len(),
            costs = cost_docs.len(),
            parts = part_docs.len(),
            "Assembled diagnosis"
        );

        Ok(DiagnosisReport::new(
            symptoms,
            possible_causes,
            self.catalogs.snippets(&cost_docs),
            self.catalogs.snippets(&part_docs),
        ))
    }

    /// Build a maintenance plan for the car at the given mileage.
    pub fn plan_maintenance(
        &self,
        mileage: u32,
        make: &str,
        model: &str,
        year: i32,
    ) -> Result<MaintenancePlan, CatalogError> {
        let car_details = self.retrieve_car_details(make, model, year)?;
        let car = self.catalogs.lookup_car_model(mileage, make, model, year)?;

        let (tasks, estimated_time) = match car {
            Some(car) => (car.common_issues, Some(car.estimated_time)),
            None => (Vec::new(), None),
        };

        Ok(MaintenancePlan {
            mileage,
            car_make: make.to_string(),
            car_model: model.to_string(),
            car_year: year,
            car_details,
            tasks,
            estimated_time,
        })
    }

    /// Simulate creating a calendar invite for a maintenance or repair
    /// event.
    pub fn create_calendar_invite(
        &self,
        event_type: &str,
        car_details: &str,
        duration_minutes: Option<u32>,
    ) -> CalendarInvite {
        CalendarInvite::schedule(
            self.clock.as_ref(),
            event_type,
            car_details,
            duration_minutes,
        )
    }

    /// Coordinate overall car care: diagnose or plan, then schedule.
    ///
    /// Intent routing is a plain substring check — a query mentioning
    /// "problem" or "issue" goes down the repair path, everything else is
    /// treated as routine maintenance.
    pub async fn coordinate_car_care(
        &self,
        query: &str,
        make: &str,
        model: &str,
        year: i32,
        mileage: u32,
    ) -> Result<String, CatalogError> {
        let car_details = self.retrieve_car_details(make, model, year)?;
        let lowered = query.to_lowercase();

        let mut plan = if lowered.contains("problem") || lowered.contains("issue") {
            let diagnosis = self.comprehensive_diagnosis(query).await?;
            let invite = self.create_calendar_invite(
                &format!("Repair: {}", diagnosis.likely_cause),
                &car_details,
                None,
            );

            let mut text = format!("Based on your query, here's a diagnosis:\n\n{diagnosis}\n\n");
            text.push_str(&format!(
                "I've prepared a calendar invite for the repair:\n\n{invite}\n\n"
            ));
            text
        } else {
            let maintenance_plan = self.plan_maintenance(mileage, make, model, year)?;
            let next_task = maintenance_plan
                .tasks
                .first()
                .map(String::as_str)
                .unwrap_or("Routine service");
            let invite = self.create_calendar_invite(
                &format!("Maintenance: {next_task}"),
                &car_details,
                None,
            );

            let mut text = format!("Here's your maintenance plan:\n\n{maintenance_plan}\n\n");
            text.push_str(&format!(
                "I've prepared a calendar invite for your next maintenance task:\n\n{invite}\n\n"
            ));
            text
        };

        plan.push_str(
            "Remember to consult with a professional mechanic for personalized advice and service.",
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock::FixedClock;
    use carcare_catalog::HashEmbedder;
    use chrono::{Local, TimeZone};

    async fn coordinator() -> (tempfile::TempDir, CarCareCoordinator) {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            (
                "problems.json",
                r#"[{"problem": "Squealing brakes when stopping"}]"#,
            ),
            (
                "parts.json",
                r#"[{"part": "Brake pad set", "price": 45}, {"part": "Oil filter", "price": 12}]"#,
            ),
            (
                "diagnostics.json",
                r#"[{"symptom": "grinding noise when braking", "cause": "Worn brake pads"}, {"symptom": "oil spots under car", "cause": "Valve cover gasket leak"}]"#,
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

        let catalogs = Arc::new(
            CatalogSet::build(dir.path(), Arc::new(HashEmbedder::new()), 5, 200)
                .await
                .unwrap(),
        );
        let clock = FixedClock(Local.with_ymd_and_hms(2024, 3, 1, 15, 30, 0).unwrap());
        let coord = CarCareCoordinator::new(catalogs).with_clock(Arc::new(clock));
        (dir, coord)
    }

    #[tokio::test]
    async fn car_details_formats_known_model() {
        let (_dir, coord) = coordinator().await;
        let details = coord.retrieve_car_details("toyota", "corolla", 2015).unwrap();
        // Case-insensitive match, catalog casing in the output
        assert_eq!(
            details,
            "2015 Toyota Corolla - Common Issues: Brake wear, Oil leak"
        );
    }

    #[tokio::test]
    async fn car_details_formats_unknown_model() {
        let (_dir, coord) = coordinator().await;
        let details = coord.retrieve_car_details("Ford", "Focus", 2012).unwrap();
        assert_eq!(details, "2012 Ford Focus - No common issues found.");
    }

    #[tokio::test]
    async fn diagnosis_uses_first_cause_for_downstream_lookups() {
        let (_dir, coord) = coordinator().await;
        let report = coord
            .comprehensive_diagnosis("grinding noise when braking hard")
            .await
            .unwrap();
        assert!(!report.possible_causes.is_empty());
        assert_eq!(report.likely_cause, report.possible_causes[0]);
        assert!(report.to_string().contains("Most Likely Cause:"));
    }

    #[tokio::test]
    async fn plan_includes_every_issue_in_order() {
        let (_dir, coord) = coordinator().await;
        let plan = coord
            .plan_maintenance(60000, "Toyota", "Corolla", 2015)
            .unwrap();
        assert_eq!(plan.tasks, vec!["Brake wear", "Oil leak"]);
        let text = plan.to_string();
        assert!(text.contains("- Brake wear"));
        assert!(text.contains("- Oil leak"));
        assert!(text.contains("Estimated Time: 2 hours"));
    }

    #[tokio::test]
    async fn plan_for_unknown_model_has_no_tasks() {
        let (_dir, coord) = coordinator().await;
        let plan = coord.plan_maintenance(30000, "Mazda", "3", 2020).unwrap();
        assert!(plan.tasks.is_empty());
        assert!(plan.to_string().contains("No specific maintenance tasks found"));
    }

    #[tokio::test]
    async fn issue_query_takes_the_repair_branch() {
        let (_dir, coord) = coordinator().await;
        let out = coord
            .coordinate_car_care("My car has an issue", "Toyota", "Corolla", 2015, 60000)
            .await
            .unwrap();
        assert!(out.contains("here's a diagnosis"));
        assert!(out.contains("calendar invite for the repair"));
        assert!(!out.contains("maintenance plan"));
    }

    #[tokio::test]
    async fn problem_query_takes_the_repair_branch() {
        let (_dir, coord) = coordinator().await;
        let out = coord
            .coordinate_car_care(
                "There is a PROBLEM with my brakes",
                "Toyota",
                "Corolla",
                2015,
                60000,
            )
            .await
            .unwrap();
        assert!(out.contains("here's a diagnosis"));
    }

    #[tokio::test]
    async fn other_queries_take_the_maintenance_branch() {
        let (_dir, coord) = coordinator().await;
        let out = coord
            .coordinate_car_care(
                "What service is due at 60000 miles?",
                "Toyota",
                "Corolla",
                2015,
                60000,
            )
            .await
            .unwrap();
        assert!(out.contains("Here's your maintenance plan"));
        // Next task comes from the plan's first common issue
        assert!(out.contains("Maintenance: Brake wear"));
        assert!(out.ends_with("personalized advice and service."));
    }

    #[tokio::test]
    async fn maintenance_branch_handles_unknown_model() {
        let (_dir, coord) = coordinator().await;
        let out = coord
            .coordinate_car_care("Routine checkup please", "Mazda", "3", 2020, 30000)
            .await
            .unwrap();
        assert!(out.contains("Maintenance: Routine service"));
    }
}
