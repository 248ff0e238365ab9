//! Maintenance plan assembly.

use std::fmt;

/// A maintenance plan for a specific car at a specific mileage.
///
/// `tasks` holds the matched record's common issues in their original
/// order; empty means no record matched. The next task to schedule is
/// `tasks.first()` — consumers never parse the rendered plan.
#[derive(Debug, Clone)]
pub struct MaintenancePlan {
    pub mileage: u32,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub car_details: String,
    pub tasks: Vec<String>,
    pub estimated_time: Option<String>,
}

impl fmt::Display for MaintenancePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Maintenance Plan for {} {} {} at {} miles:",
            self.car_year, self.car_make, self.car_model, self.mileage
        )?;
        writeln!(f)?;
        writeln!(f, "Car Details: {}", self.car_details)?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(
                f,
                "No specific maintenance tasks found for this car model and mileage."
            )?;
        } else {
            writeln!(f, "Common Issues:")?;
            for task in &self.tasks {
                writeln!(f, "- {task}")?;
            }
            if let Some(time) = &self.estimated_time {
                writeln!(f)?;
                writeln!(f, "Estimated Time: {time}")?;
            }
        }

        writeln!(f)?;
        write!(
            f,
            "Please consult with our certified mechanic for a more personalized maintenance plan."
        )
    }
}
