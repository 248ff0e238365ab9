//! Diagnosis, maintenance planning, and scheduling logic.
//!
//! The `CarCareCoordinator` composes catalog retrievals and the car-model
//! lookup into structured results (`DiagnosisReport`, `MaintenancePlan`,
//! `CalendarInvite`). Each result type carries named fields and renders its
//! human-readable form through `Display`, so downstream consumers read
//! fields rather than re-parsing prose.

pub mod clock;
pub mod coordinator;
pub mod diagnosis;
pub mod invite;
pub mod maintenance;

pub use clock::{Clock, SystemClock};
pub use coordinator::CarCareCoordinator;
pub use diagnosis::DiagnosisReport;
pub use invite::CalendarInvite;
pub use maintenance::MaintenancePlan;
