//! Calendar invite tool.

use async_trait::async_trait;
use carcare_core::error::ToolError;
use carcare_core::tool::{Tool, ToolResult};
use carcare_tasks::CarCareCoordinator;
use std::sync::Arc;

pub struct CreateCalendarInviteTool {
    coordinator: Arc<CarCareCoordinator>,
}

impl CreateCalendarInviteTool {
    pub fn new(coordinator: Arc<CarCareCoordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for CreateCalendarInviteTool {
    fn name(&self) -> &str {
        "create_calendar_invite"
    }

    fn description(&self) -> &str {
        "Simulates creating a calendar invite for a car maintenance or repair appointment, one week from now."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "event_type": {
                    "type": "string",
                    "description": "The kind of appointment, e.g. 'Repair: Worn brake pads'"
                },
                "car_details": {
                    "type": "string",
                    "description": "A short description of the car the appointment is for"
                },
                "duration_minutes": {
                    "type": "integer",
                    "description": "Appointment length in minutes (default 60)"
                }
            },
            "required": ["event_type", "car_details"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let event_type = arguments["event_type"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'event_type' argument".into()))?;
        let car_details = arguments["car_details"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'car_details' argument".into()))?;
        let duration = arguments["duration_minutes"].as_u64().map(|d| d as u32);

        let invite = self
            .coordinator
            .create_calendar_invite(event_type, car_details, duration);
        Ok(ToolResult::ok(invite.to_string()))
    }
}
