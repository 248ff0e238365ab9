//! Calendar invite text generation.
//!
//! A pure text simulation — no real calendar service is involved. The
//! event is scheduled exactly seven days out, normalized to 10:00 local
//! time.

use crate::clock::Clock;
use chrono::{DateTime, Duration, Local, Timelike};
use std::fmt;

const SHOP_LOCATION: &str = "Your Trusted Auto Shop, 123 Main St, Bengaluru, India";

/// A simulated calendar invite.
#[derive(Debug, Clone)]
pub struct CalendarInvite {
    pub event_type: String,
    pub car_details: String,
    pub start: DateTime<Local>,
    pub duration_minutes: u32,
}

impl CalendarInvite {
    /// Default appointment length in minutes.
    pub const DEFAULT_DURATION_MINUTES: u32 = 60;

    /// Schedule an event seven days from the clock's current instant,
    /// normalized to 10:00:00 local time.
    pub fn schedule(
        clock: &dyn Clock,
        event_type: impl Into<String>,
        car_details: impl Into<String>,
        duration_minutes: Option<u32>,
    ) -> Self {
        let event_date = clock.now() + Duration::days(7);
        let start = event_date
            .with_hour(10)
            .and_then(|d| d.with_minute(0))
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(event_date);

        Self {
            event_type: event_type.into(),
            car_details: car_details.into(),
            start,
            duration_minutes: duration_minutes.unwrap_or(Self::DEFAULT_DURATION_MINUTES),
        }
    }
}

impl fmt::Display for CalendarInvite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calendar Invite Created:")?;
        writeln!(f)?;
        writeln!(f, "Event: {} for {}", self.event_type, self.car_details)?;
        writeln!(f, "Date: {}", self.start.format("%Y-%m-%d"))?;
        writeln!(f, "Time: {}", self.start.format("%I:%M %p"))?;
        writeln!(f, "Duration: {} minutes", self.duration_minutes)?;
        writeln!(f, "Location: {SHOP_LOCATION}")?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock::FixedClock;
    use chrono::TimeZone;

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn event_is_seven_days_out_at_ten_am() {
        let clock = clock_at(2024, 3, 1, 16, 45);
        let invite = CalendarInvite::schedule(&clock, "Repair: Worn brake pads", "2015 Toyota Corolla", None);
        assert_eq!(invite.start.format("%Y-%m-%d").to_string(), "2024-03-08");
        assert_eq!(invite.start.hour(), 10);
        assert_eq!(invite.start.minute(), 0);
        assert_eq!(invite.start.second(), 0);
    }

    #[test]
    fn normalization_holds_for_early_morning_invocation() {
        let clock = clock_at(2024, 12, 31, 0, 5);
        let invite = CalendarInvite::schedule(&clock, "Maintenance: Oil change", "car", None);
        assert_eq!(invite.start.format("%Y-%m-%d").to_string(), "2025-01-07");
        assert_eq!(invite.start.hour(), 10);
    }

    #[test]
    fn duration_defaults_to_sixty_minutes() {
        let clock = clock_at(2024, 6, 1, 9, 0);
        let invite = CalendarInvite::schedule(&clock, "Repair", "car", None);
        assert_eq!(invite.duration_minutes, 60);

        let custom = CalendarInvite::schedule(&clock, "Repair", "car", Some(90));
        assert_eq!(custom.duration_minutes, 90);
    }

    #[test]
    fn rendered_invite_has_fixed_format() {
        let clock = clock_at(2024, 6, 1, 9, 0);
        let invite =
            CalendarInvite::schedule(&clock, "Maintenance: Brake wear", "2015 Toyota Corolla", None);
        let text = invite.to_string();
        assert!(text.starts_with("Calendar Invite Created:"));
        assert!(text.contains("Event: Maintenance: Brake wear for 2015 Toyota Corolla"));
        assert!(text.contains("Date: 2024-06-08"));
        assert!(text.contains("Time: 10:00 AM"));
        assert!(text.contains("Duration: 60 minutes"));
        assert!(text.contains("Location: Your Trusted Auto Shop"));
    }
}
