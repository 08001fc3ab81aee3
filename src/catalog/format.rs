//! Display strings for capture instants

use chrono::NaiveDateTime;

use super::data::CaptureInstant;

/// Shown in place of a date for photos whose filename had no timestamp
pub const UNKNOWN_DATE: &str = "Date unknown";

/// "June 15, 2024"
pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// "2:30 PM", 12-hour clock without a leading zero
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

/// Date, time and description for a photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub date: String,
    pub time: String,
    pub description: String,
}

impl DisplayFields {
    pub fn for_capture(capture: &CaptureInstant) -> Self {
        match capture.at() {
            Some(at) => {
                let date = format_date(&at);
                let time = format_time(&at);
                let description = format!("Captured on {} at {}", date, time);
                Self {
                    date,
                    time,
                    description,
                }
            }
            None => Self {
                date: UNKNOWN_DATE.to_string(),
                time: String::new(),
                description: "Capture date unknown".to_string(),
            },
        }
    }
}
