//! Conversational front-end over the analyze endpoint.

pub mod client;
pub mod session;
pub mod transcript;

use crate::model::attendance::AttendanceRecord;

pub use client::{AnalyzeBackend, AnalyzeClient, ChatError};
pub use session::ChatSession;
pub use transcript::Transcript;

/// Prompts offered on an empty conversation.
pub const EXAMPLE_PROMPTS: [(&str, &str); 4] = [
    ("Check Absences", "Absent students in this week."),
    ("Late Arrivals", "Late Students in this week."),
    ("Employee Hours", "What are John's working hours?"),
    ("Attendance Overview", "Show me all attendance records"),
];

/// One line per record: `{employee} - {date}: {status} ({hours} hours)`.
pub fn format_records(records: &[AttendanceRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "{} - {}: {} ({} hours)",
                record.employee, record.date, record.status, record.hours
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
