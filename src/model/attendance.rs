use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2024-01-30",
        "employee": "Jane Smith",
        "status": "Late",
        "hours": 7
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "2024-01-30", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Jane Smith")]
    pub employee: String,

    /// Open-ended label, usually `Present`, `Late` or `Absent`.
    #[schema(example = "Late")]
    pub status: String,

    #[schema(example = 7)]
    pub hours: u32,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, employee: &str, status: &str, hours: u32) -> Self {
        Self {
            date,
            employee: employee.to_string(),
            status: status.to_string(),
            hours,
        }
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Records served when no data file is configured.
pub static SAMPLE_ATTENDANCE: Lazy<Vec<AttendanceRecord>> = Lazy::new(|| {
    vec![
        AttendanceRecord::new(day(2024, 1, 30), "John Doe", "Present", 8),
        AttendanceRecord::new(day(2024, 1, 30), "Jane Smith", "Late", 7),
        AttendanceRecord::new(day(2024, 1, 29), "John Doe", "Present", 8),
        AttendanceRecord::new(day(2024, 1, 29), "Jane Smith", "Absent", 0),
    ]
});
