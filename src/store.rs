use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use tracing::info;

use crate::model::attendance::{AttendanceRecord, SAMPLE_ATTENDANCE};

/// Read-only attendance records shared by every request.
#[derive(Debug, Clone)]
pub struct AttendanceStore {
    records: Arc<[AttendanceRecord]>,
}

impl AttendanceStore {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_ATTENDANCE.clone())
    }

    /// Loads a JSON array of records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read attendance data from {}", path.display()))?;
        let records: Vec<AttendanceRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid attendance data in {}", path.display()))?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }
}

pub fn init_store(data_path: Option<&str>) -> Result<AttendanceStore> {
    let store = match data_path {
        Some(path) => AttendanceStore::from_json_file(path)?,
        None => AttendanceStore::sample(),
    };

    info!(
        records = store.records().len(),
        source = data_path.unwrap_or("built-in sample"),
        "Attendance store ready"
    );

    Ok(store)
}
