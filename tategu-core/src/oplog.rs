//! Confirmed operation history.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::door::DoorAction;

/// One confirmed door operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    pub fitting_id: u32,
    pub fitting_name: String,
    pub device_id: String,
    pub action: DoorAction,
    pub at: DateTime<Utc>,
}

/// Newest-first history of confirmed operations, bounded so the operation
/// time list cannot grow without limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationLog {
    records: Vec<OperationRecord>,
}

impl OperationLog {
    /// Oldest records are dropped past this many.
    pub const CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed operation at the head of the history.
    pub fn push(&mut self, record: OperationRecord) {
        debug!(
            "operation recorded: {} {} ({})",
            record.action.label(),
            record.fitting_name,
            record.device_id
        );
        self.records.insert(0, record);
        self.records.truncate(Self::CAPACITY);
    }

    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&OperationRecord> {
        self.records.first()
    }

    /// Serialize the history for export, newest first.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}
