use serde::{Deserialize, Serialize};

use crate::models::domain::{Match, RunSummary, ScheduleEntry};

/// Response for the run matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMatchingResponse {
    #[serde(rename = "runId")]
    pub run_id: String,
    pub matches: Vec<Match>,
    pub schedule: Vec<ScheduleEntry>,
    #[serde(rename = "unscheduledMatches")]
    pub unscheduled_matches: Vec<Match>,
    pub summary: RunSummary,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
