use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Buyer, ScheduleEntry, ScoringWeights, Seller, TimeSlot};

/// Request to run a full matching session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RunMatchingRequest {
    #[validate(length(min = 1, message = "at least one buyer is required"))]
    pub buyers: Vec<Buyer>,
    #[validate(length(min = 1, message = "at least one seller is required"))]
    pub sellers: Vec<Seller>,
    /// Event calendar; the default two-day event window is generated when omitted
    #[serde(alias = "time_slots", rename = "timeSlots", default)]
    pub time_slots: Option<Vec<TimeSlot>>,
    /// Scorer weight overrides; defaults apply when omitted
    #[serde(default)]
    pub weights: Option<ScoringWeights>,
}

/// Request to render a schedule as CSV
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExportScheduleRequest {
    pub entries: Vec<ScheduleEntry>,
    #[serde(default)]
    pub buyers: Vec<Buyer>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
}
