// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Buyer, Match, MatchType, ParticipantRole, PriorityFill, RunSummary, ScheduleEntry,
    ScoringWeights, Seller, SponsorshipTier, TimeSlot,
};
pub use requests::{ExportScheduleRequest, RunMatchingRequest};
pub use responses::{ErrorResponse, HealthResponse, RunMatchingResponse};
