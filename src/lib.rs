//! NEXO Match - buyer/seller matching service for B2B networking events
//!
//! This library provides the matching and scheduling engine used at NEXO
//! events. It pairs buyers and sellers through a three-tier priority pipeline
//! (double matches, seller choices, AI suggestions) and assigns conflict-free
//! meeting time slots with a greedy first-fit scheduler.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{compatibility_score, MatchGenerator, MatchingEngine, MatchingError, MatchingOutcome, ScheduleResult, Scheduler};
pub use models::{Buyer, Match, MatchType, RunSummary, ScheduleEntry, ScoringWeights, Seller, SponsorshipTier, TimeSlot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let engine = MatchingEngine::with_default_weights();
        let outcome = engine.run(&[], &[], &[]).unwrap();
        assert_eq!(outcome.summary.total_matches, 0);
    }
}
