use std::collections::HashSet;

use thiserror::Error;

use crate::core::matcher::MatchGenerator;
use crate::core::scheduler::{ScheduleResult, Scheduler};
use crate::models::{
    Buyer, Match, ParticipantRole, PriorityFill, RunSummary, ScoringWeights, Seller, TimeSlot,
};

/// Weight sums within this distance of 1.0 are accepted
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors that abort a matching run before any matching occurs
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Scoring weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("Scoring weight '{name}' must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },

    #[error("Invalid {role} record '{id}': {reason}")]
    InvalidRecord {
        role: ParticipantRole,
        id: String,
        reason: String,
    },

    #[error("Duplicate {role} id '{id}'")]
    DuplicateId { role: ParticipantRole, id: String },
}

/// Everything one run produces: the ordered match list, the conflict-free
/// schedule, and aggregate statistics
#[derive(Debug, Clone)]
pub struct MatchingOutcome {
    pub matches: Vec<Match>,
    pub schedule: ScheduleResult,
    pub summary: RunSummary,
}

/// End-to-end matching engine: participants in, scheduled matches out
///
/// Owns the generator and scheduler and copies all caller data before
/// touching it, so concurrent runs with different weight configurations never
/// contaminate each other.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    generator: MatchGenerator,
    scheduler: Scheduler,
}

impl MatchingEngine {
    /// Build an engine with weight overrides, rejecting configurations whose
    /// weights are negative or do not sum to 1.0
    pub fn new(weights: ScoringWeights) -> Result<Self, MatchingError> {
        validate_weights(&weights)?;
        Ok(Self {
            generator: MatchGenerator::new(weights),
            scheduler: Scheduler::new(),
        })
    }

    pub fn with_default_weights() -> Self {
        Self {
            generator: MatchGenerator::with_default_weights(),
            scheduler: Scheduler::new(),
        }
    }

    /// Run the full pipeline: validate, generate matches, schedule them, and
    /// assemble the run summary.
    ///
    /// Zero buyers or zero sellers completes trivially with empty outputs.
    /// Capacity shortfalls never fail the run; they are reported through the
    /// unscheduled list and the summary.
    pub fn run(
        &self,
        buyers: &[Buyer],
        sellers: &[Seller],
        time_slots: &[TimeSlot],
    ) -> Result<MatchingOutcome, MatchingError> {
        validate_buyers(buyers)?;
        validate_sellers(sellers)?;

        if buyers.is_empty() || sellers.is_empty() {
            tracing::warn!(
                "Trivial run: {} buyers, {} sellers",
                buyers.len(),
                sellers.len()
            );
            return Ok(MatchingOutcome {
                matches: vec![],
                schedule: ScheduleResult::default(),
                summary: RunSummary::default(),
            });
        }

        // Defensive copies keep caller data untouched for the whole run
        let buyers = buyers.to_vec();
        let sellers = sellers.to_vec();
        let time_slots = time_slots.to_vec();

        let mut matches = self.generator.generate(&buyers, &sellers);
        let schedule = self.scheduler.schedule(&mut matches, &buyers, &time_slots);
        let summary = build_summary(&matches, &schedule);

        tracing::info!(
            "Run complete: {} matches, {} scheduled, {} unscheduled",
            summary.total_matches,
            summary.scheduled_meetings,
            summary.unscheduled_matches
        );

        Ok(MatchingOutcome {
            matches,
            schedule,
            summary,
        })
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn validate_weights(weights: &ScoringWeights) -> Result<(), MatchingError> {
    let named = [
        ("interest_alignment", weights.interest_alignment),
        ("investment_factor", weights.investment_factor),
        ("company_size", weights.company_size),
        ("facility_type", weights.facility_type),
        ("existing_client", weights.existing_client),
    ];
    for (name, value) in named {
        if value < 0.0 {
            return Err(MatchingError::NegativeWeight { name, value });
        }
    }

    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(MatchingError::InvalidWeights { sum });
    }
    Ok(())
}

fn validate_buyers(buyers: &[Buyer]) -> Result<(), MatchingError> {
    let mut seen = HashSet::new();
    for buyer in buyers {
        validate_record(ParticipantRole::Buyer, &buyer.id, &buyer.name)?;
        if buyer.meeting_limit == 0 {
            return Err(MatchingError::InvalidRecord {
                role: ParticipantRole::Buyer,
                id: buyer.id.clone(),
                reason: "meeting limit must be at least 1".to_string(),
            });
        }
        if !seen.insert(buyer.id.as_str()) {
            return Err(MatchingError::DuplicateId {
                role: ParticipantRole::Buyer,
                id: buyer.id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_sellers(sellers: &[Seller]) -> Result<(), MatchingError> {
    let mut seen = HashSet::new();
    for seller in sellers {
        validate_record(ParticipantRole::Seller, &seller.id, &seller.name)?;
        if seller.meeting_limit == Some(0) {
            return Err(MatchingError::InvalidRecord {
                role: ParticipantRole::Seller,
                id: seller.id.clone(),
                reason: "meeting limit must be at least 1".to_string(),
            });
        }
        if !seen.insert(seller.id.as_str()) {
            return Err(MatchingError::DuplicateId {
                role: ParticipantRole::Seller,
                id: seller.id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_record(role: ParticipantRole, id: &str, name: &str) -> Result<(), MatchingError> {
    if id.trim().is_empty() {
        return Err(MatchingError::InvalidRecord {
            role,
            id: "<empty>".to_string(),
            reason: "id must not be empty".to_string(),
        });
    }
    if name.trim().is_empty() {
        return Err(MatchingError::InvalidRecord {
            role,
            id: id.to_string(),
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

fn build_summary(matches: &[Match], schedule: &ScheduleResult) -> RunSummary {
    use crate::models::MatchType;

    let total = matches.len();
    let scheduled = schedule.entries.len();
    let count_of = |match_type: MatchType| matches.iter().filter(|m| m.match_type == match_type).count();

    let priority_fill_rates = (1..=3u8)
        .map(|priority| {
            let tier_total = matches.iter().filter(|m| m.priority == priority).count();
            let tier_scheduled = matches
                .iter()
                .filter(|m| m.priority == priority && m.scheduled)
                .count();
            let fill_rate = if tier_total > 0 {
                tier_scheduled as f64 / tier_total as f64 * 100.0
            } else {
                0.0
            };
            PriorityFill {
                priority,
                total: tier_total,
                scheduled: tier_scheduled,
                fill_rate,
            }
        })
        .collect();

    let average_compatibility = if total > 0 {
        matches.iter().map(|m| m.compatibility_score).sum::<f64>() / total as f64
    } else {
        0.0
    };

    RunSummary {
        total_matches: total,
        double_matches: count_of(MatchType::DoubleMatch),
        seller_choices: count_of(MatchType::SellerChoice),
        ai_suggestions: count_of(MatchType::AiSuggestion),
        scheduled_meetings: scheduled,
        unscheduled_matches: schedule.unscheduled.len(),
        scheduling_efficiency: if total > 0 {
            scheduled as f64 / total as f64 * 100.0
        } else {
            0.0
        },
        average_compatibility,
        priority_fill_rates,
        unique_buyers_matched: matches.iter().map(|m| m.buyer_id.as_str()).collect::<HashSet<_>>().len(),
        unique_sellers_matched: matches.iter().map(|m| m.seller_id.as_str()).collect::<HashSet<_>>().len(),
    }
}
