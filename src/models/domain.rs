use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Buyer profile: a fitness company looking for suppliers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(rename = "investmentAmount")]
    pub investment_amount: u64,
    #[serde(default = "default_locations")]
    pub locations: u32,
    #[serde(rename = "facilityType")]
    pub facility_type: String,
    #[serde(rename = "sponsorshipTier", default)]
    pub sponsorship_tier: SponsorshipTier,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "selectedSellers", default)]
    pub selected_sellers: Vec<String>,
    #[serde(rename = "existingClients", default)]
    pub existing_clients: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(rename = "meetingLimit", default = "default_meeting_limit")]
    pub meeting_limit: usize,
}

impl Buyer {
    /// Whether this buyer explicitly selected the given seller
    pub fn selected(&self, seller_id: &str) -> bool {
        self.selected_sellers.iter().any(|id| id == seller_id)
    }

    /// Whether the seller is a known existing client of this buyer
    pub fn existing_client(&self, seller_id: &str) -> bool {
        self.existing_clients.iter().any(|id| id == seller_id)
    }
}

fn default_locations() -> u32 { 1 }
fn default_meeting_limit() -> usize { 5 }

/// Seller profile: a fitness industry supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(rename = "facilityTypes", default)]
    pub facility_types: Vec<String>,
    #[serde(rename = "selectedBuyers", default)]
    pub selected_buyers: Vec<String>,
    #[serde(rename = "sponsorshipTier", default)]
    pub sponsorship_tier: SponsorshipTier,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub contact: Option<String>,
    /// Seller-side meeting capacity; None means unlimited
    #[serde(rename = "meetingLimit", default)]
    pub meeting_limit: Option<usize>,
}

impl Seller {
    /// Whether this seller claimed the given buyer as a sponsored obligation
    pub fn selected(&self, buyer_id: &str) -> bool {
        self.selected_buyers.iter().any(|id| id == buyer_id)
    }
}

/// Event sponsorship tier, ordered lowest to highest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SponsorshipTier {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Participant role, used when reporting malformed records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Buyer,
    Seller,
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::Buyer => write!(f, "buyer"),
            ParticipantRole::Seller => write!(f, "seller"),
        }
    }
}

/// How a match came to exist, in decreasing business priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    DoubleMatch,
    SellerChoice,
    AiSuggestion,
}

impl MatchType {
    /// Scheduling priority: 1 is highest, 3 lowest
    pub fn priority(&self) -> u8 {
        match self {
            MatchType::DoubleMatch => 1,
            MatchType::SellerChoice => 2,
            MatchType::AiSuggestion => 3,
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::DoubleMatch => write!(f, "double_match"),
            MatchType::SellerChoice => write!(f, "seller_choice"),
            MatchType::AiSuggestion => write!(f, "ai_suggestion"),
        }
    }
}

/// A buyer/seller pairing produced by the match generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "buyerId")]
    pub buyer_id: String,
    #[serde(rename = "sellerId")]
    pub seller_id: String,
    #[serde(rename = "matchType")]
    pub match_type: MatchType,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
    pub priority: u8,
    #[serde(default)]
    pub scheduled: bool,
    #[serde(rename = "timeSlot", default)]
    pub time_slot: Option<String>,
}

impl Match {
    pub fn new(buyer_id: &str, seller_id: &str, match_type: MatchType, score: f64) -> Self {
        Self {
            buyer_id: buyer_id.to_string(),
            seller_id: seller_id.to_string(),
            match_type,
            compatibility_score: score,
            priority: match_type.priority(),
            scheduled: false,
            time_slot: None,
        }
    }
}

/// A bookable meeting slot in the event calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "durationMinutes")]
    pub duration_minutes: u32,
}

impl TimeSlot {
    /// Generate the standard event calendar for a run of consecutive days.
    ///
    /// Each day gets a morning block (09:00 to 11:45, every 15 minutes) and a
    /// short afternoon block (14:00 to 14:30), matching the NEXO event format.
    pub fn event_window(first_day: NaiveDate, days: u32, duration_minutes: u32) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        for day in 0..days {
            let date = first_day + chrono::Duration::days(i64::from(day));
            let morning = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
            let afternoon = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
            let times = (0..12)
                .map(|q| morning + chrono::Duration::minutes(15 * q))
                .chain((0..3).map(|q| afternoon + chrono::Duration::minutes(15 * q)));
            for time in times {
                slots.push(TimeSlot {
                    id: format!("slot_{:03}", slots.len() + 1),
                    date,
                    time,
                    duration_minutes,
                });
            }
        }
        slots
    }
}

/// One scheduled meeting, as handed to calendar display and CSV export.
/// Field names are the fixed contract consumed by exporters, so unlike the
/// other wire types these serialize in snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub buyer_id: String,
    pub seller_id: String,
    pub time_slot: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
    pub match_type: MatchType,
    #[serde(rename = "score")]
    pub compatibility_score: f64,
    pub priority: u8,
}

/// Weights for the five compatibility sub-scores; must sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(rename = "interestAlignment")]
    pub interest_alignment: f64,
    #[serde(rename = "investmentFactor")]
    pub investment_factor: f64,
    #[serde(rename = "companySize")]
    pub company_size: f64,
    #[serde(rename = "facilityType")]
    pub facility_type: f64,
    #[serde(rename = "existingClient")]
    pub existing_client: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.interest_alignment
            + self.investment_factor
            + self.company_size
            + self.facility_type
            + self.existing_client
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest_alignment: 0.40,
            investment_factor: 0.25,
            company_size: 0.20,
            facility_type: 0.10,
            existing_client: 0.05,
        }
    }
}

/// Aggregate statistics for one matching run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "doubleMatches")]
    pub double_matches: usize,
    #[serde(rename = "sellerChoices")]
    pub seller_choices: usize,
    #[serde(rename = "aiSuggestions")]
    pub ai_suggestions: usize,
    #[serde(rename = "scheduledMeetings")]
    pub scheduled_meetings: usize,
    #[serde(rename = "unscheduledMatches")]
    pub unscheduled_matches: usize,
    /// Scheduled fraction of all matches, 0-100
    #[serde(rename = "schedulingEfficiency")]
    pub scheduling_efficiency: f64,
    #[serde(rename = "averageCompatibility")]
    pub average_compatibility: f64,
    #[serde(rename = "priorityFillRates")]
    pub priority_fill_rates: Vec<PriorityFill>,
    #[serde(rename = "uniqueBuyersMatched")]
    pub unique_buyers_matched: usize,
    #[serde(rename = "uniqueSellersMatched")]
    pub unique_sellers_matched: usize,
}

/// Scheduled/total fill rate for one priority tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityFill {
    pub priority: u8,
    pub total: usize,
    pub scheduled: usize,
    /// Scheduled fraction of this tier, 0-100
    #[serde(rename = "fillRate")]
    pub fill_rate: f64,
}
