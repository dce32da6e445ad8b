use std::collections::{HashMap, HashSet};

use crate::core::scoring::compatibility_score;
use crate::models::{Buyer, Match, MatchType, ScoringWeights, Seller};

/// Match generator - implements the three-tier priority pipeline
///
/// # Tiers
/// 1. Double matches: buyer and seller selected each other (highest priority)
/// 2. Seller choices: seller claimed the buyer as a sponsored obligation;
///    binding, the buyer has no opt-out
/// 3. AI suggestions: remaining buyer capacity filled with the top-scoring
///    available sellers
///
/// Each tier skips pairs already claimed by an earlier tier, so exactly one
/// match exists per (buyer, seller) pair.
#[derive(Debug, Clone)]
pub struct MatchGenerator {
    weights: ScoringWeights,
}

impl MatchGenerator {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Generate the full prioritized match set for one event run.
    ///
    /// Output is sorted by priority ascending, then compatibility score
    /// descending (ties broken by buyer then seller id), which is the input
    /// order the scheduler requires.
    pub fn generate(&self, buyers: &[Buyer], sellers: &[Seller]) -> Vec<Match> {
        let mut matches: Vec<Match> = Vec::new();
        let mut claimed: HashSet<(String, String)> = HashSet::new();
        let mut seller_load: HashMap<String, usize> = HashMap::new();

        // Tier 1: mutual selections
        for buyer in buyers {
            for seller in sellers {
                if buyer.selected(&seller.id) && seller.selected(&buyer.id) {
                    let score = compatibility_score(buyer, seller, &self.weights);
                    matches.push(Match::new(&buyer.id, &seller.id, MatchType::DoubleMatch, score));
                    claimed.insert((buyer.id.clone(), seller.id.clone()));
                    *seller_load.entry(seller.id.clone()).or_insert(0) += 1;
                }
            }
        }
        tracing::debug!("Tier 1 produced {} double matches", matches.len());

        // Tier 2: seller choices. A sponsored obligation binds the buyer, so
        // every remaining claim is emitted regardless of the buyer's meeting
        // limit; the scheduler reports the overflow as unmet.
        let tier1_count = matches.len();
        for seller in sellers {
            for buyer in buyers {
                if !seller.selected(&buyer.id) {
                    continue;
                }
                if claimed.contains(&(buyer.id.clone(), seller.id.clone())) {
                    continue;
                }
                let score = compatibility_score(buyer, seller, &self.weights);
                matches.push(Match::new(&buyer.id, &seller.id, MatchType::SellerChoice, score));
                claimed.insert((buyer.id.clone(), seller.id.clone()));
                *seller_load.entry(seller.id.clone()).or_insert(0) += 1;
            }
        }
        tracing::debug!("Tier 2 produced {} seller choices", matches.len() - tier1_count);

        // Tier 3: fill remaining buyer capacity with the best-scoring sellers
        let tier2_count = matches.len();
        let mut buyer_load: HashMap<String, usize> = HashMap::new();
        for m in &matches {
            *buyer_load.entry(m.buyer_id.clone()).or_insert(0) += 1;
        }

        for buyer in buyers {
            let current = buyer_load.get(&buyer.id).copied().unwrap_or(0);
            if current >= buyer.meeting_limit {
                continue;
            }
            let mut needed = buyer.meeting_limit - current;

            let mut ranked: Vec<(&Seller, f64)> = sellers
                .iter()
                .filter(|seller| !claimed.contains(&(buyer.id.clone(), seller.id.clone())))
                .map(|seller| (seller, compatibility_score(buyer, seller, &self.weights)))
                .collect();

            // Score descending, seller id ascending on ties for determinism
            ranked.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.id.cmp(&b.0.id))
            });

            for (seller, score) in ranked {
                if needed == 0 {
                    break;
                }
                // Respect seller-side capacity where one is declared
                let load = seller_load.get(&seller.id).copied().unwrap_or(0);
                if seller.meeting_limit.is_some_and(|limit| load >= limit) {
                    continue;
                }
                matches.push(Match::new(&buyer.id, &seller.id, MatchType::AiSuggestion, score));
                claimed.insert((buyer.id.clone(), seller.id.clone()));
                *seller_load.entry(seller.id.clone()).or_insert(0) += 1;
                needed -= 1;
            }
        }
        tracing::debug!("Tier 3 produced {} AI suggestions", matches.len() - tier2_count);

        // Scheduler input order: priority ascending, score descending
        matches.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| {
                    b.compatibility_score
                        .partial_cmp(&a.compatibility_score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.buyer_id.cmp(&b.buyer_id))
                .then_with(|| a.seller_id.cmp(&b.seller_id))
        });

        matches
    }
}

impl Default for MatchGenerator {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
