use crate::models::{Buyer, ScoringWeights, Seller};

/// Calculate a compatibility score (0-1) between a buyer and a seller
///
/// Scoring formula:
/// score = (
///     interest_score * 0.40 +      # Product/service alignment
///     investment_score * 0.25 +    # Investment amount bucket
///     size_score * 0.20 +          # Number of locations
///     facility_score * 0.10 +      # Facility type coverage
///     client_score * 0.05          # Existing relationship bonus
/// )
///
/// Pure and deterministic: identical inputs always produce identical scores.
pub fn compatibility_score(buyer: &Buyer, seller: &Seller, weights: &ScoringWeights) -> f64 {
    let interest_score = calculate_interest_score(buyer, seller);
    let investment_score = calculate_investment_score(buyer.investment_amount);
    let size_score = calculate_size_score(buyer.locations);
    let facility_score = calculate_facility_score(buyer, seller);
    let client_score = if buyer.existing_client(&seller.id) { 1.0 } else { 0.0 };

    let total_score = interest_score * weights.interest_alignment
        + investment_score * weights.investment_factor
        + size_score * weights.company_size
        + facility_score * weights.facility_type
        + client_score * weights.existing_client;

    total_score.clamp(0.0, 1.0)
}

/// Calculate interest alignment (0-1)
/// Fraction of the buyer's declared interests covered by the seller's products
#[inline]
fn calculate_interest_score(buyer: &Buyer, seller: &Seller) -> f64 {
    if buyer.interests.is_empty() {
        return 0.0;
    }

    let overlap = buyer
        .interests
        .iter()
        .filter(|interest| seller.products.contains(interest))
        .count();

    overlap as f64 / buyer.interests.len() as f64
}

/// Calculate investment factor (0-1) via fixed buckets
/// An amount exactly at a threshold falls into the lower bucket
#[inline]
fn calculate_investment_score(investment_amount: u64) -> f64 {
    if investment_amount > 100_000_000 {
        1.0
    } else if investment_amount > 50_000_000 {
        0.8
    } else if investment_amount > 10_000_000 {
        0.6
    } else if investment_amount > 1_000_000 {
        0.4
    } else {
        0.2
    }
}

/// Calculate company size factor (0-1) from the number of locations
#[inline]
fn calculate_size_score(locations: u32) -> f64 {
    if locations >= 5 {
        1.0
    } else if locations >= 3 {
        0.8
    } else if locations >= 2 {
        0.6
    } else {
        0.4
    }
}

/// Calculate facility type coverage (0-1)
/// Full score when the seller serves the buyer's facility type, otherwise a
/// fixed base compatibility of 0.5
#[inline]
fn calculate_facility_score(buyer: &Buyer, seller: &Seller) -> f64 {
    if seller.facility_types.contains(&buyer.facility_type) {
        1.0
    } else {
        0.5
    }
}
