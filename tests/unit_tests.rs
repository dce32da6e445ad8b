// Unit tests for NEXO Match

use nexo_match::core::compatibility_score;
use nexo_match::models::{Buyer, MatchType, ScoringWeights, Seller, SponsorshipTier, TimeSlot};
use nexo_match::MatchGenerator;
use chrono::NaiveDate;

fn buyer(id: &str, interests: Vec<&str>, investment: u64, locations: u32) -> Buyer {
    Buyer {
        id: id.to_string(),
        name: format!("Buyer {}", id),
        company: format!("Company {}", id),
        investment_amount: investment,
        locations,
        facility_type: "Gym Chain".to_string(),
        sponsorship_tier: SponsorshipTier::Silver,
        interests: interests.into_iter().map(String::from).collect(),
        selected_sellers: vec![],
        existing_clients: vec![],
        region: "Latin America".to_string(),
        meeting_limit: 5,
    }
}

fn seller(id: &str, products: Vec<&str>) -> Seller {
    Seller {
        id: id.to_string(),
        name: format!("Seller {}", id),
        company: format!("Supply {}", id),
        products: products.into_iter().map(String::from).collect(),
        facility_types: vec![],
        selected_buyers: vec![],
        sponsorship_tier: SponsorshipTier::None,
        region: "Latin America".to_string(),
        contact: None,
        meeting_limit: None,
    }
}

#[test]
fn test_score_always_within_unit_interval() {
    let weights = ScoringWeights::default();
    let sellers = vec![
        seller("seller_001", vec!["Equipment", "Technology"]),
        seller("seller_002", vec![]),
        seller("seller_003", vec!["Wellness", "Nutrition", "Supplements"]),
    ];
    let buyers = vec![
        buyer("buyer_001", vec!["Equipment"], 200_000_000, 7),
        buyer("buyer_002", vec![], 0, 0),
        buyer("buyer_003", vec!["Wellness", "Nutrition"], 5_000_000, 2),
    ];

    for b in &buyers {
        for s in &sellers {
            let score = compatibility_score(b, s, &weights);
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}

#[test]
fn test_score_deterministic_across_calls() {
    let weights = ScoringWeights::default();
    let b = buyer("buyer_001", vec!["Equipment", "Software"], 45_000_000, 4);
    let s = seller("seller_001", vec!["Software"]);

    let scores: Vec<f64> = (0..10).map(|_| compatibility_score(&b, &s, &weights)).collect();

    assert!(scores.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_full_interest_overlap_beats_partial() {
    let weights = ScoringWeights::default();
    let b = buyer("buyer_001", vec!["Equipment", "Technology"], 1_000_000, 1);

    let full = seller("seller_001", vec!["Equipment", "Technology"]);
    let partial = seller("seller_002", vec!["Equipment"]);
    let none = seller("seller_003", vec!["Nutrition"]);

    let full_score = compatibility_score(&b, &full, &weights);
    let partial_score = compatibility_score(&b, &partial, &weights);
    let none_score = compatibility_score(&b, &none, &weights);

    assert!(full_score > partial_score);
    assert!(partial_score > none_score);
}

#[test]
fn test_empty_interest_data_scores_without_error() {
    let weights = ScoringWeights::default();
    let b = buyer("buyer_001", vec![], 500_000, 1);
    let s = seller("seller_001", vec![]);

    let score = compatibility_score(&b, &s, &weights);

    // Only investment (0.2), size (0.4), and facility base (0.5) contribute
    let expected = 0.2 * 0.25 + 0.4 * 0.20 + 0.5 * 0.10;
    assert!((score - expected).abs() < 1e-9);
}

#[test]
fn test_generator_output_deterministic() {
    let generator = MatchGenerator::with_default_weights();
    let buyers = vec![
        buyer("buyer_001", vec!["Equipment"], 30_000_000, 2),
        buyer("buyer_002", vec!["Technology"], 8_000_000, 1),
    ];
    let sellers = vec![
        seller("seller_001", vec!["Equipment"]),
        seller("seller_002", vec!["Technology"]),
        seller("seller_003", vec!["Equipment", "Technology"]),
    ];

    let first = generator.generate(&buyers, &sellers);
    let second = generator.generate(&buyers, &sellers);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.buyer_id, b.buyer_id);
        assert_eq!(a.seller_id, b.seller_id);
        assert_eq!(a.match_type, b.match_type);
        assert_eq!(a.compatibility_score, b.compatibility_score);
    }
}

#[test]
fn test_priority_derived_from_match_type() {
    let mut b = buyer("buyer_001", vec!["Equipment"], 30_000_000, 2);
    b.selected_sellers = vec!["seller_001".to_string()];
    let mut s1 = seller("seller_001", vec!["Equipment"]);
    s1.selected_buyers = vec!["buyer_001".to_string()];
    let mut s2 = seller("seller_002", vec![]);
    s2.selected_buyers = vec!["buyer_001".to_string()];
    let s3 = seller("seller_003", vec![]);

    let generator = MatchGenerator::with_default_weights();
    let matches = generator.generate(&[b], &[s1, s2, s3]);

    for m in &matches {
        assert_eq!(m.priority, m.match_type.priority());
    }
    assert!(matches.iter().any(|m| m.match_type == MatchType::DoubleMatch));
    assert!(matches.iter().any(|m| m.match_type == MatchType::SellerChoice));
    assert!(matches.iter().any(|m| m.match_type == MatchType::AiSuggestion));
}

#[test]
fn test_event_window_slot_ids_sequential() {
    let slots = TimeSlot::event_window(NaiveDate::from_ymd_opt(2023, 5, 18).unwrap(), 2, 15);

    assert_eq!(slots.len(), 30);
    for (index, slot) in slots.iter().enumerate() {
        assert_eq!(slot.id, format!("slot_{:03}", index + 1));
        assert_eq!(slot.duration_minutes, 15);
    }
}
