use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use validator::Validate;

use crate::core::{MatchingEngine, MatchingError};
use crate::models::{
    Buyer, ErrorResponse, ExportScheduleRequest, HealthResponse, MatchType, RunMatchingRequest,
    RunMatchingResponse, ScheduleEntry, Seller, TimeSlot,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Engine built from the configured default weights
    pub engine: MatchingEngine,
    /// First day of the default event window
    pub event_start: NaiveDate,
    pub event_days: u32,
    pub slot_duration_minutes: u32,
}

/// Configure all matching-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matching/run", web::post().to(run_matching))
        .route("/schedule/export", web::post().to(export_schedule));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Run matching endpoint
///
/// POST /api/v1/matching/run
///
/// Request body:
/// ```json
/// {
///   "buyers": [...],
///   "sellers": [...],
///   "timeSlots": [...],
///   "weights": { "interestAlignment": 0.4, ... }
/// }
/// ```
async fn run_matching(
    state: web::Data<AppState>,
    req: web::Json<RunMatchingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for run_matching request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();

    tracing::info!(
        "Running matching session: {} buyers, {} sellers",
        req.buyers.len(),
        req.sellers.len()
    );

    // Weight overrides get their own engine; construction validates them
    let engine = match req.weights {
        Some(weights) => match MatchingEngine::new(weights) {
            Ok(engine) => engine,
            Err(e) => return matching_error_response(e),
        },
        None => state.engine.clone(),
    };

    let time_slots = req.time_slots.unwrap_or_else(|| {
        TimeSlot::event_window(state.event_start, state.event_days, state.slot_duration_minutes)
    });

    let outcome = match engine.run(&req.buyers, &req.sellers, &time_slots) {
        Ok(outcome) => outcome,
        Err(e) => return matching_error_response(e),
    };

    tracing::info!(
        "Matching run produced {} matches ({} scheduled)",
        outcome.summary.total_matches,
        outcome.summary.scheduled_meetings
    );

    HttpResponse::Ok().json(RunMatchingResponse {
        run_id: uuid::Uuid::new_v4().to_string(),
        matches: outcome.matches,
        schedule: outcome.schedule.entries,
        unscheduled_matches: outcome.schedule.unscheduled,
        summary: outcome.summary,
    })
}

/// Export schedule endpoint
///
/// POST /api/v1/schedule/export
///
/// Renders schedule entries as the event CSV handed to the organizers.
async fn export_schedule(req: web::Json<ExportScheduleRequest>) -> impl Responder {
    let req = req.into_inner();
    let csv = render_schedule_csv(&req.entries, &req.buyers, &req.sellers);

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .body(csv)
}

fn matching_error_response(err: MatchingError) -> HttpResponse {
    tracing::info!("Matching run rejected: {}", err);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Matching failed".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Render schedule entries as CSV, resolving participant names where the
/// caller supplied the participant lists
fn render_schedule_csv(entries: &[ScheduleEntry], buyers: &[Buyer], sellers: &[Seller]) -> String {
    let mut lines = vec![
        "Date,Time,Buyer,Buyer Company,Seller,Seller Company,Match Type,Compatibility Score,Priority"
            .to_string(),
    ];

    for entry in entries {
        let buyer = buyers.iter().find(|b| b.id == entry.buyer_id);
        let seller = sellers.iter().find(|s| s.id == entry.seller_id);

        lines.push(format!(
            "{},{},{},{},{},{},{},{:.1},{}",
            entry.date.format("%Y-%m-%d"),
            entry.time.format("%H:%M"),
            buyer.map_or(entry.buyer_id.as_str(), |b| b.name.as_str()),
            buyer.map_or("Unknown", |b| b.company.as_str()),
            seller.map_or(entry.seller_id.as_str(), |s| s.name.as_str()),
            seller.map_or("Unknown", |s| s.company.as_str()),
            display_match_type(entry.match_type),
            entry.compatibility_score * 100.0,
            entry.priority,
        ));
    }

    lines.join("\n")
}

fn display_match_type(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::DoubleMatch => "Double Match",
        MatchType::SellerChoice => "Seller Choice",
        MatchType::AiSuggestion => "AI Suggestion",
    }
}
