use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{label_for, Matcher};
use crate::errors::ApiError;
use crate::models::{
    BatchScoreRequest, BatchScoreResponse, HealthResponse, LabelQuery, LabelResponse,
    ScoreRequest, ScoreResponse, ScoredListing,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_batch_size: usize,
}

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/score", web::post().to(score_listing))
        .route("/match/score/batch", web::post().to(score_batch))
        .route("/match/label", web::get().to(score_label));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single listing
///
/// POST /api/v1/match/score
///
/// Request body:
/// ```json
/// {
///   "listing": { "city": "Zürich", "rooms": "3.5", "price": 1650, "features": [] },
///   "profile": { "cities": ["Zürich"], "maxPrice": 2500, "keywords": ["Balkon"] }
/// }
/// ```
async fn score_listing(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {}", errors);
        return Err(errors.into());
    }

    let result = state.matcher.score(&req.listing, &req.profile);
    let label = LabelResponse::new(result.score, label_for(result.score));

    tracing::info!(
        "Scored listing in {:?}: {} ({})",
        req.listing.city,
        result.score,
        label.label
    );

    Ok(HttpResponse::Ok().json(ScoreResponse { result, label }))
}

/// Score many listings against one profile
///
/// POST /api/v1/match/score/batch
///
/// Results are returned in request order.
async fn score_batch(
    state: web::Data<AppState>,
    req: web::Json<BatchScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for batch request: {}", errors);
        return Err(errors.into());
    }

    let size = req.listings.len();
    if size == 0 {
        return Err(ApiError::EmptyBatch);
    }
    if size > state.max_batch_size {
        tracing::info!("Rejected batch of {} listings (max {})", size, state.max_batch_size);
        return Err(ApiError::BatchTooLarge {
            size,
            max: state.max_batch_size,
        });
    }

    let results: Vec<ScoredListing> = state
        .matcher
        .score_all(&req.profile, &req.listings)
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            tracing::debug!("Batch listing {} scored {}", index, result.score);
            let label = LabelResponse::new(result.score, label_for(result.score));
            ScoredListing {
                index,
                result,
                label,
            }
        })
        .collect();

    tracing::info!("Scored batch of {} listings", size);

    Ok(HttpResponse::Ok().json(BatchScoreResponse {
        total: results.len(),
        results,
    }))
}

/// Label for a score
///
/// GET /api/v1/match/label?score={score}
async fn score_label(query: web::Query<LabelQuery>) -> impl Responder {
    HttpResponse::Ok().json(LabelResponse::new(query.score, label_for(query.score)))
}
