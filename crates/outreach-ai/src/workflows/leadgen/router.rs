use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{EnrichedLead, IcpProfile, RawLead, ScoredLead};
use super::enrichment::LeadEnricher;
use super::scoring::{IcpScorer, ScoringConfig};
use super::service::{LeadBatch, LeadGenService};

/// Shared state for the scoring endpoints. The ICP profile arrives with each request.
pub struct LeadGenState<E> {
    pub enricher: Arc<E>,
    pub config: ScoringConfig,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreLeadsRequest {
    pub profile: IcpProfile,
    pub leads: Vec<EnrichedLead>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeadBatchRequest {
    pub profile: IcpProfile,
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub leads: Vec<RawLead>,
}

#[derive(Debug, Serialize)]
pub struct LeadBatchResponse {
    pub scored: Vec<ScoredLead>,
    pub qualified: Vec<ScoredLead>,
}

/// Router builder exposing the scoring endpoints.
pub fn leadgen_router<E>(state: Arc<LeadGenState<E>>) -> Router
where
    E: LeadEnricher + 'static,
{
    Router::new()
        .route("/api/v1/leads/score", post(score_handler::<E>))
        .route("/api/v1/leads/batch", post(batch_handler::<E>))
        .with_state(state)
}

pub(crate) async fn score_handler<E>(
    State(state): State<Arc<LeadGenState<E>>>,
    Json(request): Json<ScoreLeadsRequest>,
) -> Json<Vec<ScoredLead>>
where
    E: LeadEnricher + 'static,
{
    let scorer = IcpScorer::with_config(request.profile, state.config);
    Json(request.leads.iter().map(|lead| scorer.score(lead)).collect())
}

pub(crate) async fn batch_handler<E>(
    State(state): State<Arc<LeadGenState<E>>>,
    Json(request): Json<LeadBatchRequest>,
) -> Response
where
    E: LeadEnricher + 'static,
{
    let LeadBatchRequest {
        profile,
        csv,
        leads,
    } = request;

    let mut batch = LeadBatch::new();
    if let Some(csv) = csv {
        batch = match batch.with_csv(Cursor::new(csv.into_bytes())) {
            Ok(batch) => batch,
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        };
    }
    let batch = batch.with_manual(leads);

    let service = LeadGenService::with_config(state.enricher.clone(), profile, state.config);
    let scored = service.process_batch(batch);
    let qualified = scored
        .iter()
        .filter(|lead| service.scorer().qualifies(lead))
        .cloned()
        .collect();

    (StatusCode::OK, Json(LeadBatchResponse { scored, qualified })).into_response()
}
