use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::InboundMessage;
use super::repository::{AgentDispatcher, LeadStateRepository, LeadStateView};
use super::service::ReplyHandlerService;
use crate::workflows::leadgen::ingest::normalize_email;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InboundReplyRequest {
    pub sender: String,
    pub body: String,
}

/// Router builder exposing reply intake and lead state lookups.
pub fn reply_router<S, D>(service: Arc<ReplyHandlerService<S, D>>) -> Router
where
    S: LeadStateRepository + 'static,
    D: AgentDispatcher + 'static,
{
    Router::new()
        .route("/api/v1/replies", post(reply_handler::<S, D>))
        .route("/api/v1/leads/:email/state", get(state_handler::<S, D>))
        .with_state(service)
}

pub(crate) async fn reply_handler<S, D>(
    State(service): State<Arc<ReplyHandlerService<S, D>>>,
    Json(request): Json<InboundReplyRequest>,
) -> Response
where
    S: LeadStateRepository + 'static,
    D: AgentDispatcher + 'static,
{
    if request.sender.trim().is_empty() {
        let payload = json!({ "error": "sender must not be empty" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let message = InboundMessage::new(request.sender.trim(), request.body);
    match service.process_inbound(message).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn state_handler<S, D>(
    State(service): State<Arc<ReplyHandlerService<S, D>>>,
    Path(email): Path<String>,
) -> Response
where
    S: LeadStateRepository + 'static,
    D: AgentDispatcher + 'static,
{
    match service.lead_state(&email) {
        Ok(Some(record)) => (StatusCode::OK, Json(LeadStateView::from(record))).into_response(),
        Ok(None) => {
            let view = LeadStateView::untouched(normalize_email(&email));
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
