use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use outreach_ai::workflows::leadgen::{leadgen_router, LeadEnricher, LeadGenState};
use outreach_ai::workflows::replies::{
    reply_router, AgentDispatcher, LeadStateRepository, ReplyHandlerService,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_workflow_routes<E, S, D>(
    leadgen: Arc<LeadGenState<E>>,
    replies: Arc<ReplyHandlerService<S, D>>,
) -> axum::Router
where
    E: LeadEnricher + 'static,
    S: LeadStateRepository + 'static,
    D: AgentDispatcher + 'static,
{
    leadgen_router(leadgen)
        .merge(reply_router(replies))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryAgentDispatcher, InMemoryLeadStateRepository};
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use outreach_ai::workflows::leadgen::{MockEnricher, ScoringConfig};
    use outreach_ai::workflows::replies::IntentClassifier;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let leadgen = Arc::new(LeadGenState {
            enricher: Arc::new(MockEnricher),
            config: ScoringConfig::default(),
        });
        let replies = Arc::new(ReplyHandlerService::new(
            Arc::new(IntentClassifier::heuristic_only()),
            Arc::new(InMemoryLeadStateRepository::default()),
            Arc::new(InMemoryAgentDispatcher::default()),
        ));
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        };
        with_workflow_routes(leadgen, replies).layer(Extension(state))
    }

    async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = get(app(false), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_follows_flag() {
        assert_eq!(
            get(app(false), "/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(get(app(true), "/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn workflow_routes_are_mounted_together() {
        let response = get(app(true), "/api/v1/leads/someone@example.com/state").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(true)
            .oneshot(
                Request::post("/api/v1/leads/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"profile":{"target_industries":["SaaS"],"target_roles":[]},"leads":[]}"#,
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
