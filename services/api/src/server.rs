use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAgentDispatcher, InMemoryLeadStateRepository};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use outreach_ai::config::AppConfig;
use outreach_ai::error::AppError;
use outreach_ai::telemetry;
use outreach_ai::workflows::leadgen::{LeadGenState, MockEnricher, ScoringConfig};
use outreach_ai::workflows::replies::{IntentClassifier, ReplyHandlerService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let leadgen_state = Arc::new(LeadGenState {
        enricher: Arc::new(MockEnricher),
        config: ScoringConfig::default(),
    });

    let classifier = Arc::new(IntentClassifier::new(&config.classifier));
    let reply_service = Arc::new(ReplyHandlerService::new(
        classifier,
        Arc::new(InMemoryLeadStateRepository::default()),
        Arc::new(InMemoryAgentDispatcher::default()),
    ));

    let app = with_workflow_routes(leadgen_state, reply_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "outreach service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
