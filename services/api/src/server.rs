use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_intelligence_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use news_intel::config::AppConfig;
use news_intel::error::AppError;
use news_intel::intelligence::IntelligenceService;
use news_intel::telemetry;
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
    let app_state = AppState::new(prometheus_handle);

    let service = Arc::new(IntelligenceService::from_config(&config.intelligence)?);
    let sources: Vec<String> = service
        .sources()?
        .into_iter()
        .map(|options| options.source.to_string())
        .collect();

    let app = with_intelligence_routes(service)
        .layer(Extension(app_state.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.mark_ready();

    info!(?config.environment, %addr, ?sources, "news intelligence engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
