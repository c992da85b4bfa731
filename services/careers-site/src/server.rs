use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use careers_intake::config::AppConfig;
use careers_intake::error::AppError;
use careers_intake::telemetry;
use careers_intake::workflows::careers::{CareersContent, TestimonialCarousel};
use careers_intake::workflows::projects::ProjectShowcase;
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

    let catalog = load_catalog(&config.intake)?;
    info!(positions = catalog.len(), "job catalog loaded");
    let careers = Arc::new(CareersContent::new(
        catalog,
        TestimonialCarousel::standard(),
    ));
    let projects = Arc::new(ProjectShowcase::standard());

    let app = with_site_routes(careers, projects)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "careers site ready");

    axum::serve(listener, app).await?;
    Ok(())
}
