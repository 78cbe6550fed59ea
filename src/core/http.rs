//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::QueryRejection, MatchedPath, Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::aggregation::{self, CategoryReport, ReportMetadata, DATA_SOURCE};
use crate::analytics::{DEFAULT_TREND_PERIODS, DEFAULT_WINDOW};
use crate::config::Config;
use crate::core::error::ApiError;
use crate::core::period::Period;
use crate::indicators::{CategoryRegistry, IndicatorCategory};
use crate::metrics::{Metrics, UNMATCHED_ROUTE};
use crate::models::{IndicatorSnapshot, Series, SeriesAnalytics, SnapshotEntry};
use crate::services::{DateRange, FredClient, GeminiClient, NarrativeGenerator, SeriesProvider};

pub const SERVICE_NAME: &str = "US Economic Dashboard API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Series used by the upstream connectivity probe.
pub const PROBE_SERIES_ID: &str = "DFF";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn SeriesProvider>,
    pub narrator: Arc<dyn NarrativeGenerator>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub debug: bool,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn SeriesProvider>,
        narrator: Arc<dyn NarrativeGenerator>,
        metrics: Arc<Metrics>,
        debug: bool,
    ) -> Self {
        Self {
            provider,
            narrator,
            metrics,
            start_time: Arc::new(Instant::now()),
            debug,
        }
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "status": "running"
    }))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "debug_mode": state.debug,
        "uptime_seconds": state.start_time.elapsed().as_secs()
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics
        .export()
        .map_err(|e| ApiError::Internal(format!("metrics export failed: {e}")))
}

/// Record per-route request metrics. Upstream failures surface as 502s, so
/// every 5xx is also logged with its route.
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let elapsed = start.elapsed();
    state
        .metrics
        .observe_request(&method, &route, status.as_u16(), elapsed.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = elapsed.as_millis(),
            "Request failed"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    period: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    period: Option<String>,
    window: Option<usize>,
    periods: Option<usize>,
}

/// All series of one category
async fn get_category(
    State(state): State<AppState>,
    Path(route): Path<String>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<CategoryReport>, ApiError> {
    let Query(params) = query?;
    let category = IndicatorCategory::from_route(&route)
        .ok_or_else(|| ApiError::NotFound(format!("unknown indicator category: {route}")))?;

    let period = params
        .period
        .unwrap_or_else(|| category.default_period().to_string());
    let range = Period::parse_or_default(&period).date_range();

    let report =
        aggregation::fetch_category(state.provider.as_ref(), category, &period, range).await;
    Ok(Json(report))
}

#[derive(Debug, Serialize)]
struct SummaryResponse {
    summary: IndicatorSnapshot,
    updated_at: String,
}

/// Latest value of every series, for the dashboard's quick metrics
async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let summary = aggregation::latest_snapshot(state.provider.as_ref()).await;
    Json(SummaryResponse {
        summary,
        updated_at: Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    })
}

/// Upstream connectivity probe
async fn test_upstream(State(state): State<AppState>) -> Json<Value> {
    match state.provider.latest(PROBE_SERIES_ID).await {
        Some(latest) => Json(json!({
            "status": "success",
            "message": "FRED API connection succeeded",
            "data": latest
        })),
        None => Json(json!({
            "status": "error",
            "message": "Could not fetch data from FRED"
        })),
    }
}

#[derive(Debug, Serialize)]
struct SeriesResponse {
    series_id: String,
    name: Option<&'static str>,
    category: Option<IndicatorCategory>,
    period: String,
    series: Series,
    analytics: SeriesAnalytics,
    metadata: ReportMetadata,
}

/// One series with every derived metric
async fn get_series(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
    query: Result<Query<SeriesQuery>, QueryRejection>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let Query(params) = query?;
    let period = params.period.unwrap_or_else(|| "1y".to_string());
    let range = Period::parse_or_default(&period).date_range();
    let window = params.window.unwrap_or(DEFAULT_WINDOW);
    let trend_periods = params.periods.unwrap_or(DEFAULT_TREND_PERIODS);

    let series = state.provider.fetch_series(&series_id, range).await;
    let analytics = SeriesAnalytics::compute(&series, window, trend_periods);
    let registered = CategoryRegistry::find(&series_id);

    Ok(Json(SeriesResponse {
        name: registered.map(|(_, def)| def.name),
        category: registered.map(|(category, _)| category),
        series_id,
        period,
        series,
        analytics,
        metadata: ReportMetadata {
            start_date: range.start,
            end_date: range.end,
            source: DATA_SOURCE,
        },
    }))
}

/// Narrative analysis of the latest values across all categories
async fn generate_analysis(State(state): State<AppState>) -> Json<Value> {
    let indicators = aggregation::latest_snapshot(state.provider.as_ref()).await;
    info!(series = indicators.len(), "Generating narrative analysis");
    let analysis = state.narrator.summarize(&indicators).await;

    Json(json!({
        "analysis": analysis,
        "indicators_used": indicators,
        "model": state.narrator.name()
    }))
}

/// Narrative backend probe with one fixed synthetic indicator
async fn test_narrative(State(state): State<AppState>) -> Json<Value> {
    let analysis = state.narrator.summarize(&probe_snapshot()).await;

    match &analysis.error {
        None => Json(json!({
            "status": "success",
            "message": "Narrative backend connection succeeded",
            "test_analysis": analysis
        })),
        Some(e) => Json(json!({
            "status": "error",
            "message": format!("Narrative backend connection failed: {e}"),
            "test_analysis": analysis
        })),
    }
}

fn probe_snapshot() -> IndicatorSnapshot {
    let mut snapshot = IndicatorSnapshot::new();
    if let Some(date) = NaiveDate::from_ymd_opt(2024, 12, 1) {
        snapshot.insert(
            IndicatorCategory::InterestRates.slug(),
            PROBE_SERIES_ID,
            SnapshotEntry {
                name: "Federal Funds Rate".to_string(),
                value: 5.5,
                date,
            },
        );
    }
    snapshot
}

/// One-sentence comment on the latest move of a series
async fn get_insight(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let series = state
        .provider
        .fetch_series(&series_id, DateRange::default())
        .await;
    if let Some(error) = series.error() {
        return Err(ApiError::Upstream(format!(
            "failed to fetch {series_id}: {error}"
        )));
    }

    let observations = series.observations();
    let latest = observations
        .first()
        .ok_or_else(|| ApiError::NotFound(format!("no observations for {series_id}")))?;
    let previous = observations.get(1).map(|obs| obs.value);

    let name = CategoryRegistry::display_name(&series_id).unwrap_or(series_id.as_str());
    let insight = state
        .narrator
        .quick_insight(name, latest.value, previous)
        .await;

    Ok(Json(json!({
        "series_id": series_id,
        "name": name,
        "current": latest.value,
        "previous": previous,
        "date": latest.date,
        "insight": insight
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/indicators/summary", get(get_summary))
        .route("/api/indicators/test", get(test_upstream))
        .route("/api/indicators/series/{series_id}", get(get_series))
        .route("/api/indicators/{category}", get(get_category))
        .route("/api/analysis/generate", post(generate_analysis))
        .route("/api/analysis/test", get(test_narrative))
        .route("/api/analysis/insight/{series_id}", get(get_insight))
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Not Found" })),
            )
        })
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Wire the real FRED and Gemini clients into application state.
pub fn build_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
    let provider = Arc::new(FredClient::new(config)?);
    let narrator = Arc::new(GeminiClient::new(config)?);
    let metrics = Arc::new(Metrics::new().map_err(|e| e.to_string())?);
    Ok(AppState::new(provider, narrator, metrics, config.debug))
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = build_state(&config)?;
    let app = create_router(state);
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address = %address, "HTTP server listening on {}", address);
    info!(debug = config.debug, "Debug mode");
    axum::serve(listener, app).await?;

    Ok(())
}
