use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDateTime};
use ld_core::config::ReducerConfig;
use ld_core::types::{parse_timestamp, Severity, TimeRange};
use ld_reducer::{DigestStats, LogReducer, SummaryRequest};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound for the lookback window a caller may request (one week).
pub const MAX_HOURS_BACK: u32 = 168;

/// Per-request overrides of the configured reducer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DigestParams {
    pub max_lines: Option<usize>,
    pub hours_back: Option<u32>,
    pub reference_time: Option<String>,
    pub severities: Option<Vec<Severity>>,
}

#[derive(Debug, Deserialize)]
pub struct DigestRequest {
    pub log: String,
    #[serde(flatten)]
    pub params: DigestParams,
}

#[derive(Debug, Deserialize)]
pub struct FileDigestRequest {
    pub file_path: Option<String>,
    #[serde(flatten)]
    pub params: DigestParams,
}

/// Query string of the raw upload endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    pub max_lines: Option<usize>,
    pub hours_back: Option<u32>,
    pub reference_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DigestResponse {
    pub reduced: String,
    pub time_range: Option<TimeRange>,
    pub summary_window: String,
    pub stats: DigestStats,
}

/// Accepts `2025-01-01 10:00:00.000000` or ISO `2025-01-01T10:00:00`.
pub fn parse_reference_time(s: &str) -> Option<NaiveDateTime> {
    parse_timestamp(s).or_else(|| s.parse::<NaiveDateTime>().ok())
}

impl DigestParams {
    /// Build the reducer and resolve the reference time ("now" when absent).
    pub fn resolve(&self, base: &ReducerConfig) -> Result<(LogReducer, NaiveDateTime), ApiError> {
        let mut reducer = LogReducer::new(base);
        if let Some(max_lines) = self.max_lines {
            if max_lines == 0 {
                return Err(ApiError::bad_request("max_lines must be positive"));
            }
            reducer = reducer.with_max_lines(max_lines);
        }
        if let Some(hours) = self.hours_back {
            reducer = reducer.with_hours_back(hours.clamp(1, MAX_HOURS_BACK));
        }
        if let Some(severities) = &self.severities {
            if severities.is_empty() {
                return Err(ApiError::bad_request("severities must not be empty"));
            }
            reducer = reducer.with_severities(severities.clone());
        }
        let reference_time = match &self.reference_time {
            Some(s) => parse_reference_time(s)
                .ok_or_else(|| ApiError::bad_request(format!("invalid reference_time: {s}")))?,
            None => Local::now().naive_local(),
        };
        Ok((reducer, reference_time))
    }
}

impl From<UploadQuery> for DigestParams {
    fn from(q: UploadQuery) -> Self {
        Self {
            max_lines: q.max_lines,
            hours_back: q.hours_back,
            reference_time: q.reference_time,
            severities: None,
        }
    }
}

fn run_digest(
    state: &AppState,
    params: &DigestParams,
    log: &str,
) -> Result<DigestResponse, ApiError> {
    let (reducer, reference_time) = params.resolve(&state.config.reducer)?;
    let result = reducer.run(log, reference_time);
    let summary_window = TimeRange::describe(result.time_range.as_ref());
    info!(
        retained = result.stats.retained_lines,
        emitted = result.stats.emitted_lines,
        %reference_time,
        "{summary_window}"
    );
    Ok(DigestResponse {
        reduced: result.output,
        time_range: result.time_range,
        summary_window,
        stats: result.stats,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn digest_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/digest", post(digest_text))
        .route("/api/v1/digest/upload", post(digest_upload))
        .route("/api/v1/digest/file", post(digest_file))
        .route("/api/v1/digest/request", post(summary_request))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn digest_text(
    State(state): State<AppState>,
    Json(req): Json<DigestRequest>,
) -> Result<Json<DigestResponse>, ApiError> {
    run_digest(&state, &req.params, &req.log).map(Json)
}

async fn digest_upload(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<Json<DigestResponse>, ApiError> {
    let log = String::from_utf8_lossy(&body);
    run_digest(&state, &query.into(), &log).map(Json)
}

async fn digest_file(
    State(state): State<AppState>,
    Json(req): Json<FileDigestRequest>,
) -> Result<Json<DigestResponse>, ApiError> {
    let (path, log) = state.source.read(req.file_path.as_deref()).await?;
    info!(path = %path.display(), bytes = log.len(), "digesting log file");
    run_digest(&state, &req.params, &log).map(Json)
}

async fn summary_request(
    State(state): State<AppState>,
    Json(req): Json<DigestRequest>,
) -> Result<Json<SummaryRequest>, ApiError> {
    let digest = run_digest(&state, &req.params, &req.log)?;
    Ok(Json(SummaryRequest::new(&state.config.summary, &digest.reduced)))
}
