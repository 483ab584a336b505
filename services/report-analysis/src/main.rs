//! # VitalScan Report Analysis Service
//!
//! Accepts scanned PDF lab reports, extracts numeric health measurements,
//! and returns summary statistics, a measurement table and trend charts.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use vitalscan_report_analysis::pipeline::{AnalysisOutcome, AnalysisService};
use vitalscan_utils::{
    init_logging, sanitize_filename, validate_file_size, validate_file_type, AppConfig,
    ErrorResponse, VitalScanError,
};

#[derive(Clone)]
struct AppState {
    service: Arc<AnalysisService>,
    config: Arc<AppConfig>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|_| AppConfig::default());
    init_logging(&config.logging)?;

    info!("Starting VitalScan Report Analysis Service");

    std::fs::create_dir_all(&config.storage.upload_dir)?;
    std::fs::create_dir_all(&config.storage.chart_dir)?;

    let state = AppState {
        service: Arc::new(AnalysisService::new(&config)),
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/reports/analyze", post(analyze_report))
        .nest_service(
            config.storage.public_chart_path.as_str(),
            ServeDir::new(&config.storage.chart_dir),
        )
        .layer(DefaultBodyLimit::max(config.server.max_request_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Report Analysis Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "report-analysis",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    status: String,
    #[serde(flatten)]
    outcome: AnalysisOutcome,
}

async fn analyze_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| reject(VitalScanError::validation("file", format!("Upload error: {e}"))))?
        .ok_or_else(|| reject(VitalScanError::validation("file", "No file uploaded")))?;

    let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
    if filename.is_empty() {
        return Err(reject(VitalScanError::validation("file", "No selected file")));
    }

    validate_file_type(&filename, &["pdf"]).map_err(reject)?;

    let data = field
        .bytes()
        .await
        .map_err(|e| reject(VitalScanError::validation("file", format!("Read error: {e}"))))?;

    validate_file_size(data.len() as u64, state.config.server.max_request_size as u64)
        .map_err(reject)?;

    let stored_name = sanitize_filename(&filename);
    let upload_path =
        std::path::Path::new(&state.config.storage.upload_dir).join(&stored_name);
    tokio::fs::write(&upload_path, &data)
        .await
        .map_err(|e| reject(VitalScanError::internal(format!("Failed to store upload: {e}"))))?;

    info!(filename = %stored_name, size = data.len(), "Analyzing uploaded report");

    let outcome = state.service.analyze(&stored_name, &data).map_err(reject)?;

    Ok(Json(AnalyzeResponse {
        status: "success".to_string(),
        outcome,
    }))
}

fn reject(error: VitalScanError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(error)))
}
