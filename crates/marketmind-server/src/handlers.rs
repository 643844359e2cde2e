// Endpoint handlers. Each generation handler is: validated body -> prompt ->
// upstream call -> response echoing the request fields.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use marketmind_core::protocol::{
    AnalyticsRequest, AnalyticsResponse, CampaignRequest, CampaignResponse, ChartData,
    DashboardStats, ErrorBody, HealthStatus, LeadAnalysisResponse, LeadRequest, PitchRequest, PitchResponse,
    StatusMessage,
};
use marketmind_llm::prompt;

use crate::app::{ApiJson, AppState};
use crate::error::ApiError;

pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage::running())
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

pub async fn generate_campaign(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CampaignRequest>,
) -> Result<Json<CampaignResponse>, ApiError> {
    let prompt = prompt::build_campaign_prompt(&req);
    let campaign = state.generate("campaign", &prompt).await?;

    Ok(Json(CampaignResponse {
        campaign,
        product: req.product_name,
        audience: req.target_audience,
        goal: req.campaign_goal,
        channels: req.channels,
    }))
}

pub async fn generate_pitch(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PitchRequest>,
) -> Result<Json<PitchResponse>, ApiError> {
    let prompt = prompt::build_pitch_prompt(&req);
    let pitch = state.generate("pitch", &prompt).await?;

    Ok(Json(PitchResponse {
        pitch,
        product: req.product_name,
        prospect: req.prospect_name,
        industry: req.prospect_industry,
    }))
}

pub async fn analyze_lead(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LeadRequest>,
) -> Result<Json<LeadAnalysisResponse>, ApiError> {
    let prompt = prompt::build_lead_prompt(&req);
    let analysis = state.generate("lead_analysis", &prompt).await?;

    Ok(Json(LeadAnalysisResponse {
        analysis,
        company: req.company_name,
        industry: req.industry,
        size: req.company_size,
    }))
}

/// Generated analysis plus the fixed chart series.
pub async fn predict_analytics(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalyticsRequest>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let prompt = prompt::build_analytics_prompt(&req);
    let analysis = state.generate("analytics", &prompt).await?;

    Ok(Json(AnalyticsResponse {
        analysis,
        chart_data: ChartData::sample(),
        campaign_type: req.campaign_type,
        industry: req.industry,
    }))
}

pub async fn dashboard_stats() -> Json<DashboardStats> {
    Json(DashboardStats::sample())
}

/// Unknown routes keep the `{"detail": ...}` error shape.
pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Not Found".to_string(),
        }),
    )
}
