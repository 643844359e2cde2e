// Wire types for the HTTP API: request bodies, response bodies, and the
// static fixtures served by the analytics and dashboard endpoints.
//
// Field order in every response struct is the JSON key order on the wire.

use serde::{Deserialize, Serialize};

/// Version string reported by `GET /`.
pub const API_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn default_tone() -> String {
    "professional".to_string()
}

fn default_channels() -> Vec<String> {
    vec!["email".to_string(), "social media".to_string()]
}

fn default_pitch_style() -> String {
    "consultative".to_string()
}

/// Body of `POST /api/campaign/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub product_name: String,
    pub target_audience: String,
    pub campaign_goal: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,
}

/// Body of `POST /api/pitch/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRequest {
    pub product_name: String,
    pub prospect_name: String,
    pub prospect_industry: String,
    pub pain_points: String,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default = "default_pitch_style")]
    pub pitch_style: String,
}

/// Body of `POST /api/leads/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    #[serde(default)]
    pub recent_activity: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Body of `POST /api/analytics/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    pub campaign_type: String,
    pub industry: String,
    pub target_audience: String,
    #[serde(default)]
    pub budget: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// `GET /` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
    pub version: String,
}

impl StatusMessage {
    pub fn running() -> Self {
        Self {
            message: "MarketMind API is running".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

/// `GET /health` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignResponse {
    pub campaign: String,
    pub product: String,
    pub audience: String,
    pub goal: String,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchResponse {
    pub pitch: String,
    pub product: String,
    pub prospect: String,
    pub industry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadAnalysisResponse {
    pub analysis: String,
    pub company: String,
    pub industry: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub analysis: String,
    pub chart_data: ChartData,
    pub campaign_type: String,
    pub industry: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// ---------------------------------------------------------------------------
// Chart data fixture
// ---------------------------------------------------------------------------

/// Illustrative series returned next to every analytics prediction. Not
/// derived from the request or from the generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub monthly_leads: Vec<MonthlyLeads>,
    pub channel_distribution: Vec<ChannelShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLeads {
    pub month: String,
    pub leads: u32,
    pub conversions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub channel: String,
    pub percentage: u32,
}

const MONTHLY_LEADS: [(&str, u32, u32); 3] = [
    ("Month 1", 45, 8),
    ("Month 2", 78, 14),
    ("Month 3", 112, 22),
];

const CHANNEL_DISTRIBUTION: [(&str, u32); 4] = [
    ("Email", 35),
    ("Social Media", 28),
    ("Paid Ads", 22),
    ("Organic", 15),
];

impl ChartData {
    pub fn sample() -> Self {
        Self {
            monthly_leads: MONTHLY_LEADS
                .iter()
                .map(|&(month, leads, conversions)| MonthlyLeads {
                    month: month.to_string(),
                    leads,
                    conversions,
                })
                .collect(),
            channel_distribution: CHANNEL_DISTRIBUTION
                .iter()
                .map(|&(channel, percentage)| ChannelShare {
                    channel: channel.to_string(),
                    percentage,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard stats fixture
// ---------------------------------------------------------------------------

/// `GET /api/dashboard/stats` payload. A static fixture, not a computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_campaigns: u32,
    pub active_leads: u32,
    pub pitches_generated: u32,
    pub avg_lead_score: u32,
    pub conversion_rate: f64,
    pub revenue_pipeline: String,
    pub top_performing_channel: String,
    pub monthly_growth: f64,
}

impl DashboardStats {
    pub fn sample() -> Self {
        Self {
            total_campaigns: 24,
            active_leads: 187,
            pitches_generated: 63,
            avg_lead_score: 72,
            conversion_rate: 18.4,
            revenue_pipeline: "$2.4M".to_string(),
            top_performing_channel: "Email".to_string(),
            monthly_growth: 23.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn campaign_request_applies_defaults() {
        let req: CampaignRequest = serde_json::from_value(json!({
            "product_name": "Acme CRM",
            "target_audience": "SMB founders",
            "campaign_goal": "Drive trials"
        }))
        .unwrap();
        assert_eq!(req.tone, "professional");
        assert_eq!(req.channels, vec!["email", "social media"]);
    }

    #[test]
    fn campaign_request_keeps_explicit_channels_in_order() {
        let req: CampaignRequest = serde_json::from_value(json!({
            "product_name": "Acme CRM",
            "target_audience": "SMB founders",
            "campaign_goal": "Drive trials",
            "tone": "playful",
            "channels": ["tiktok", "email", "podcast"]
        }))
        .unwrap();
        assert_eq!(req.tone, "playful");
        assert_eq!(req.channels, vec!["tiktok", "email", "podcast"]);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = serde_json::from_value::<CampaignRequest>(json!({
            "target_audience": "SMB founders",
            "campaign_goal": "Drive trials"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("product_name"), "got: {err}");
    }

    #[test]
    fn null_required_field_is_rejected() {
        let result = serde_json::from_value::<LeadRequest>(json!({
            "company_name": null,
            "industry": "Fintech",
            "company_size": "50-200"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn pitch_request_optional_budget_and_default_style() {
        let req: PitchRequest = serde_json::from_value(json!({
            "product_name": "Acme CRM",
            "prospect_name": "Globex",
            "prospect_industry": "Logistics",
            "pain_points": "Lost deals",
            "budget_range": null
        }))
        .unwrap();
        assert_eq!(req.budget_range, None);
        assert_eq!(req.pitch_style, "consultative");
    }

    #[test]
    fn chart_data_sample_values() {
        let chart = ChartData::sample();
        let leads: Vec<u32> = chart.monthly_leads.iter().map(|m| m.leads).collect();
        let conversions: Vec<u32> = chart.monthly_leads.iter().map(|m| m.conversions).collect();
        assert_eq!(leads, vec![45, 78, 112]);
        assert_eq!(conversions, vec![8, 14, 22]);

        let total: u32 = chart.channel_distribution.iter().map(|c| c.percentage).sum();
        assert_eq!(total, 100);
        assert_eq!(chart.channel_distribution[0].channel, "Email");
        assert_eq!(chart.channel_distribution[3].channel, "Organic");
    }

    #[test]
    fn dashboard_stats_serialize_in_declared_order() {
        let text = serde_json::to_string(&DashboardStats::sample()).unwrap();
        assert_eq!(
            text,
            r#"{"total_campaigns":24,"active_leads":187,"pitches_generated":63,"avg_lead_score":72,"conversion_rate":18.4,"revenue_pipeline":"$2.4M","top_performing_channel":"Email","monthly_growth":23.5}"#
        );
    }

    #[test]
    fn status_payloads() {
        assert_eq!(
            serde_json::to_value(StatusMessage::running()).unwrap(),
            json!({"message": "MarketMind API is running", "version": "1.0.0"})
        );
        assert_eq!(
            serde_json::to_value(HealthStatus::healthy()).unwrap(),
            json!({"status": "healthy"})
        );
    }
}
