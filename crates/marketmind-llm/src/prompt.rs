// Prompt templates for campaign generation, sales pitches, lead analysis and
// analytics prediction.
//
// Each prompt is a list of line fragments joined with newlines. Optional
// request fields contribute a line only when they hold a non-empty value,
// so an absent field leaves no trace in the prompt.

use marketmind_core::protocol::{AnalyticsRequest, CampaignRequest, LeadRequest, PitchRequest};

// ---------------------------------------------------------------------------
// Output section lists
// ---------------------------------------------------------------------------

const CAMPAIGN_SECTIONS: &[&str] = &[
    "1. Campaign Name & Tagline",
    "2. Key Message (2-3 sentences)",
    "3. Channel-specific content:",
    "   - Email subject line and body (150 words)",
    "   - Social media post for each channel (tweet-length and LinkedIn version)",
    "   - Ad copy (headline + description)",
    "4. Call-to-Action options (3 variants)",
    "5. KPIs to track success",
];

const PITCH_SECTIONS: &[&str] = &[
    "1. Opening Hook (attention-grabbing first line)",
    "2. Empathy Statement (acknowledge their pain points)",
    "3. Value Proposition (how your product solves their specific problems)",
    "4. Social Proof (2-3 realistic case study references)",
    "5. ROI/Business Case (quantified benefits)",
    "6. Objection Handling (top 3 objections + responses)",
    "7. Closing Statement & Next Steps",
];

const LEAD_SECTIONS: &[&str] = &[
    "1. Lead Score (0-100) with reasoning",
    "2. Buyer Persona Profile",
    "3. Likely Pain Points & Challenges (based on industry/size)",
    "4. Buying Intent Signals",
    "5. Best Outreach Strategy (timing, channel, message angle)",
    "6. Competitor Landscape (likely tools/vendors they use)",
    "7. Deal Potential (Low/Medium/High) with deal size estimate",
    "8. Recommended Next Actions (3 specific steps)",
];

const ANALYTICS_SECTIONS: &[&str] = &[
    "1. Expected Performance Metrics:",
    "   - Email: Open rate, CTR, Conversion rate",
    "   - Social: Engagement rate, Reach, CPM",
    "   - Paid Ads: CTR, CPC, ROAS",
    "2. Industry Benchmarks comparison",
    "3. Predicted Lead Generation (monthly)",
    "4. Revenue Impact Forecast (3-month projection)",
    "5. Budget Allocation Recommendations (% per channel)",
    "6. Risk Factors & Mitigation",
    "7. Optimization Tips (top 5)",
    "8. A/B Test Recommendations",
];

// ---------------------------------------------------------------------------
// Campaign prompt
// ---------------------------------------------------------------------------

/// Build the prompt for `POST /api/campaign/generate`.
pub fn build_campaign_prompt(req: &CampaignRequest) -> String {
    let mut lines = vec![
        "You are an expert marketing strategist. Create a comprehensive marketing campaign for:"
            .to_string(),
        String::new(),
        field_line("Product/Service", &req.product_name),
        field_line("Target Audience", &req.target_audience),
        field_line("Campaign Goal", &req.campaign_goal),
        field_line("Tone", &req.tone),
        field_line("Channels", &req.channels.join(", ")),
        String::new(),
        "Provide a structured campaign with:".to_string(),
    ];
    push_sections(&mut lines, CAMPAIGN_SECTIONS);
    lines.push(String::new());
    lines.push("Format clearly with headers. Be creative and persuasive.".to_string());
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Sales pitch prompt
// ---------------------------------------------------------------------------

/// Build the prompt for `POST /api/pitch/generate`.
pub fn build_pitch_prompt(req: &PitchRequest) -> String {
    let mut lines = vec![
        "You are a world-class sales consultant. Create a compelling sales pitch for:".to_string(),
        String::new(),
        field_line("Product/Service", &req.product_name),
        field_line("Prospect", &req.prospect_name),
        field_line("Industry", &req.prospect_industry),
        field_line("Pain Points", &req.pain_points),
    ];
    lines.extend(optional_line("Budget Range", req.budget_range.as_deref()));
    lines.push(field_line("Pitch Style", &req.pitch_style));
    lines.push(String::new());
    lines.push("Structure the pitch as:".to_string());
    push_sections(&mut lines, PITCH_SECTIONS);
    lines.push(String::new());
    lines.push(format!(
        "Make it personalized, persuasive, and specific to their industry. Use {} sales methodology.",
        req.pitch_style
    ));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Lead analysis prompt
// ---------------------------------------------------------------------------

/// Build the prompt for `POST /api/leads/analyze`.
pub fn build_lead_prompt(req: &LeadRequest) -> String {
    let mut lines = vec![
        "You are a B2B sales intelligence expert. Analyze this lead and provide actionable insights:"
            .to_string(),
        String::new(),
        field_line("Company", &req.company_name),
        field_line("Industry", &req.industry),
        field_line("Company Size", &req.company_size),
    ];
    lines.extend(optional_line("Recent Activity", req.recent_activity.as_deref()));
    lines.extend(optional_line("Website", req.website.as_deref()));
    lines.push(String::new());
    lines.push("Provide:".to_string());
    push_sections(&mut lines, LEAD_SECTIONS);
    lines.push(String::new());
    lines.push(
        "Be data-driven and specific. Give actionable intelligence a sales rep can use immediately."
            .to_string(),
    );
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Analytics prediction prompt
// ---------------------------------------------------------------------------

/// Build the prompt for `POST /api/analytics/predict`.
pub fn build_analytics_prompt(req: &AnalyticsRequest) -> String {
    let mut lines = vec![
        "You are a marketing analytics expert. Provide predictive analytics and benchmarks for:"
            .to_string(),
        String::new(),
        field_line("Campaign Type", &req.campaign_type),
        field_line("Industry", &req.industry),
        field_line("Target Audience", &req.target_audience),
    ];
    lines.extend(optional_line("Budget", req.budget.as_deref()));
    lines.push(String::new());
    lines.push("Provide:".to_string());
    push_sections(&mut lines, ANALYTICS_SECTIONS);
    lines.push(String::new());
    lines.push(
        "Format with specific numbers and percentages. Be realistic based on industry standards."
            .to_string(),
    );
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn field_line(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}

/// `Some("{label}: {value}")` when the value is present and non-empty.
fn optional_line(label: &str, value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| field_line(label, v))
}

fn push_sections(lines: &mut Vec<String>, sections: &[&str]) {
    lines.extend(sections.iter().map(|s| s.to_string()));
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
