use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use vendor_assess::error::AppError;
use vendor_assess::workflows::assessment::{
    render_assessment_report, Finding, RiskAssessor, VendorAssessment, VendorData,
};
use vendor_assess::workflows::research::{
    evaluate_findings, render_research_report, research_checklist, research_sources,
    search_queries, FindingsEvaluation, ResearchChecklist, ResearchFindings, SourceGroup,
};
use vendor_assess::workflows::{Category, FollowUpEmail, Language};

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) vendor: String,
    pub(crate) category: i64,
    #[serde(default)]
    pub(crate) data: VendorData,
    #[serde(default)]
    pub(crate) language: Option<String>,
    #[serde(default)]
    pub(crate) include_report: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    #[serde(flatten)]
    pub(crate) assessment: VendorAssessment,
    pub(crate) recommendations: [&'static str; 3],
    pub(crate) concerns: Vec<Finding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) report: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResearchRequest {
    pub(crate) vendor: String,
    pub(crate) category: i64,
    #[serde(default)]
    pub(crate) findings: ResearchFindings,
    #[serde(default)]
    pub(crate) sources: Vec<String>,
    #[serde(default)]
    pub(crate) generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResearchResponse {
    pub(crate) sources: &'static [SourceGroup],
    pub(crate) queries: Vec<String>,
    pub(crate) checklist: ResearchChecklist,
    pub(crate) evaluation: FindingsEvaluation,
    pub(crate) report: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    #[serde(default)]
    pub(crate) findings: ResearchFindings,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FollowUpRequest {
    pub(crate) vendor: String,
    pub(crate) category: i64,
    #[serde(default)]
    pub(crate) action_items: Vec<String>,
    /// Used to derive action items when none are listed.
    #[serde(default)]
    pub(crate) data: Option<VendorData>,
    #[serde(default)]
    pub(crate) contact: Option<String>,
    #[serde(default)]
    pub(crate) language: Option<String>,
    #[serde(default)]
    pub(crate) sender_name: Option<String>,
    #[serde(default)]
    pub(crate) sender_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FollowUpResponse {
    pub(crate) vendor: String,
    pub(crate) action_items: Vec<String>,
    pub(crate) html: String,
}

pub(crate) fn vendor_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/vendors/assessment", post(assessment_endpoint))
        .route("/api/v1/vendors/research", post(research_endpoint))
        .route("/api/v1/vendors/evaluation", post(evaluation_endpoint))
        .route("/api/v1/vendors/follow-up", post(follow_up_endpoint))
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

fn language_or_default(raw: Option<&str>, state: &AppState) -> Result<Language, AppError> {
    match raw {
        Some(value) => Ok(value.parse::<Language>()?),
        None => Ok(state.reporting.language),
    }
}

pub(crate) async fn assessment_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let category = Category::try_from(payload.category)?;
    let language = language_or_default(payload.language.as_deref(), &state)?;

    let assessment = RiskAssessor::default().assess(&payload.vendor, category, &payload.data);
    info!(
        vendor = %assessment.vendor,
        %category,
        decision = %assessment.decision.decision,
        "vendor assessed"
    );

    let report = payload
        .include_report
        .then(|| render_assessment_report(&assessment, &payload.data, language));
    let concerns = assessment.concerns().into_iter().cloned().collect();

    Ok(Json(AssessmentResponse {
        recommendations: assessment.recommendations(language),
        concerns,
        report,
        assessment,
    }))
}

pub(crate) async fn research_endpoint(
    Json(payload): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>, AppError> {
    let category = Category::try_from(payload.category)?;
    let generated_at = payload.generated_at.unwrap_or_else(Utc::now);

    let checklist = research_checklist(&payload.vendor, category, generated_at);
    let evaluation = evaluate_findings(&payload.findings);
    let report = render_research_report(&payload.vendor, &checklist, &evaluation, &payload.sources);

    Ok(Json(ResearchResponse {
        sources: research_sources(),
        queries: search_queries(&payload.vendor, category),
        checklist,
        evaluation,
        report,
    }))
}

pub(crate) async fn evaluation_endpoint(
    Json(payload): Json<EvaluationRequest>,
) -> Json<FindingsEvaluation> {
    Json(evaluate_findings(&payload.findings))
}

pub(crate) async fn follow_up_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<FollowUpRequest>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let category = Category::try_from(payload.category)?;
    let language = language_or_default(payload.language.as_deref(), &state)?;
    let sender_name = payload
        .sender_name
        .unwrap_or_else(|| state.reporting.sender_name.clone());
    let sender_email = payload
        .sender_email
        .unwrap_or_else(|| state.reporting.sender_email.clone());

    let mut email = match (payload.action_items.is_empty(), payload.data) {
        (true, Some(data)) => {
            let assessment = RiskAssessor::default().assess(&payload.vendor, category, &data);
            FollowUpEmail::from_assessment(&assessment, sender_name, sender_email)
        }
        _ => FollowUpEmail::new(
            payload.vendor,
            category,
            payload.action_items,
            sender_name,
            sender_email,
        ),
    }
    .with_language(language);
    if let Some(contact) = payload.contact {
        email = email.with_contact(contact);
    }

    let html = email.render_html()?;
    Ok(Json(FollowUpResponse {
        vendor: email.vendor,
        action_items: email.action_items,
        html,
    }))
}
