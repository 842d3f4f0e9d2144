//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::role_matcher::RoleMatcher;
use crate::errors::AppError;
use crate::lexicon::{CareerLevel, RoleProfile};
use crate::models::analysis::{AnalysisResult, Identity};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub identity: Identity,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub role_name: String,
    pub domain: String,
    pub career_level: CareerLevel,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<RoleSummary>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRoleRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct CandidateSummary {
    pub role_name: String,
    pub percentage: f64,
    pub exact_title_match: bool,
}

#[derive(Debug, Serialize)]
pub struct MatchRoleResponse {
    /// `None` when no role cleared the relevance threshold.
    pub role: Option<RoleProfile>,
    pub candidates: Vec<CandidateSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Runs the full pipeline on a blocking thread; the work is CPU-bound.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || {
        analyzer.analyze(
            &request.resume_text,
            &request.job_description,
            &request.identity,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;

    Ok(Json(AnalyzeResponse {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        result,
    }))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    let roles = state
        .analyzer
        .lexicon()
        .roles()
        .iter()
        .map(|r| RoleSummary {
            role_name: r.role_name.clone(),
            domain: r.domain.clone(),
            career_level: r.career_level,
        })
        .collect();
    Json(RoleListResponse { roles })
}

/// GET /api/v1/roles/:name
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RoleProfile>, AppError> {
    state
        .analyzer
        .lexicon()
        .role(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("role '{name}'")))
}

/// POST /api/v1/roles/match
///
/// Classifies a job description and returns every candidate above the threshold.
pub async fn handle_match_role(
    State(state): State<AppState>,
    Json(request): Json<MatchRoleRequest>,
) -> Result<Json<MatchRoleResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let ranked = RoleMatcher::new(state.analyzer.lexicon()).rank(&request.job_description);
    let role = ranked.first().map(|c| c.role.clone());
    let candidates = ranked
        .iter()
        .map(|c| CandidateSummary {
            role_name: c.role.role_name.clone(),
            percentage: (c.percentage * 10.0).round() / 10.0,
            exact_title_match: c.exact_title_match,
        })
        .collect();

    Ok(Json(MatchRoleResponse { role, candidates }))
}
