//! Axum route handlers for the Outreach API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::outreach::demo::{demo_cards, DemoCard, Preset, PRESETS};
use crate::outreach::generator::{
    generate_outreach_message, generate_outreach_variants, primary_message,
};
use crate::outreach::models::{OutreachPreferences, OutreachVariants, TargetProfile};
use crate::outreach::profile_parser::{extract, ProfileMetadata};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProfileSearchRequest {
    pub user_background: String,
    pub target_role: String,
    pub industry: String,
    pub location: String,
    #[serde(default)]
    pub preferences: OutreachPreferences,
}

#[derive(Debug, Serialize)]
pub struct ProfileCard {
    pub index: usize,
    pub link: String,
    pub snippet: String,
    pub profile: ProfileMetadata,
    pub variants: OutreachVariants,
    /// The medium variant, ready to paste.
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileSearchResponse {
    pub profiles: Vec<ProfileCard>,
}

#[derive(Debug, Deserialize)]
pub struct VariantsRequest {
    #[serde(default)]
    pub user_background: String,
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub preferences: OutreachPreferences,
}

#[derive(Debug, Serialize)]
pub struct VariantsResponse {
    pub profile: ProfileMetadata,
    pub variants: OutreachVariants,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub profile: ProfileMetadata,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
pub struct DemoQuery {
    #[serde(default)]
    pub value_prop: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/outreach/search
///
/// Searches LinkedIn profiles, then extracts metadata and generates the three
/// message variants for every listing, in result order.
pub async fn handle_search_profiles(
    State(state): State<AppState>,
    Json(request): Json<ProfileSearchRequest>,
) -> Result<Json<ProfileSearchResponse>, AppError> {
    require_fields(&[
        ("Your Background", &request.user_background),
        ("Target Role", &request.target_role),
        ("Industry", &request.industry),
        ("Location", &request.location),
        ("Value Proposition", &request.preferences.value_prop),
    ])?;

    let results = state
        .search
        .search_profiles(
            request.target_role.trim(),
            request.industry.trim(),
            request.location.trim(),
        )
        .await?;
    info!("Found {} profiles", results.len());

    let mut profiles = Vec::with_capacity(results.len());
    for (i, result) in results.into_iter().enumerate() {
        let target = TargetProfile {
            metadata: extract(&result.title, &result.snippet),
            snippet: result.snippet,
        };
        let variants = generate_outreach_variants(
            state.llm.as_ref(),
            request.user_background.trim(),
            &target,
            &request.preferences,
        )
        .await;

        profiles.push(ProfileCard {
            index: i + 1,
            link: result.link,
            snippet: target.snippet,
            profile: target.metadata,
            message: primary_message(&variants).to_string(),
            variants,
        });
    }

    Ok(Json(ProfileSearchResponse { profiles }))
}

/// POST /api/v1/outreach/variants
///
/// Generates the three variants for a single listing supplied by the caller.
pub async fn handle_generate_variants(
    State(state): State<AppState>,
    Json(request): Json<VariantsRequest>,
) -> Result<Json<VariantsResponse>, AppError> {
    require_fields(&[("title", &request.title)])?;

    let target = TargetProfile {
        metadata: extract(&request.title, &request.snippet),
        snippet: request.snippet,
    };
    let variants = generate_outreach_variants(
        state.llm.as_ref(),
        &request.user_background,
        &target,
        &request.preferences,
    )
    .await;

    Ok(Json(VariantsResponse {
        profile: target.metadata,
        variants,
    }))
}

/// POST /api/v1/outreach/message
///
/// Same input as `/variants`, but returns only the medium message.
pub async fn handle_generate_message(
    State(state): State<AppState>,
    Json(request): Json<VariantsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    require_fields(&[("title", &request.title)])?;

    let target = TargetProfile {
        metadata: extract(&request.title, &request.snippet),
        snippet: request.snippet,
    };
    let message = generate_outreach_message(
        state.llm.as_ref(),
        &request.user_background,
        &target,
        &request.preferences,
    )
    .await;

    Ok(Json(MessageResponse {
        profile: target.metadata,
        message,
    }))
}

/// POST /api/v1/outreach/extract
pub async fn handle_extract(Json(request): Json<ExtractRequest>) -> Json<ProfileMetadata> {
    Json(extract(&request.title, &request.snippet))
}

/// GET /api/v1/outreach/presets
pub async fn handle_presets() -> Json<&'static [Preset]> {
    Json(PRESETS)
}

/// GET /api/v1/outreach/demo?value_prop=...
pub async fn handle_demo(Query(query): Query<DemoQuery>) -> Json<Vec<DemoCard>> {
    Json(demo_cards(&query.value_prop))
}

/// Rejects the request listing every blank field, in the order given.
fn require_fields(fields: &[(&str, &String)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Missing: {}", missing.join(", "))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields_lists_all_missing() {
        let background = "Founder".to_string();
        let role = " ".to_string();
        let location = String::new();
        let err = require_fields(&[
            ("Your Background", &background),
            ("Target Role", &role),
            ("Location", &location),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Missing: Target Role, Location");
    }

    #[test]
    fn test_require_fields_accepts_complete_input() {
        let value = "x".to_string();
        assert!(require_fields(&[("a", &value), ("b", &value)]).is_ok());
    }
}
