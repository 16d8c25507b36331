//! HTTP surface: request/response contracts and the axum router.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, instrument};

use crate::cache::RankedCache;
use crate::outcome::{HighScoreState, LeaderboardOutcome};
use crate::query::LeaderboardQueryService;
use crate::store::ScoreStore;
use crate::submission::{SubmissionCoordinator, SubmissionError, SubmissionOutcome};

/// Shared handler state: the submission coordinator and the query service.
#[derive(Clone)]
pub struct AppState {
    coordinator: Arc<SubmissionCoordinator>,
    query: Arc<LeaderboardQueryService>,
}

impl AppState {
    /// Builds the handler state for one board.
    pub fn new(
        store: Arc<dyn ScoreStore>,
        cache: Arc<dyn RankedCache>,
        board_id: &str,
        capacity: usize,
    ) -> Self {
        Self {
            coordinator: Arc::new(SubmissionCoordinator::with_board(
                store,
                Arc::clone(&cache),
                board_id,
                capacity,
            )),
            query: Arc::new(LeaderboardQueryService::new(cache, board_id)),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/scores", post(submit_score))
        .route("/leaderboard", get(query_leaderboard))
        .with_state(state)
}

/// Submit-score request body. Fields stay optional so the coordinator's
/// validation phase owns presence and numeric checks.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitScoreRequest {
    /// Player name.
    pub username: Option<String>,
    /// Submitted score; any JSON value, validated downstream.
    pub score: Option<Value>,
}

/// Submit-score success body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitScoreResponse {
    message: String,
    high_score_status: HighScoreState,
    leaderboard_outcome: LeaderboardOutcomeBody,
}

/// Leaderboard side of the submit-score body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardOutcomeBody {
    made_top_n: bool,
    rank: Option<u32>,
    tenth_place_score: Option<i64>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Error envelope for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    message: String,
}

impl From<SubmissionOutcome> for SubmitScoreResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        let (high_score_status, leaderboard) = outcome.into_parts();
        let leaderboard_outcome = match leaderboard {
            LeaderboardOutcome::Ranked(ranked) => {
                let (made_top_n, rank, boundary_score, message) = ranked.into_parts();
                LeaderboardOutcomeBody {
                    made_top_n,
                    rank,
                    tenth_place_score: boundary_score,
                    message,
                    error: None,
                }
            }
            LeaderboardOutcome::Degraded { message, detail } => LeaderboardOutcomeBody {
                made_top_n: false,
                rank: None,
                tenth_place_score: None,
                message,
                error: Some(detail),
            },
        };

        Self {
            message: "Score submitted successfully!".to_string(),
            high_score_status,
            leaderboard_outcome,
        }
    }
}

#[instrument(skip(state, req))]
async fn submit_score(
    State(state): State<AppState>,
    Json(req): Json<SubmitScoreRequest>,
) -> Response {
    match state
        .coordinator
        .submit(req.username.as_deref(), req.score.as_ref())
    {
        Ok(outcome) => (StatusCode::OK, Json(SubmitScoreResponse::from(outcome))).into_response(),
        Err(SubmissionError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody { message })).into_response()
        }
        Err(SubmissionError::Store(e)) => {
            error!(error = %e, "Submission aborted on store fault");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[instrument(skip(state))]
async fn query_leaderboard(State(state): State<AppState>) -> Response {
    match state.query.get_top(state.coordinator.capacity()) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            error!(error = %e, "Leaderboard read failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
