//! API route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Json, Response},
};
use dsreview_core::diff::VersionComparison;
use dsreview_core::labeling::{self, LabelProgress, LabelSubmission};
use dsreview_core::{
    paginate, AnswerOption, ExError, ExErrorKind, Label, QuestionFilter, Stats, StatusFilter,
};
use dsreview_core_types::RequestId;
use dsreview_store::UpsertOutcome;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::SharedState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(RequestId::from_header)
        .unwrap_or_default()
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// Query string of `GET /api/questions`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionQuery {
    pub status: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl QuestionQuery {
    fn is_unfiltered(&self) -> bool {
        self.status.is_none()
            && self.difficulty.is_none()
            && self.search.is_none()
            && self.page.is_none()
            && self.per_page.is_none()
    }
}

/// GET /api/questions
///
/// Without query parameters every view is returned as a flat array;
/// otherwise the filtered result is paginated.
pub async fn list_questions(
    State(state): State<SharedState>,
    Query(query): Query<QuestionQuery>,
) -> Result<Response, ApiError> {
    let dataset = state.dataset().await;
    if query.is_unfiltered() {
        return Ok(Json(dataset.views()).into_response());
    }

    let status = match query.status.as_deref() {
        Some(raw) => raw.parse::<StatusFilter>()?,
        None => StatusFilter::All,
    };
    let filter = QuestionFilter {
        status,
        difficulty: query.difficulty,
        search: query.search,
    };
    let page = paginate(
        filter.apply(dataset.views()),
        query.page.unwrap_or(0),
        query.per_page.unwrap_or(state.config.page_size),
    );
    Ok(Json(page).into_response())
}

/// GET /api/questions/:id/answers
pub async fn question_answers(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<Vec<AnswerOption>> {
    Json(state.dataset().await.answers_for(&id))
}

/// GET /api/questions/:id/versions/:version_id/diff
pub async fn version_diff(
    State(state): State<SharedState>,
    Path((id, version_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<VersionComparison>, ApiError> {
    state
        .dataset()
        .await
        .compare(&id, &version_id)
        .map(Json)
        .map_err(|e| ApiError::from(e).with_request_id(request_id(&headers)))
}

/// GET /api/stats
pub async fn stats(State(state): State<SharedState>) -> Json<Stats> {
    Json(state.dataset().await.stats())
}

/// GET /api/labels
pub async fn list_labels(State(state): State<SharedState>) -> Json<Vec<Label>> {
    Json(state.labels().lock().await.labels())
}

/// GET /api/labels/progress
pub async fn label_progress(State(state): State<SharedState>) -> Json<LabelProgress> {
    let dataset = state.dataset().await;
    let labels = state.labels().lock().await.labels();
    Json(labeling::progress(dataset.views(), &labels))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub outcome: UpsertOutcome,
}

/// POST /api/labels
pub async fn submit_label(
    State(state): State<SharedState>,
    headers: HeaderMap,
    payload: Result<Json<LabelSubmission>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let request_id = request_id(&headers);
    let Json(submission) =
        payload.map_err(|e| ApiError::from(e).with_request_id(request_id.clone()))?;

    // Held until the file is rewritten: one writer at a time
    let mut labels = state.lock_labels().await;
    let dataset = state.dataset().await;

    let question_id = submission.question_id.clone().unwrap_or_default();
    let (labels, result) = tokio::task::spawn_blocking(move || {
        let result = labels.upsert(&submission, &dataset);
        (labels, result)
    })
    .await
    .map_err(|e| {
        ApiError::from(
            ExError::new(ExErrorKind::Internal)
                .with_op("submit_label")
                .with_message(e.to_string()),
        )
        .with_request_id(request_id.clone())
    })?;
    drop(labels);

    let outcome = result.map_err(|e| ApiError::from(e).with_request_id(request_id.clone()))?;
    tracing::info!(
        request_id = %request_id,
        question_id = question_id.as_str(),
        outcome = ?outcome,
        "label saved"
    );
    Ok(Json(SubmitResponse {
        success: true,
        outcome,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub reloaded: bool,
    pub stats: Stats,
}

/// POST /api/reload
pub async fn reload(State(state): State<SharedState>) -> Result<Json<ReloadResponse>, ApiError> {
    let dataset = state.reload().await?;
    Ok(Json(ReloadResponse {
        reloaded: true,
        stats: dataset.stats(),
    }))
}
