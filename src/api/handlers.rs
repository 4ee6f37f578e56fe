//! 请求处理函数
//!
//! 每个函数只做参数提取和响应包装，具体逻辑交给 [`QuestionService`]。
//!
//! [`QuestionService`]: crate::services::QuestionService

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::api::error::{error_body, ApiError};
use crate::api::router::SharedService;
use crate::error::{AppError, NotFoundError, ValidationError};
use crate::models::{NewQuestionRequest, QuizRequest};

type ApiResult<T> = Result<T, ApiError>;

/// 分页查询参数，原样交给分页引擎解析
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// 搜索请求体
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// GET /categories
pub async fn get_categories(State(service): State<SharedService>) -> Json<Value> {
    Json(json!({
        "success": true,
        "categories": service.categories(),
    }))
}

/// GET /questions?page=N
pub async fn get_questions(
    State(service): State<SharedService>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params.map_err(|e| malformed_query(e.body_text()))?;
    let listing = service.list_questions(params.page.as_deref())?;
    Ok(Json(json!({
        "success": true,
        "questions": listing.questions,
        "total_questions": listing.total_questions,
        "categories": listing.categories,
    })))
}

/// DELETE /questions/:id
pub async fn delete_question(
    State(service): State<SharedService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = id.map_err(|e| unmatched_path(e.body_text()))?;
    let deleted = service.delete_question(id)?;
    Ok(Json(json!({
        "success": true,
        "deleted_question": deleted,
    })))
}

/// POST /questions
pub async fn create_question(
    State(service): State<SharedService>,
    payload: Result<Json<NewQuestionRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload.map_err(|e| malformed(e.body_text()))?;
    let created = service.create_question(request)?;
    Ok(Json(json!({
        "success": true,
        "created_question_id": created,
    })))
}

/// POST /search?page=N
pub async fn search_questions(
    State(service): State<SharedService>,
    params: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params.map_err(|e| malformed_query(e.body_text()))?;
    let Json(request) = payload.map_err(|e| malformed(e.body_text()))?;
    debug!("搜索请求: {:?}", request.search_term);
    let listing = service.search_questions(request.search_term.as_deref(), params.page.as_deref())?;
    Ok(Json(json!({
        "success": true,
        "questions": listing.questions,
        "total_questions": listing.total_questions,
    })))
}

/// GET /categories/:id/questions?page=N
pub async fn get_questions_by_category(
    State(service): State<SharedService>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = id.map_err(|e| unmatched_path(e.body_text()))?;
    let Query(params) = params.map_err(|e| malformed_query(e.body_text()))?;
    let listing = service.questions_by_category(id, params.page.as_deref())?;
    Ok(Json(json!({
        "success": true,
        "questions": listing.questions,
        "totalQuestions": listing.total_questions,
        "currentCategory": listing.current_category,
    })))
}

/// POST /quizzes
pub async fn play_quiz(
    State(service): State<SharedService>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload.map_err(|e| malformed(e.body_text()))?;
    let question = service.play_quiz(&request)?;
    Ok(Json(json!({ "question": question })))
}

/// 未匹配任何路由
pub async fn fallback() -> Response {
    let status = StatusCode::NOT_FOUND;
    (status, Json(error_body(status, "resource not found"))).into_response()
}

fn malformed(reason: String) -> ApiError {
    ApiError(AppError::from(ValidationError::MalformedBody { reason }))
}

fn malformed_query(reason: String) -> ApiError {
    ApiError(AppError::from(ValidationError::MalformedQuery { reason }))
}

/// 路径中的 ID 不是整数时视为路由不匹配
fn unmatched_path(reason: String) -> ApiError {
    ApiError(AppError::from(NotFoundError::MalformedPath { reason }))
}
