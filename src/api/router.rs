use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::services::QuestionService;
use crate::store::MemoryStore;

/// 各请求共享的题库服务
pub type SharedService = Arc<QuestionService<MemoryStore>>;

/// 创建路由
pub fn create_router(service: SharedService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    Router::new()
        .route("/categories", get(handlers::get_categories))
        .route(
            "/categories/:id/questions",
            get(handlers::get_questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::get_questions).post(handlers::create_question),
        )
        .route("/questions/:id", delete(handlers::delete_question))
        .route("/search", post(handlers::search_questions))
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(service)
}
