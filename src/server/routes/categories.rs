use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::queries::{
        categories::{get_all_categories, to_map, CategoryMap},
        questions::get_questions_for_category,
    },
    server::{
        app::AppState,
        deserializers::PageQuery,
        error::{ApiError, ApiResponse},
        extractors::{IdPath, QueryParams},
        pagination::paginate,
    },
};

use super::QuestionsPage;

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: CategoryMap,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesList>> {
    let categories = get_all_categories(&pool).await.map_err(ApiError::internal)?;
    Ok(Json(CategoriesList {
        success: true,
        categories: to_map(categories),
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    IdPath(category_id): IdPath<i64>,
    QueryParams(PageQuery { page }): QueryParams<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let questions = get_questions_for_category(&pool, category_id)
        .await
        .map_err(ApiError::internal)?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await.map_err(ApiError::internal)?;

    let total_questions = questions.len();
    Ok(Json(QuestionsPage {
        success: true,
        questions: paginate(questions, page),
        total_questions,
        categories: to_map(categories),
        current_category: Some(category_id),
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
