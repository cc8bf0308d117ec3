use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, to_map},
            questions::{self, get_all_questions, search_questions},
        },
        NewQuestion,
    },
    server::{
        app::AppState,
        deserializers::PageQuery,
        error::{ApiError, ApiResponse},
        extractors::{IdPath, JsonBody, QueryParams},
        pagination::paginate,
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

use super::{QuestionsPage, Success};

// category and difficulty come from <select> values, so they may arrive as strings
#[derive(Deserialize)]
struct CreateQuestion {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    QueryParams(PageQuery { page }): QueryParams<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let categories = get_all_categories(&pool).await.map_err(ApiError::internal)?;
    let questions = get_all_questions(&pool).await.map_err(ApiError::internal)?;

    let total_questions = questions.len();
    let page_items = paginate(questions, page);
    if page_items.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: page_items,
        total_questions,
        categories: to_map(categories),
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<CreateQuestion>,
) -> ApiResponse<Json<Success>> {
    let new = NewQuestion {
        question: body.question,
        answer: body.answer,
        category: body.category,
        difficulty: body.difficulty,
    };
    let id = questions::create_question(&pool, &new)
        .await
        .map_err(ApiError::method_failure)?;

    tracing::info!(id, category = new.category, "Question created");
    QUESTIONS_CREATED.inc();
    Ok(Json(Success::ok()))
}

async fn search(
    State(pool): State<SqlitePool>,
    QueryParams(PageQuery { page }): QueryParams<PageQuery>,
    JsonBody(body): JsonBody<SearchRequest>,
) -> ApiResponse<Json<QuestionsPage>> {
    let found = search_questions(&pool, &body.search_term)
        .await
        .map_err(ApiError::method_failure)?;
    if found.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool)
        .await
        .map_err(ApiError::method_failure)?;

    tracing::debug!(term = %body.search_term, matches = found.len(), "Search");
    let total_questions = found.len();
    Ok(Json(QuestionsPage {
        success: true,
        questions: paginate(found, page),
        total_questions,
        categories: to_map(categories),
        current_category: None,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    IdPath(question_id): IdPath<i64>,
) -> ApiResponse<Json<Success>> {
    let deleted = questions::delete_question(&pool, question_id)
        .await
        .map_err(ApiError::unprocessable)?;
    // a missing question is reported as unprocessable, not as 404
    if deleted == 0 {
        return Err(ApiError::Unprocessable(format!(
            "question {question_id} does not exist"
        )));
    }

    tracing::info!(id = question_id, "Question deleted");
    QUESTIONS_DELETED.inc();
    Ok(Json(Success::ok()))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search))
        .route("/questions/{question_id}", delete(delete_question))
        .with_state(state)
}
