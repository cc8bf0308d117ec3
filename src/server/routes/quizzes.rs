use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, ApiResponse},
        extractors::JsonBody,
        quiz::{candidates, pick, QuizCategory, QuizScope},
    },
    telemetry::QUIZ_QUESTIONS_SERVED,
};

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

/// `question` is null once every question of the category has been shown.
#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<QuizRequest>,
) -> ApiResponse<Json<QuizQuestion>> {
    let scope = body.quiz_category.scope();
    let pool_questions = match scope {
        QuizScope::All => get_all_questions(&pool).await,
        QuizScope::Category(id) => get_questions_for_category(&pool, id).await,
    }
    .map_err(ApiError::unprocessable)?;
    if pool_questions.is_empty() {
        return Err(ApiError::Unprocessable(format!(
            "no questions for {scope:?}"
        )));
    }

    let left = candidates(pool_questions, &body.previous_questions);
    let question = pick(&left, &mut rand::thread_rng());

    match &question {
        Some(q) => {
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[q.category.to_string().as_str()])
                .inc();
        }
        None => tracing::debug!(?scope, "Quiz exhausted"),
    }
    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
