mod categories;
mod questions;
mod quizzes;

use serde::Serialize;

use crate::db::queries::categories::CategoryMap;
use crate::db::Question;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

#[derive(Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// One page of questions with the context the client renders next to it.
#[derive(Serialize)]
pub struct QuestionsPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<i64>,
}
