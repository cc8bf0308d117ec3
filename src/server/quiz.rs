//! Candidate selection for the quiz endpoint.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::db::Question;

/// `type` the client sends when the player picked every category.
pub const ALL_CATEGORIES: &str = "click";

#[derive(Deserialize, Debug, Clone)]
pub struct QuizCategory {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizCategory {
    pub fn scope(&self) -> QuizScope {
        if self.kind == ALL_CATEGORIES {
            QuizScope::All
        } else {
            QuizScope::Category(self.id)
        }
    }
}

/// Questions from `pool` that were not shown yet, in input order.
pub fn candidates(pool: Vec<Question>, previous: &[i64]) -> Vec<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    pool.into_iter().filter(|q| !seen.contains(&q.id)).collect()
}

pub fn pick<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}
