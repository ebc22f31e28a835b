//! Snapshot codec for the question list.
//!
//! Each question is stored as `{ "type", "question", "options" }` inside a
//! JSON array, under a single storage key.

use super::question::{Question, QuestionType};
use crate::storage::StorageError;
use serde::{Deserialize, Serialize};

/// Storage key holding the snapshot.
///
pub const SNAPSHOT_KEY: &str = "surveyQuestions";

/// Define specification for a stored question.
///
#[derive(Serialize, Deserialize)]
struct QuestionSpec {
    #[serde(rename = "type")]
    question_type: String,
    question: String,
    #[serde(default)]
    options: Vec<String>,
}

impl From<&Question> for QuestionSpec {
    fn from(question: &Question) -> Self {
        QuestionSpec {
            question_type: question.question_type().as_str().to_string(),
            question: question.question.clone(),
            options: question.options().into_iter().map(str::to_string).collect(),
        }
    }
}

impl TryFrom<QuestionSpec> for Question {
    type Error = StorageError;

    fn try_from(spec: QuestionSpec) -> Result<Self, Self::Error> {
        match QuestionType::parse(&spec.question_type) {
            Some(QuestionType::MultiSelect) => {
                Ok(Question::multi_select(spec.question, spec.options))
            }
            Some(QuestionType::SingleSelect) => Ok(Question::single_select(spec.question)),
            None => Err(StorageError::UnknownQuestionType(spec.question_type)),
        }
    }
}

/// Serialize the whole list.
///
pub fn encode(questions: &[Question]) -> Result<String, StorageError> {
    let specs: Vec<QuestionSpec> = questions.iter().map(QuestionSpec::from).collect();
    serde_json::to_string(&specs).map_err(|e| StorageError::EncodeFailed(e.to_string()))
}

/// Parse a list previously produced by `encode`.
///
pub fn decode(text: &str) -> Result<Vec<Question>, StorageError> {
    let specs: Vec<QuestionSpec> =
        serde_json::from_str(text).map_err(|e| StorageError::DecodeFailed(e.to_string()))?;
    specs.into_iter().map(Question::try_from).collect()
}
