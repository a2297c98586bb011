use serde::{Deserialize, Serialize};

/// Body for the `quizid` table. `quizid` is only read on insert.
#[derive(Debug, Deserialize)]
pub(crate) struct QuizInfoPayload {
    #[serde(default)]
    pub(crate) quizid: Option<i64>,
    #[serde(default)]
    pub(crate) moderator: Option<i64>,
    #[serde(default)]
    pub(crate) quizname: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuizQuestionPayload {
    #[serde(default)]
    pub(crate) quizid: Option<i64>,
    #[serde(default)]
    pub(crate) question: Option<String>,
    #[serde(default)]
    pub(crate) a: Option<String>,
    #[serde(default)]
    pub(crate) b: Option<String>,
    #[serde(default)]
    pub(crate) c: Option<String>,
    #[serde(default)]
    pub(crate) d: Option<String>,
    #[serde(default)]
    pub(crate) answer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerPayload {
    #[serde(default)]
    pub(crate) quizid: Option<i64>,
    #[serde(default)]
    pub(crate) questionnumber: Option<i64>,
    #[serde(default)]
    pub(crate) question: Option<String>,
    #[serde(default)]
    pub(crate) answer: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckAnswerRequest {
    #[serde(default)]
    pub(crate) question_id: Option<i64>,
    #[serde(default)]
    pub(crate) user_answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckAnswerResponse {
    pub(crate) correct: bool,
}

impl CheckAnswerResponse {
    /// Answers are compared without regard to letter case.
    pub(crate) fn grade(stored: &str, submitted: &str) -> Self {
        Self { correct: stored.to_lowercase() == submitted.to_lowercase() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_ignores_case() {
        assert!(CheckAnswerResponse::grade("b", "B").correct);
        assert!(CheckAnswerResponse::grade("Sodium", "sODIUM").correct);
        assert!(!CheckAnswerResponse::grade("b", "c").correct);
        assert!(!CheckAnswerResponse::grade("b", "b ").correct);
    }

    #[test]
    fn check_answer_request_uses_camel_case() {
        let request: CheckAnswerRequest =
            serde_json::from_str(r#"{"questionId": 3, "userAnswer": "B"}"#).unwrap();
        assert_eq!(request.question_id, Some(3));
        assert_eq!(request.user_answer.as_deref(), Some("B"));

        let partial: CheckAnswerRequest = serde_json::from_str(r#"{"questionId": 3}"#).unwrap();
        assert!(partial.user_answer.is_none());
    }
}
