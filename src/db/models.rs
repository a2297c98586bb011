use serde::Serialize;
use sqlx::FromRow;
use time::Date;

use crate::core::time::iso_date_option;
use crate::db::types::AdminFlag;

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct User {
    pub(crate) userid: i64,
    pub(crate) username: String,
    pub(crate) firstname: Option<String>,
    pub(crate) lastname: Option<String>,
    #[serde(with = "iso_date_option")]
    pub(crate) dateofbirth: Option<Date>,
    pub(crate) email: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) country: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct Admin {
    pub(crate) userid: i64,
    #[sqlx(try_from = "String")]
    pub(crate) admin: AdminFlag,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct Authentication {
    pub(crate) userid: i64,
    pub(crate) password: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct Classroom {
    pub(crate) id: i64,
    pub(crate) moderatorid: Option<i64>,
    pub(crate) quizid: Option<i64>,
    pub(crate) quiztaker: Option<i64>,
}

/// Row of the `quizid` table: one quiz and the user moderating it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct QuizInfo {
    pub(crate) quizid: i64,
    pub(crate) moderator: Option<i64>,
    pub(crate) quizname: String,
}

/// Row of the `quizzes` table: one multiple-choice question.
#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct QuizQuestion {
    pub(crate) questionnumber: i64,
    pub(crate) quizid: i64,
    pub(crate) question: String,
    pub(crate) a: Option<String>,
    pub(crate) b: Option<String>,
    pub(crate) c: Option<String>,
    pub(crate) d: Option<String>,
    pub(crate) answer: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct Answer {
    pub(crate) quizid: i64,
    pub(crate) questionnumber: i64,
    pub(crate) question: Option<String>,
    pub(crate) answer: String,
}

/// Row of a per-subject question bank (`algebra_questions`, `chemistry_questions`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct SubjectQuestion {
    pub(crate) id: i64,
    pub(crate) question: String,
    pub(crate) option_a: Option<String>,
    pub(crate) option_b: Option<String>,
    pub(crate) option_c: Option<String>,
    pub(crate) option_d: Option<String>,
    pub(crate) answer: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct UserResponse {
    pub(crate) response_id: i64,
    pub(crate) user_id: i64,
    pub(crate) question_id: i64,
    pub(crate) selected_option: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct LeaderboardEntry {
    pub(crate) userid: i64,
    pub(crate) quizid: i64,
    pub(crate) score: i32,
}
