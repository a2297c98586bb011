pub(crate) mod admins;
pub(crate) mod answers;
pub(crate) mod authentication;
pub(crate) mod classrooms;
pub(crate) mod health;
pub(crate) mod leaderboard;
pub(crate) mod quiz_ids;
pub(crate) mod quizzes;
pub(crate) mod subject_questions;
pub(crate) mod user_responses;
pub(crate) mod users;
