pub(crate) mod admins;
pub(crate) mod answers;
pub(crate) mod authentication;
pub(crate) mod classrooms;
pub(crate) mod errors;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod leaderboard;
pub(crate) mod questions;
pub(crate) mod quiz_ids;
pub(crate) mod quizzes;
pub(crate) mod router;
pub(crate) mod user_responses;
pub(crate) mod users;

#[cfg(test)]
mod tests;
