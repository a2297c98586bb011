use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ClassroomPayload {
    #[serde(default)]
    pub(crate) moderatorid: Option<i64>,
    #[serde(default)]
    pub(crate) quizid: Option<i64>,
    #[serde(default)]
    pub(crate) quiztaker: Option<i64>,
}
