use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponsePayload {
    #[serde(default)]
    pub(crate) user_id: Option<i64>,
    #[serde(default)]
    pub(crate) question_id: Option<i64>,
    #[serde(default)]
    pub(crate) selected_option: Option<String>,
}
