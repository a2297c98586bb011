use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SubjectQuestionPayload {
    #[serde(default)]
    pub(crate) question: Option<String>,
    #[serde(default)]
    pub(crate) option_a: Option<String>,
    #[serde(default)]
    pub(crate) option_b: Option<String>,
    #[serde(default)]
    pub(crate) option_c: Option<String>,
    #[serde(default)]
    pub(crate) option_d: Option<String>,
    #[serde(default)]
    pub(crate) answer: Option<String>,
}
