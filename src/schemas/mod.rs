use std::collections::BTreeMap;

use serde::Serialize;

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod classroom;
pub(crate) mod question;
pub(crate) mod quiz;
pub(crate) mod response;
pub(crate) mod user;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) service: &'static str,
    pub(crate) status: &'static str,
    pub(crate) components: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RootResponse {
    pub(crate) message: String,
    pub(crate) version: String,
}

/// Body of every successful write.
#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
    /// Generated key of the inserted row, for tables that allocate one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i64>,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), id: None }
    }

    pub(crate) fn created(message: impl Into<String>, id: i64) -> Self {
        Self { message: message.into(), id: Some(id) }
    }
}
