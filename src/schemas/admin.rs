use serde::Deserialize;

use crate::db::types::AdminFlag;

#[derive(Debug, Deserialize)]
pub(crate) struct AdminPayload {
    #[serde(default)]
    pub(crate) userid: Option<i64>,
    #[serde(default)]
    pub(crate) admin: Option<AdminFlag>,
}
