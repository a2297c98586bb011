use serde::Deserialize;
use time::Date;

use crate::core::time::iso_date_option;

/// Body of `POST /users` and `PUT /users/:userid`. `userid` is ignored on update.
#[derive(Debug, Deserialize)]
pub(crate) struct UserPayload {
    #[serde(default)]
    pub(crate) userid: Option<i64>,
    #[serde(default)]
    pub(crate) username: Option<String>,
    #[serde(default)]
    pub(crate) firstname: Option<String>,
    #[serde(default)]
    pub(crate) lastname: Option<String>,
    #[serde(default, with = "iso_date_option")]
    pub(crate) dateofbirth: Option<Date>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) city: Option<String>,
    #[serde(default)]
    pub(crate) state: Option<String>,
    #[serde(default)]
    pub(crate) country: Option<String>,
}
