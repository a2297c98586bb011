use time::macros::format_description;
use time::Date;

pub(crate) fn format_date(value: Date) -> String {
    value.format(format_description!("[year]-[month]-[day]")).unwrap_or_else(|_| value.to_string())
}

pub(crate) fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
}

/// Serde adapter for optional `YYYY-MM-DD` dates.
pub(crate) mod iso_date_option {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use time::Date;

    pub(crate) fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&super::format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(text) if !text.trim().is_empty() => {
                super::parse_date(&text).map(Some).map_err(de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}
