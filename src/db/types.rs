use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value of the `admins.admin` column. Stored as text, not a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum AdminFlag {
    Yes,
    No,
}

#[derive(Debug, Error)]
#[error("unknown admin flag: {0}")]
pub(crate) struct UnknownAdminFlag(String);

impl AdminFlag {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl TryFrom<String> for AdminFlag {
    type Error = UnknownAdminFlag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            _ => Err(UnknownAdminFlag(value)),
        }
    }
}

/// Subjects with a dedicated question bank and a reserved quiz id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Subject {
    Algebra,
    Chemistry,
}

impl Subject {
    pub(crate) fn quiz_id(self) -> i64 {
        match self {
            Self::Algebra => 1000,
            Self::Chemistry => 2000,
        }
    }

    pub(crate) fn question_table(self) -> &'static str {
        match self {
            Self::Algebra => "algebra_questions",
            Self::Chemistry => "chemistry_questions",
        }
    }
}
