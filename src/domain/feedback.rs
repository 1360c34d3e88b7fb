use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{SanitizedText, TypeConstraintError};

/// Anonymous site feedback, visible to administrators only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i32,
    pub content: String,
    pub submit_date: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFeedback {
    pub content: String,
    pub submit_date: NaiveDateTime,
}

impl NewFeedback {
    pub fn new(content: &str) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            content: SanitizedText::new(content)?.into_inner(),
            submit_date: chrono::Utc::now().naive_utc(),
        })
    }
}
