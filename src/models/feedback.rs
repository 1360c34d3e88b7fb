use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::feedback::{Feedback as DomainFeedback, NewFeedback as DomainNewFeedback};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::feedbacks)]
/// Diesel model for [`crate::domain::feedback::Feedback`].
pub struct Feedback {
    pub id: i32,
    pub content: String,
    pub submit_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::feedbacks)]
pub struct NewFeedback<'a> {
    pub content: &'a str,
    pub submit_date: NaiveDateTime,
}

impl From<Feedback> for DomainFeedback {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            content: feedback.content,
            submit_date: feedback.submit_date,
        }
    }
}

impl<'a> From<&'a DomainNewFeedback> for NewFeedback<'a> {
    fn from(feedback: &'a DomainNewFeedback) -> Self {
        Self {
            content: feedback.content.as_str(),
            submit_date: feedback.submit_date,
        }
    }
}
