use diesel::prelude::*;

use crate::domain::feedback::{Feedback, NewFeedback};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, FeedbackReader, FeedbackWriter};

impl FeedbackReader for DieselRepository {
    fn list_feedbacks(&self) -> RepositoryResult<Vec<Feedback>> {
        use crate::models::feedback::Feedback as DbFeedback;
        use crate::schema::feedbacks;

        let mut conn = self.conn()?;
        let items = feedbacks::table
            .order(feedbacks::submit_date.desc())
            .then_order_by(feedbacks::id.desc())
            .load::<DbFeedback>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl FeedbackWriter for DieselRepository {
    fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback> {
        use crate::models::feedback::{Feedback as DbFeedback, NewFeedback as DbNewFeedback};
        use crate::schema::feedbacks;

        let mut conn = self.conn()?;
        let insertable: DbNewFeedback = new_feedback.into();
        let created = diesel::insert_into(feedbacks::table)
            .values(&insertable)
            .get_result::<DbFeedback>(&mut conn)?;

        Ok(created.into())
    }
}
