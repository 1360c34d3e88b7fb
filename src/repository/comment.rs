use diesel::prelude::*;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::post::Post;
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CommentReader, CommentWriter, DieselRepository};

impl CommentReader for DieselRepository {
    fn list_post_comments(&self, post_id: i32) -> RepositoryResult<Vec<(Comment, User)>> {
        use crate::models::comment::Comment as DbComment;
        use crate::models::user::User as DbUser;
        use crate::schema::{comments, users};

        let mut conn = self.conn()?;
        let items = comments::table
            .inner_join(users::table)
            .filter(comments::post_id.eq(post_id))
            .order(comments::submit_date.desc())
            .then_order_by(comments::id.desc())
            .load::<(DbComment, DbUser)>(&mut conn)?;

        Ok(items
            .into_iter()
            .map(|(comment, user)| (comment.into(), user.into()))
            .collect())
    }

    fn list_all_comments(&self) -> RepositoryResult<Vec<(Comment, User, Post)>> {
        use crate::models::comment::Comment as DbComment;
        use crate::models::post::Post as DbPost;
        use crate::models::user::User as DbUser;
        use crate::schema::{comments, posts, users};

        let mut conn = self.conn()?;
        let items = comments::table
            .inner_join(users::table)
            .inner_join(posts::table)
            .select((
                comments::all_columns,
                users::all_columns,
                posts::all_columns,
            ))
            .order(comments::submit_date.desc())
            .then_order_by(comments::id.desc())
            .load::<(DbComment, DbUser, DbPost)>(&mut conn)?;

        Ok(items
            .into_iter()
            .map(|(comment, user, post)| (comment.into(), user.into(), post.into_domain(vec![])))
            .collect())
    }
}

impl CommentWriter for DieselRepository {
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment> {
        use crate::models::comment::{Comment as DbComment, NewComment as DbNewComment};
        use crate::schema::comments;

        let mut conn = self.conn()?;
        let insertable: DbNewComment = new_comment.into();
        let created = diesel::insert_into(comments::table)
            .values(&insertable)
            .get_result::<DbComment>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_comment(&self, comment_id: i32) -> RepositoryResult<()> {
        use crate::schema::comments;

        let mut conn = self.conn()?;
        diesel::delete(comments::table.find(comment_id)).execute(&mut conn)?;
        Ok(())
    }
}
