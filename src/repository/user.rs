use diesel::prelude::*;

use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, user_id: i32) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .find(user_id)
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }
}
