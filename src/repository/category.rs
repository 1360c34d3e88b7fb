use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>> {
        use crate::models::category::Category as DbCategory;
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let category = categories::table
            .find(category_id)
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::models::category::Category as DbCategory;
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let items = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable: DbNewCategory = new_category.into();
        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }
}
