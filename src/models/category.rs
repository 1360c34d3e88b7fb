use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
/// Diesel model for [`crate::domain::category::Category`].
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(category: &'a DomainNewCategory) -> Self {
        Self {
            name: category.name.as_str(),
        }
    }
}
