use diesel::prelude::*;

use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SiteViewsReader, SiteViewsWriter};

/// The counter lives in a single row seeded by the migrations.
const COUNTER_ROW: i32 = 1;

impl SiteViewsReader for DieselRepository {
    fn total_views(&self) -> RepositoryResult<i64> {
        use crate::schema::site_views;

        let mut conn = self.conn()?;
        let total = site_views::table
            .find(COUNTER_ROW)
            .select(site_views::views)
            .first::<i64>(&mut conn)
            .optional()?;

        Ok(total.unwrap_or(0))
    }
}

impl SiteViewsWriter for DieselRepository {
    fn record_view(&self) -> RepositoryResult<i64> {
        use crate::schema::site_views;

        let mut conn = self.conn()?;
        let updated = diesel::update(site_views::table.find(COUNTER_ROW))
            .set(site_views::views.eq(site_views::views + 1))
            .get_result::<(i32, i64)>(&mut conn)?;

        Ok(updated.1)
    }
}
