//! JSON API services.

use crate::domain::category::Category;
use crate::domain::post::Post;
use crate::dto::api::ApiPostsQuery;
use crate::repository::{CategoryReader, PostReader};
use crate::services::ServiceResult;
use crate::services::search;

/// Returns the listings matching the query. The owner filter additionally
/// includes rented listings so an owner sees their whole portfolio.
pub fn list_posts<R>(repo: &R, params: &ApiPostsQuery) -> ServiceResult<Vec<Post>>
where
    R: PostReader + ?Sized,
{
    let mut query = search::build_listing_query(&params.filters());
    if let Some(user_id) = params.user_id() {
        query = query.owner(user_id).include_rented();
    }

    repo.list_posts(query).map_err(Into::into)
}

/// Returns the category reference list.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(Into::into)
}
