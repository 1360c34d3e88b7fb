//! Landing page orchestration.

use crate::domain::search::SearchFilters;
use crate::dto::main::IndexPageData;
use crate::dto::post::PostCard;
use crate::repository::{CategoryReader, PostReader, SiteViewsReader};
use crate::services::search::{self, ListingFeed};

/// Number of featured listings shown on the landing page.
pub const FEATURED_LISTINGS: usize = 6;

/// Refreshes the shared feed and builds the landing page data.
///
/// The refresh goes through the feed's fetch tickets, so concurrent requests
/// cannot clobber each other with stale results, and a failed fetch leaves
/// the last good snapshot on display. Nothing here fails the page: every
/// error degrades to stale-or-empty data.
pub fn load_index_page<R>(repo: &R, feed: &ListingFeed) -> IndexPageData
where
    R: PostReader + CategoryReader + SiteViewsReader + ?Sized,
{
    let ticket = feed.begin();
    match search::fetch_listings(repo, &SearchFilters::default()) {
        Ok(posts) => {
            feed.complete(ticket, posts);
        }
        Err(err) => {
            log::error!("Failed to refresh featured listings: {err}");
        }
    }

    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(err) => {
            log::error!("Failed to load categories: {err}");
            Vec::new()
        }
    };

    let featured = feed
        .snapshot()
        .iter()
        .take(FEATURED_LISTINGS)
        .map(|post| PostCard::new(post, &categories))
        .collect();

    let total_views = match repo.total_views() {
        Ok(total) => total,
        Err(err) => {
            log::error!("Failed to load total views: {err}");
            0
        }
    };

    IndexPageData {
        featured,
        total_views,
    }
}
