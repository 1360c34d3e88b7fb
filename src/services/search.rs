//! The search pipeline: filter state in, rendered result set out.
//!
//! Every filter change reaches this module as a complete [`SearchFilters`]
//! value; [`build_listing_query`] translates it into a repository query that
//! carries only the non-empty constraints, and [`fetch_listings`] performs
//! exactly one read per invocation, replacing the previous result set
//! wholesale.
//!
//! [`ListingFeed`] is the shared result holder for consumers that refresh
//! concurrently. Completions are guarded by fetch tickets from a monotonic
//! sequence: a response is applied only if its ticket is the most recently
//! issued one, so the last-triggered fetch always wins regardless of
//! completion order, and a failed fetch leaves the last good set in place.

use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::post::Post;
use crate::domain::search::{PRICE_RANGES, SearchFilters};
use crate::dto::post::PostCard;
use crate::dto::search::SearchPageData;
use crate::repository::{CategoryReader, PostListQuery, PostReader};
use crate::services::ServiceResult;

/// Maps the complete filter state into a listing query. Empty or malformed
/// dimensions contribute no constraint.
pub fn build_listing_query(filters: &SearchFilters) -> PostListQuery {
    let mut query = PostListQuery::new();

    if let Some(category_id) = filters.category_id() {
        query = query.category(category_id);
    }
    if let Some(range) = filters.price_range() {
        query = query.price_between(range.min, range.max);
    }
    if let Some(term) = filters.location() {
        query = query.location(term);
    }
    if let Some(min_bedroom) = filters.bedroom() {
        query = query.bedrooms(min_bedroom);
    }

    query
}

/// Issues a single listing fetch for the given filter state.
pub fn fetch_listings<R>(repo: &R, filters: &SearchFilters) -> ServiceResult<Vec<Post>>
where
    R: PostReader + ?Sized,
{
    repo.list_posts(build_listing_query(filters)).map_err(Into::into)
}

/// Loads everything the search page renders: the filter panel reference data
/// and the matching listings.
///
/// Reference and listing failures both degrade instead of failing the page:
/// a missing category list renders an empty select (the dimension becomes a
/// no-op), and a failed listing fetch renders the empty state with a notice.
pub fn load_search_page<R>(repo: &R, filters: SearchFilters) -> ServiceResult<SearchPageData>
where
    R: PostReader + CategoryReader + ?Sized,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(err) => {
            log::error!("Failed to load categories: {err}");
            Vec::new()
        }
    };

    let (listings, fetch_failed) = match fetch_listings(repo, &filters) {
        Ok(posts) => (posts, false),
        Err(err) => {
            log::error!("Failed to list posts: {err}");
            (Vec::new(), true)
        }
    };

    let cards: Vec<PostCard> = listings
        .iter()
        .map(|post| PostCard::new(post, &categories))
        .collect();

    Ok(SearchPageData {
        query_string: filters.to_query_string(),
        selected_category: filters.category_id(),
        selected_bedroom: filters.bedroom(),
        filters,
        categories,
        price_ranges: PRICE_RANGES,
        total: cards.len(),
        listings: cards,
        fetch_failed,
    })
}

/// Proof that a fetch was registered with the feed before it started.
#[must_use]
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
}

/// Shared listing snapshot with stale-response suppression.
#[derive(Debug, Default)]
pub struct ListingFeed {
    issued: AtomicU64,
    state: RwLock<FeedState>,
}

#[derive(Debug, Default)]
struct FeedState {
    applied: u64,
    posts: Vec<Post>,
}

impl ListingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fetch, making it the latest issued one.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket {
            seq: self.issued.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Applies a completed fetch. Returns false (discarding the result) when
    /// a newer fetch was issued in the meantime.
    pub fn complete(&self, ticket: FetchTicket, posts: Vec<Post>) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if ticket.seq == self.issued.load(Ordering::SeqCst) && ticket.seq > state.applied {
            state.applied = ticket.seq;
            state.posts = posts;
            true
        } else {
            false
        }
    }

    /// The last good result set; empty until a fetch has completed.
    pub fn snapshot(&self) -> Vec<Post> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .posts
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::category::Category;
    use crate::repository::errors::RepositoryResult;

    mock! {
        SearchRepo {}

        impl PostReader for SearchRepo {
            fn get_post_by_id(&self, post_id: i32) -> RepositoryResult<Option<Post>>;
            fn list_posts(&self, query: PostListQuery) -> RepositoryResult<Vec<Post>>;
        }

        impl CategoryReader for SearchRepo {
            fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
            fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
        }
    }

    fn sample_post(id: i32) -> Post {
        Post {
            id,
            user_id: 1,
            category_id: 1,
            price: 900,
            address: format!("Address {id}"),
            location: "57.7,11.9".to_string(),
            bedroom: 2,
            area: 60,
            content: "desc".to_string(),
            is_rented: false,
            upload_date: chrono::Utc::now().naive_utc(),
            images: vec![],
        }
    }

    #[test]
    fn query_carries_only_non_empty_constraints() {
        let filters = SearchFilters {
            category_id: "3".into(),
            bedroom: "2".into(),
            ..SearchFilters::default()
        };

        let query = build_listing_query(&filters);
        assert_eq!(query.category_id, Some(3));
        assert_eq!(query.min_bedroom, Some(2));
        assert_eq!(query.price_min, None);
        assert_eq!(query.price_max, None);
        assert_eq!(query.location, None);
        assert!(!query.include_rented);
    }

    #[test]
    fn price_token_resolves_to_bounds_in_query() {
        let filters = SearchFilters {
            price_range: "500-1000".into(),
            ..SearchFilters::default()
        };

        let query = build_listing_query(&filters);
        assert_eq!(query.price_min, Some(500));
        assert_eq!(query.price_max, Some(1000));
    }

    #[test]
    fn malformed_and_empty_filters_build_an_unconstrained_query() {
        let malformed = SearchFilters {
            category_id: "abc".into(),
            bedroom: "two".into(),
            price_range: "bogus".into(),
            ..SearchFilters::default()
        };

        assert_eq!(build_listing_query(&malformed), PostListQuery::new());
        assert_eq!(
            build_listing_query(&SearchFilters::default()),
            PostListQuery::new()
        );
    }

    #[test]
    fn a_filter_change_issues_exactly_one_fetch_with_the_complete_state() {
        let filters = SearchFilters {
            category_id: "1".into(),
            bedroom: "2".into(),
            ..SearchFilters::default()
        };
        let expected = build_listing_query(&filters);

        let mut repo = MockSearchRepo::new();
        repo.expect_list_posts()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(vec![]));

        fetch_listings(&repo, &filters).unwrap();
    }

    #[test]
    fn search_page_degrades_when_reference_data_is_unavailable() {
        let mut repo = MockSearchRepo::new();
        repo.expect_list_categories()
            .returning(|| Err(crate::repository::errors::RepositoryError::DatabaseError(
                "down".into(),
            )));
        repo.expect_list_posts()
            .returning(|_| Ok(vec![sample_post(1)]));

        let data = load_search_page(&repo, SearchFilters::default()).unwrap();
        assert!(data.categories.is_empty());
        assert_eq!(data.total, 1);
        assert!(!data.fetch_failed);
        // Without reference data the card category is simply blank.
        assert_eq!(data.listings[0].category, "");
    }

    #[test]
    fn search_page_shows_empty_state_when_the_fetch_fails() {
        let mut repo = MockSearchRepo::new();
        repo.expect_list_categories().returning(|| Ok(vec![]));
        repo.expect_list_posts().returning(|_| {
            Err(crate::repository::errors::RepositoryError::DatabaseError(
                "down".into(),
            ))
        });

        let data = load_search_page(&repo, SearchFilters::default()).unwrap();
        assert_eq!(data.total, 0);
        assert!(data.fetch_failed);
    }

    #[test]
    fn last_issued_fetch_wins_regardless_of_completion_order() {
        let feed = ListingFeed::new();

        let ticket_a = feed.begin();
        let ticket_b = feed.begin();

        // B resolves first, then the older A arrives late.
        assert!(feed.complete(ticket_b, vec![sample_post(2)]));
        assert!(!feed.complete(ticket_a, vec![sample_post(1)]));

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, 2);
    }

    #[test]
    fn failed_refresh_retains_the_last_good_snapshot() {
        let feed = ListingFeed::new();

        let ticket = feed.begin();
        assert!(feed.complete(ticket, vec![sample_post(1)]));

        // A refresh begins but never completes (the fetch errored).
        let _abandoned = feed.begin();
        assert_eq!(feed.snapshot().len(), 1);

        // The next successful refresh takes over.
        let ticket = feed.begin();
        assert!(feed.complete(ticket, vec![sample_post(2), sample_post(3)]));
        assert_eq!(feed.snapshot().len(), 2);
    }

    #[test]
    fn feed_starts_empty() {
        assert!(ListingFeed::new().snapshot().is_empty());
    }
}
