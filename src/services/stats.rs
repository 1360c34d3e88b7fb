//! Site-wide page view tracking.

use crate::repository::SiteViewsWriter;

/// Bumps the view counter. Failures are logged and never surfaced; tracking
/// must not affect page delivery.
pub fn record_page_view<R>(repo: &R)
where
    R: SiteViewsWriter + ?Sized,
{
    if let Err(err) = repo.record_view() {
        log::error!("Failed to record page view: {err}");
    }
}
