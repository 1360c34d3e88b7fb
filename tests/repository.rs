use rentahouse::domain::category::NewCategory;
use rentahouse::domain::comment::NewComment;
use rentahouse::domain::feedback::NewFeedback;
use rentahouse::domain::post::UpdatePost;
use rentahouse::forms::auth::{SignInForm, SignUpForm};
use rentahouse::repository::{
    CategoryReader, CategoryWriter, CommentReader, CommentWriter, DieselRepository, FeedbackReader,
    FeedbackWriter, PostListQuery, PostReader, PostWriter, SiteViewsReader, SiteViewsWriter,
    UserReader,
};
use rentahouse::services::auth as auth_service;
use rentahouse::services::ServiceError;

mod common;

#[test]
fn test_post_repository_crud() {
    let test_db = common::TestDb::new("test_post_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let user = common::seed_user(&repo, "owner@example.com");

    let created = common::seed_post(&repo, user.id, 1, 900, 2, "12 Ocean Drive, Miami");
    assert_eq!(created.images.len(), 1);
    assert_eq!(created.images[0].base_url, "cover.jpg");
    assert!(!created.is_rented);

    let fetched = repo
        .get_post_by_id(created.id)
        .unwrap()
        .expect("post should exist");
    assert_eq!(fetched.address, "12 Ocean Drive, Miami");
    assert_eq!(fetched.images.len(), 1);

    let updates = UpdatePost::new(2, 1100, "14 Ocean Drive, Miami", "57.70,11.97", 3, 75, "Updated");
    let updated = repo.update_post(created.id, &updates).unwrap();
    assert_eq!(updated.category_id, 2);
    assert_eq!(updated.price, 1100);
    assert_eq!(updated.bedroom, 3);
    // Images survive an update untouched.
    assert_eq!(updated.images.len(), 1);

    let rented = repo.set_post_rented(created.id, true).unwrap();
    assert!(rented.is_rented);

    repo.delete_post(created.id).unwrap();
    assert!(repo.get_post_by_id(created.id).unwrap().is_none());
}

#[test]
fn test_post_listing_filters() {
    let test_db = common::TestDb::new("test_post_listing_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let owner = common::seed_user(&repo, "owner@example.com");
    let other = common::seed_user(&repo, "other@example.com");

    let cheap = common::seed_post(&repo, owner.id, 1, 450, 2, "12 Ocean Drive, Miami");
    let mid = common::seed_post(&repo, owner.id, 1, 900, 3, "78 Hill Road, Austin");
    let fancy = common::seed_post(&repo, other.id, 2, 2400, 2, "5 Lake View, Chicago");

    // Unconstrained: everything, newest first.
    let all = repo.list_posts(PostListQuery::new()).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, fancy.id);
    assert_eq!(all[2].id, cheap.id);

    // Category + bedroom combined leave exactly the two matches.
    let filtered = repo
        .list_posts(PostListQuery::new().category(1).bedrooms(2))
        .unwrap();
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, mid.id);
    assert_eq!(filtered[1].id, cheap.id);

    // Price bounds are inclusive.
    let in_range = repo
        .list_posts(PostListQuery::new().price_between(Some(450), Some(900)))
        .unwrap();
    assert_eq!(in_range.len(), 2);

    let open_ended = repo
        .list_posts(PostListQuery::new().price_between(Some(1000), None))
        .unwrap();
    assert_eq!(open_ended.len(), 1);
    assert_eq!(open_ended[0].id, fancy.id);

    // Location matches address fragments, case-insensitively.
    let in_miami = repo
        .list_posts(PostListQuery::new().location("miami"))
        .unwrap();
    assert_eq!(in_miami.len(), 1);
    assert_eq!(in_miami[0].id, cheap.id);

    // Rented listings disappear from search but stay visible to their owner.
    repo.set_post_rented(cheap.id, true).unwrap();
    assert_eq!(repo.list_posts(PostListQuery::new()).unwrap().len(), 2);

    let mine = repo
        .list_posts(PostListQuery::new().owner(owner.id).include_rented())
        .unwrap();
    assert_eq!(mine.len(), 2);
}

#[test]
fn test_category_repository() {
    let test_db = common::TestDb::new("test_category_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    // Seeded by the migrations, sorted by name.
    let categories = repo.list_categories().unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[0].name, "Apartment");

    let apartment = repo.get_category_by_id(categories[0].id).unwrap();
    assert_eq!(apartment.unwrap().name, "Apartment");
    assert!(repo.get_category_by_id(999).unwrap().is_none());

    let cottage = repo
        .create_category(&NewCategory::new(" Cottage "))
        .unwrap();
    assert_eq!(cottage.name, "Cottage");
    assert_eq!(repo.list_categories().unwrap().len(), 6);
}

#[test]
fn test_comment_repository() {
    let test_db = common::TestDb::new("test_comment_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let owner = common::seed_user(&repo, "owner@example.com");
    let reviewer = common::seed_user(&repo, "reviewer@example.com");
    let post = common::seed_post(&repo, owner.id, 1, 900, 2, "12 Ocean Drive, Miami");

    let first = NewComment::new(post.id, reviewer.id, "Great place!", 5).unwrap();
    let second = NewComment::new(post.id, reviewer.id, "Still great.", 4).unwrap();
    repo.create_comment(&first).unwrap();
    let second = repo.create_comment(&second).unwrap();

    let thread = repo.list_post_comments(post.id).unwrap();
    assert_eq!(thread.len(), 2);
    // Newest first, joined with the author.
    assert_eq!(thread[0].0.content, "Still great.");
    assert_eq!(thread[0].1.full_name, "Test User");

    let moderation = repo.list_all_comments().unwrap();
    assert_eq!(moderation.len(), 2);
    assert_eq!(moderation[0].2.address, "12 Ocean Drive, Miami");

    repo.delete_comment(second.id).unwrap();
    assert_eq!(repo.list_post_comments(post.id).unwrap().len(), 1);
}

#[test]
fn test_feedback_repository() {
    let test_db = common::TestDb::new("test_feedback_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_feedback(&NewFeedback::new("First impression").unwrap())
        .unwrap();
    repo.create_feedback(&NewFeedback::new("Second thought").unwrap())
        .unwrap();

    let feedbacks = repo.list_feedbacks().unwrap();
    assert_eq!(feedbacks.len(), 2);
    assert_eq!(feedbacks[0].content, "Second thought");
}

#[test]
fn test_user_repository() {
    let test_db = common::TestDb::new("test_user_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let user = common::seed_user(&repo, "Tenant@Example.com");
    // Emails are normalized on the way in.
    assert_eq!(user.email, "tenant@example.com");

    let by_email = repo.get_user_by_email("tenant@example.com").unwrap();
    assert_eq!(by_email.unwrap().id, user.id);
    assert!(repo.get_user_by_email("nobody@example.com").unwrap().is_none());
}

#[test]
fn test_site_view_counter() {
    let test_db = common::TestDb::new("test_site_view_counter.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert_eq!(repo.total_views().unwrap(), 0);
    assert_eq!(repo.record_view().unwrap(), 1);
    assert_eq!(repo.record_view().unwrap(), 2);
    assert_eq!(repo.total_views().unwrap(), 2);
}

#[test]
fn test_register_and_login_flow() {
    let test_db = common::TestDb::new("test_register_and_login_flow.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let user = auth_service::register(
        &repo,
        SignUpForm {
            full_name: "Jane Renter".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+46701234567".to_string(),
            password: "correct horse battery staple".to_string(),
        },
    )
    .unwrap();
    assert_eq!(user.role, "user");

    // Duplicate registration is rejected with a user-facing message.
    let duplicate = auth_service::register(
        &repo,
        SignUpForm {
            full_name: "Jane Again".to_string(),
            email: "JANE@example.com".to_string(),
            phone: "+46701234567".to_string(),
            password: "another password".to_string(),
        },
    );
    assert!(matches!(duplicate, Err(ServiceError::Form(_))));

    let logged_in = auth_service::login(
        &repo,
        SignInForm {
            email: "Jane@Example.com".to_string(),
            password: "correct horse battery staple".to_string(),
        },
    )
    .unwrap();
    assert_eq!(logged_in.id, user.id);

    let wrong_password = auth_service::login(
        &repo,
        SignInForm {
            email: "jane@example.com".to_string(),
            password: "wrong".to_string(),
        },
    );
    assert!(matches!(wrong_password, Err(ServiceError::Unauthorized)));
}
