use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use rentahouse::db::{DbPool, establish_connection_pool};
use rentahouse::domain::post::Post;
use rentahouse::domain::post::NewPost;
use rentahouse::domain::user::{NewUser, User};
use rentahouse::repository::{DieselRepository, PostWriter, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temp directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("failed to create pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub fn seed_user(repo: &DieselRepository, email: &str) -> User {
    let new_user = NewUser::new("Test User", email, "+46701234567", "hash".to_string())
        .expect("valid user data");
    repo.create_user(&new_user).expect("failed to create user")
}

pub fn seed_post(
    repo: &DieselRepository,
    user_id: i32,
    category_id: i32,
    price: i64,
    bedroom: i32,
    address: &str,
) -> Post {
    let new_post = NewPost::new(
        user_id,
        category_id,
        price,
        address,
        "57.70,11.97",
        bedroom,
        60,
        "A lovely place to live.",
    );
    repo.create_post(&new_post, &["cover.jpg".to_string()])
        .expect("failed to create post")
}
