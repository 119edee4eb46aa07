use std::env;

use crate::domain::slug::SlugCollisionPolicy;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Maximum number of news items on the home page feed
    pub news_page_size: u64,
    /// What to do when a slug derived from a note title is already taken
    pub slug_collision_policy: SlugCollisionPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            news_page_size: env::var("NEWS_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            slug_collision_policy: env::var("SLUG_COLLISION_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SlugCollisionPolicy::Reject),
        }
    }
}
