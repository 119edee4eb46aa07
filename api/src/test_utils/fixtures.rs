//! Test fixtures
//!
//! Factory functions producing fresh, isolated entities with sensible
//! defaults. No fixture is ever shared between tests; every call makes a
//! new row with its own ids.

use chrono::{DateTime, Duration, Utc};

use crate::app::auth_service::hash_password;
use crate::domain::entities::{
    Comment, CommentId, News, NewsId, Note, NoteId, User, UserId,
};

/// Password used by every fixture user
pub const FIXTURE_PASSWORD: &str = "password";

/// Create a test user with a real (verifiable) password hash
pub fn test_user(username: &str) -> User {
    User {
        id: UserId::new(),
        username: username.to_string(),
        password_hash: hash_password(FIXTURE_PASSWORD),
        created_at: Utc::now(),
    }
}

/// Create a news item dated today
pub fn test_news(title: &str) -> News {
    News {
        id: NewsId::new(),
        title: title.to_string(),
        text: "Just text.".to_string(),
        date: Utc::now().date_naive(),
    }
}

/// Create a news item dated `days_ago` days back
pub fn test_news_dated(days_ago: i64) -> News {
    News {
        id: NewsId::new(),
        title: format!("News {}", days_ago),
        text: "Just text.".to_string(),
        date: (Utc::now() - Duration::days(days_ago)).date_naive(),
    }
}

/// Create a comment created right now
pub fn test_comment(news: &News, author: &User, text: &str) -> Comment {
    test_comment_at(news, author, text, Utc::now())
}

/// Create a comment with an explicit creation timestamp, for ordering tests
pub fn test_comment_at(
    news: &News,
    author: &User,
    text: &str,
    created: DateTime<Utc>,
) -> Comment {
    Comment {
        id: CommentId::new(),
        news_id: news.id,
        author_id: author.id,
        text: text.to_string(),
        created,
    }
}

/// Create a note owned by `owner`
pub fn test_note(owner: &User, title: &str, slug: &str) -> Note {
    Note {
        id: NoteId::new(),
        title: title.to_string(),
        text: "Text".to_string(),
        slug: slug.to_string(),
        author_id: owner.id,
        created_at: Utc::now(),
    }
}
