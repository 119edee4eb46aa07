//! Vestnik API Server
//!
//! Two small applications behind one HTTP surface: a public news feed with
//! moderated, author-owned comments, and per-user notes addressed by
//! globally unique slugs. Uses hexagonal (ports & adapters) architecture:
//! services talk to repository ports, PostgreSQL adapters implement them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod forms;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_schema, PostgresCommentRepository, PostgresNewsRepository, PostgresNoteRepository,
    PostgresSessionStore, PostgresUserRepository,
};
use app::{AuthService, CommentService, NewsService, NoteService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
    pub comment_service: Arc<CommentService>,
    pub note_service: Arc<NoteService>,
    pub auth_service: Arc<AuthService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router
///
/// Everything under the protected group redirects anonymous requests to
/// the login page with `next` set to the requested path; the outer session
/// middleware resolves the cookie for every route, so public pages can
/// still tell who is asking.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        // Comment submission and management
        .route("/news/:id/comments", post(handlers::post_comment))
        .route(
            "/comments/:id/edit",
            get(handlers::edit_comment_page).post(handlers::update_comment),
        )
        .route(
            "/comments/:id/delete",
            get(handlers::delete_comment_page)
                .post(handlers::delete_comment)
                .delete(handlers::delete_comment),
        )
        // Notes
        .route("/notes", get(handlers::list_notes))
        .route(
            "/notes/add",
            get(handlers::add_note_page).post(handlers::create_note),
        )
        .route("/notes/success", get(handlers::note_done))
        .route("/notes/:slug", get(handlers::note_detail))
        .route(
            "/notes/:slug/edit",
            get(handlers::edit_note_page).post(handlers::update_note),
        )
        .route(
            "/notes/:slug/delete",
            get(handlers::delete_note_page)
                .post(handlers::delete_note)
                .delete(handlers::delete_note),
        )
        .layer(middleware::from_fn(auth::require_login));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public news pages
        .route("/", get(handlers::home))
        .route("/news/:id", get(handlers::news_detail))
        // Auth pages
        .route(
            "/auth/login",
            get(handlers::login_page).post(handlers::login),
        )
        .route(
            "/auth/logout",
            get(handlers::logout).post(handlers::logout),
        )
        .route(
            "/auth/signup",
            get(handlers::signup_page).post(handlers::signup),
        )
        // Login-gated routes
        .merge(protected)
        // Middleware
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::session_middleware,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vestnik_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vestnik API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL and apply the schema
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    ensure_schema(&db).await.expect("Failed to apply schema");
    tracing::info!("Database ready");

    // Create adapters
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));
    let news_repo = Arc::new(PostgresNewsRepository::new(db.clone()));
    let comment_repo = Arc::new(PostgresCommentRepository::new(db.clone()));
    let note_repo = Arc::new(PostgresNoteRepository::new(db.clone()));
    let session_store = Arc::new(PostgresSessionStore::new(db.clone()));

    // Create application services
    let state = AppState {
        news_service: Arc::new(NewsService::new(
            news_repo.clone(),
            comment_repo.clone(),
            config.news_page_size,
        )),
        comment_service: Arc::new(CommentService::new(comment_repo.clone(), news_repo.clone())),
        note_service: Arc::new(NoteService::new(
            note_repo.clone(),
            config.slug_collision_policy,
        )),
        auth_service: Arc::new(AuthService::new(user_repo.clone(), session_store.clone())),
    };

    // Edge rate limit, keyed by client IP from the socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(10)
            .burst_size(30)
            .finish()
            .expect("Failed to build governor config"),
    );

    let app = app_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
