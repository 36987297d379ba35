//! A local stand-in for Discord's OAuth2 token endpoint and the two REST endpoints the
//! login flow reads.
//!
//! Routes served under the base URL:
//! - `POST /api/oauth2/token`
//! - `GET /api/users/@me`
//! - `GET /api/users/@me/guilds`
//!
//! Every route counts its hits so tests can assert which upstream calls were made.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Hit counters for each mocked route.
#[derive(Default)]
pub struct DiscordHits {
    pub token: AtomicUsize,
    pub profile: AtomicUsize,
    pub guilds: AtomicUsize,
}

#[derive(Clone)]
struct MockState {
    hits: Arc<DiscordHits>,
    profile: Value,
    guilds: Option<Value>,
    reject_token: bool,
}

/// Builder for [`MockDiscord`].
pub struct MockDiscordBuilder {
    profile: Value,
    guilds: Option<Value>,
    reject_token: bool,
}

impl MockDiscordBuilder {
    /// Sets the JSON body returned from `/users/@me`.
    pub fn profile(mut self, profile: Value) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the JSON array returned from `/users/@me/guilds`.
    pub fn guilds(mut self, guilds: Value) -> Self {
        self.guilds = Some(guilds);
        self
    }

    /// Makes `/users/@me/guilds` answer with a 500.
    pub fn failing_guilds(mut self) -> Self {
        self.guilds = None;
        self
    }

    /// Makes the token endpoint answer with an OAuth2 `invalid_grant` error.
    pub fn rejecting_codes(mut self) -> Self {
        self.reject_token = true;
        self
    }

    /// Binds to an ephemeral local port and starts serving.
    pub async fn start(self) -> Result<MockDiscord, TestError> {
        let hits = Arc::new(DiscordHits::default());
        let state = MockState {
            hits: hits.clone(),
            profile: self.profile,
            guilds: self.guilds,
            reject_token: self.reject_token,
        };

        let app = Router::new()
            .route("/api/oauth2/token", post(token))
            .route("/api/users/@me", get(profile))
            .route("/api/users/@me/guilds", get(guilds))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(MockDiscord { addr, hits, handle })
    }
}

/// Running mock server. The serving task is aborted on drop.
pub struct MockDiscord {
    addr: SocketAddr,
    hits: Arc<DiscordHits>,
    handle: JoinHandle<()>,
}

impl MockDiscord {
    /// Starts building a mock whose user is `"100"` and who is in no guilds.
    pub fn builder() -> MockDiscordBuilder {
        MockDiscordBuilder {
            profile: default_profile(),
            guilds: Some(json!([])),
            reject_token: false,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn token_url(&self) -> String {
        format!("{}/api/oauth2/token", self.base_url())
    }

    pub fn api_url(&self) -> String {
        format!("{}/api", self.base_url())
    }

    pub fn token_hits(&self) -> usize {
        self.hits.token.load(Ordering::SeqCst)
    }

    pub fn profile_hits(&self) -> usize {
        self.hits.profile.load(Ordering::SeqCst)
    }

    pub fn guild_hits(&self) -> usize {
        self.hits.guilds.load(Ordering::SeqCst)
    }
}

impl Drop for MockDiscord {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Profile JSON in the shape Discord returns from `/users/@me`.
pub fn default_profile() -> Value {
    json!({
        "id": "100",
        "username": "tester",
        "discriminator": "0",
        "avatar": null,
        "email": "tester@example.com"
    })
}

/// A guild entry in the shape Discord returns from `/users/@me/guilds`.
pub fn guild_json(id: &str, name: &str, permissions: u64, owner: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "icon": null,
        "owner": owner,
        "permissions": permissions.to_string()
    })
}

async fn token(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
    state.hits.token.fetch_add(1, Ordering::SeqCst);

    if state.reject_token {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "access_token": "mock-access-token",
            "token_type": "Bearer",
            "expires_in": 604800,
            "refresh_token": "mock-refresh-token",
            "scope": "identify email guilds"
        })),
    )
}

async fn profile(State(state): State<MockState>) -> Json<Value> {
    state.hits.profile.fetch_add(1, Ordering::SeqCst);
    Json(state.profile)
}

async fn guilds(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
    state.hits.guilds.fetch_add(1, Ordering::SeqCst);

    match state.guilds {
        Some(guilds) => (StatusCode::OK, Json(guilds)),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "500: Internal Server Error" })),
        ),
    }
}
