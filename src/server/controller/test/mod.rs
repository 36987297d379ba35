use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    discord::{default_profile, guild_json, MockDiscord},
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use url::Url;

use crate::server::{
    bot::{fake::FakeConnector, BotConnection},
    config::Config,
    model::guild::BotGuild,
    router::router,
    startup::{setup_oauth_client, setup_reqwest_client},
    state::AppState,
};

mod rule;

const ADMINISTRATOR: u64 = 0x8;

/// Router wired to an in-memory database, a mocked Discord API and a fake gateway.
struct TestApp {
    router: Router,
    discord: MockDiscord,
    test: TestContext,
}

impl TestApp {
    /// App whose user administers guild `1` (shared with the bot) and `2` (bot absent).
    async fn new() -> Self {
        Self::with(default_profile(), Some(vec![bot_guild("1", 25)])).await
    }

    /// App with the given profile and bot guilds; `None` leaves the bot disconnected.
    async fn with(profile: Value, bot_guilds: Option<Vec<BotGuild>>) -> Self {
        let discord = MockDiscord::builder()
            .profile(profile)
            .guilds(json!([
                guild_json("1", "Shared", ADMINISTRATOR, false),
                guild_json("2", "No Bot", ADMINISTRATOR, false),
            ]))
            .start()
            .await
            .unwrap();

        Self::from_discord(discord, bot_guilds).await
    }

    async fn from_discord(discord: MockDiscord, bot_guilds: Option<Vec<BotGuild>>) -> Self {
        let test = TestBuilder::new()
            .with_dashboard_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let config = Config::for_test(discord.token_url(), discord.api_url());
        let http_client = setup_reqwest_client().unwrap();
        let oauth_client = setup_oauth_client(&config).unwrap();

        let bot = match bot_guilds {
            Some(guilds) => {
                let bot = BotConnection::new(Arc::new(FakeConnector::with_guilds(guilds)));
                bot.connect("token").await.unwrap();
                bot
            }
            None => BotConnection::new(Arc::new(FakeConnector::default())),
        };

        let state = AppState::new(db, http_client, oauth_client, bot, Arc::new(config));
        let router = router()
            .with_state(state)
            .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false));

        Self {
            router,
            discord,
            test,
        }
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.request(Method::GET, uri, cookie, None).await
    }

    /// Starts a login and returns the session cookie and the OAuth state sent to Discord.
    async fn begin_login(&self) -> (String, String) {
        let response = self.get("/auth/discord", None).await;
        assert_eq!(response.status(), StatusCode::FOUND);

        let cookie = session_cookie(&response).unwrap();
        let location = Url::parse(&location(&response)).unwrap();
        let state = location
            .query_pairs()
            .find(|(key, _)| key == "state")
            .map(|(_, value)| value.into_owned())
            .unwrap();

        (cookie, state)
    }

    /// Completes a login and returns the authenticated session cookie.
    async fn sign_in(&self) -> String {
        let (cookie, state) = self.begin_login().await;

        let response = self
            .get(
                &format!("/auth/discord/callback?code=good-code&state={}", state),
                Some(&cookie),
            )
            .await;
        assert_eq!(location(&response), "/");

        session_cookie(&response).unwrap_or(cookie)
    }
}

fn bot_guild(id: &str, member_count: u64) -> BotGuild {
    BotGuild {
        id: id.to_string(),
        name: format!("Guild {}", id),
        member_count,
        icon_url: None,
    }
}

/// The `name=value` pair from the response's `Set-Cookie` header.
fn session_cookie(response: &Response<Body>) -> Option<String> {
    let header = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;

    header.split(';').next().map(str::to_string)
}

fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
