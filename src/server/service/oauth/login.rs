use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::oauth::{DiscordAuthService, OAUTH_SCOPES, OAUTH_STATE_BYTES};

impl<'a> DiscordAuthService<'a> {
    /// Generates a fresh single-use `state` value for an OAuth flow.
    pub fn new_state() -> String {
        CsrfToken::new_random_len(OAUTH_STATE_BYTES)
            .secret()
            .to_string()
    }

    /// Builds the Discord authorize URL carrying `state`.
    ///
    /// The URL includes `client_id`, `redirect_uri`, `response_type=code` and the
    /// `identify email guilds` scopes.
    pub fn build_authorization_url(&self, state: &str) -> Url {
        let (url, _) = self
            .oauth_client
            .authorize_url(|| CsrfToken::new(state.to_string()))
            .add_scopes(OAUTH_SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{config::Config, startup::setup_oauth_client};
    use std::collections::HashMap;

    #[test]
    fn authorization_url_carries_state_and_scopes() {
        let config = Config::for_test(
            "http://127.0.0.1:1/api/oauth2/token".to_string(),
            "http://127.0.0.1:1/api".to_string(),
        );
        let oauth_client = setup_oauth_client(&config).unwrap();
        let http_client = reqwest::Client::new();
        let service = DiscordAuthService::new(&http_client, &oauth_client, "");

        let url = service.build_authorization_url("abc123");
        let query: HashMap<String, String> = url.query_pairs().into_owned().collect();

        assert!(url.as_str().starts_with("https://discord.com/oauth2/authorize"));
        assert_eq!(query.get("client_id").map(String::as_str), Some("client-id"));
        assert_eq!(query.get("response_type").map(String::as_str), Some("code"));
        assert_eq!(query.get("scope").map(String::as_str), Some("identify email guilds"));
        assert_eq!(query.get("state").map(String::as_str), Some("abc123"));
        assert_eq!(
            query.get("redirect_uri").map(String::as_str),
            Some("http://localhost:8080/auth/discord/callback")
        );
    }

    #[test]
    fn states_are_random_and_long_enough() {
        let first = DiscordAuthService::new_state();
        let second = DiscordAuthService::new_state();

        assert_ne!(first, second);
        // 32 bytes base64url-encoded without padding
        assert_eq!(first.len(), 43);
    }
}
