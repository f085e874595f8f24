//! Google OAuth settings, read from the environment.

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_REDIRECT: &str = "http://localhost:8080/auth/google/callback";

/// Credentials and endpoints for the Google authorization-code flow.
///
/// Google is the only external provider the platform offers, so the
/// endpoints are fixed here and only the credentials come from the
/// environment: `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, and an
/// optional `AUTH_REDIRECT_URI` for deployments where the callback is
/// not on localhost.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl GoogleConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let client_id =
            std::env::var("GOOGLE_CLIENT_ID").map_err(|_| "GOOGLE_CLIENT_ID not set")?;
        let client_secret =
            std::env::var("GOOGLE_CLIENT_SECRET").map_err(|_| "GOOGLE_CLIENT_SECRET not set")?;
        let redirect_uri = std::env::var("AUTH_REDIRECT_URI")
            .unwrap_or_else(|_| DEFAULT_REDIRECT.to_string());

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new(AUTH_ENDPOINT.to_string()).map_err(|e| e.to_string())?,
            token_url: TokenUrl::new(TOKEN_ENDPOINT.to_string()).map_err(|e| e.to_string())?,
            redirect_url: RedirectUrl::new(redirect_uri).map_err(|e| e.to_string())?,
        })
    }
}
