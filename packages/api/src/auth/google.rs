//! # Google sign-in
//!
//! Authorization Code flow with PKCE against Google, the platform's one
//! external identity provider next to local password accounts.
//!
//! The flow is split across two requests:
//!
//! 1. [`GoogleOAuth::generate_auth_url`] builds the consent URL (scopes
//!    `openid email profile`) and parks the CSRF state together with the PKCE
//!    verifier in the `oauth_states` table, valid for ten minutes.
//! 2. [`GoogleOAuth::exchange_code`], driven by the `/auth/google/callback`
//!    route in the `web` crate, consumes the state row, trades the code for an
//!    access token, reads the Google profile, and provisions the account:
//!    `users` upsert keyed on `(provider, provider_id)`, a `profiles` mirror
//!    row, and a `member` role on first sign-in.

use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use serde::Deserialize;
use sqlx::PgPool;

use super::config::GoogleConfig;
use crate::db::get_pool;
use crate::models::User;

const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Shape of the Google userinfo response.
#[derive(Debug, Deserialize)]
struct GoogleProfile {
    id: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

/// `oauth2::Client` with the auth, token and redirect endpoints filled in.
type GoogleClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

pub struct GoogleOAuth {
    config: GoogleConfig,
}

impl GoogleOAuth {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            config: GoogleConfig::from_env()?,
        })
    }

    fn client(&self) -> GoogleClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Builds the consent URL and persists the CSRF state + PKCE verifier.
    pub async fn generate_auth_url(&self) -> Result<(String, String, String), String> {
        let (challenge, verifier) = PkceCodeChallenge::new_random_sha256();
        let (auth_url, csrf_state) = self
            .client()
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(challenge)
            .url();

        let state = csrf_state.secret().clone();
        let secret = verifier.secret().clone();

        let pool = get_pool().await.map_err(|e| e.to_string())?;
        sqlx::query(
            "INSERT INTO oauth_states (state, provider, pkce_verifier, expires_at) VALUES ($1, 'google', $2, NOW() + INTERVAL '10 minutes')",
        )
        .bind(&state)
        .bind(&secret)
        .execute(pool)
        .await
        .map_err(|e| e.to_string())?;

        Ok((auth_url.to_string(), state, secret))
    }

    /// Completes the flow for a callback request and returns the signed-in
    /// user, provisioning the account on first contact.
    pub async fn exchange_code(&self, code: &str, state: &str) -> Result<User, String> {
        let pool = get_pool().await.map_err(|e| e.to_string())?;
        let verifier = take_state(pool, state).await?;

        // oauth2 requires a client that does not follow redirects
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| e.to_string())?;

        let token = self
            .client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| format!("Google token exchange failed: {}", e))?;

        let profile = fetch_profile(token.access_token().secret()).await?;
        provision_user(pool, &profile).await
    }
}

/// Consumes the `oauth_states` row for `state`, returning its PKCE verifier.
/// Expired or unknown states fail; each state is single use.
async fn take_state(pool: &PgPool, state: &str) -> Result<String, String> {
    let row: Option<(String,)> = sqlx::query_as(
        "DELETE FROM oauth_states WHERE state = $1 AND provider = 'google' AND expires_at > NOW() RETURNING pkce_verifier",
    )
    .bind(state)
    .fetch_optional(pool)
    .await
    .map_err(|e| e.to_string())?;

    row.map(|(verifier,)| verifier)
        .ok_or_else(|| "OAuth state is invalid or expired".to_string())
}

async fn fetch_profile(access_token: &str) -> Result<GoogleProfile, String> {
    reqwest::Client::new()
        .get(USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// First sign-in creates the account; later sign-ins refresh the profile
/// fields Google reports. A display name already set locally is kept.
async fn provision_user(pool: &PgPool, profile: &GoogleProfile) -> Result<User, String> {
    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (email, name, avatar_url, provider, provider_id)
        VALUES ($1, $2, $3, 'google', $4)
        ON CONFLICT (provider, provider_id) DO UPDATE
        SET email = EXCLUDED.email, name = EXCLUDED.name,
            avatar_url = EXCLUDED.avatar_url, updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(&profile.email)
    .bind(&profile.name)
    .bind(&profile.picture)
    .bind(&profile.id)
    .fetch_one(pool)
    .await
    .map_err(|e| e.to_string())?;

    sqlx::query(
        r#"
        INSERT INTO profiles (id, email, display_name)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE
        SET email = EXCLUDED.email, updated_at = NOW(),
            display_name = COALESCE(profiles.display_name, EXCLUDED.display_name)
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.name)
    .execute(pool)
    .await
    .map_err(|e| e.to_string())?;

    sqlx::query(
        "INSERT INTO user_roles (user_id, role) VALUES ($1, 'member') ON CONFLICT (user_id, role) DO NOTHING",
    )
    .bind(user.id)
    .execute(pool)
    .await
    .map_err(|e| e.to_string())?;

    Ok(user)
}
