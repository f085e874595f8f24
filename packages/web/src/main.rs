use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{Admin, Auth, Dashboard, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/auth")]
    Auth {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(run_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn run_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let pool = api::db::get_pool()
        .await
        .expect("Postgres connection failed");

    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Database migrations failed");

    let sessions = session_layer(pool.clone()).await;

    // The OAuth callback is a plain axum route in front of the Dioxus app;
    // the session layer wraps both.
    let router = axum::Router::new()
        .route("/auth/google/callback", get(google_callback))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(sessions);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

/// Cookie sessions stored in PostgreSQL, expiring after a week idle.
#[cfg(feature = "server")]
async fn session_layer(
    pool: sqlx::PgPool,
) -> tower_sessions::SessionManagerLayer<tower_sessions_sqlx_store::PostgresStore> {
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    let store = PostgresStore::new(pool);
    store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    SessionManagerLayer::new(store)
        .with_secure(false) // behind TLS termination in production
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Finishes the Google sign-in: consumes `code` + `state`, writes the session
/// cookie, and lands the member on the dashboard. Every failure goes back to
/// `/auth` with an error tag in the query string.
#[cfg(feature = "server")]
async fn google_callback(
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    let Some(code) = params.get("code") else {
        tracing::error!("OAuth callback arrived without a code parameter");
        return Redirect::to("/auth?error=missing_code");
    };
    let Some(state) = params.get("state") else {
        tracing::error!("OAuth callback arrived without a state parameter");
        return Redirect::to("/auth?error=missing_state");
    };

    let oauth = match api::auth::GoogleOAuth::new() {
        Ok(oauth) => oauth,
        Err(e) => {
            tracing::error!("Google OAuth is not configured: {}", e);
            return Redirect::to("/auth?error=config_error");
        }
    };

    let user = match oauth.exchange_code(code, state).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Google code exchange failed: {}", e);
            return Redirect::to("/auth?error=oauth_error");
        }
    };

    if let Err(e) = session
        .insert(api::auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
    {
        tracing::error!("Could not write the session: {}", e);
        return Redirect::to("/auth?error=session_error");
    }
    if let Err(e) = session.save().await {
        tracing::error!("Could not persist the session: {}", e);
        return Redirect::to("/auth?error=session_save_error");
    }

    Redirect::to("/dashboard")
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
