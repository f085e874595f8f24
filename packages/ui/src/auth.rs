//! Session state shared across the app: who is signed in, with which
//! role, and the actions that change it.

use api::{CurrentSession, SessionInfo, UserInfo, UserRole};
use dioxus::prelude::*;

use crate::toast::{use_toast, ToastKind, Toasts};

/// What the client currently knows about the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub session: Option<SessionInfo>,
    /// Resolved after the user is known; `None` while the lookup is in
    /// flight.
    pub role: Option<UserRole>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            session: None,
            role: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.role == Some(UserRole::Admin)
    }
}

/// Authentication handle: the state signal plus the sign-in, sign-up
/// and sign-out actions. Every action reports its outcome through the
/// toast service.
#[derive(Clone, Copy)]
pub struct Auth {
    pub state: Signal<AuthState>,
    toasts: Toasts,
}

/// Get the current authentication handle.
/// The state signal updates when the user logs in or out.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

impl Auth {
    /// Email and password sign-in. On success the session lands in the
    /// state right away and the role resolves in a follow-up request.
    pub async fn sign_in(&mut self, email: String, password: String) -> Result<(), ServerFnError> {
        match api::sign_in(email, password).await {
            Ok(current) => {
                apply_session(&mut self.state, Some(current));
                self.toasts.success("登入成功", Some("歡迎回來！".to_string()));
                Ok(())
            }
            Err(e) => {
                self.toasts.error("登入失敗", Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Creates an account. No session is established; the member signs
    /// in after confirming their address.
    pub async fn sign_up(
        &mut self,
        email: String,
        password: String,
        display_name: Option<String>,
    ) -> Result<(), ServerFnError> {
        let redirect = signup_redirect_target(&current_origin());
        let outcome = api::sign_up(email, password, display_name, redirect).await;
        let (kind, title, description) = signup_toast(&outcome);
        self.toasts.push(kind, title, Some(description));
        outcome.map(|_| ())
    }

    /// Starts the Google flow by leaving the page for the provider's
    /// consent screen. State comes back through the server callback.
    pub async fn sign_in_with_google(&mut self) -> Result<(), ServerFnError> {
        match api::get_login_url("google".to_string()).await {
            Ok(url) => {
                redirect_to(&url);
                Ok(())
            }
            Err(e) => {
                self.toasts.error("Google 登入失敗", Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Ends the session. Local state clears even when the server call
    /// fails, so the button always signs the member out of the page.
    pub async fn sign_out(&mut self) {
        if let Err(e) = api::sign_out().await {
            tracing::error!("Sign-out request failed: {}", e);
        }
        self.state.set(AuthState {
            user: None,
            session: None,
            role: None,
            loading: false,
        });
        self.toasts.success("已登出", Some("您已成功登出。".to_string()));
    }
}

/// Confirmation mails link back to the dashboard on whatever origin
/// served the form.
fn signup_redirect_target(origin: &str) -> String {
    format!("{origin}/dashboard")
}

/// Toast copy for a sign-up outcome. Success asks the member to check
/// their inbox; failure carries the server's message.
fn signup_toast(outcome: &Result<UserInfo, ServerFnError>) -> (ToastKind, &'static str, String) {
    match outcome {
        Ok(_) => (
            ToastKind::Success,
            "註冊成功",
            "請檢查您的電子郵件以確認帳戶。".to_string(),
        ),
        Err(e) => (ToastKind::Error, "註冊失敗", e.to_string()),
    }
}

/// Folds a session fetch into the auth state.
///
/// A session for a user we already know keeps the resolved role. A new
/// user drops the role and stays in `loading` until the role lookup
/// for that user lands. No session clears everything in one write.
fn fold_session(previous: AuthState, current: Option<CurrentSession>) -> AuthState {
    match current {
        Some(current) => {
            let same_user = previous.user.as_ref().map(|user| user.id.as_str())
                == Some(current.user.id.as_str());
            if same_user {
                AuthState {
                    user: Some(current.user),
                    session: Some(current.session),
                    role: previous.role,
                    loading: false,
                }
            } else {
                AuthState {
                    user: Some(current.user),
                    session: Some(current.session),
                    role: None,
                    loading: true,
                }
            }
        }
        None => AuthState {
            user: None,
            session: None,
            role: None,
            loading: false,
        },
    }
}

fn apply_session(state: &mut Signal<AuthState>, current: Option<CurrentSession>) {
    let previous = state.peek().clone();
    state.set(fold_session(previous, current));
}

/// Owns the auth signal and keeps it in sync with the server session.
/// Must be nested inside a `ToastProvider`.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut state = use_signal(AuthState::default);
    let toasts = use_toast();

    // Fetch the current session on mount
    let _ = use_resource(move || async move {
        strip_oauth_fragment();
        match api::get_session().await {
            Ok(current) => apply_session(&mut state, current),
            Err(e) => {
                tracing::error!("Failed to fetch session: {}", e);
                state.set(AuthState {
                    user: None,
                    session: None,
                    role: None,
                    loading: false,
                });
            }
        }
    });

    // Resolve the role in a separate request once a user is known. The
    // memo keys the lookup to the user id, so a refreshed session for
    // the same user does not refetch.
    let user_id = use_memo(move || state().user.as_ref().map(|user| user.id.clone()));
    use_effect(move || {
        let Some(id) = user_id() else { return };
        spawn(async move {
            let role = match api::list_my_roles().await {
                Ok(roles) => api::effective_role(&roles),
                Err(e) => {
                    // A member view beats a stuck spinner; admins can
                    // reload if their lookup failed.
                    tracing::error!("Failed to resolve roles: {}", e);
                    UserRole::Member
                }
            };
            let mut current = state.peek().clone();
            if current.user.as_ref().map(|user| user.id.as_str()) == Some(id.as_str()) {
                current.role = Some(role);
                current.loading = false;
                state.set(current);
            }
        });
    });

    // Periodic session recheck (every 30s)
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                // Don't check while a load is still in progress
                if state.peek().loading {
                    continue;
                }
                match api::get_session().await {
                    Ok(current) => {
                        let known = state.peek().user.as_ref().map(|user| user.id.clone());
                        let fetched = current.as_ref().map(|c| c.user.id.clone());
                        if known != fetched {
                            apply_session(&mut state, current);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Session recheck failed: {}", e);
                    }
                }
            }
        });
    });

    use_context_provider(|| Auth { state, toasts });

    rsx! {
        {children}
    }
}

/// `access_token` is not always the fragment's first parameter; a
/// provider can put its own token ahead of it. Match anywhere.
#[cfg(any(target_arch = "wasm32", test))]
fn has_token_fragment(hash: &str) -> bool {
    hash.contains("access_token")
}

/// Drops a leftover OAuth token fragment from the address bar after a
/// provider redirect, keeping tokens out of history and copied links.
fn strip_oauth_fragment() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else { return };
        let location = window.location();
        let Ok(hash) = location.hash() else { return };
        if !has_token_fragment(&hash) {
            return;
        }
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        if let Ok(history) = window.history() {
            let clean = format!("{path}{search}");
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean));
        }
    }
}

fn current_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    "http://localhost:8080".to_string()
}

fn redirect_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Redirect requested to {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_for(id: &str) -> CurrentSession {
        CurrentSession {
            user: UserInfo {
                id: id.to_string(),
                email: format!("{id}@example.com"),
                name: None,
                avatar_url: None,
            },
            session: SessionInfo {
                user_id: id.to_string(),
                expires_at: 0,
            },
        }
    }

    fn signed_in(id: &str, role: Option<UserRole>) -> AuthState {
        let current = session_for(id);
        AuthState {
            user: Some(current.user),
            session: Some(current.session),
            role,
            loading: false,
        }
    }

    #[test]
    fn no_session_clears_everything_at_once() {
        let next = fold_session(signed_in("u1", Some(UserRole::Admin)), None);
        assert!(next.user.is_none());
        assert!(next.session.is_none());
        assert!(next.role.is_none());
        assert!(!next.loading);
    }

    #[test]
    fn first_session_starts_role_resolution() {
        let next = fold_session(AuthState::default(), Some(session_for("u1")));
        assert_eq!(next.user.map(|user| user.id), Some("u1".to_string()));
        assert!(next.role.is_none());
        assert!(next.loading);
    }

    #[test]
    fn refreshed_session_keeps_resolved_role() {
        let next = fold_session(
            signed_in("u1", Some(UserRole::Member)),
            Some(session_for("u1")),
        );
        assert_eq!(next.role, Some(UserRole::Member));
        assert!(!next.loading);
    }

    #[test]
    fn different_user_resets_the_role() {
        let next = fold_session(
            signed_in("u1", Some(UserRole::Admin)),
            Some(session_for("u2")),
        );
        assert_eq!(next.user.map(|user| user.id), Some("u2".to_string()));
        assert!(next.role.is_none());
        assert!(next.loading);
    }

    #[test]
    fn signup_confirmation_links_back_to_the_dashboard() {
        assert_eq!(
            signup_redirect_target("https://catman.example"),
            "https://catman.example/dashboard"
        );
    }

    #[test]
    fn signup_success_asks_for_email_confirmation() {
        let (kind, _, description) = signup_toast(&Ok(session_for("u1").user));
        assert_eq!(kind, ToastKind::Success);
        assert!(description.contains("電子郵件"));
    }

    #[test]
    fn signup_failure_shows_the_server_message() {
        let outcome = Err(ServerFnError::new("Password must be at least 6 characters"));
        let (kind, _, description) = signup_toast(&outcome);
        assert_eq!(kind, ToastKind::Error);
        assert!(description.contains("Password must be at least 6 characters"));
    }

    #[test]
    fn token_fragment_is_detected_anywhere_in_the_hash() {
        assert!(has_token_fragment("#access_token=abc&expires_in=3600"));
        assert!(has_token_fragment("#provider_token=xyz&access_token=abc"));
        assert!(!has_token_fragment("#section-intro"));
        assert!(!has_token_fragment(""));
    }
}
