//! Shared UI: auth state, the section unlock gate, toasts, and the
//! component kit the views are built from.

use dioxus::prelude::*;

pub mod components;

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

mod toast;
pub use toast::{use_toast, Toast, ToastKind, ToastProvider, Toasts};

pub mod unlock;
pub use unlock::{submit_password, valid_passwords, SectionData, UnlockOutcome};

pub const UI_CSS: Asset = asset!("/assets/ui.css");
