mod home;
pub use home::Home;

mod auth;
pub use auth::Auth;

mod dashboard;
pub use dashboard::Dashboard;

mod admin;
pub use admin::Admin;
