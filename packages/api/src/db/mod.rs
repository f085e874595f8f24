//! # Database module — PostgreSQL connection pool
//!
//! The shared connection pool behind every server function. Gated behind
//! `#[cfg(feature = "server")]` so client (WASM) builds never pull in SQLx or
//! Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton: the first [`get_pool`] call
//! reads `DATABASE_URL` (with `.env` support via `dotenvy`), opens the pool,
//! and caches it for every later caller.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
