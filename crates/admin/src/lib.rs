//! Admin console data layer.
//!
//! The admin dashboard talks to a backend REST API for persisted data and
//! falls back to bundled sample data when the backend is unreachable, so the
//! console keeps working offline. Each domain (orders, analytics, contacts,
//! reviews, settings) is a service trait with an API-backed implementation
//! and an in-memory one; the in-memory services also back the bundled web
//! server.

pub mod api;
pub mod context;
pub mod domain;
pub mod sample;
