//! HTTP integration tests driving the full router on an in-memory store.

mod auth_test;
mod helpers;
mod ordering_test;
mod user_test;
