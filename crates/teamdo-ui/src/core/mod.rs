//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod error;
pub mod host;
pub mod inflight;
pub mod notice;
pub mod outcome;
pub mod scope;
pub mod store;
pub mod transport;
pub mod validation;
