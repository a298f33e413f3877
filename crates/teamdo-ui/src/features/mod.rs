//! Feature slices: personal todos, teams, profile and session.

pub mod profile;
pub mod session;
pub mod teams;
pub mod todos;
