//! CLI commands

pub mod index;
pub mod list;
pub mod new;
pub mod prefs;
pub mod routes;
