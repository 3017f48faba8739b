//! Shared DTOs (schemas-as-code) for the tvshift workspace.
//!
//! # Design constraints
//! - Readers are *tolerant*: unknown fields are ignored, optional fields may be absent.
//! - The app configuration and plugin parameters come from external tooling; tvshift
//!   consumes the fields it needs and never enforces their schema.

pub mod config;
pub mod identity;
pub mod project;
pub mod warning;
