//! Typed catalog of immutable seed constants with multilingual translations.
//!
//! Families declare their constants explicitly, are indexed once on first
//! use, and are checked for duplicate identifiers by the catalog guard before
//! their rows are exported for seeding.

pub mod config;
pub mod constants;
pub mod error;
pub mod families;
pub mod i18n;
pub mod models;
pub mod seed;
