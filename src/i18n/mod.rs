//! Languages and translations attached to constants.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages
//! - `language`: Validated ISO 639-2 `Language` type and tag normalization
//! - `translation`: Translation bundles, flat translation rows and row merging
//! - `validator`: Structural checks on an entry's translation bundles

mod language;
mod registry;
mod translation;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use translation::{
    merge_translations, MergeStats, TranslationBundle, TranslationEntry, TranslationFields,
};
pub use validator::{TranslationValidator, ValidationReport};
