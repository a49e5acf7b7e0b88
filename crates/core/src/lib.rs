//! `osm-core` — domain foundation for the on-site messaging integration.
//!
//! This crate contains **pure domain** primitives (no host-platform
//! concerns): validated code newtypes, the language-tag output value,
//! the merchant settings snapshot, and the domain error model.

pub mod codes;
pub mod error;
pub mod language_tag;
pub mod settings;
pub mod value_object;

pub use codes::{CountryCode, CurrencyCode, UiLocale};
pub use error::{DomainError, DomainResult};
pub use language_tag::LanguageTag;
pub use settings::Settings;
pub use value_object::ValueObject;
