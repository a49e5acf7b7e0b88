//! `osm-locale` — locale resolution for the messaging widget.
//!
//! Maps (shop currency, buyer country, buyer UI locale) to the BCP-47
//! language tag the widget is requested with. Pure request-scoped
//! computation; all merchant customization arrives as explicit override
//! hooks.

pub mod country;
pub mod eurozone;
pub mod overrides;
pub mod resolver;

pub use country::{locale_for_country, purchase_country};
pub use eurozone::{eurozone_locale, DEFAULT_EURO_LOCALE};
pub use overrides::LocaleOverrides;
pub use resolver::resolve_locale;
