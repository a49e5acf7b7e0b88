//! EUR sub-resolution, keyed by buyer/shop country.
//!
//! EUR is the one multi-country currency: the currency alone cannot pick a
//! language, so resolution dispatches a second time on the country.

use osm_core::{CountryCode, LanguageTag, UiLocale};
use tracing::trace;

use crate::overrides::{apply, LocaleOverrides};

/// Tag used when the country is not a recognized Eurozone country.
/// Merchants can replace it via [`LocaleOverrides::default_euro_locale`].
pub const DEFAULT_EURO_LOCALE: &str = "en-DE";

/// Resolve the language tag for a EUR shop.
///
/// Each recognized country yields its native tag when the UI locale
/// matches that country's own spelling, else an `en-<COUNTRY>` fallback.
/// Comparison semantics vary per branch (exact, substring, three-way);
/// the differences are merchant-visible and must stay as they are.
pub fn eurozone_locale(
    country: &CountryCode,
    ui_locale: &UiLocale,
    overrides: &LocaleOverrides,
) -> LanguageTag {
    let default_tag = apply(
        &overrides.default_euro_locale,
        LanguageTag::from(DEFAULT_EURO_LOCALE),
    );

    if overrides.force_euro_locale {
        return default_tag;
    }

    let tag = match country.as_str() {
        "AT" => {
            if ui_locale.is("de_AT") {
                "de-AT"
            } else {
                "en-AT"
            }
        }
        "BE" => {
            if ui_locale.is("fr_BE") {
                "fr-BE"
            } else if ui_locale.is("nl_BE") {
                "nl-BE"
            } else {
                "en-BE"
            }
        }
        "DE" => {
            if ui_locale.contains("de_DE") {
                "de-DE"
            } else {
                "en-DE"
            }
        }
        "ES" => {
            if ui_locale.is("es_ES") {
                "es-ES"
            } else {
                "en-ES"
            }
        }
        "FI" => {
            if ui_locale.is("fi") {
                "fi-FI"
            } else if ui_locale.is("sv_SE") {
                "sv-FI"
            } else {
                "en-FI"
            }
        }
        "FR" => {
            if ui_locale.is("fr_FR") {
                "fr-FR"
            } else {
                "en-FR"
            }
        }
        "GR" => "el-GR",
        "IE" => "en-IE",
        "IT" => {
            if ui_locale.is("it_IT") {
                "it-IT"
            } else {
                "en-IT"
            }
        }
        "NL" => {
            if ui_locale.is("nl_NL") {
                "nl-NL"
            } else {
                "en-NL"
            }
        }
        "PT" => {
            if ui_locale.is("pt_PT") {
                "pt-PT"
            } else {
                "en-PT"
            }
        }
        other => {
            trace!(country = other, default = %default_tag, "country not in eurozone table, using default tag");
            return default_tag;
        }
    };

    LanguageTag::from(tag)
}
