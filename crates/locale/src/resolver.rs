//! Currency-keyed locale resolution.

use osm_core::{CountryCode, CurrencyCode, LanguageTag, UiLocale};
use tracing::debug;

use crate::eurozone::eurozone_locale;
use crate::overrides::{apply, LocaleOverrides};

/// Resolve the language tag for a shop currency.
///
/// Single-country currencies map directly, in some cases picking the
/// native tag when the UI locale matches. EUR dispatches further on the
/// buyer country. `None` means the currency is unsupported and the widget
/// must not be rendered.
///
/// Pure function of its inputs; the same arguments always produce the
/// same tag.
pub fn resolve_locale(
    currency: &CurrencyCode,
    country: &CountryCode,
    ui_locale: &UiLocale,
    overrides: &LocaleOverrides,
) -> Option<LanguageTag> {
    // Comparison semantics vary per branch (exact, substring,
    // two-alternative); merchant-visible, keep as-is.
    let tag = match currency.as_str() {
        "EUR" => eurozone_locale(country, ui_locale, overrides),
        "AUD" => LanguageTag::from("en-AU"),
        "CAD" => {
            if ui_locale.is("fr_CA") {
                LanguageTag::from("fr-CA")
            } else {
                LanguageTag::from("en-CA")
            }
        }
        "CHF" => {
            if ui_locale.contains("de_CH") {
                LanguageTag::from("de-CH")
            } else {
                LanguageTag::from("en-CH")
            }
        }
        "DKK" => {
            if ui_locale.is("da_DK") {
                LanguageTag::from("da-DK")
            } else {
                LanguageTag::from("en-DK")
            }
        }
        "GBP" => LanguageTag::from("en-GB"),
        "NOK" => {
            if ui_locale.is("nn_NO") || ui_locale.is("nb_NO") {
                LanguageTag::from("no-NO")
            } else {
                LanguageTag::from("en-NO")
            }
        }
        "SEK" => {
            if ui_locale.is("sv_SE") {
                LanguageTag::from("sv-SE")
            } else {
                LanguageTag::from("en-SE")
            }
        }
        "PLN" => {
            if ui_locale.is("pl_PL") {
                LanguageTag::from("pl-PL")
            } else {
                LanguageTag::from("en-PL")
            }
        }
        "USD" => LanguageTag::from("en-US"),
        "NZD" => LanguageTag::from("en-NZ"),
        "RON" => {
            if ui_locale.is("ro_RO") {
                LanguageTag::from("ro-RO")
            } else {
                LanguageTag::from("en-RO")
            }
        }
        other => {
            debug!(currency = other, "unsupported currency, widget suppressed");
            return None;
        }
    };

    Some(apply(&overrides.locale, tag))
}
