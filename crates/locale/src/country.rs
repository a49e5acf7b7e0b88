//! Purchase-country derivation and country-keyed resolution.

use osm_core::{CountryCode, LanguageTag, UiLocale};

/// Derive the purchase country: buyer billing country when present, else
/// the shop's configured base country.
pub fn purchase_country(
    billing_country: Option<&CountryCode>,
    base_country: &CountryCode,
) -> CountryCode {
    billing_country.unwrap_or(base_country).clone()
}

/// Resolve a language tag for a known account country.
///
/// Used by callers that already know the vendor account's market and do
/// not dispatch on currency. Unlike the currency table, "has an English
/// locale" here means exactly `en_US` or `en_GB`; every other locale,
/// including other English variants, counts as non-English.
pub fn locale_for_country(country: &CountryCode, ui_locale: &UiLocale) -> LanguageTag {
    let has_english_locale = ui_locale.is("en_US") || ui_locale.is("en_GB");

    let tag = match country.as_str() {
        "AT" => {
            if has_english_locale {
                "en-AT"
            } else {
                "de-AT"
            }
        }
        "AU" => "en-AU",
        "BE" => {
            if has_english_locale {
                "en-BE"
            } else if ui_locale.is_ignore_case("fr_be") {
                "fr-BE"
            } else {
                "nl-BE"
            }
        }
        "CA" => {
            if ui_locale.is_ignore_case("fr_ca") {
                "fr-CA"
            } else {
                "en-CA"
            }
        }
        "CH" => {
            if has_english_locale {
                "en-CH"
            } else {
                "de-CH"
            }
        }
        "DE" => {
            if has_english_locale {
                "en-DE"
            } else {
                "de-DE"
            }
        }
        "DK" => {
            if has_english_locale {
                "en-DK"
            } else {
                "da-DK"
            }
        }
        "ES" => {
            if has_english_locale {
                "en-ES"
            } else {
                "es-ES"
            }
        }
        "FI" => {
            if has_english_locale {
                "en-FI"
            } else if ui_locale.is_ignore_case("sv_se") {
                "sv-FI"
            } else {
                "fi-FI"
            }
        }
        "FR" => {
            if has_english_locale {
                "en-FR"
            } else {
                "fr-FR"
            }
        }
        "GR" => {
            if has_english_locale {
                "en-GR"
            } else {
                "el-GR"
            }
        }
        "IE" => "en-IE",
        "IT" => {
            if has_english_locale {
                "en-IT"
            } else {
                "it-IT"
            }
        }
        "NL" => {
            if has_english_locale {
                "en-NL"
            } else {
                "nl-NL"
            }
        }
        "NO" => {
            if has_english_locale {
                "en-NO"
            } else {
                "no-NO"
            }
        }
        "NZ" => "en-NZ",
        "PL" => {
            if has_english_locale {
                "en-PL"
            } else {
                "pl-PL"
            }
        }
        "PT" => {
            if has_english_locale {
                "en-PT"
            } else {
                "pt-PT"
            }
        }
        "SE" => {
            if has_english_locale {
                "en-SE"
            } else {
                "sv-SE"
            }
        }
        "GB" => "en-GB",
        "US" => "en-US",
        _ => "en-US",
    };

    LanguageTag::from(tag)
}
