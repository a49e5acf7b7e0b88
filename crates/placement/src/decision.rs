//! Per-page-view render decision.
//!
//! The host used to read all of this from ambient globals; here every
//! input is an explicit snapshot so a decision can be computed (and
//! tested) without a host runtime.

use osm_core::{CountryCode, CurrencyCode, LanguageTag, Settings, UiLocale};
use osm_locale::{purchase_country, resolve_locale, LocaleOverrides};

use crate::overrides::PlacementOverrides;
use crate::page::{should_enqueue, PageContext};
use crate::product::{purchase_amount_minor_units, Product};
use crate::region::{region_for_country, Region};

/// Request-scoped shop and buyer inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopContext {
    pub currency: CurrencyCode,
    pub base_country: CountryCode,
    /// Buyer billing country, when the session has one.
    pub billing_country: Option<CountryCode>,
    pub ui_locale: UiLocale,
}

/// Outcome of a placement decision. Computed fresh per page view, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDecision {
    pub should_render: bool,
    pub region: Region,
    pub language_tag: Option<LanguageTag>,
    pub purchase_amount_minor_units: Option<i64>,
}

/// Compute the render decision for one page view.
///
/// `should_render` requires an enqueueing page, enabled settings, a
/// resolvable locale, and a product in context. The region is reported
/// even when rendering is suppressed (script emission is decided
/// separately).
pub fn decide(
    shop: &ShopContext,
    page: &PageContext,
    product: Option<&Product>,
    settings: &Settings,
    locale_overrides: &LocaleOverrides,
    placement_overrides: &PlacementOverrides,
) -> RenderDecision {
    let region = region_for_country(&shop.base_country, placement_overrides);

    if !settings.enabled || !should_enqueue(page) {
        return RenderDecision {
            should_render: false,
            region,
            language_tag: None,
            purchase_amount_minor_units: None,
        };
    }

    let country = purchase_country(shop.billing_country.as_ref(), &shop.base_country);
    let language_tag = resolve_locale(&shop.currency, &country, &shop.ui_locale, locale_overrides);
    let purchase_amount_minor_units = product.map(|p| purchase_amount_minor_units(&p.pricing));
    let should_render = language_tag.is_some() && product.is_some();

    RenderDecision {
        should_render,
        region,
        language_tag,
        purchase_amount_minor_units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Pricing;

    fn shop(currency: &str, base: &str, billing: Option<&str>, locale: &str) -> ShopContext {
        ShopContext {
            currency: currency.parse().unwrap(),
            base_country: base.parse().unwrap(),
            billing_country: billing.map(|c| c.parse().unwrap()),
            ui_locale: UiLocale::new(locale),
        }
    }

    fn product_page() -> PageContext {
        PageContext {
            is_product_page: true,
            ..PageContext::default()
        }
    }

    fn variable_product(min: f64) -> Product {
        Product::new(Pricing::Variable {
            min_variation_price: min,
        })
    }

    #[test]
    fn full_decision_on_a_product_page() {
        let decision = decide(
            &shop("EUR", "DE", Some("FR"), "fr_FR"),
            &product_page(),
            Some(&variable_product(19.995)),
            &Settings::default(),
            &LocaleOverrides::default(),
            &PlacementOverrides::default(),
        );
        assert!(decision.should_render);
        assert_eq!(decision.region, Region::Eu);
        assert_eq!(decision.language_tag.unwrap().as_str(), "fr-FR");
        assert_eq!(decision.purchase_amount_minor_units, Some(2000));
    }

    #[test]
    fn billing_country_overrides_base_for_resolution() {
        let decision = decide(
            &shop("EUR", "FR", None, "fr_FR"),
            &product_page(),
            Some(&variable_product(10.0)),
            &Settings::default(),
            &LocaleOverrides::default(),
            &PlacementOverrides::default(),
        );
        assert_eq!(decision.language_tag.unwrap().as_str(), "fr-FR");
    }

    #[test]
    fn unsupported_currency_suppresses_render() {
        let decision = decide(
            &shop("JPY", "JP", None, "ja"),
            &product_page(),
            Some(&variable_product(10.0)),
            &Settings::default(),
            &LocaleOverrides::default(),
            &PlacementOverrides::default(),
        );
        assert!(!decision.should_render);
        assert_eq!(decision.language_tag, None);
        // Amount is still computed; markup emission is what gates on it.
        assert_eq!(decision.purchase_amount_minor_units, Some(1000));
    }

    #[test]
    fn missing_product_suppresses_render() {
        let decision = decide(
            &shop("USD", "US", None, "en_US"),
            &product_page(),
            None,
            &Settings::default(),
            &LocaleOverrides::default(),
            &PlacementOverrides::default(),
        );
        assert!(!decision.should_render);
        assert_eq!(decision.purchase_amount_minor_units, None);
        assert_eq!(decision.language_tag.unwrap().as_str(), "en-US");
    }

    #[test]
    fn disabled_settings_short_circuit() {
        let settings = Settings {
            enabled: false,
            ..Settings::default()
        };
        let decision = decide(
            &shop("USD", "US", None, "en_US"),
            &product_page(),
            Some(&variable_product(10.0)),
            &settings,
            &LocaleOverrides::default(),
            &PlacementOverrides::default(),
        );
        assert!(!decision.should_render);
        assert_eq!(decision.language_tag, None);
        assert_eq!(decision.region, Region::Na);
    }

    #[test]
    fn shortcode_on_plain_page_short_circuits() {
        let page = PageContext {
            content_has_shortcode: true,
            ..PageContext::default()
        };
        let decision = decide(
            &shop("USD", "US", None, "en_US"),
            &page,
            Some(&variable_product(10.0)),
            &Settings::default(),
            &LocaleOverrides::default(),
            &PlacementOverrides::default(),
        );
        assert!(!decision.should_render);
    }
}
