//! Placement markup emission.

use osm_core::{LanguageTag, Settings};
use tracing::debug;

use crate::product::{purchase_amount_minor_units, Product};

/// Caller-supplied placement arguments (typically shortcode attributes).
/// Every field falls back: key and theme to settings, the amount to the
/// current product's computed price.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacementArgs {
    pub key: Option<String>,
    pub theme: Option<String>,
    /// Explicit display amount in minor units. `Some(0)` is a legitimate
    /// amount and is emitted; only `None` triggers computation.
    pub purchase_amount: Option<i64>,
}

/// Render the widget placement element.
///
/// Returns `None` when no locale resolved or no product context exists;
/// both are hard preconditions and the widget silently does not appear.
pub fn render_placement(
    args: &PlacementArgs,
    language_tag: Option<&LanguageTag>,
    product: Option<&Product>,
    settings: &Settings,
) -> Option<String> {
    let Some(language_tag) = language_tag else {
        debug!("no resolvable locale, placement suppressed");
        return None;
    };
    let Some(product) = product else {
        debug!("no product in context, placement suppressed");
        return None;
    };

    let key = args.key.as_deref().unwrap_or(&settings.data_key);
    let theme = args.theme.as_deref().or_else(|| settings.theme());
    let purchase_amount = args
        .purchase_amount
        .unwrap_or_else(|| purchase_amount_minor_units(&product.pricing));

    let mut element = format!(
        "<osm-placement data-key=\"{}\" data-locale=\"{}\" data-preloaded=\"true\"",
        escape_attribute(key),
        escape_attribute(language_tag.as_str()),
    );
    if let Some(theme) = theme {
        element.push_str(&format!(" data-theme=\"{}\"", escape_attribute(theme)));
    }
    element.push_str(&format!(
        " data-purchase-amount=\"{purchase_amount}\"></osm-placement>"
    ));

    Some(element)
}

/// Escape a value for embedding in a double-quoted HTML attribute.
pub(crate) fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
