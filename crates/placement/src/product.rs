//! Product view and purchase-amount calculation.
//!
//! The product entity is owned by the host catalog; this is the minimal
//! read-only view the widget needs.

/// Product pricing mode, with the price field that mode exposes.
///
/// Prices are major-unit decimals exactly as the host's display-price API
/// hands them over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pricing {
    Simple { display_price: f64 },
    Variable { min_variation_price: f64 },
    Bundle { min_bundle_price: f64 },
}

/// Read-only view of the current product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub pricing: Pricing,
}

impl Product {
    pub fn new(pricing: Pricing) -> Self {
        Self { pricing }
    }
}

/// Display purchase amount in minor units.
///
/// Variable products use the minimum variation price, bundles the minimum
/// bundle price, everything else the standard display price. Conversion
/// is always x100 regardless of currency.
pub fn purchase_amount_minor_units(pricing: &Pricing) -> i64 {
    let major = match pricing {
        Pricing::Simple { display_price } => *display_price,
        Pricing::Variable {
            min_variation_price,
        } => *min_variation_price,
        Pricing::Bundle { min_bundle_price } => *min_bundle_price,
    };

    // Host prices arrive as binary floats; round at a tenth of a cent
    // first so 19.995 * 100 (= 1999.4999...) lands on 2000, not 1999.
    let tenths_of_cents = (major * 1000.0).round();
    (tenths_of_cents / 10.0).round() as i64
}
