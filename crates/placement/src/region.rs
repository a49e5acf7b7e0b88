//! Content-delivery region for the vendor SDK bundle.

use osm_core::CountryCode;
use serde::{Deserialize, Serialize};

use crate::overrides::PlacementOverrides;

/// Vendor CDN region the SDK bundle is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Eu,
    Na,
    Oc,
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Region::Eu => "eu",
            Region::Na => "na",
            Region::Oc => "oc",
        };
        f.write_str(s)
    }
}

/// Map the shop base country to a delivery region.
///
/// North America and Oceania have dedicated bundles; everything else is
/// served from the European one.
pub fn region_for_country(base_country: &CountryCode, overrides: &PlacementOverrides) -> Region {
    let region = match base_country.as_str() {
        "US" | "CA" => Region::Na,
        "AU" | "NZ" => Region::Oc,
        _ => Region::Eu,
    };

    match &overrides.region {
        Some(f) => f(region),
        None => region,
    }
}
