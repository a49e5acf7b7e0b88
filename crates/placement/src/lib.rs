//! `osm-placement` — placement decision, amount calculation, and output
//! emission for the messaging widget.
//!
//! Decides whether a page render gets the widget, which vendor script
//! bundle to request, and what purchase amount to display. All failure
//! modes degrade to "no output"; nothing here raises on a page render.

pub mod decision;
pub mod markup;
pub mod overrides;
pub mod page;
pub mod product;
pub mod region;
pub mod scripts;

pub use decision::{decide, RenderDecision, ShopContext};
pub use markup::{render_placement, PlacementArgs};
pub use overrides::PlacementOverrides;
pub use page::{should_enqueue, PageContext};
pub use product::{purchase_amount_minor_units, Pricing, Product};
pub use region::{region_for_country, Region};
pub use scripts::{
    inject_sdk_attributes, script_registrations, ScriptRegistration, INTEGRATION_HANDLE, SDK_HANDLE,
};
