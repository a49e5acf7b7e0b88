//! Merchant override hooks for placement decisions.

use crate::region::Region;

pub type RegionOverrideFn = Box<dyn Fn(Region) -> Region + Send + Sync>;
pub type ClientIdOverrideFn = Box<dyn Fn(String) -> String + Send + Sync>;

/// Override hooks consulted while deciding placement and emitting
/// scripts. Same contract as the locale hooks: receive the current value,
/// return the replacement.
#[derive(Default)]
pub struct PlacementOverrides {
    pub region: Option<RegionOverrideFn>,
    pub client_id: Option<ClientIdOverrideFn>,
}

impl PlacementOverrides {
    pub fn with_region(mut self, f: impl Fn(Region) -> Region + Send + Sync + 'static) -> Self {
        self.region = Some(Box::new(f));
        self
    }

    pub fn with_client_id(mut self, f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.client_id = Some(Box::new(f));
        self
    }
}
